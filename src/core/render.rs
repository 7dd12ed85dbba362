use crate::core::image::{SvgImage, new_image};
use crate::core::layout::{CalendarLayout, DayCell};
use crate::errors::AppResult;
use crate::models::{ActivityLog, Category, Palette};
use crate::utils::date::long_date;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// The four calendar images produced by one render pass.
#[derive(Debug, Clone)]
pub struct CalendarImages {
    pub layout: CalendarLayout,
    images: [SvgImage; 4],
}

impl CalendarImages {
    pub fn get(&self, category: Category) -> &SvgImage {
        &self.images[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &SvgImage)> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Write `images/<category>.svg` under `root`. Files written before a
    /// failure are left in place.
    pub fn write_to(&self, root: &Path) -> AppResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(4);
        for (category, image) in self.iter() {
            let path = root.join(category.image_path());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, image.to_svg())?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Draw one day on all four tracks.
///
/// A date without a row in the log is drawn with the missing color on
/// every track.
pub fn render_cell(
    log: &ActivityLog,
    cell: &DayCell,
    palette: &Palette,
    images: &mut [SvgImage; 4],
) {
    let record = log.lookup(cell.date);
    let title = long_date(cell.date);

    for category in Category::ALL {
        let active = record.is_some_and(|r| r.is_active(category));
        images[category.index()].push_cell(cell.x, cell.y, palette.fill(category, active), &title);
    }
}

/// Render the year ending on `today` for every track.
pub fn render_calendar(
    log: &ActivityLog,
    today: NaiveDate,
    palette: &Palette,
) -> AppResult<CalendarImages> {
    let layout = CalendarLayout::new(today)?;
    Ok(render_layout(log, layout, palette))
}

pub fn render_layout(log: &ActivityLog, layout: CalendarLayout, palette: &Palette) -> CalendarImages {
    let canvas = layout.canvas();
    let mut images = [
        new_image(canvas),
        new_image(canvas),
        new_image(canvas),
        new_image(canvas),
    ];

    for label in layout.month_labels() {
        for image in images.iter_mut() {
            image.push_text(label.x, label.y, &label.text);
        }
    }

    for cell in layout.cells() {
        render_cell(log, &cell, palette, &mut images);
    }

    CalendarImages { layout, images }
}
