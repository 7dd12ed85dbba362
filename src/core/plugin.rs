//! Lifecycle hooks called by the site build, in this order:
//! `on_pre_build` → `on_files` → `on_nav` → `on_page_content` (per page).

use crate::core::pages::{SvgSources, substitute_page};
use crate::core::render::render_calendar;
use crate::errors::AppResult;
use crate::import::load_log;
use crate::models::{Category, Palette};
use crate::ui::messages::info;
use chrono::NaiveDate;
use serde_yaml::Mapping;
use std::path::{Path, PathBuf};

/// One output file of the site, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Path relative to the site root.
    pub dest: PathBuf,
    /// Source on disk; `None` for files produced by a hook.
    pub src: Option<PathBuf>,
}

impl SiteFile {
    pub fn generated(dest: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            src: None,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.src.is_none()
    }
}

/// Navigation entries (page paths relative to the docs root).
pub type Nav = Vec<PathBuf>;

pub struct ImageGenPlugin {
    log_path: PathBuf,
    site_dir: PathBuf,
    today: NaiveDate,
    palette: Palette,
    svgs: SvgSources,
}

impl ImageGenPlugin {
    pub fn new(log_path: &Path, site_dir: &Path, today: NaiveDate, palette: Palette) -> Self {
        Self {
            log_path: log_path.to_path_buf(),
            site_dir: site_dir.to_path_buf(),
            today,
            palette,
            svgs: SvgSources::new(),
        }
    }

    /// Load the log, render the four calendars and write them under the
    /// site root. A log that cannot be read aborts the build.
    pub fn on_pre_build(&mut self) -> AppResult<Vec<PathBuf>> {
        let log = load_log(&self.log_path)?;
        info(format!(
            "Loaded {} day(s) from {}",
            log.len(),
            self.log_path.display()
        ));

        let images = render_calendar(&log, self.today, &self.palette)?;
        let written = images.write_to(&self.site_dir)?;

        self.svgs = images.iter().map(|(c, img)| (c, img.to_svg())).collect();
        Ok(written)
    }

    /// Register the generated images as site files, replacing any docs file
    /// with the same destination.
    pub fn on_files(&self, mut files: Vec<SiteFile>) -> Vec<SiteFile> {
        for category in Category::ALL {
            let dest = PathBuf::from(category.image_path());
            files.retain(|f| f.dest != dest);
            files.push(SiteFile::generated(dest));
        }
        files
    }

    pub fn on_nav(&self, nav: Nav) -> Nav {
        nav
    }

    /// Substitute `{{ svg-* }}` and `{{ meta.* }}` markers in one page.
    pub fn on_page_content(&self, content: &str, meta: &Mapping, page: &str) -> AppResult<String> {
        substitute_page(content, meta, &self.svgs, page)
    }

    pub fn svgs(&self) -> &SvgSources {
        &self.svgs
    }
}
