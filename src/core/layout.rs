//! Calendar grid layout.
//!
//! The grid shows the year ending on `today` as week columns (Monday on
//! top, Sunday at the bottom):
//!
//! - one leading partial column for the week containing `start_date`,
//!   clipped to days on/after `start_date`;
//! - `full_weeks` complete Monday..Sunday columns;
//! - one trailing partial column from Monday up to `today`'s weekday (just
//!   the Monday when `today` is a Sunday).
//!
//! Pixel offsets only depend on the ISO weekday of `start_date`.

use crate::errors::AppResult;
use crate::utils::date::{iso_weekday, month_abbr, one_year_before, week_monday};
use chrono::{Datelike, Duration, NaiveDate};

/// Side of a day square.
pub const CELL_SIZE: u32 = 15;
/// Distance between two neighbouring squares (cell + 2px gap).
pub const PITCH: u32 = 17;

pub const CANVAS_HEIGHT: u32 = 167;
pub const CANVAS_WIDTH: u32 = 918;
/// A Sunday `today` needs one more column.
pub const CANVAS_WIDTH_SUNDAY: u32 = 935;

/// Baseline of the month labels.
pub const LABEL_BASELINE: u32 = 14;
/// Y of the Monday row; rows are stacked below it at `PITCH`.
pub const GRID_TOP: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// (week column, weekday row). Column 0 is the leading partial week,
/// rows go Monday = 0 .. Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    pub column: u32,
    pub row: u32,
}

/// A day placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub coord: GridCoordinate,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    /// Index among the full weeks (0-based).
    pub week: u32,
    pub date: NaiveDate,
    pub text: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLayout {
    pub today: NaiveDate,
    pub start_date: NaiveDate,
    pub full_weeks: u32,
    pub full_offset: u32,
    pub last_offset: u32,
}

/// `(full_weeks, full_offset, last_offset)` for the ISO weekday of the
/// window's first day.
pub fn offsets_for_weekday(start_iso_weekday: u32) -> (u32, u32, u32) {
    match start_iso_weekday {
        7 => (52, 18, 902),
        6 => (52, 35, 919),
        _ => (51, 35, 902),
    }
}

/// Pure mapping from a date to its grid cell, given the window start.
///
/// Only meaningful for `date >= start_date`.
pub fn grid_coordinate(date: NaiveDate, start_date: NaiveDate) -> GridCoordinate {
    let days = (date - week_monday(start_date)).num_days();
    GridCoordinate {
        column: (days / 7) as u32,
        row: date.weekday().num_days_from_monday(),
    }
}

impl CalendarLayout {
    /// Layout for the year ending on `today`.
    pub fn new(today: NaiveDate) -> AppResult<Self> {
        let start_date = one_year_before(today)?;
        Ok(Self::for_window(today, start_date))
    }

    pub fn for_window(today: NaiveDate, start_date: NaiveDate) -> Self {
        let (full_weeks, full_offset, last_offset) = offsets_for_weekday(iso_weekday(start_date));
        Self {
            today,
            start_date,
            full_weeks,
            full_offset,
            last_offset,
        }
    }

    pub fn today_is_sunday(&self) -> bool {
        iso_weekday(self.today) == 7
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: if self.today_is_sunday() {
                CANVAS_WIDTH_SUNDAY
            } else {
                CANVAS_WIDTH
            },
            height: CANVAS_HEIGHT,
        }
    }

    /// Monday of the first full week.
    pub fn first_full_monday(&self) -> NaiveDate {
        week_monday(self.start_date) + Duration::days(7)
    }

    /// Monday of the trailing partial week.
    pub fn trailing_monday(&self) -> NaiveDate {
        self.first_full_monday() + Duration::days(7 * i64::from(self.full_weeks))
    }

    pub fn coordinate(&self, date: NaiveDate) -> GridCoordinate {
        grid_coordinate(date, self.start_date)
    }

    /// X of a grid column. Full week `w` is column `w + 1`, so this is
    /// `w * PITCH + full_offset`; the trailing column lands on `last_offset`.
    pub fn column_x(&self, column: u32) -> u32 {
        self.full_offset + column * PITCH - PITCH
    }

    pub fn row_y(&self, row: u32) -> u32 {
        GRID_TOP + row * PITCH
    }

    /// Whether weekday row `i` of the trailing week is drawn.
    pub fn trailing_row_included(&self, row: u32) -> bool {
        let wd = iso_weekday(self.today);
        if wd == 7 { row == 0 } else { wd > row }
    }

    fn place(&self, date: NaiveDate) -> DayCell {
        let coord = self.coordinate(date);
        DayCell {
            date,
            coord,
            x: self.column_x(coord.column),
            y: self.row_y(coord.row),
        }
    }

    /// Every drawn day, in drawing order: leading partial week, full weeks,
    /// trailing partial week; Monday to Sunday inside each column.
    pub fn cells(&self) -> Vec<DayCell> {
        let mut out = Vec::with_capacity(7 * (self.full_weeks as usize + 2));

        let lead = week_monday(self.start_date);
        for i in 0..7 {
            let d = lead + Duration::days(i);
            if d >= self.start_date {
                out.push(self.place(d));
            }
        }

        let first = self.first_full_monday();
        for w in 0..i64::from(self.full_weeks) {
            for i in 0..7 {
                out.push(self.place(first + Duration::days(w * 7 + i)));
            }
        }

        let tail = self.trailing_monday();
        for i in 0..7u32 {
            if self.trailing_row_included(i) {
                out.push(self.place(tail + Duration::days(i64::from(i))));
            }
        }

        out
    }

    /// Month labels above the full weeks. Week 0 is always labelled, week 2
    /// before the 20th, later weeks only in the first seven days of a month.
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        let first = self.first_full_monday();
        (0..self.full_weeks)
            .filter_map(|w| {
                let date = first + Duration::days(7 * i64::from(w));
                let dom = date.day();
                let labelled = w == 0 || (w == 2 && dom < 20) || (w > 2 && dom < 8);
                labelled.then(|| MonthLabel {
                    week: w,
                    date,
                    text: month_abbr(date),
                    x: w * PITCH + self.full_offset,
                    y: LABEL_BASELINE,
                })
            })
            .collect()
    }
}
