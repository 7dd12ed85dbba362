use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, FixedOffset, Months, NaiveDate, Utc};

/// Today's date as seen from a fixed UTC offset (e.g. -7 for UTC-7).
pub fn today_in_offset(offset_hours: i32) -> AppResult<NaiveDate> {
    let tz = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or(AppError::InvalidOffset(offset_hours))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

/// Accepts `YYYY-MM-DD` and, for older logs, `MM/DD/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Same calendar day one year earlier. Feb 29 falls back to Feb 28.
pub fn one_year_before(d: NaiveDate) -> AppResult<NaiveDate> {
    d.checked_sub_months(Months::new(12))
        .ok_or_else(|| AppError::InvalidDate(d.to_string()))
}

/// Monday = 1 .. Sunday = 7
pub fn iso_weekday(d: NaiveDate) -> u32 {
    d.weekday().number_from_monday()
}

/// Monday of the week containing `d`.
pub fn week_monday(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_monday()))
}

/// Tooltip text, e.g. "March 15, 2024".
pub fn long_date(d: NaiveDate) -> String {
    d.format("%B %d, %Y").to_string()
}

/// Short month label ("Jan", "Feb", ...).
pub fn month_abbr(d: NaiveDate) -> String {
    d.format("%b").to_string()
}
