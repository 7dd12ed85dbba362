pub mod build;
pub mod config;
pub mod init;
pub mod layout;
pub mod render;

use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::{parse_date_arg, today_in_offset};
use chrono::NaiveDate;

/// `--date` if given, otherwise today in the configured UTC offset.
pub(crate) fn reference_date(date: &Option<String>, cfg: &Config) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date_arg(d),
        None => today_in_offset(cfg.utc_offset_hours),
    }
}
