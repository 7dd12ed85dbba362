use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityLog, ActivityRecord, parse_flag};
use crate::models::category::Category;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    categories: Vec<(Category, usize)>,
}

/// Locate the date column and the category columns.
///
/// The date column is the one named `date` or `day`; failing that, the
/// first column (logs exported with an unnamed index column).
fn resolve_columns(headers: &StringRecord) -> AppResult<Columns> {
    if headers.is_empty() {
        return Err(AppError::MissingColumn("date".to_string()));
    }

    let date = headers
        .iter()
        .position(|h| matches!(h.trim().to_lowercase().as_str(), "date" | "day"))
        .unwrap_or(0);

    let mut categories = Vec::new();
    for (idx, h) in headers.iter().enumerate() {
        if idx == date {
            continue;
        }
        if let Some(c) = Category::from_column(h)
            && !categories.iter().any(|(known, _)| *known == c)
        {
            categories.push((c, idx));
        }
    }

    for c in Category::ALL {
        if !categories.iter().any(|(known, _)| *known == c) {
            warning(format!(
                "Column '{}' not found in activity log: every '{}' cell will show as missing.",
                c, c
            ));
        }
    }

    Ok(Columns { date, categories })
}

/// Parse an activity log from any CSV source.
pub fn read_log<R: Read>(reader: R) -> AppResult<ActivityLog> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = resolve_columns(&headers)?;

    let mut log = ActivityLog::new();

    for row in rdr.records() {
        let row = row?;
        let raw_date = row.get(cols.date).unwrap_or_default();
        if raw_date.is_empty() && row.iter().all(str::is_empty) {
            continue;
        }

        let date = parse_date(raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.to_string()))?;
        let mut record = ActivityRecord::new(date);

        for (category, idx) in &cols.categories {
            let raw = row.get(*idx).unwrap_or_default();
            let value = parse_flag(raw).map_err(|value| AppError::InvalidValue {
                date: raw_date.to_string(),
                column: headers.get(*idx).unwrap_or_default().to_string(),
                value,
            })?;
            record.set(*category, value);
        }

        log.insert(record)?;
    }

    Ok(log)
}

/// Load the activity log from disk. Any failure here is fatal for the build.
pub fn load_log(path: &Path) -> AppResult<ActivityLog> {
    let file = File::open(path).map_err(|e| {
        AppError::from(std::io::Error::new(
            e.kind(),
            format!("cannot open activity log {}: {e}", path.display()),
        ))
    })?;
    read_log(file)
}
