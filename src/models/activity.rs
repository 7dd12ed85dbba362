use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One day of the activity log.
///
/// Each category is tri-state: `Some(true)` (activity recorded),
/// `Some(false)` (explicitly none) or `None` (no value in the log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    flags: [Option<bool>; 4],
}

impl ActivityRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            flags: [None; 4],
        }
    }

    /// Builder-style setter, handy when assembling records by hand.
    pub fn with(mut self, category: Category, value: Option<bool>) -> Self {
        self.set(category, value);
        self
    }

    pub fn set(&mut self, category: Category, value: Option<bool>) {
        self.flags[category.index()] = value;
    }

    pub fn get(&self, category: Category) -> Option<bool> {
        self.flags[category.index()]
    }

    /// Only an explicit `true` counts as activity; null and false do not.
    pub fn is_active(&self, category: Category) -> bool {
        self.get(category) == Some(true)
    }
}

/// Activity log indexed by date. Dates are unique.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    records: BTreeMap<NaiveDate, ActivityRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, rejecting a second entry for the same date.
    pub fn insert(&mut self, record: ActivityRecord) -> AppResult<()> {
        if self.records.contains_key(&record.date) {
            return Err(AppError::DuplicateDate(
                record.date.format("%Y-%m-%d").to_string(),
            ));
        }
        self.records.insert(record.date, record);
        Ok(())
    }

    pub fn from_records<I>(records: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = ActivityRecord>,
    {
        let mut log = Self::new();
        for r in records {
            log.insert(r)?;
        }
        Ok(log)
    }

    /// A missing row is not an error: callers render it as "no data".
    pub fn lookup(&self, date: NaiveDate) -> Option<&ActivityRecord> {
        self.records.get(&date)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Interpret a raw log cell.
///
/// Returns `Ok(None)` for blank / null-like cells. Values that are neither
/// boolean-ish nor numeric come back as `Err` with the trimmed text.
pub fn parse_flag(raw: &str) -> Result<Option<bool>, String> {
    let v = raw.trim().to_lowercase();
    match v.as_str() {
        "" | "nan" | "null" | "none" | "na" | "n/a" => Ok(None),
        "true" | "t" | "yes" | "y" | "x" => Ok(Some(true)),
        "false" | "f" | "no" | "n" => Ok(Some(false)),
        other => match other.parse::<f64>() {
            Ok(n) if n.is_nan() => Ok(None),
            Ok(n) => Ok(Some(n != 0.0)),
            Err(_) => Err(raw.trim().to_string()),
        },
    }
}
