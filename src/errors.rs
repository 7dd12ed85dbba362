//! Unified application error type.
//! Every module (activity loading, layout, render, pages, cli) returns
//! AppError so the binary can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Activity log
    // ---------------------------
    #[error("Activity log error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Activity log is missing the '{0}' column")]
    MissingColumn(String),

    #[error("Duplicate entry for date {0} in activity log")]
    DuplicateDate(String),

    #[error("Invalid value '{value}' in column '{column}' for date {date}")]
    InvalidValue {
        date: String,
        column: String,
        value: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid UTC offset: {0} hours")]
    InvalidOffset(i32),

    // ---------------------------
    // Rendering / pages
    // ---------------------------
    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid page metadata: {0}")]
    Metadata(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
