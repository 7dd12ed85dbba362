// src/import/mod.rs

mod csv;

pub use self::csv::{load_log, read_log};
