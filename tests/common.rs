#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rhl(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rheatlog");
    cmd.env("HOME", home);
    cmd
}

/// Fresh (emptied) directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rheatlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// CSV text with one row per day in `from..=to`, skipping `gap`.
/// Every category is `True`.
pub fn csv_all_true(from: NaiveDate, to: NaiveDate, gap: Option<NaiveDate>) -> String {
    let mut out = String::from("date,calibration,condition,connection,contribution\n");
    let mut d = from;
    while d <= to {
        if Some(d) != gap {
            out.push_str(&format!("{},True,True,True,True\n", d.format("%Y-%m-%d")));
        }
        d += Duration::days(1);
    }
    out
}

/// Write `content` to `<dir>/<name>` and return the path.
pub fn write_file(dir: &PathBuf, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(&path, content).expect("write file");
    path
}
