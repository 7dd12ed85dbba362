// src/core/build.rs

use crate::core::pages::split_front_matter;
use crate::core::plugin::{ImageGenPlugin, Nav, SiteFile};
use crate::errors::{AppError, AppResult};
use crate::models::Palette;
use crate::ui::messages::{info, success};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions treated as pages (marker substitution applies).
const PAGE_EXTENSIONS: [&str; 3] = ["md", "markdown", "html"];

/// Outcome of a site build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub copied: usize,
    pub images: Vec<PathBuf>,
}

pub struct BuildLogic;

impl BuildLogic {
    /// Build `site` from `docs`: render the calendars, then copy every docs
    /// file, running the page hook on pages.
    pub fn build(
        docs: &Path,
        site: &Path,
        log_path: &Path,
        today: NaiveDate,
        palette: Palette,
    ) -> AppResult<BuildReport> {
        if !docs.is_dir() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("docs directory not found: {}", docs.display()),
            )));
        }

        let mut plugin = ImageGenPlugin::new(log_path, site, today, palette);

        let images = plugin.on_pre_build()?;

        let files = plugin.on_files(collect_files(docs)?);
        info(format!("{} file(s) registered for {}", files.len(), site.display()));

        let nav: Nav = files
            .iter()
            .filter(|f| is_page(&f.dest))
            .map(|f| f.dest.clone())
            .collect();
        let nav = plugin.on_nav(nav);

        let mut report = BuildReport {
            images,
            ..Default::default()
        };

        for file in &files {
            let Some(src) = &file.src else {
                continue;
            };
            let dest = site.join(&file.dest);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            if nav.contains(&file.dest) {
                let raw = fs::read_to_string(src)?;
                let page = file.dest.display().to_string();
                let (meta, body) = split_front_matter(&raw)?;
                let rendered = plugin.on_page_content(body, &meta, &page)?;
                fs::write(&dest, rendered)?;
                report.pages += 1;
            } else {
                fs::copy(src, &dest)?;
                report.copied += 1;
            }
        }

        success(format!(
            "Site built in {}: {} page(s), {} other file(s), {} image(s)",
            site.display(),
            report.pages,
            report.copied,
            report.images.len()
        ));

        Ok(report)
    }
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| PAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Every regular file under `root`, sorted by relative path.
fn collect_files(root: &Path) -> AppResult<Vec<SiteFile>> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Ok(rel) = path.strip_prefix(root) {
                out.push(SiteFile {
                    dest: rel.to_path_buf(),
                    src: Some(path.clone()),
                });
            }
        }
    }

    out.sort_by(|a, b| a.dest.cmp(&b.dest));
    Ok(out)
}
