//! Page text pass: YAML front matter and `{{ ... }}` markers.
//!
//! Two marker families are recognised:
//! - `{{ svg-<name> }}` is replaced verbatim with the generated SVG for
//!   `<name>` (one of the four categories);
//! - `{{ meta.<key> }}` is replaced with the string value of `<key>` from
//!   the page's front matter.
//!
//! Anything unknown or malformed is left exactly as written.

use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::ui::messages::warning;
use regex::{Captures, Regex};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

const SVG_MARKER: &str = r"\{\{\s*svg-([A-Za-z0-9_-]+)\s*\}\}";
const META_MARKER: &str = r"\{\{\s*meta\.([A-Za-z0-9_-]+)\s*\}\}";

/// SVG bodies available for substitution, keyed by track.
pub type SvgSources = BTreeMap<Category, String>;

/// Split a page into (front matter, body).
///
/// Front matter is a leading YAML block delimited by `---` lines (the
/// closing line may also be `...`). Pages without one get an empty mapping
/// and are returned unchanged.
pub fn split_front_matter(text: &str) -> AppResult<(Mapping, &str)> {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return Ok((Mapping::new(), text));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" || trimmed == "..." {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let parsed = serde_yaml::from_str::<Value>(yaml)
                .map_err(|e| AppError::Metadata(e.to_string()))?;
            let meta = match parsed {
                Value::Null => Mapping::new(),
                Value::Mapping(m) => m,
                _ => {
                    return Err(AppError::Metadata(
                        "front matter must be a key/value mapping".to_string(),
                    ));
                }
            };
            return Ok((meta, body));
        }
        offset += line.len();
    }

    // No closing delimiter: not front matter after all.
    Ok((Mapping::new(), text))
}

/// Replace `{{ svg-<name> }}` markers with the matching SVG text.
pub fn substitute_svg_markers(content: &str, svgs: &SvgSources) -> AppResult<String> {
    let re = Regex::new(SVG_MARKER)?;
    let out = re.replace_all(content, |caps: &Captures| {
        Category::from_marker(&caps[1])
            .and_then(|c| svgs.get(&c))
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    });
    Ok(out.into_owned())
}

/// Replace `{{ meta.<key> }}` markers from page metadata.
///
/// Missing keys and non-string values are reported and the marker is kept.
pub fn substitute_meta_markers(content: &str, meta: &Mapping, page: &str) -> AppResult<String> {
    let re = Regex::new(META_MARKER)?;
    let out = re.replace_all(content, |caps: &Captures| {
        let key = &caps[1];
        match meta.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warning(format!(
                    "{page}: metadata '{key}' is not a string ({}), marker skipped",
                    value_kind(other)
                ));
                caps[0].to_string()
            }
            None => {
                warning(format!("{page}: metadata '{key}' not found, marker skipped"));
                caps[0].to_string()
            }
        }
    });
    Ok(out.into_owned())
}

/// Full page pass: metadata first, then images, so SVG bodies are never
/// scanned for markers.
pub fn substitute_page(
    content: &str,
    meta: &Mapping,
    svgs: &SvgSources,
    page: &str,
) -> AppResult<String> {
    let with_meta = substitute_meta_markers(content, meta, page)?;
    substitute_svg_markers(&with_meta, svgs)
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
