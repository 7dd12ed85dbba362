use crate::errors::{AppError, AppResult};
use crate::models::Palette;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Keys a config file may contain.
const KNOWN_KEYS: [&str; 5] = ["log_file", "docs_dir", "site_dir", "utc_offset_hours", "palette"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
    /// Offset from UTC used to decide what "today" is.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default)]
    pub palette: Palette,
}

fn default_log_file() -> String {
    "log.csv".to_string()
}
fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_site_dir() -> String {
    "site".to_string()
}
fn default_utc_offset() -> i32 {
    -7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            docs_dir: default_docs_dir(),
            site_dir: default_site_dir(),
            utc_offset_hours: default_utc_offset(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rheatlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rheatlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rheatlog.conf")
    }

    /// Load the default config file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn docs_path(&self) -> PathBuf {
        expand_tilde(&self.docs_dir)
    }

    pub fn site_path(&self) -> PathBuf {
        expand_tilde(&self.site_dir)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path` (directories included).
    /// In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Self::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    /// Report problems in a config file: unreadable YAML, unknown keys and
    /// keys that fall back to defaults.
    pub fn check_file(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration file not found: {}", path.display()),
            )));
        }

        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let Some(map) = yaml.as_mapping() else {
            return Err(AppError::Config(
                "configuration must be a key/value mapping".to_string(),
            ));
        };

        let mut issues = Vec::new();

        for key in map.keys() {
            let name = key.as_str().unwrap_or("<non-string key>");
            if !KNOWN_KEYS.contains(&name) {
                issues.push(format!("unknown key '{name}'"));
            }
        }

        for key in KNOWN_KEYS {
            if !map.contains_key(key) {
                issues.push(format!("missing key '{key}' (default used)"));
            }
        }

        // Type errors surface here.
        serde_yaml::from_value::<Config>(yaml.clone())
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(issues)
    }
}
