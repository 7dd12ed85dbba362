use crate::models::category::Category;
use serde::{Deserialize, Serialize};

/// Fill colors for the four tracks plus the shared "no data" color.
///
/// Values are written verbatim into the SVG `fill` attribute, so any CSS
/// color syntax works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_calibration", alias = "alignment")]
    pub calibration: String,
    #[serde(default = "default_condition", alias = "robustness")]
    pub condition: String,
    #[serde(default = "default_connection", alias = "network")]
    pub connection: String,
    #[serde(default = "default_contribution", alias = "benefaction")]
    pub contribution: String,
    #[serde(default = "default_missing", alias = "nan")]
    pub missing: String,
}

fn default_calibration() -> String {
    "rgb(189, 120, 83)".to_string()
}
fn default_condition() -> String {
    "rgb(204, 32, 27)".to_string()
}
fn default_connection() -> String {
    "rgb(227, 209, 43)".to_string()
}
fn default_contribution() -> String {
    "rgb(26, 44, 203)".to_string()
}
fn default_missing() -> String {
    "rgb(47,47,47)".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            calibration: default_calibration(),
            condition: default_condition(),
            connection: default_connection(),
            contribution: default_contribution(),
            missing: default_missing(),
        }
    }
}

impl Palette {
    pub fn accent(&self, category: Category) -> &str {
        match category {
            Category::Calibration => &self.calibration,
            Category::Condition => &self.condition,
            Category::Connection => &self.connection,
            Category::Contribution => &self.contribution,
        }
    }

    pub fn missing(&self) -> &str {
        &self.missing
    }

    /// Color for one cell of one track.
    pub fn fill(&self, category: Category, active: bool) -> &str {
        if active {
            self.accent(category)
        } else {
            self.missing()
        }
    }
}
