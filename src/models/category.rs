/// One of the four independent activity tracks. Each track is rendered as
/// its own calendar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Calibration,
    Condition,
    Connection,
    Contribution,
}

impl Category {
    /// Rendering order (also the order of the generated files).
    pub const ALL: [Category; 4] = [
        Category::Calibration,
        Category::Condition,
        Category::Connection,
        Category::Contribution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Calibration => "calibration",
            Category::Condition => "condition",
            Category::Connection => "connection",
            Category::Contribution => "contribution",
        }
    }

    /// Column names used by older versions of the log.
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Category::Calibration => "alignment",
            Category::Condition => "robustness",
            Category::Connection => "network",
            Category::Contribution => "benefaction",
        }
    }

    /// Accept both the current and the legacy column name (case-insensitive).
    pub fn from_column(name: &str) -> Option<Self> {
        let n = name.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == n || c.legacy_name() == n)
    }

    /// Marker names only use the current spelling.
    pub fn from_marker(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Relative path of the generated image.
    pub fn image_path(&self) -> String {
        format!("images/{}.svg", self.as_str())
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Calibration => 0,
            Category::Condition => 1,
            Category::Connection => 2,
            Category::Contribution => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
