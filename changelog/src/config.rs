use crate::types::ListMarker;

/// Configuration options for changelog formatting and behavior
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Placeholder item text reminding authors to write notes
    pub teaser: String,
    pub date_format: String,
    /// Branch linked from the Unreleased section of a new changelog
    pub default_branch: String,
    /// Bullet used by a new changelog
    pub list_marker: ListMarker,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            teaser: "???".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            default_branch: "main".to_string(),
            list_marker: ListMarker::Dash,
        }
    }
}

impl ChangelogConfig {
    #[must_use]
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }
}
