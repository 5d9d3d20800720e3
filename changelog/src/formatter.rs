use crate::types::ListMarker;

// --- Traits ---

pub trait HeaderFormatter: Send + Sync {
    fn format(&self, version: &str, date: &str) -> String;
}

// Header Formatters
#[derive(Debug, Clone)]
pub struct GitHubHeaderFormatter;

impl HeaderFormatter for GitHubHeaderFormatter {
    fn format(&self, version: &str, date: &str) -> String {
        format!("## [{version}] - {date}")
    }
}

/// The placeholder bullet of a fresh Unreleased section
#[must_use]
pub fn format_teaser(marker: ListMarker, teaser: &str) -> String {
    format!("{marker} {teaser}")
}
