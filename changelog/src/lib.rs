//! Reading, checking and releasing "Keep a Changelog" formatted changelogs

pub mod buffer;
pub mod config;
pub mod core;
pub mod error;
pub mod formatter;
pub mod inspect;
pub mod line;
pub mod links;
pub mod notes;
mod position;
pub mod template;
pub mod types;
pub mod utils;
pub mod version;

pub use config::ChangelogConfig;
pub use crate::core::Changelog;
pub use error::ChangelogError;
pub use formatter::{GitHubHeaderFormatter, HeaderFormatter};
pub use inspect::{Inspector, ensure_valid};
pub use links::{GitHubRepo, ReleaseSeries, UnreleasedLink};
pub use notes::NotesExtractor;
pub use template::new_changelog;
pub use types::*;
pub use utils::is_valid_version_token;
pub use version::{DefaultVersionUpdater, VersionUpdater};

/// Structural defects, release headers and predominant list marker of `content`
#[must_use]
pub fn inspect(content: &str) -> InspectResult {
    Inspector::new().inspect(content)
}

/// Notes of `version` with empty categories and the Unreleased placeholder removed
///
/// # Errors
///
/// Returns [`ChangelogError::VersionNotFound`] when the changelog has no
/// section for `version`.
pub fn extract_version_notes(content: &str, version: &str) -> Result<String> {
    NotesExtractor::new(&ChangelogConfig::default()).extract(content, version)
}

/// Whether the Unreleased section has notes worth releasing
///
/// # Errors
///
/// Returns [`ChangelogError::EmptyInput`] when `content` is empty.
pub fn has_unreleased_content(content: &str) -> Result<bool> {
    notes::has_unreleased_content(content, &ChangelogConfig::default())
}

/// Rolls the Unreleased section over into `next_version`, dated today
///
/// `git_tag` is the ref used in compare and release URLs, defaulting to
/// `next_version`.
///
/// # Errors
///
/// Fails on empty content, an invalid version, a missing Unreleased
/// section, or a missing or malformed Unreleased link.
pub fn rollover(content: &str, next_version: &str, git_tag: Option<&str>) -> Result<String> {
    let config = ChangelogConfig::default();
    let updater = DefaultVersionUpdater::new(&GitHubHeaderFormatter, &config);
    let date = updater.current_date();
    updater.rollover(content, &NextRelease::new(next_version, git_tag), &date)
}
