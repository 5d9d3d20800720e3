use crate::error::{Result, ResultExt};
use changelog::{Changelog, ChangelogConfig};
use std::path::Path;

/// Whether the Unreleased section of `changelog_file` has notes to release
pub fn execute(changelog_file: &Path) -> Result<bool> {
    let changelog = Changelog::open(changelog_file, ChangelogConfig::default())
        .with_context(|| "Failed to check changelog")?;
    let has_content = changelog.has_unreleased_content()?;
    if !has_content {
        log::info!("{} has no unreleased notes", changelog_file.display());
    }
    Ok(has_content)
}
