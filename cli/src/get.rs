use crate::error::{CliError, Result, ResultExt};
use changelog::{Changelog, ChangelogConfig, UNRELEASED, is_valid_version_token};
use std::path::Path;

/// Release notes of `version` from `changelog_file`
pub fn version_notes(changelog_file: &Path, version: &str) -> Result<String> {
    if version != UNRELEASED && !is_valid_version_token(version) {
        return Err(CliError::InvalidArgs(format!(
            "{version} is not a `vX.X.X` format semver or the `{UNRELEASED}` label"
        )));
    }
    let changelog = Changelog::open(changelog_file, ChangelogConfig::default())
        .with_context(|| format!("Failed to get {version} notes"))?;
    Ok(changelog.notes(version)?)
}

pub fn execute(changelog_file: &Path, version: &str) -> Result<()> {
    println!("{}", version_notes(changelog_file, version)?);
    Ok(())
}
