use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use changelog::{Changelog, ChangelogConfig, NextRelease, is_valid_version_token};
use std::path::Path;

pub fn execute(changelog_file: &Path, next_version: &str, git_tag: Option<&str>) -> Result<()> {
    if !is_valid_version_token(next_version) {
        return Err(CliError::InvalidArgs(format!(
            "{next_version} is not a `vX.X.X` format semver"
        )));
    }
    let release = NextRelease::new(next_version, git_tag);

    let mut changelog = Changelog::open(changelog_file, ChangelogConfig::default())
        .with_context(|| format!("Failed to roll over to {next_version}"))?;
    if !changelog.has_unreleased_content()? {
        log::warn!("releasing {next_version} without unreleased notes");
    }
    let content = changelog
        .rollover(&release)
        .with_context(|| format!("Failed to roll over to {next_version}"))?;
    changelog.write(content)?;

    ui::success_message(&format!(
        "Rolled {} over into {next_version}",
        changelog_file.display()
    ));
    Ok(())
}
