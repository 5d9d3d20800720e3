use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::formatter::format_teaser;
use crate::links::GitHubRepo;
use crate::types::{Result, UNRELEASED};
use crate::utils::REPOSITORY_NAME_PATTERN;

/// Skeleton changelog for the GitHub repository `repo` (`owner/name`)
///
/// # Errors
///
/// Returns [`ChangelogError::InvalidRepository`] when `repo` is not an
/// `owner/name` pair.
pub fn new_changelog(repo: &str, config: &ChangelogConfig) -> Result<String> {
    let repo = parse_repository(repo)?;
    let teaser = format_teaser(config.list_marker, &config.teaser);
    let link = repo.commits_url(&config.default_branch);

    Ok(format!(
        "# Changelog\n\n## [{UNRELEASED}]\n\n### Added\n\n{teaser}\n\n[{UNRELEASED}]: {link}\n"
    ))
}

fn parse_repository(repo: &str) -> Result<GitHubRepo> {
    if !REPOSITORY_NAME_PATTERN.is_match(repo) {
        return Err(ChangelogError::InvalidRepository(repo.to_string()));
    }
    let (owner, name) = repo
        .split_once('/')
        .ok_or_else(|| ChangelogError::InvalidRepository(repo.to_string()))?;
    Ok(GitHubRepo {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
