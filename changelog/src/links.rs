use crate::error::ChangelogError;
use crate::line::{Line, classify};
use crate::types::{Result, UNRELEASED};
use crate::utils::GITHUB_URL_PATTERN;

/// Owner and name of the GitHub repository a changelog links into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
    pub owner: String,
    pub name: String,
}

impl GitHubRepo {
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    #[must_use]
    pub fn compare_url(&self, from: &str, to: &str) -> String {
        format!("{}/compare/{from}...{to}", self.base_url())
    }

    #[must_use]
    pub fn release_url(&self, tag: &str) -> String {
        format!("{}/releases/tag/{tag}", self.base_url())
    }

    #[must_use]
    pub fn commits_url(&self, branch: &str) -> String {
        format!("{}/commits/{branch}", self.base_url())
    }
}

/// Where the Unreleased link currently points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseSeries {
    /// `commits/<branch>`, nothing has been tagged yet
    NoPriorRelease,
    /// `compare/<previous_ref>...HEAD`
    OngoingSeries { previous_ref: String },
}

/// The parsed `[Unreleased]: https://github.com/...` link reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreleasedLink {
    /// 0-based line index of the link reference
    pub line: usize,
    pub repo: GitHubRepo,
    pub series: ReleaseSeries,
}

impl UnreleasedLink {
    /// Finds and parses the Unreleased link reference of a changelog
    ///
    /// # Errors
    ///
    /// [`ChangelogError::UnreleasedLinkMissing`] when no such line exists,
    /// [`ChangelogError::UnreleasedLinkMalformed`] when its URL is not a
    /// GitHub repository URL.
    pub fn find<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (line, url) = lines
            .into_iter()
            .enumerate()
            .find_map(|(idx, line)| match classify(line.trim_start()) {
                Line::LinkRef { label, url } if label == UNRELEASED => Some((idx, url.to_string())),
                _ => None,
            })
            .ok_or(ChangelogError::UnreleasedLinkMissing)?;

        let (repo, path) = parse_github_url(&url)?;
        let series = match path
            .strip_prefix("compare/")
            .and_then(|range| range.strip_suffix("...HEAD"))
        {
            Some(previous_ref) if !previous_ref.is_empty() => ReleaseSeries::OngoingSeries {
                previous_ref: previous_ref.to_string(),
            },
            Some(_) => return Err(ChangelogError::UnreleasedLinkMalformed(url)),
            None => {
                if !path.starts_with("commits/") {
                    log::warn!("treating Unreleased link {url} as a first release");
                }
                ReleaseSeries::NoPriorRelease
            }
        };

        Ok(Self { line, repo, series })
    }

    /// Link lines replacing the Unreleased link once `tag` is released as `version`
    #[must_use]
    pub fn rolled_over(&self, version: &str, tag: &str) -> [String; 2] {
        let unreleased = format!(
            "[{UNRELEASED}]: {}",
            self.repo.compare_url(tag, "HEAD")
        );
        let release_url = match &self.series {
            ReleaseSeries::NoPriorRelease => self.repo.release_url(tag),
            ReleaseSeries::OngoingSeries { previous_ref } => {
                self.repo.compare_url(previous_ref, tag)
            }
        };
        [unreleased, format!("[{version}]: {release_url}")]
    }
}

fn parse_github_url(url: &str) -> Result<(GitHubRepo, String)> {
    let captures = GITHUB_URL_PATTERN
        .captures(url)
        .ok_or_else(|| ChangelogError::UnreleasedLinkMalformed(url.to_string()))?;
    match (
        captures.name("owner"),
        captures.name("name"),
        captures.name("path"),
    ) {
        (Some(owner), Some(name), Some(path)) => Ok((
            GitHubRepo {
                owner: owner.as_str().to_string(),
                name: name.as_str().to_string(),
            },
            path.as_str().to_string(),
        )),
        _ => Err(ChangelogError::UnreleasedLinkMalformed(url.to_string())),
    }
}
