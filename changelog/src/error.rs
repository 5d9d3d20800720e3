use crate::types::Defect;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("Changelog content is empty")]
    EmptyInput,

    #[error("Changelog is not valid, {} defects found", .0.len())]
    Defective(Vec<Defect>),

    #[error("{} is not valid", path.display())]
    InvalidChangelog { path: PathBuf, defects: Vec<Defect> },

    #[error("{0} not found in changelog file")]
    VersionNotFound(String),

    #[error("{0} is not a `vX.X.X` format semver")]
    InvalidVersion(String),

    #[error("Changelog has no [Unreleased] link reference")]
    UnreleasedLinkMissing,

    #[error("[Unreleased] link is not a GitHub repository URL: {0}")]
    UnreleasedLinkMalformed(String),

    #[error("{0} is not an `owner/name` style GitHub repository name")]
    InvalidRepository(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Defects carried by an invalid changelog error, looking through context
    #[must_use]
    pub fn defects(&self) -> Option<&[Defect]> {
        match self {
            Self::Defective(defects) | Self::InvalidChangelog { defects, .. } => Some(defects),
            Self::WithContext(_, err) => err.defects(),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::FileNotFound(path) => format!("{} does not exist", path.display()),
            Self::EmptyInput => "Changelog content is empty".to_string(),
            Self::Defective(_) => "Changelog is not valid".to_string(),
            Self::InvalidChangelog { path, .. } => format!("{} is not valid", path.display()),
            Self::VersionNotFound(version) => format!("{version} not found in changelog file"),
            Self::InvalidVersion(version) => {
                format!("{version} is not a `vX.X.X` format semver")
            }
            Self::UnreleasedLinkMissing => {
                "Add an `[Unreleased]: https://github.com/OWNER/NAME/commits/main` link to the changelog"
                    .to_string()
            }
            Self::UnreleasedLinkMalformed(url) => {
                format!("Fix the [Unreleased] link, `{url}` is not a GitHub repository URL")
            }
            Self::InvalidRepository(repo) => {
                format!("{repo} must be an `owner/name` style GitHub repository name")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
