use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::formatter::GitHubHeaderFormatter;
use crate::inspect::ensure_valid;
use crate::notes::{NotesExtractor, has_unreleased_content};
use crate::types::*;
use crate::version::{DefaultVersionUpdater, VersionUpdater};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Represents a validated changelog file with its contents
pub struct Changelog {
    path: PathBuf,
    content: String,
    inspection: InspectResult,
    config: ChangelogConfig,
}

impl Changelog {
    /// Reads and inspects the changelog at `path`
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable, empty or has
    /// structural defects
    pub fn open(path: impl Into<PathBuf>, config: ChangelogConfig) -> Result<Self> {
        let path = path.into();

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ChangelogError::FileNotFound(path.clone()),
            _ => ChangelogError::ReadError(e),
        })?;

        let inspection = ensure_valid(&content).map_err(|e| match e {
            ChangelogError::Defective(defects) => ChangelogError::InvalidChangelog {
                path: path.clone(),
                defects,
            },
            ChangelogError::EmptyInput => {
                ChangelogError::EmptyInput.with_context(path.display().to_string())
            }
            other => other,
        })?;

        log::debug!(
            "opened {} with {} releases",
            path.display(),
            inspection.releases.len()
        );

        Ok(Self {
            path,
            content,
            inspection,
            config,
        })
    }

    /// Gets the path to the changelog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the raw content of the changelog
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn inspection(&self) -> &InspectResult {
        &self.inspection
    }

    /// Notes of `version`, empty when the section has nothing to report
    ///
    /// # Errors
    ///
    /// Returns an error if the requested version cannot be found
    pub fn notes(&self, version: &str) -> Result<String> {
        NotesExtractor::new(&self.config).extract_with_marker(
            &self.content,
            version,
            self.inspection.list_marker,
        )
    }

    /// # Errors
    ///
    /// Returns an error if the changelog content is empty
    pub fn has_unreleased_content(&self) -> Result<bool> {
        has_unreleased_content(&self.content, &self.config)
    }

    /// Content of this changelog after rolling Unreleased over into `release`
    ///
    /// # Errors
    ///
    /// Returns an error if the version or the Unreleased link is invalid
    pub fn rollover(&self, release: &NextRelease) -> Result<String> {
        let updater = DefaultVersionUpdater::new(&GitHubHeaderFormatter, &self.config);
        let date = updater.current_date();
        updater.rollover(&self.content, release, &date)
    }

    /// Overwrites the changelog file with `content`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn write(&mut self, content: String) -> Result<()> {
        fs::write(&self.path, &content).map_err(ChangelogError::ReadError)?;
        log::info!("wrote {}", self.path.display());
        self.inspection = ensure_valid(&content)?;
        self.content = content;
        Ok(())
    }
}
