use crate::buffer::LineBuffer;
use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::formatter::{HeaderFormatter, format_teaser};
use crate::inspect::Inspector;
use crate::links::UnreleasedLink;
use crate::position::find_unreleased_position;
use crate::types::{NextRelease, Result, UNRELEASED};
use crate::utils::is_valid_version_token;
use chrono::Local;

pub trait VersionUpdater {
    /// Rolls the Unreleased section over into `release`, dated `date`
    ///
    /// # Errors
    ///
    /// Fails on empty content, an invalid version, a missing or malformed
    /// Unreleased link, or a missing Unreleased section.
    fn rollover(&self, content: &str, release: &NextRelease, date: &str) -> Result<String>;
}

pub struct DefaultVersionUpdater<'a> {
    header_formatter: &'a dyn HeaderFormatter,
    config: &'a ChangelogConfig,
}

impl<'a> DefaultVersionUpdater<'a> {
    pub fn new(header_formatter: &'a dyn HeaderFormatter, config: &'a ChangelogConfig) -> Self {
        Self {
            header_formatter,
            config,
        }
    }

    /// Today in the local timezone, formatted with the configured date format
    #[must_use]
    pub fn current_date(&self) -> String {
        Local::now()
            .date_naive()
            .format(&self.config.date_format)
            .to_string()
    }

    fn insert_release_header(
        &self,
        buffer: &mut LineBuffer,
        unreleased_idx: usize,
        release: &NextRelease,
        date: &str,
        teaser: &str,
    ) {
        let header = self.header_formatter.format(&release.version, date);
        buffer.insert_after(unreleased_idx, &["", teaser, "", header.as_str()]);
    }

    fn rewrite_links(&self, buffer: &mut LineBuffer, link: &UnreleasedLink, release: &NextRelease) {
        let [unreleased, released] = link.rolled_over(&release.version, &release.vcs_ref);
        buffer.replace(link.line, &unreleased);
        buffer.insert_after(link.line, &[released]);
    }
}

impl VersionUpdater for DefaultVersionUpdater<'_> {
    fn rollover(&self, content: &str, release: &NextRelease, date: &str) -> Result<String> {
        if content.is_empty() {
            return Err(ChangelogError::EmptyInput);
        }
        if !is_valid_version_token(&release.version) {
            return Err(ChangelogError::InvalidVersion(release.version.clone()));
        }

        let mut buffer = LineBuffer::new(content);
        let lines: Vec<&str> = content.lines().collect();
        let link = UnreleasedLink::find(lines.iter().copied())?;
        let unreleased_idx = find_unreleased_position(&lines)
            .ok_or_else(|| ChangelogError::VersionNotFound(UNRELEASED.to_string()))?;

        let marker = Inspector::new().inspect(content).list_marker;
        let teaser = format_teaser(marker, &self.config.teaser);

        log::debug!(
            "rolling over {UNRELEASED} into {} tagged {} ({:?})",
            release.version,
            release.vcs_ref,
            link.series
        );

        // Edit the lower span first so the upper index stays valid
        if link.line > unreleased_idx {
            self.rewrite_links(&mut buffer, &link, release);
            self.insert_release_header(&mut buffer, unreleased_idx, release, date, &teaser);
        } else {
            self.insert_release_header(&mut buffer, unreleased_idx, release, date, &teaser);
            self.rewrite_links(&mut buffer, &link, release);
        }

        Ok(buffer.into_text())
    }
}
