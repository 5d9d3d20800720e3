use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::inspect::Inspector;
use crate::position::{find_notes_end, find_release_position};
use crate::types::{ListMarker, Result, UNRELEASED};

/// Lines under one `### ` header, or the unnamed lines before any header
#[derive(Debug, Default)]
struct CategoryGroup<'a> {
    lines: Vec<&'a str>,
}

impl CategoryGroup<'_> {
    fn has_bullets(&self, marker: ListMarker) -> bool {
        self.lines
            .iter()
            .any(|line| line.starts_with(marker.as_char()))
    }
}

/// Pulls the release notes of a single version out of a changelog
#[derive(Debug, Clone)]
pub struct NotesExtractor<'a> {
    config: &'a ChangelogConfig,
}

impl<'a> NotesExtractor<'a> {
    #[must_use]
    pub const fn new(config: &'a ChangelogConfig) -> Self {
        Self { config }
    }

    /// Notes of `version`, with empty categories and the placeholder removed
    ///
    /// An empty string means the section exists but has nothing to report.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::EmptyInput`] for empty content and
    /// [`ChangelogError::VersionNotFound`] when there is no `## [version]`
    /// header.
    pub fn extract(&self, content: &str, version: &str) -> Result<String> {
        let marker = Inspector::new().inspect(content).list_marker;
        self.extract_with_marker(content, version, marker)
    }

    pub(crate) fn extract_with_marker(
        &self,
        content: &str,
        version: &str,
        marker: ListMarker,
    ) -> Result<String> {
        if content.is_empty() {
            return Err(ChangelogError::EmptyInput);
        }
        let lines: Vec<&str> = content.lines().collect();
        let header_idx = find_release_position(&lines, version)
            .ok_or_else(|| ChangelogError::VersionNotFound(version.to_string()))?;
        let notes_end = find_notes_end(&lines, header_idx);

        let block = trim_blank_lines(&lines[header_idx + 1..notes_end]);
        if block.is_empty() {
            log::debug!("{version} section has no notes");
            return Ok(String::new());
        }

        let teaser = format!("{marker} {}", self.config.teaser);
        let skip_teaser = version == UNRELEASED;

        let mut result = String::new();
        let mut group = CategoryGroup::default();
        for line in block.iter().map(|line| line.trim()) {
            if skip_teaser && line == teaser {
                continue;
            }
            if line.starts_with("### ") {
                self.merge_group(&mut result, &group, marker);
                group = CategoryGroup::default();
            }
            group.lines.push(line);
        }
        self.merge_group(&mut result, &group, marker);

        Ok(result)
    }

    fn merge_group(&self, result: &mut String, group: &CategoryGroup, marker: ListMarker) {
        if group.has_bullets(marker) {
            result.push_str(&group.lines.join("\n"));
        }
    }
}

fn trim_blank_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |idx| idx + 1);
    &lines[start..end]
}

/// Whether the Unreleased section holds anything besides the placeholder
///
/// A changelog without an Unreleased section has no unreleased content.
///
/// # Errors
///
/// Returns [`ChangelogError::EmptyInput`] for empty content.
pub fn has_unreleased_content(content: &str, config: &ChangelogConfig) -> Result<bool> {
    if content.is_empty() {
        return Err(ChangelogError::EmptyInput);
    }
    match NotesExtractor::new(config).extract(content, UNRELEASED) {
        Ok(notes) => Ok(!notes.is_empty()),
        Err(ChangelogError::VersionNotFound(_)) => {
            log::debug!("changelog has no Unreleased section");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
