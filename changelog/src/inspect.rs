use crate::error::ChangelogError;
use crate::line::{Line, ReleaseLine, classify};
use crate::types::*;
use crate::utils::is_strict_semver;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct InspectorState {
    defects: Vec<Defect>,
    releases: Vec<ReleaseHeader>,
    marker_tallies: HashMap<ListMarker, usize>,
}

impl InspectorState {
    fn push_defect(&mut self, excerpt: &str, kind: DefectKind, line: usize) {
        self.defects.push(Defect {
            excerpt: excerpt.to_string(),
            kind,
            line,
        });
    }

    fn predominant_marker(&self) -> ListMarker {
        let mut predominant = ListMarker::default();
        let mut highest = 0;
        for marker in ListMarker::ALL {
            let tally = self.marker_tallies.get(&marker).copied().unwrap_or(0);
            if tally > highest {
                predominant = marker;
                highest = tally;
            }
        }
        predominant
    }
}

/// Line oriented structural scan of a changelog
#[derive(Debug, Clone, Default)]
pub struct Inspector;

impl Inspector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn inspect(&self, content: &str) -> InspectResult {
        let mut state = InspectorState::default();

        for (line_num, line) in content.lines().enumerate() {
            self.inspect_line(line, line_num + 1, &mut state);
        }

        log::debug!(
            "inspected {} release headers, {} defects",
            state.releases.len(),
            state.defects.len()
        );

        InspectResult {
            list_marker: state.predominant_marker(),
            defects: state.defects,
            releases: state.releases,
        }
    }

    fn inspect_line(&self, line: &str, line_num: usize, state: &mut InspectorState) {
        let line = line.trim_end();
        match classify(line) {
            Line::Release(release) => self.handle_release_header(line, &release, line_num, state),
            Line::MalformedRelease => {
                state.push_defect(line.trim(), DefectKind::ReleaseHeader, line_num);
            }
            Line::Bullet(marker, _) => *state.marker_tallies.entry(marker).or_default() += 1,
            _ => {}
        }
    }

    fn handle_release_header(
        &self,
        line: &str,
        release: &ReleaseLine,
        line_num: usize,
        state: &mut InspectorState,
    ) {
        let line = line.trim();
        let bracketed = release.is_bracketed();
        if !bracketed {
            state.push_defect(line, DefectKind::VersionBrackets, line_num);
        }
        if release.semver.is_some_and(|semver| !is_strict_semver(semver)) {
            state.push_defect(line, DefectKind::VersionSemver, line_num);
        }
        state.releases.push(ReleaseHeader {
            excerpt: line.to_string(),
            line: line_num,
            version: release.version().to_string(),
            bracketed,
            date: release.date.map(str::to_string),
        });
    }
}

/// Inspects `content`, failing when it has any structural defect
///
/// # Errors
///
/// Returns [`ChangelogError::EmptyInput`] for empty content and
/// [`ChangelogError::Defective`] carrying every defect otherwise.
pub fn ensure_valid(content: &str) -> Result<InspectResult> {
    if content.is_empty() {
        return Err(ChangelogError::EmptyInput);
    }
    let result = Inspector::new().inspect(content);
    if result.is_valid() {
        Ok(result)
    } else {
        Err(ChangelogError::Defective(result.defects))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(content: &str) -> InspectResult {
        Inspector::new().inspect(content)
    }

    #[test]
    fn test_no_defects_for_new_changelog() {
        let changelog = "# Changelog

## [Unreleased]

### Added

- ???

[Unreleased]: https://github.com/eighty4/cquill/commits/main
";
        assert_eq!(inspect(changelog).defects, vec![]);
    }

    #[test]
    fn test_multibyte_separators_count_as_bullets() {
        let changelog = "## [Unreleased]\n\n-\u{a0}fixed a thing\n+\u{3000}日本語\n+ ünïcödé\n";
        let result = inspect(changelog);
        assert!(result.is_valid());
        assert_eq!(result.list_marker, ListMarker::Plus);
    }

    #[test]
    fn test_no_defects_for_end_of_line_whitespace() {
        let changelog = "# Changelog\n\n## [Unreleased]   \n\n### Added\n\n- ???\n";
        assert_eq!(inspect(changelog).defects, vec![]);
    }

    #[test]
    fn test_no_defects_for_dated_releases() {
        let changelog = "## [Unreleased]\n\n## [v0.0.2] - 2025-04-21\n\n## [0.0.1] - 2025-01-01\n";
        let result = inspect(changelog);
        assert!(result.is_valid());
        assert_eq!(result.releases.len(), 3);
        assert_eq!(result.releases[0].version, UNRELEASED);
        assert_eq!(result.releases[1].date.as_deref(), Some("2025-04-21"));
        assert_eq!(result.releases[2].version, "0.0.1");
        assert_eq!(result.releases[2].line, 5);
    }

    #[test]
    fn test_defect_for_bad_release_header() {
        let changelog = "# Changelog\n\n## Bah dop bah dop\n\n- asdf\n";
        assert_eq!(
            inspect(changelog).defects,
            vec![Defect {
                excerpt: "## Bah dop bah dop".to_string(),
                kind: DefectKind::ReleaseHeader,
                line: 3,
            }]
        );
    }

    #[test]
    fn test_defect_for_version_without_brackets() {
        let changelog = "# Changelog\n\n## v0.0.1\n\n- asdf\n";
        let result = inspect(changelog);
        assert_eq!(
            result.defects,
            vec![Defect {
                excerpt: "## v0.0.1".to_string(),
                kind: DefectKind::VersionBrackets,
                line: 3,
            }]
        );
        assert_eq!(result.releases[0].version, "v0.0.1");
        assert!(!result.releases[0].bracketed);
    }

    #[test]
    fn test_defect_for_invalid_semver() {
        let changelog = "# Changelog\n\n## [v1234.88]\n\n- asdf\n";
        assert_eq!(
            inspect(changelog).defects,
            vec![Defect {
                excerpt: "## [v1234.88]".to_string(),
                kind: DefectKind::VersionSemver,
                line: 3,
            }]
        );
    }

    #[test]
    fn test_brackets_and_semver_defects_on_same_line() {
        let kinds: Vec<DefectKind> = inspect("## v1234.88\r\n")
            .defects
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(kinds, vec![DefectKind::VersionBrackets, DefectKind::VersionSemver]);
    }

    #[test]
    fn test_selects_predominant_list_marker() {
        let changelog = "
# Changelog

## [v0.0.1]

- asdf
- sdfg
- dfgh

## [v0.0.0]

* asdf
* sdfg
* dfgh
* ghjk
";
        assert_eq!(inspect(changelog).list_marker, ListMarker::Asterisk);
        assert_eq!(inspect("+ a\n+ b\n- c\n").list_marker, ListMarker::Plus);
    }

    #[test]
    fn test_list_marker_tie_breaks_in_sort_order() {
        assert_eq!(inspect("- a\n+ b\n").list_marker, ListMarker::Plus);
        assert_eq!(inspect("- a\n* b\n").list_marker, ListMarker::Asterisk);
        assert_eq!(inspect("# Changelog\n").list_marker, ListMarker::Asterisk);
    }

    #[test]
    fn test_ensure_valid_rejects_defects_and_empty_input() {
        assert!(matches!(ensure_valid(""), Err(ChangelogError::EmptyInput)));
        let err = ensure_valid("## v0.0.1\n## nope\n").unwrap_err();
        assert_eq!(err.defects().map(<[Defect]>::len), Some(2));
        assert!(ensure_valid("## [Unreleased]\n").is_ok());
    }
}
