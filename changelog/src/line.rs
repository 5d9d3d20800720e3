use crate::types::ListMarker;
use crate::utils::{LINK_REF_PATTERN, RELEASE_HEADER_PATTERN};

/// Classification of a single changelog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `## ` line matching the release header shape
    Release(ReleaseLine<'a>),
    /// `## ` line that does not look like a release header
    MalformedRelease,
    /// `### Name`
    Category(&'a str),
    Bullet(ListMarker, &'a str),
    LinkRef { label: &'a str, url: &'a str },
    Blank,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLine<'a> {
    /// Version as written, brackets included when present
    pub raw_version: &'a str,
    /// Numeric part of the version, without a `v` prefix
    pub semver: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl<'a> ReleaseLine<'a> {
    #[must_use]
    pub fn is_bracketed(&self) -> bool {
        self.raw_version.starts_with('[') && self.raw_version.ends_with(']')
    }

    #[must_use]
    pub fn version(&self) -> &'a str {
        if self.is_bracketed() {
            &self.raw_version[1..self.raw_version.len() - 1]
        } else {
            self.raw_version
        }
    }
}

/// Classifies a line, ignoring trailing whitespace
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return Line::Blank;
    }

    if line.starts_with("## ") {
        return RELEASE_HEADER_PATTERN
            .captures(line)
            .and_then(|captures| {
                let raw_version = captures.name("version")?.as_str();
                Some(Line::Release(ReleaseLine {
                    raw_version,
                    semver: captures.name("semver").map(|m| m.as_str()),
                    date: captures.name("date").map(|m| m.as_str()),
                }))
            })
            .unwrap_or(Line::MalformedRelease);
    }

    if let Some(name) = line.strip_prefix("### ") {
        return Line::Category(name.trim());
    }

    if let Some(link) = LINK_REF_PATTERN.captures(line) {
        if let (Some(label), Some(url)) = (link.name("label"), link.name("url")) {
            return Line::LinkRef {
                label: label.as_str(),
                url: url.as_str(),
            };
        }
    }

    let mut chars = line.chars();
    if let (Some(marker), Some(separator)) = (chars.next(), chars.next()) {
        if let Some(marker) = ListMarker::from_char(marker) {
            if separator.is_whitespace() {
                return Line::Bullet(marker, chars.as_str().trim_start());
            }
        }
    }

    Line::Plain
}

/// Any line opening with `[` is taken as the start of the link reference block
#[must_use]
pub fn starts_link_block(line: &str) -> bool {
    line.starts_with('[')
}

/// A line opening the next `## ` section
#[must_use]
pub fn starts_release_section(line: &str) -> bool {
    line.starts_with("## ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bracketed_release_with_date() {
        let Line::Release(release) = classify("## [v0.0.1] - 2025-04-21 ") else {
            panic!("expected release header");
        };
        assert!(release.is_bracketed());
        assert_eq!(release.version(), "v0.0.1");
        assert_eq!(release.semver, Some("0.0.1"));
        assert_eq!(release.date, Some("2025-04-21"));
    }

    #[test]
    fn test_classify_unreleased_has_no_semver() {
        let Line::Release(release) = classify("## [Unreleased]") else {
            panic!("expected release header");
        };
        assert_eq!(release.version(), "Unreleased");
        assert_eq!(release.semver, None);
        assert_eq!(release.date, None);
    }

    #[test]
    fn test_classify_unbracketed_release() {
        let Line::Release(release) = classify("## v0.0.1") else {
            panic!("expected release header");
        };
        assert!(!release.is_bracketed());
        assert_eq!(release.version(), "v0.0.1");
    }

    #[test]
    fn test_classify_malformed_release() {
        assert_eq!(classify("## Bah dop bah dop"), Line::MalformedRelease);
        assert_eq!(classify("## [v0.0.1] 2025-04-21"), Line::MalformedRelease);
    }

    #[test]
    fn test_classify_bullets() {
        assert_eq!(classify("- a bug"), Line::Bullet(ListMarker::Dash, "a bug"));
        assert_eq!(classify("* a bug"), Line::Bullet(ListMarker::Asterisk, "a bug"));
        assert_eq!(classify("+ a bug"), Line::Bullet(ListMarker::Plus, "a bug"));
        assert_eq!(classify("-a bug"), Line::Plain);
        assert_eq!(classify("- "), Line::Plain);
    }

    #[test]
    fn test_classify_bullets_with_multibyte_text_and_separators() {
        assert_eq!(
            classify("-\u{a0}fixed a thing"),
            Line::Bullet(ListMarker::Dash, "fixed a thing")
        );
        assert_eq!(
            classify("*\u{3000}全角スペース"),
            Line::Bullet(ListMarker::Asterisk, "全角スペース")
        );
        assert_eq!(
            classify("+ \u{2003}naïve café ✨"),
            Line::Bullet(ListMarker::Plus, "naïve café ✨")
        );
        assert_eq!(classify("–\u{a0}en dash is not a marker"), Line::Plain);
        assert_eq!(classify("### Añadido"), Line::Category("Añadido"));
    }

    #[test]
    fn test_classify_category_link_and_blank() {
        assert_eq!(classify("### Added"), Line::Category("Added"));
        assert_eq!(
            classify("[Unreleased]: https://github.com/eighty4/c2/commits/main"),
            Line::LinkRef {
                label: "Unreleased",
                url: "https://github.com/eighty4/c2/commits/main",
            }
        );
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify("# Changelog"), Line::Plain);
    }
}
