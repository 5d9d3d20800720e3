use crate::error::ChangelogError;
use std::fmt::{self, Display, Formatter};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Label of the section collecting notes for the next release
pub const UNRELEASED: &str = "Unreleased";

/// Bullet character used for list items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListMarker {
    #[default]
    Asterisk,
    Plus,
    Dash,
}

impl ListMarker {
    /// Markers in character sort order, which is also the tie-break order
    pub const ALL: [Self; 3] = [Self::Asterisk, Self::Plus, Self::Dash];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Asterisk => '*',
            Self::Plus => '+',
            Self::Dash => '-',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Asterisk),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }
}

impl Display for ListMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Kind of structural problem found while inspecting a changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    ReleaseHeader,
    VersionBrackets,
    VersionSemver,
}

impl DefectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReleaseHeader => "release-header",
            Self::VersionBrackets => "version-brackets",
            Self::VersionSemver => "version-semver",
        }
    }

    /// Human readable explanation of the defect
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ReleaseHeader => "release header is not valid",
            Self::VersionBrackets => "release version must be in Markdown link brackets",
            Self::VersionSemver => "release version is not a valid semver",
        }
    }
}

impl Display for DefectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural defect of a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    pub excerpt: String,
    pub kind: DefectKind,
    /// 1-based
    pub line: usize,
}

/// A parsed `## [version] - date` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHeader {
    pub excerpt: String,
    pub line: usize,
    /// `Unreleased` or the version without brackets
    pub version: String,
    pub bracketed: bool,
    pub date: Option<String>,
}

/// Result of a structural scan over a changelog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InspectResult {
    pub defects: Vec<Defect>,
    pub releases: Vec<ReleaseHeader>,
    pub list_marker: ListMarker,
}

impl InspectResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.defects.is_empty()
    }
}

/// The release a rollover produces
///
/// `version` labels the section header and its link, `vcs_ref` is the git
/// tag placed into comparison URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextRelease {
    pub version: String,
    pub vcs_ref: String,
}

impl NextRelease {
    pub fn new(version: impl Into<String>, git_tag: Option<&str>) -> Self {
        let version = version.into();
        let vcs_ref = git_tag.map_or_else(|| version.clone(), str::to_string);
        Self { version, vcs_ref }
    }
}
