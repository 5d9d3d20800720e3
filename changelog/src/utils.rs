use once_cell::sync::Lazy;
use regex::Regex;

/// Loose version token check, matches anywhere in the input
pub static VERSION_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"v\d+\.\d+\.\d+").expect("Failed to compile version token regex"));

pub static STRICT_SEMVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("Failed to compile strict semver regex")
});

pub static RELEASE_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^##\s(?P<version>\[?(?:Unreleased|v?(?P<semver>[\d.]+))\]?)(?:\s-\s(?P<date>[\d-]{10}))?$",
    )
    .expect("Failed to compile release header regex")
});

pub static LINK_REF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<label>[^\]]+)\]:\s*(?P<url>.*?)\s*$")
        .expect("Failed to compile link reference regex")
});

pub static GITHUB_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/(?P<owner>[^/\s]+)/(?P<name>[^/\s]+)/(?P<path>\S+)$")
        .expect("Failed to compile GitHub URL regex")
});

pub static REPOSITORY_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+/[\w.-]+$").expect("Failed to compile repository name regex")
});

/// Reports whether `token` contains a `vMAJOR.MINOR.PATCH` version.
///
/// The match is not anchored: `release-v1.2.3` passes too.
#[must_use]
pub fn is_valid_version_token(token: &str) -> bool {
    VERSION_TOKEN_PATTERN.is_match(token)
}

#[must_use]
pub fn is_strict_semver(version: &str) -> bool {
    STRICT_SEMVER_PATTERN.is_match(version)
}
