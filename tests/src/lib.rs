//! Changelog fixtures shared by the integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// A changelog that has never been released
pub const FIRST_CHANGELOG: &str = "# Changelog

## [Unreleased]

### Added

- `check` command
- `get` command

### Fixed

[Unreleased]: https://github.com/eighty4/changelog/commits/main
";

/// A changelog with two releases and notes waiting to be released
pub const RELEASED_CHANGELOG: &str = "# Changelog

## [Unreleased]

### Fixed

- rollover of CRLF files

## [v0.0.2] - 2025-04-21

### Added

- `rollover` command

## [v0.0.1] - 2025-04-20

### Added

- `check` command

[Unreleased]: https://github.com/eighty4/changelog/compare/v0.0.2...HEAD
[v0.0.2]: https://github.com/eighty4/changelog/compare/v0.0.1...v0.0.2
[v0.0.1]: https://github.com/eighty4/changelog/releases/tag/v0.0.1
";

/// Notes written outside ASCII, with non-breaking and ideographic spaces
/// after the bullet markers
pub const UNICODE_CHANGELOG: &str = "# Changelog

## [Unreleased]

### Añadido

-\u{a0}soporte para ñandú
-\u{3000}日本語のリリースノート
- émoji ✨ support

[Unreleased]: https://github.com/eighty4/changelog/commits/main
";

/// Writes `content` as `CHANGELOG.md` inside `dir`
pub fn write_changelog(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content)?;
    Ok(path)
}
