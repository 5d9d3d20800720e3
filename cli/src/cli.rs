use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "changelog")]
#[command(
    author,
    version,
    about = "Checks, reads and releases Keep a Changelog formatted changelogs"
)]
pub struct Cli {
    /// Changelog file to read and update
    #[clap(long, global = true, default_value = "CHANGELOG.md")]
    pub changelog_file: PathBuf,

    /// Enable debug logging on stderr
    #[clap(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exit with a non-zero code when the Unreleased section has no notes
    Check,

    /// Print the release notes of VERSION
    Get {
        /// `Unreleased` or a `vX.X.X` version
        version: String,
    },

    /// Print a new changelog for a GitHub repository
    #[clap(alias = "init")]
    New {
        /// GitHub repository name, `owner/name`
        #[clap(long)]
        repo: String,

        /// Branch the Unreleased link compares against
        #[clap(long, default_value = "main")]
        branch: String,
    },

    /// Move the Unreleased notes into a new release
    Rollover {
        /// `vX.X.X` version of the release
        next_version: String,

        /// Git tag of the release when it differs from the version
        #[clap(long)]
        git_tag: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["changelog", "check"]).unwrap();
        assert_eq!(cli.changelog_file, PathBuf::from("CHANGELOG.md"));
        assert!(!cli.debug);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_get_with_changelog_file() {
        let cli = Cli::try_parse_from([
            "changelog",
            "get",
            "v0.0.1",
            "--changelog-file",
            "docs/CHANGELOG.md",
        ])
        .unwrap();
        assert_eq!(cli.changelog_file, PathBuf::from("docs/CHANGELOG.md"));
        assert!(matches!(cli.command, Commands::Get { version } if version == "v0.0.1"));
    }

    #[test]
    fn test_init_alias_and_branch() {
        let cli = Cli::try_parse_from(["changelog", "init", "--repo", "eighty4/changelog"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::New { repo, branch } if repo == "eighty4/changelog" && branch == "main"
        ));

        let cli = Cli::try_parse_from([
            "changelog", "new", "--repo", "eighty4/c2", "--branch", "trunk",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::New { branch, .. } if branch == "trunk"));
    }

    #[test]
    fn test_rollover_git_tag() {
        let cli = Cli::try_parse_from([
            "changelog",
            "--debug",
            "rollover",
            "v0.1.0",
            "--git-tag",
            "cli-v0.1.0",
        ])
        .unwrap();
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::Rollover { next_version, git_tag: Some(tag) }
                if next_version == "v0.1.0" && tag == "cli-v0.1.0"
        ));
    }

    #[test]
    fn test_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["changelog"]).is_err());
        assert!(Cli::try_parse_from(["changelog", "get"]).is_err());
        assert!(Cli::try_parse_from(["changelog", "new"]).is_err());
        assert!(Cli::try_parse_from(["changelog", "rollover"]).is_err());
        assert!(Cli::try_parse_from(["changelog", "release"]).is_err());
    }
}
