mod check;
mod cli;
mod error;
mod get;
mod new;
mod rollover;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::{CliError, Result};
use std::process;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("changelog")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn report(err: &CliError) {
    ui::error_message(&err.user_message());
    if let Some(defects) = err.changelog_error().and_then(|e| e.defects()) {
        ui::defect_report(defects);
    } else if err.is_usage_error() {
        ui::info_message("changelog -h for more details");
    }
}

fn run(cli: Cli) -> Result<bool> {
    initialize_logger(cli.debug)?;

    match cli.command {
        Commands::Check => check::execute(&cli.changelog_file),
        Commands::Get { version } => get::execute(&cli.changelog_file, &version).map(|()| true),
        Commands::New { repo, branch } => new::execute(&repo, &branch).map(|()| true),
        Commands::Rollover {
            next_version,
            git_tag,
        } => rollover::execute(&cli.changelog_file, &next_version, git_tag.as_deref())
            .map(|()| true),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}
