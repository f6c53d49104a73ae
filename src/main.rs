//! dashcfg - check and normalize a start-page dashboard's `conf.yml`.

mod cli;
mod config;
mod logger;
mod page;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::error_handler(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check { args } => cli::check::run_check(cli, args),
        Commands::Inspect { args } => cli::inspect::run_inspect(cli, args),
        Commands::Schema => print_schema(cli),
    }
}

/// Print the active schema as JSON.
fn print_schema(cli: &Cli) -> Result<()> {
    let schema = cli::common::load_schema(cli)?;
    println!("{}", serde_json::to_string_pretty(schema.as_value())?);
    Ok(())
}
