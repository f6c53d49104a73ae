//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Dashboard configuration checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: conf.yml, conf.yaml or conf.json, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<String>,

    /// JSON schema to validate against instead of the built-in one
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub schema: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config against the schema
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Show the values the dashboard derives from the config
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },

    /// Print the active schema
    Schema,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Print `{ "valid": ..., "violations": [...] }` to stdout
    #[arg(short, long)]
    pub json: bool,

    /// Report violations as warnings and exit successfully
    #[arg(short, long)]
    pub tolerant: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Inspect command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Route context that page slugs are built under
    #[arg(long, default_value = "home")]
    pub context: String,

    /// Print the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the chosen subcommand asked for `--verbose`.
    pub const fn verbose(&self) -> bool {
        match &self.command {
            Commands::Check { args } => args.verbose,
            Commands::Inspect { args } => args.verbose,
            Commands::Schema => false,
        }
    }
}
