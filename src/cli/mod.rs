//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod inspect;

pub use args::{CheckArgs, Cli, Commands, InspectArgs};
