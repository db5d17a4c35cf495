//! CLI module for persona
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server
//! - check: one-shot document validation against a named schema

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, load_config, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_document, write_json};
