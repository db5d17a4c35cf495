//! CLI argument definitions using clap
//!
//! Commands:
//! - persona serve [--config <path>] [--host <host>] [--port <port>]
//! - persona check --schema <name> [file]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// persona - a strict, stateless person-record validation HTTP service
#[derive(Parser, Debug)]
#[command(name = "persona")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the persona HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overriding the configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding the configuration
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a JSON document against a named schema and exit
    Check {
        /// Schema to validate against
        #[arg(long, default_value = "person")]
        schema: String,

        /// Path to the JSON document (stdin if omitted)
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
