//! CLI command implementations
//!
//! `serve` boots the HTTP server; `check` is a one-shot validation of a
//! JSON document against a named schema, printing either the normalized
//! record or the violation report.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::records::ApiSchemas;

use super::args::{Cli, Command};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_document, write_json};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => serve(config, host, port),
        Command::Check { schema, file } => check(&schema, file.as_deref()),
    }
}

/// Loads a server configuration from a JSON file.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let raw = fs::read_to_string(path).map_err(|e| {
        CliError::new(
            CliErrorCode::ConfigError,
            format!("cannot read config '{}': {}", path.display(), e),
        )
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        CliError::new(
            CliErrorCode::ConfigError,
            format!("malformed config '{}': {}", path.display(), e),
        )
    })
}

/// `persona serve`: build schemas, bind, and serve until interrupted.
fn serve(config: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = match config {
        Some(path) => load_config(&path)?,
        None => HttpServerConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config)
        .map_err(|e| CliError::new(CliErrorCode::BadSpec, e.to_string()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::new(CliErrorCode::ServerError, e.to_string()))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::new(CliErrorCode::ServerError, e.to_string()))
}

/// `persona check`: one-shot document validation.
pub fn check(schema_name: &str, file: Option<&Path>) -> CliResult<()> {
    let schemas = ApiSchemas::build()
        .map_err(|e| CliError::new(CliErrorCode::BadSpec, e.to_string()))?;
    let schema = schemas.get(schema_name).ok_or_else(|| {
        CliError::new(
            CliErrorCode::UnknownSchema,
            format!(
                "unknown schema '{}', expected one of: {}",
                schema_name,
                ApiSchemas::names().join(", ")
            ),
        )
    })?;

    let document = read_document(file)?;

    match schema.validate(&document) {
        Ok(record) => {
            write_json(&json!({
                "schema": schema.name(),
                "valid": true,
                "record": record.to_json(),
            }))?;
            Ok(())
        }
        Err(failure) => {
            write_json(&json!({
                "schema": schema.name(),
                "valid": false,
                "violations": failure.report(),
            }))?;
            Err(CliError::new(
                CliErrorCode::DocumentRejected,
                format!(
                    "document failed validation with {} violation(s)",
                    failure.violations().len()
                ),
            ))
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
