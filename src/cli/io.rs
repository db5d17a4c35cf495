//! CLI I/O helpers: JSON documents in, JSON reports out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliErrorCode, CliResult};

/// Reads a JSON document from a file, or from stdin when no path is given.
pub fn read_document(path: Option<&Path>) -> CliResult<Value> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::new(
                CliErrorCode::IoError,
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| CliError::new(CliErrorCode::IoError, format!("invalid JSON: {}", e)))
}

/// Writes a JSON value to stdout, pretty-printed, one trailing newline.
pub fn write_json(value: &Value) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::new(CliErrorCode::IoError, e.to_string()))?;
    let mut stdout = io::stdout();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
