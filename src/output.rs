//! JSON output of generated probes.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing generated probes.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The value could not be serialised.
    #[error("failed to serialise output")]
    Serialise(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write output file: {path}")]
    FileWrite {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Standard output could not be written.
    #[error("failed to write to stdout")]
    Stdout(#[source] std::io::Error),
}

/// Serialises `value` as JSON.
///
/// # Errors
///
/// Returns [`OutputError::Serialise`] if serialisation fails.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Writes `value` as JSON to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error if serialisation or writing fails.
pub fn write_json<T: Serialize>(
    value: &T,
    path: Option<&Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    let json = to_json(value, pretty)?;

    match path {
        Some(path) => {
            std::fs::write(path, json + "\n").map_err(|source| OutputError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "Wrote probe file");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(OutputError::Stdout)?;
        }
    }

    Ok(())
}
