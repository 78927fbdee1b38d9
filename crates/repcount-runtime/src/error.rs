//! Runtime errors

use std::io;
use std::path::PathBuf;

use repcount_core::RepCountError;
use thiserror::Error;

/// Errors raised while driving a session
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed landmark frame on line {line}: {source}")]
    MalformedFrame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode landmark frame: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Landmark on line {line} has {len} components (expected 2 to 4)")]
    BadLandmark { line: usize, len: usize },

    #[error(transparent)]
    Engine(#[from] RepCountError),

    #[error("No landmark files found in {0}")]
    NoInputs(PathBuf),

    #[error("Logging already initialized: {0}")]
    Telemetry(String),
}

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
