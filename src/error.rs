//! Error types for the population engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by engine load/save operations.
///
/// Parse and I/O faults are always converted into these values; the engine
/// never panics on malformed input. Invalid arguments indicate a caller
/// contract violation and are signaled immediately.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse population document: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
