//! Driver error types. One enum per subsystem, `thiserror` only.

use std::path::PathBuf;

/// Errors from the configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors from file discovery.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("path does not exist: {0}")]
    MissingRoot(PathBuf),

    #[error("invalid include pattern '{pattern}': {message}")]
    BadPattern { pattern: String, message: String },
}

/// Errors from the Go front end.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to load Go grammar: {0}")]
    Language(String),

    #[error("failed to parse {path}")]
    Parse { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from fix application.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("failed to rewrite {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("replacement range {start}..{end} out of bounds for {path}")]
    InvalidRange {
        path: PathBuf,
        start: usize,
        end: usize,
    },
}
