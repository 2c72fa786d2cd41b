//! Error types for configuration loading and validation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading or parsing a configuration.
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// I/O or filesystem read error.
    #[error("{message}")]
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    /// JSON parse error with a concrete line/column location.
    #[error("config parse error at line {line}, column {col}: {message}")]
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        col: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly message including the path when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse {
                path,
                line,
                col,
                message,
            } => match path {
                Some(p) => format!(
                    "Config parse error at {}:{}:{}\n{}",
                    p.display(),
                    line,
                    col,
                    message
                ),
                None => format!(
                    "Config parse error at line {}, column {}\n{}",
                    line, col, message
                ),
            },
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_deref(),
        }
    }
}
