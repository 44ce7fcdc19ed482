use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by shapes, the color codec and scene persistence
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A required constructor field was missing or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color outside the supported palette
    #[error("Unsupported color: {0}")]
    UnsupportedColor(String),

    /// Reading or writing a scene file failed
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted line could not be parsed
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl ShapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for shape and scene operations
pub type ShapeResult<T> = Result<T, ShapeError>;
