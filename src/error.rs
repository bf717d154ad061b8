// error.rs - Fatal error taxonomy

use std::path::{Path, PathBuf};

/// Errors that abort a run.
///
/// Per-row problems in the alignment report are not errors; they are
/// collected as [`crate::data::RowSkipped`] and the run continues.
#[derive(thiserror::Error, Debug)]
pub enum CircosError {
    /// Input path missing or unreadable
    #[error("cannot read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Annotation record unreadable or empty
    #[error("cannot parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Output directory or file not writable
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid arguments or configuration file
    #[error("{0}")]
    Config(String),
}

impl CircosError {
    pub fn file(path: &Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CircosError>;
