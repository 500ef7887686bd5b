//! Errors for file and tree conversion

use std::io;
use std::path::PathBuf;

use appiumize_core::InvalidRuleError;
use thiserror::Error;

/// Errors that stop a conversion job before or while it produces output
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Input path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Output {} lies inside input {}", .output.display(), .input.display())]
    OutputInsideInput { input: PathBuf, output: PathBuf },

    #[error("Cannot derive an output name from {}", .0.display())]
    NoFolderName(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    InvalidRule(#[from] InvalidRuleError),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
