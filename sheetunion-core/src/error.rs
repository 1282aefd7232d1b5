//! Error types for reading sheets and writing generated statements

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while turning a sheet column into statements
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source file is missing, corrupt, or in an unsupported format
    #[error("Failed to read spreadsheet {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// The requested sheet is not part of the workbook
    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// The destination could not be created or overwritten
    #[error("Failed to write output file {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The session was asked to run before all inputs were valid
    #[error("Source file, sheet and a valid output file name are required")]
    SessionNotReady,
}

impl TransformError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        TransformError::SourceUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Reason an output file name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputNameError {
    #[error("Output file name is empty")]
    Empty,

    #[error("Output file name '{0}' needs an extension (e.g. name.sql)")]
    MissingExtension(String),

    #[error("Output file name '{name}' contains the illegal character {ch:?}")]
    IllegalCharacter { name: String, ch: char },
}
