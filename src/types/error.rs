//! Error types for the disease parameter converter
//!
//! Every failure in a run is fatal, so a single error enum covers the whole
//! pipeline. Each variant carries enough context (path, line, column) to
//! produce a clean one-line message for the CLI.
//!
//! # Error Categories
//!
//! - **Output guard**: the output exists and overwriting was not requested
//! - **File I/O Errors**: file not found, permission denied, disk full, etc.
//! - **Format Errors**: unequal field counts, unparseable numbers, bad headers
//! - **Missing Columns**: a required input column is absent

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The output path already exists and `--force` was not given
    ///
    /// Nothing is written in this case; the existing file is left untouched.
    #[error("Output already exists, use -f to force overwriting: {}", path.display())]
    OutputExists {
        /// The output path that already exists
        path: PathBuf,
    },

    /// A file-system operation failed
    ///
    /// Covers open, read and write failures on either file.
    #[error("File system error: {source} when operating on {}", path.display())]
    Io {
        /// The path being operated on
        path: PathBuf,
        /// The underlying OS error
        #[source]
        source: io::Error,
    },

    /// The input could not be interpreted as a numeric table
    #[error("Format error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Format {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// A column the transform needs is not present in the input header
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },
}

impl ConvertError {
    /// Create an OutputExists error
    pub fn output_exists(path: &Path) -> Self {
        ConvertError::OutputExists {
            path: path.to_path_buf(),
        }
    }

    /// Create an Io error for the given path
    pub fn io(path: &Path, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a Format error
    pub fn format(line: Option<u64>, message: impl Into<String>) -> Self {
        ConvertError::Format {
            line,
            message: message.into(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        ConvertError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Classify a csv error raised while touching `path`
    ///
    /// I/O failures keep the OS error and the path; everything else
    /// (UTF-8, unequal lengths, ...) becomes a Format error with the
    /// line number csv reports.
    pub fn from_csv(path: &Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => ConvertError::io(path, source),
            _ => ConvertError::format(line, message),
        }
    }
}
