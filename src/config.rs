//! Run configuration
//!
//! Resolved from the command line by [`crate::cli::CliArgs::to_run_config`].

use crate::types::ConvertError;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// How the output file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Create the file; fail if it already exists
    #[default]
    CreateExclusive,
    /// Create the file or truncate an existing one
    Truncate,
}

impl OpenMode {
    /// Resolve the open mode from the `--force` flag
    pub fn from_force(force: bool) -> Self {
        if force {
            OpenMode::Truncate
        } else {
            OpenMode::CreateExclusive
        }
    }

    /// Open `path` for writing in this mode
    ///
    /// # Errors
    ///
    /// - `ConvertError::OutputExists` if the mode is `CreateExclusive` and the
    ///   path already exists
    /// - `ConvertError::Io` for any other failure
    pub fn open(self, path: &Path) -> Result<File, ConvertError> {
        let mut options = OpenOptions::new();
        options.write(true);
        match self {
            OpenMode::CreateExclusive => options.create_new(true),
            OpenMode::Truncate => options.create(true).truncate(true),
        };

        options.open(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists if self == OpenMode::CreateExclusive => {
                ConvertError::output_exists(path)
            }
            _ => ConvertError::io(path, e),
        })
    }
}

/// Everything a single conversion run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Epidemiology CSV to read
    pub input: PathBuf,
    /// Disease CSV to write
    pub output: PathBuf,
    /// How to open the output
    pub open_mode: OpenMode,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, open_mode: OpenMode) -> Self {
        RunConfig {
            input: input.into(),
            output: output.into(),
            open_mode,
        }
    }
}
