use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaSorterError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to copy files: {count} files failed\n{0}", count = .0.len())]
    CopyFailed(CopyFailures),

    // Filesystem errors
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Metadata errors
    #[error("Exiftool error: {0}")]
    Exiftool(String),

    // Configuration errors
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}

/// Why a file's creation date could not be determined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("missing date tag {0}")]
    MissingTag(String),

    #[error("malformed date '{0}'")]
    Malformed(String),

    #[error("invalid calendar date '{0}'")]
    Invalid(String),
}

/// Details about files that failed to copy.
#[derive(Debug)]
pub struct CopyFailures {
    pub failures: Vec<CopyFailure>,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: std::io::Error,
}

impl std::fmt::Display for CopyFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "  {} -> {}: {}",
                failure.source.display(),
                failure.destination.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl CopyFailures {
    pub fn new() -> Self {
        Self { failures: Vec::new() }
    }

    pub fn add(&mut self, source: PathBuf, destination: PathBuf, error: std::io::Error) {
        self.failures.push(CopyFailure {
            source,
            destination,
            error,
        });
    }

    /// Move every failure of `other` into `self`.
    pub fn extend(&mut self, other: CopyFailures) {
        self.failures.extend(other.failures);
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

impl Default for CopyFailures {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for media_sorter operations.
pub type Result<T> = std::result::Result<T, MediaSorterError>;
