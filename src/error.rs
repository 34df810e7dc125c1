use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error type covering the failures that can occur while reading stats files
/// and emitting rows.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Raised when the command line is missing a required argument.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Raised when a stats file is missing or cannot be read.
    #[error("failed to read stats file {}: {source}", path.display())]
    StatsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO failures while writing rows.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// The positional argument that was left off the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Raised when no arguments were given at all.
    #[error("PREFIX not specified.")]
    MissingPrefix,

    /// Raised when only PREFIX was given.
    #[error("STAT not specified.")]
    MissingStat,

    /// Raised when PREFIX and STAT were given without any COUNT.
    #[error("No COUNTs specified.")]
    MissingCounts,
}

impl UsageError {
    /// Fixed usage line printed after every usage diagnostic.
    pub const USAGE: &'static str = "USAGE: extract PREFIX STAT COUNT...";
}
