//! Error types for rost-table.
//!
//! The data-table engine itself never fails: bad configuration degrades to
//! "feature disabled" and empty data renders a placeholder. Everything that
//! touches the outside world (loading rows, splitting the registry, reading
//! config, driving the terminal) reports failures through the `thiserror`
//! enums below, which compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`SourceError`] - Loading row data from a file or stdin
//!   - [`RegistryError`] - Reading the registry manifest and writing item files
//!   - [`ConfigError`](crate::config::ConfigError) - Config file loading
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup
//!   - [`TuiError`](crate::view::TuiError) - Terminal I/O

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert into `AppError` via `From`, so the
/// binary can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Row data could not be loaded.
    #[error("Failed to load rows: {0}")]
    Source(#[from] SourceError),

    /// Registry splitting failed.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: the terminal is restored and the error is written to stderr.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when loading table rows.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The specified data file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use rost_table::model::SourceError;
    ///
    /// let err = SourceError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON in {origin}: {message}")]
    InvalidJson {
        /// File path or `<stdin>`.
        origin: String,
        /// Parser message, including line and column.
        message: String,
    },

    /// The JSON is valid but not an array of objects.
    #[error("Expected an array of objects in {origin}, found {found}")]
    NotAnArrayOfObjects {
        /// File path or `<stdin>`.
        origin: String,
        /// Description of what was found instead.
        found: String,
    },

    /// Stdin is a terminal and no file was given.
    #[error("No input source: provide a file path or pipe JSON to stdin")]
    NoInput,

    /// Generic I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when splitting a registry manifest into item files.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The manifest could not be read.
    #[error("Failed to read registry manifest at {path}: {source}")]
    ReadManifest {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or does not have an `items` array.
    #[error("Invalid registry manifest at {path}: {message}")]
    InvalidManifest {
        /// Manifest path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// An item has a name that cannot be used as a file name.
    #[error("Registry item #{index} has an invalid name {name:?}: {reason}")]
    InvalidItemName {
        /// Zero-based position in `items`.
        index: usize,
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An item file could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteItem {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
