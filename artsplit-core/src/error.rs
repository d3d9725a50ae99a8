//! Error types for splitting runs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a splitting run
#[derive(Error, Debug)]
pub enum SplitError {
    /// Markup mode found no emphasised span to use as the title
    #[error("no title with wiki markup found in line: {line}")]
    NoTitleMarkup {
        /// The line that should have carried the title
        line: String,
    },

    /// Plain mode found no word to use as the title
    #[error("no title word found in line: {line:?}")]
    NoTitleWord {
        /// The line that should have carried the title
        line: String,
    },

    /// Configuration rejected before the run started
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A title pattern failed to compile
    #[error("invalid title pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading from the input stream failed
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// An output artifact could not be created
    #[error("error opening file {} for writing: {source}", .path.display())]
    Open {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing or flushing an output artifact failed
    #[error("error writing to file {}: {source}", .path.display())]
    Write {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Printing a title to the report stream failed
    #[error("failed to report title: {0}")]
    Report(#[source] io::Error),
}

/// Result type for splitting operations
pub type Result<T> = std::result::Result<T, SplitError>;
