//! artsplit CLI library
//!
//! This library provides the command-line interface for splitting a
//! delimited text stream into article files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
