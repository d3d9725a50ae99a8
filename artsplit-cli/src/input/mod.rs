//! Input handling module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where input lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A named file
    File(PathBuf),
}

impl InputSource {
    /// Standard input when `path` is `None` or `-`
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Human-readable name for messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Error opening file {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
