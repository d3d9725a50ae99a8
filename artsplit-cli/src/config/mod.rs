//! Configuration file support
//!
//! Every key is optional; command-line flags override file values, which
//! override the built-in defaults.

use crate::error::{parse_delimiter, CliError};
use anyhow::{Context, Result};
use artsplit_core::config::{DEFAULT_DELIMITER, DEFAULT_MIN_DELIMITER_LEN};
use artsplit_core::layout::DUPLICATES_DIR_NAME;
use artsplit_core::{OutputLayout, SplitConfig, TitleMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default output file extension
pub const DEFAULT_EXTENSION: &str = ".txt";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Line parsing configuration
    #[serde(default)]
    pub splitting: SplittingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parsing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SplittingConfig {
    /// Delimiter character, as a one-character string
    pub delimiter: Option<String>,

    /// Minimum delimiter run length
    pub min_length: Option<usize>,

    /// Detect titles with wiki markup
    pub markup: Option<bool>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory
    pub directory: Option<PathBuf>,

    /// Output file extension
    pub extension: Option<String>,

    /// Name of the duplicates directory inside the output directory
    pub duplicates_subdir: Option<String>,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// `--char`
    pub delimiter: Option<String>,
    /// `--len`
    pub min_length: Option<usize>,
    /// `--markup`
    pub markup: bool,
    /// `--outdir`
    pub directory: Option<PathBuf>,
    /// `--outext`
    pub extension: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Effective parser configuration
    pub fn split_config(&self, overrides: &Overrides) -> Result<SplitConfig> {
        let delimiter = match overrides
            .delimiter
            .as_deref()
            .or(self.splitting.delimiter.as_deref())
        {
            Some(value) => parse_delimiter(value)?,
            None => DEFAULT_DELIMITER,
        };

        let min_length = overrides
            .min_length
            .or(self.splitting.min_length)
            .unwrap_or(DEFAULT_MIN_DELIMITER_LEN);
        if min_length == 0 {
            return Err(CliError::InvalidDelimiterLength(min_length).into());
        }

        let title_mode = if overrides.markup || self.splitting.markup.unwrap_or(false) {
            TitleMode::Markup
        } else {
            TitleMode::FirstWord
        };

        let config = SplitConfig::builder()
            .delimiter(delimiter)
            .min_delimiter_len(min_length)
            .title_mode(title_mode)
            .build()?;
        Ok(config)
    }

    /// Effective output layout
    pub fn output_layout(&self, overrides: &Overrides) -> OutputLayout {
        let directory = overrides
            .directory
            .clone()
            .or_else(|| self.output.directory.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let extension = overrides
            .extension
            .clone()
            .or_else(|| self.output.extension.clone())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let duplicates = self
            .output
            .duplicates_subdir
            .as_deref()
            .unwrap_or(DUPLICATES_DIR_NAME);

        let duplicates_dir = directory.join(duplicates);
        OutputLayout::new(directory, extension).with_duplicates_dir(duplicates_dir)
    }
}
