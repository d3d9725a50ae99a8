//! Configuration for the line parser

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};

/// Default delimiter character
pub const DEFAULT_DELIMITER: char = '=';

/// Default minimum delimiter run length
pub const DEFAULT_MIN_DELIMITER_LEN: usize = 5;

/// How the title of a new article is located in its first line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleMode {
    /// First whitespace-delimited word of the line
    #[default]
    FirstWord,
    /// Text inside the earliest wiki emphasis span ('' / ''' / '''')
    Markup,
}

/// Immutable per-run parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Character a delimiter line consists of
    pub delimiter: char,
    /// Minimum number of delimiter characters (at least 1)
    pub min_delimiter_len: usize,
    /// Title extraction mode
    pub title_mode: TitleMode,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            min_delimiter_len: DEFAULT_MIN_DELIMITER_LEN,
            title_mode: TitleMode::FirstWord,
        }
    }
}

impl SplitConfig {
    /// Create a builder
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::new()
    }

    /// Check the invariants the parser relies on
    pub fn validate(&self) -> Result<()> {
        if self.min_delimiter_len == 0 {
            return Err(SplitError::InvalidConfig(
                "delimiter length must be 1 or greater".to_string(),
            ));
        }
        if self.delimiter.is_whitespace() {
            tracing::warn!(
                delimiter = ?self.delimiter,
                "whitespace delimiter never matches; input will not be split"
            );
        }
        Ok(())
    }
}

/// Builder for [`SplitConfig`]
#[derive(Debug, Default)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
}

impl SplitConfigBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter character
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the minimum delimiter run length
    pub fn min_delimiter_len(mut self, len: usize) -> Self {
        self.config.min_delimiter_len = len;
        self
    }

    /// Set the title extraction mode
    pub fn title_mode(mut self, mode: TitleMode) -> Self {
        self.config.title_mode = mode;
        self
    }

    /// Shorthand for `title_mode(TitleMode::Markup)` when `enabled`
    pub fn markup(self, enabled: bool) -> Self {
        if enabled {
            self.title_mode(TitleMode::Markup)
        } else {
            self.title_mode(TitleMode::FirstWord)
        }
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SplitConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.delimiter, '=');
        assert_eq!(config.min_delimiter_len, 5);
        assert_eq!(config.title_mode, TitleMode::FirstWord);
    }

    #[test]
    fn test_builder() {
        let config = SplitConfig::builder()
            .delimiter('-')
            .min_delimiter_len(10)
            .markup(true)
            .build()
            .unwrap();

        assert_eq!(config.delimiter, '-');
        assert_eq!(config.min_delimiter_len, 10);
        assert_eq!(config.title_mode, TitleMode::Markup);
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = SplitConfig::builder().min_delimiter_len(0).build();
        assert!(matches!(result, Err(SplitError::InvalidConfig(_))));
    }

    #[test]
    fn test_whitespace_delimiter_accepted() {
        let config = SplitConfig::builder().delimiter(' ').build().unwrap();
        assert_eq!(config.delimiter, ' ');
    }
}
