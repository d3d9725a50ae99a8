//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Delimiter argument is not a single character
    InvalidDelimiter(String),
    /// Delimiter length below 1
    InvalidDelimiterLength(usize),
    /// Output directory already has content
    OutputDirNotEmpty(PathBuf),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidDelimiter(value) => {
                write!(f, "delimiter must be a single character, got {value:?}")
            }
            CliError::InvalidDelimiterLength(len) => {
                write!(f, "delimiter length must be 1 or greater, got {len}")
            }
            CliError::OutputDirNotEmpty(path) => write!(
                f,
                "Please make sure the output directory {} is empty",
                path.display()
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Parse a delimiter argument that must hold exactly one character
pub fn parse_delimiter(value: &str) -> Result<char, CliError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(CliError::InvalidDelimiter(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_delimiter_display() {
        let error = CliError::InvalidDelimiter("==".to_string());
        assert_eq!(
            error.to_string(),
            "delimiter must be a single character, got \"==\""
        );
    }

    #[test]
    fn test_output_dir_not_empty_display() {
        let error = CliError::OutputDirNotEmpty(PathBuf::from("output"));
        assert_eq!(
            error.to_string(),
            "Please make sure the output directory output is empty"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("=").unwrap(), '=');
        assert_eq!(parse_delimiter("─").unwrap(), '─');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("==").is_err());
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(CliError::InvalidDelimiterLength(0).into());
        assert!(failure
            .unwrap_err()
            .to_string()
            .contains("must be 1 or greater"));
    }
}
