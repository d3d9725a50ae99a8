//! Validate command implementation

use crate::config::{CliConfig, Overrides};
use anyhow::Result;
use artsplit_core::TitleMode;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|config| {
            let split = config.split_config(&Overrides::default())?;
            let layout = config.output_layout(&Overrides::default());
            Ok((split, layout))
        });

        match checked {
            Ok((split, layout)) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Delimiter: {:?} x {} or more",
                    split.delimiter, split.min_delimiter_len
                );
                println!(
                    "  Titles: {}",
                    match split.title_mode {
                        TitleMode::FirstWord => "first word",
                        TitleMode::Markup => "wiki markup",
                    }
                );
                println!("  Output directory: {}", layout.output_dir.display());
                println!("  Duplicates directory: {}", layout.duplicates_dir.display());
                println!("  Extension: {:?}", layout.extension);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
