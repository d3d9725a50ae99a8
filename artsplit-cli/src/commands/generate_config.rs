//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Configuration template with every key at its default
pub const CONFIG_TEMPLATE: &str = r#"# artsplit configuration
#
# Every key is optional. Command-line flags take precedence.

[splitting]
# Character a delimiter line is made of
delimiter = "="

# Minimum number of delimiter characters; shorter runs are content
min_length = 5

# Take titles from wiki markup (''italic'', '''bold''', ''''bold italic'''')
# instead of the first word of an article
markup = false

[output]
# Directory for article files; must be empty when writing
directory = "output"

# Extension appended to every file name
extension = ".txt"

# Directory inside `directory` for repeated titles, named "title (N)"
duplicates_subdir = "dupes"
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        match &self.output {
            None => print!("{CONFIG_TEMPLATE}"),
            Some(path) => {
                fs::write(path, CONFIG_TEMPLATE)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                println!("✓ Configuration template generated successfully!");
                println!();
                println!("Next steps:");
                println!("1. Edit the configuration file");
                println!("2. Validate it:");
                println!("   artsplit validate -c {}", path.display());
                println!("3. Use it for splitting:");
                println!("   artsplit split -f input.txt --config {}", path.display());
            }
        }

        Ok(())
    }
}
