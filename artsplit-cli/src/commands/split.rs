//! Split command implementation

use crate::config::{CliConfig, Overrides};
use crate::input::InputSource;
use crate::output::{prepare_output_dirs, JsonFormatter, SummaryFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use artsplit_core::{ArticleSink, FsWriter, SinkOptions, Splitter};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Delimiter character
    #[arg(short = 'c', long = "char", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Minimum number of delimiter characters
    #[arg(short = 'l', long = "len", value_name = "N")]
    pub min_length: Option<usize>,

    /// Detect titles with wiki markup
    #[arg(long, visible_alias = "wiki")]
    pub markup: bool,

    /// Actually write output files
    #[arg(short, long)]
    pub write: bool,

    /// Print article titles
    #[arg(short, long)]
    pub print: bool,

    /// Print run statistics (default when nothing else is requested)
    #[arg(short, long)]
    pub stats: bool,

    /// Output directory
    #[arg(short, long = "outdir", value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Output file extension
    #[arg(short = 'e', long = "outext", value_name = "EXT")]
    pub outext: Option<String>,

    /// Statistics format
    #[arg(long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "ARTSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported statistics formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// One counter per line
    Text,
    /// A single JSON object
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_optional(self.config.as_deref())?;
        let overrides = self.overrides();
        let split_config = config.split_config(&overrides)?;
        let layout = config.output_layout(&overrides);
        let options = self.sink_options();
        let show_stats = self.show_stats();

        if options.write_articles {
            prepare_output_dirs(&layout)?;
        }

        let source = InputSource::from_arg(self.file.as_deref());
        let reader = source.open()?;
        log::info!("Reading from {}", source.display_name());

        let sink = ArticleSink::new(FsWriter::new(layout), options);
        let splitter = Splitter::new(&split_config, sink)?;

        let mut progress = ProgressReporter::new(self.quiet || !options.write_articles);
        progress.start();

        let result = splitter.split_reader(reader, |outcome| {
            log::debug!(
                "Article {:?} ({} lines, occurrence {})",
                outcome.title,
                outcome.content_lines,
                outcome.occurrence
            );
            progress.article_written(&outcome.target().file_stem());
        });
        progress.finish();

        let output =
            result.with_context(|| format!("Error splitting {}", source.display_name()))?;
        log::info!(
            "Finished: {} articles",
            output.statistics.articles_written()
        );

        if show_stats {
            match self.format {
                SummaryFormat::Text => TextFormatter::stdout().write_summary(&output.statistics)?,
                SummaryFormat::Json => JsonFormatter::stdout().write_summary(&output.statistics)?,
            }
        }

        Ok(())
    }

    /// Statistics are shown when asked for, or when nothing else was
    pub fn show_stats(&self) -> bool {
        self.stats || (!self.write && !self.print)
    }

    /// Sink behaviour selected by the flags
    pub fn sink_options(&self) -> SinkOptions {
        SinkOptions {
            write_articles: self.write,
            print_titles: self.print,
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            delimiter: self.delimiter.clone(),
            min_length: self.min_length,
            markup: self.markup,
            directory: self.outdir.clone(),
            extension: self.outext.clone(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SplitArgs {
        SplitArgs {
            file: None,
            delimiter: None,
            min_length: None,
            markup: false,
            write: false,
            print: false,
            stats: false,
            outdir: None,
            outext: None,
            format: SummaryFormat::Text,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_stats_implied_without_actions() {
        assert!(args().show_stats());

        let printing = SplitArgs {
            print: true,
            ..args()
        };
        assert!(!printing.show_stats());

        let both = SplitArgs {
            write: true,
            stats: true,
            ..args()
        };
        assert!(both.show_stats());
    }

    #[test]
    fn test_sink_options() {
        let writing = SplitArgs {
            write: true,
            ..args()
        };
        assert_eq!(writing.sink_options(), SinkOptions::write_only());
        assert_eq!(args().sink_options(), SinkOptions::count_only());
    }

    #[test]
    fn test_overrides_carry_flags() {
        let custom = SplitArgs {
            delimiter: Some("-".to_string()),
            min_length: Some(3),
            markup: true,
            ..args()
        };
        let config = CliConfig::default().split_config(&custom.overrides()).unwrap();
        assert_eq!(config.delimiter, '-');
        assert_eq!(config.min_delimiter_len, 3);
    }
}
