//! Output formatting and directory preparation

use anyhow::Result;
use artsplit_core::RunStatistics;

/// Trait for run summary formatters
pub trait SummaryFormatter {
    /// Write the summary for a finished run
    fn write_summary(&mut self, statistics: &RunStatistics) -> Result<()>;
}

pub mod directories;
pub mod json;
pub mod text;

pub use directories::prepare_output_dirs;
pub use json::JsonFormatter;
pub use text::TextFormatter;
