//! JSON summary formatter

use super::SummaryFormatter;
use anyhow::Result;
use artsplit_core::RunStatistics;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// JSON formatter - outputs the summary as one object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryData {
    /// Articles written
    pub articles: usize,
    /// Content lines over all articles
    pub lines: usize,
    /// Integer average of lines per article
    pub average_lines: usize,
    /// Titles that appeared more than once
    pub duplicate_titles: usize,
    /// Articles routed to the duplicates directory
    pub duplicate_files: usize,
}

impl From<&RunStatistics> for SummaryData {
    fn from(stats: &RunStatistics) -> Self {
        Self {
            articles: stats.articles_written(),
            lines: stats.total_content_lines(),
            average_lines: stats.average_lines(),
            duplicate_titles: stats.titles_with_duplicates(),
            duplicate_files: stats.duplicate_file_count(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummaryFormatter for JsonFormatter<W> {
    fn write_summary(&mut self, statistics: &RunStatistics) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &SummaryData::from(statistics))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_summary() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.write_summary(&RunStatistics::new()).unwrap();

        let data: SummaryData = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(
            data,
            SummaryData {
                articles: 0,
                lines: 0,
                average_lines: 0,
                duplicate_titles: 0,
                duplicate_files: 0,
            }
        );
    }
}
