//! Run-wide counters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate statistics for one splitting run
///
/// Every counter only grows, and each is updated once per article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    articles_written: usize,
    total_content_lines: usize,
    titles_with_duplicates: usize,
    duplicate_file_count: usize,
}

impl RunStatistics {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one article with `content_lines` lines and occurrence `occurrence`
    pub(crate) fn record(&mut self, content_lines: usize, occurrence: usize) {
        self.articles_written += 1;
        self.total_content_lines += content_lines;
        if occurrence == 2 {
            self.titles_with_duplicates += 1;
        }
        if occurrence > 1 {
            self.duplicate_file_count += 1;
        }
    }

    /// Number of articles handed to the sink
    pub fn articles_written(&self) -> usize {
        self.articles_written
    }

    /// Sum of content lines over all articles
    pub fn total_content_lines(&self) -> usize {
        self.total_content_lines
    }

    /// Titles seen at least twice
    pub fn titles_with_duplicates(&self) -> usize {
        self.titles_with_duplicates
    }

    /// Articles that were not the first with their title
    pub fn duplicate_file_count(&self) -> usize {
        self.duplicate_file_count
    }

    /// Integer average of content lines per article, 0 for an empty run
    pub fn average_lines(&self) -> usize {
        self.total_content_lines
            .checked_div(self.articles_written)
            .unwrap_or(0)
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of files: {}", self.articles_written)?;
        writeln!(f, "Number of lines: {}", self.total_content_lines)?;
        writeln!(f, "Average number of lines: {}", self.average_lines())?;
        writeln!(
            f,
            "Number of titles that appeared more than once: {}",
            self.titles_with_duplicates
        )?;
        write!(f, "Number of duplicate files: {}", self.duplicate_file_count)
    }
}
