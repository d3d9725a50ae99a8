//! Plain text summary formatter

use super::SummaryFormatter;
use anyhow::Result;
use artsplit_core::RunStatistics;
use std::io::{self, Write};

/// Plain text formatter - one counter per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummaryFormatter for TextFormatter<W> {
    fn write_summary(&mut self, statistics: &RunStatistics) -> Result<()> {
        writeln!(self.writer, "{statistics}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_summary() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.write_summary(&RunStatistics::new()).unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            text,
            "Number of files: 0\n\
             Number of lines: 0\n\
             Average number of lines: 0\n\
             Number of titles that appeared more than once: 0\n\
             Number of duplicate files: 0\n"
        );
    }
}
