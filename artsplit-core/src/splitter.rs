//! Single forward pass composing the parser and the sink

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::parser::LineParser;
use crate::sink::{ArticleSink, SubmitOutcome};
use crate::stats::RunStatistics;
use crate::writer::ArticleWriter;
use std::io::BufRead;

/// Final state of a run
#[derive(Debug)]
pub struct SplitOutput<W> {
    /// Run statistics
    pub statistics: RunStatistics,
    /// Writer backend, e.g. to inspect a [`MemoryWriter`](crate::MemoryWriter)
    pub writer: W,
}

/// Drives lines through a [`LineParser`] into an [`ArticleSink`]
///
/// Each flushed article is fully processed before the next line is read.
/// The first error stops the run.
pub struct Splitter<W: ArticleWriter> {
    parser: LineParser,
    sink: ArticleSink<W>,
}

impl<W: ArticleWriter> Splitter<W> {
    /// Create a splitter for one run
    pub fn new(config: &SplitConfig, sink: ArticleSink<W>) -> Result<Self> {
        Ok(Self {
            parser: LineParser::new(config)?,
            sink,
        })
    }

    /// Feed one line; returns the outcome of the article it completed
    pub fn push_line(&mut self, line: String) -> Result<Option<SubmitOutcome>> {
        match self.parser.consume(line)? {
            Some(article) => self.sink.submit(article).map(Some),
            None => Ok(None),
        }
    }

    /// Flush the last article and end the run
    pub fn finish(self) -> Result<(Option<SubmitOutcome>, SplitOutput<W>)> {
        let Self { parser, mut sink } = self;
        let last = parser.finish().map(|article| sink.submit(article)).transpose()?;
        let (statistics, writer) = sink.into_parts();
        Ok((last, SplitOutput { statistics, writer }))
    }

    /// Split an iterator of lines
    pub fn split_lines<I, S>(mut self, lines: I) -> Result<SplitOutput<W>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push_line(line.into())?;
        }
        self.finish().map(|(_, output)| output)
    }

    /// Split everything readable from `reader`, calling `on_article` after each article
    ///
    /// Lines end at `\n` or `\r\n`. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD rather than failing the run.
    pub fn split_reader<R, F>(mut self, mut reader: R, mut on_article: F) -> Result<SplitOutput<W>>
    where
        R: BufRead,
        F: FnMut(&SubmitOutcome),
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(SplitError::Input)? == 0 {
                break;
            }
            if let Some(outcome) = self.push_line(decode_line(&buf))? {
                on_article(&outcome);
            }
        }

        let (last, output) = self.finish()?;
        if let Some(outcome) = last {
            on_article(&outcome);
        }
        Ok(output)
    }
}

fn decode_line(raw: &[u8]) -> String {
    let line = match raw.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => raw,
    };
    String::from_utf8_lossy(line).into_owned()
}
