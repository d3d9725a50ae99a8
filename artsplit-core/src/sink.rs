//! Article sink: duplicate-title resolution, statistics and emission

use crate::article::Article;
use crate::error::{Result, SplitError};
use crate::layout::ArticleTarget;
use crate::stats::RunStatistics;
use crate::writer::ArticleWriter;
use std::collections::HashMap;
use std::io::{self, Write};

/// Occurrence counts per title for one run
#[derive(Debug, Default)]
pub struct TitleRegistry {
    counts: HashMap<String, usize>,
}

impl TitleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `title` and return its count
    pub fn record(&mut self, title: &str) -> usize {
        let count = self.counts.entry(title.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

/// What the sink does besides bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkOptions {
    /// Emit article content through the writer
    pub write_articles: bool,
    /// Print each title to the report stream
    pub print_titles: bool,
}

impl SinkOptions {
    /// Statistics only
    pub fn count_only() -> Self {
        Self::default()
    }

    /// Write articles, print nothing
    pub fn write_only() -> Self {
        Self {
            write_articles: true,
            print_titles: false,
        }
    }
}

/// Result of submitting one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Article title
    pub title: String,
    /// Occurrence number of the title, starting at 1
    pub occurrence: usize,
    /// Lines counted (and written) for the article
    pub content_lines: usize,
}

impl SubmitOutcome {
    /// Identifier of the article's artifact
    pub fn target(&self) -> ArticleTarget<'_> {
        ArticleTarget::new(&self.title, self.occurrence)
    }
}

/// Receives completed articles in flush order
pub struct ArticleSink<W: ArticleWriter> {
    writer: W,
    options: SinkOptions,
    report: Box<dyn Write>,
    registry: TitleRegistry,
    statistics: RunStatistics,
}

impl<W: ArticleWriter> ArticleSink<W> {
    /// Create a sink that prints titles to stdout
    pub fn new(writer: W, options: SinkOptions) -> Self {
        Self {
            writer,
            options,
            report: Box::new(io::stdout()),
            registry: TitleRegistry::new(),
            statistics: RunStatistics::new(),
        }
    }

    /// Send printed titles to `report` instead of stdout
    pub fn with_report(mut self, report: impl Write + 'static) -> Self {
        self.report = Box::new(report);
        self
    }

    /// Statistics so far
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Writer backend
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Finish the run, returning the final statistics and the writer
    pub fn into_parts(self) -> (RunStatistics, W) {
        (self.statistics, self.writer)
    }

    /// Account for, and optionally emit, one completed article
    ///
    /// Bookkeeping happens before any I/O, so a failing writer still leaves
    /// the article counted.
    pub fn submit(&mut self, article: Article) -> Result<SubmitOutcome> {
        let occurrence = self.registry.record(&article.title);
        let content_lines = article.content_line_count();
        self.statistics.record(content_lines, occurrence);

        let target = ArticleTarget::new(&article.title, occurrence);
        tracing::debug!(
            title = %article.title,
            occurrence,
            content_lines,
            duplicate = target.is_duplicate(),
            "article flushed"
        );

        if self.options.write_articles {
            self.emit(&target, article.content())?;
        }

        if self.options.print_titles {
            writeln!(self.report, "{}", article.title).map_err(SplitError::Report)?;
        }

        Ok(SubmitOutcome {
            title: article.title,
            occurrence,
            content_lines,
        })
    }

    fn emit(&mut self, target: &ArticleTarget<'_>, content: &[String]) -> Result<()> {
        self.writer.open(target)?;

        let written = content
            .iter()
            .try_for_each(|line| self.writer.write_line(line));

        match written {
            Ok(()) => self.writer.close(),
            Err(err) => {
                // Release the handle; the write error is the one reported.
                if let Err(close_err) = self.writer.close() {
                    tracing::warn!(error = %close_err, "closing after failed write also failed");
                }
                Err(err)
            }
        }
    }
}

impl<W: ArticleWriter + std::fmt::Debug> std::fmt::Debug for ArticleSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleSink")
            .field("writer", &self.writer)
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}
