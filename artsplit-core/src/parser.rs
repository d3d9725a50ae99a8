//! Line classification state machine
//!
//! The parser consumes lines in input order and returns a completed
//! [`Article`] whenever a delimiter line closes one. [`LineParser::finish`]
//! flushes the article still open at end of input.
//!
//! | State                  | Empty                | Delimiter             | Content                     |
//! |------------------------|----------------------|-----------------------|-----------------------------|
//! | AwaitingAfterDelimiter | LeadingEmpty         | stay                  | InContent, new article      |
//! | LeadingEmpty           | stay                 | AwaitingAfterDelimiter| InContent, new article      |
//! | InContent              | TrailingEmpty        | flush                 | append                      |
//! | TrailingEmpty          | count, append        | flush                 | InContent, reset count      |

use crate::article::Article;
use crate::config::SplitConfig;
use crate::error::Result;
use crate::line::{classify, LineKind};
use crate::title::TitleExtractor;

/// Parser state; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// Right after a delimiter line
    AwaitingAfterDelimiter,
    /// Skipping empty lines before an article
    #[default]
    LeadingEmpty,
    /// Inside an article, last line was content
    InContent,
    /// Inside an article, last line(s) were empty
    TrailingEmpty,
}

impl ParserState {
    /// Whether an article is currently being buffered
    pub fn in_article(self) -> bool {
        matches!(self, ParserState::InContent | ParserState::TrailingEmpty)
    }
}

/// Streaming article parser
#[derive(Debug)]
pub struct LineParser {
    config: SplitConfig,
    extractor: TitleExtractor,
    state: ParserState,
    title: String,
    lines: Vec<String>,
    trailing_empty: usize,
}

impl LineParser {
    /// Create a parser in the `LeadingEmpty` state
    pub fn new(config: &SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            extractor: TitleExtractor::new(config.title_mode)?,
            state: ParserState::default(),
            title: String::new(),
            lines: Vec::new(),
            trailing_empty: 0,
        })
    }

    /// Current state
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Consume one line, returning the article it completes, if any
    ///
    /// Fails only when the line starts an article and no title can be
    /// extracted from it.
    pub fn consume(&mut self, line: String) -> Result<Option<Article>> {
        let kind = classify(&line, &self.config);
        let previous = self.state;

        let flushed = match (self.state, kind) {
            (ParserState::AwaitingAfterDelimiter, LineKind::Empty) => {
                self.state = ParserState::LeadingEmpty;
                None
            }
            (ParserState::AwaitingAfterDelimiter, LineKind::Delimiter)
            | (ParserState::LeadingEmpty, LineKind::Empty) => None,
            (ParserState::AwaitingAfterDelimiter | ParserState::LeadingEmpty, LineKind::Content) => {
                self.start_article(line)?;
                None
            }
            (ParserState::LeadingEmpty, LineKind::Delimiter) => {
                self.state = ParserState::AwaitingAfterDelimiter;
                self.lines.clear();
                None
            }
            (ParserState::InContent, LineKind::Empty) => {
                self.state = ParserState::TrailingEmpty;
                self.trailing_empty = 1;
                self.lines.push(line);
                None
            }
            (ParserState::InContent | ParserState::TrailingEmpty, LineKind::Delimiter) => {
                self.state = ParserState::AwaitingAfterDelimiter;
                Some(self.take_article())
            }
            (ParserState::InContent, LineKind::Content) => {
                self.lines.push(line);
                None
            }
            (ParserState::TrailingEmpty, LineKind::Empty) => {
                self.trailing_empty += 1;
                self.lines.push(line);
                None
            }
            (ParserState::TrailingEmpty, LineKind::Content) => {
                self.state = ParserState::InContent;
                self.trailing_empty = 0;
                self.lines.push(line);
                None
            }
        };

        if previous != self.state {
            tracing::trace!(from = ?previous, to = ?self.state, ?kind, "parser transition");
        }

        Ok(flushed)
    }

    /// Flush the article left open at end of input
    ///
    /// Input that does not end with a delimiter still yields its last
    /// article. Consumes the parser so it cannot be called twice.
    pub fn finish(mut self) -> Option<Article> {
        if self.state.in_article() {
            Some(self.take_article())
        } else {
            None
        }
    }

    fn start_article(&mut self, line: String) -> Result<()> {
        self.title = self.extractor.extract(&line)?;
        self.state = ParserState::InContent;
        self.lines.push(line);
        Ok(())
    }

    fn take_article(&mut self) -> Article {
        let trailing_empty = std::mem::take(&mut self.trailing_empty);
        Article::new(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.lines),
            trailing_empty,
        )
    }
}
