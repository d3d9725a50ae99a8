//! Split a line-oriented text stream into titled articles
//!
//! Input lines are classified one at a time by a [`LineParser`]. Whenever a
//! delimiter line (or the end of input) closes an article, the parser hands
//! the completed [`Article`] over to an [`ArticleSink`], which resolves
//! duplicate titles, keeps [`RunStatistics`] and drives an [`ArticleWriter`].
//!
//! # Example
//!
//! ```rust
//! use artsplit_core::{ArticleSink, MemoryWriter, OutputLayout, SinkOptions, SplitConfig, Splitter};
//!
//! let layout = OutputLayout::new("output", ".txt");
//! let sink = ArticleSink::new(MemoryWriter::new(layout), SinkOptions::write_only());
//! let splitter = Splitter::new(&SplitConfig::default(), sink).unwrap();
//!
//! let input = "foo foo\n123\n=====\nfoo foo\n456\n";
//! let output = splitter.split_reader(input.as_bytes(), |_| {}).unwrap();
//!
//! assert_eq!(output.statistics.articles_written(), 2);
//! assert_eq!(output.writer.get("output/dupes/foo (2).txt"), Some("foo foo\n456\n"));
//! ```

#![warn(missing_docs)]

pub mod article;
pub mod config;
pub mod error;
pub mod layout;
pub mod line;
pub mod parser;
pub mod sink;
pub mod splitter;
pub mod stats;
pub mod title;
pub mod writer;

// Re-export key types
pub use article::Article;
pub use config::{SplitConfig, SplitConfigBuilder, TitleMode};
pub use error::{Result, SplitError};
pub use layout::{ArticleTarget, OutputLayout};
pub use line::{classify, is_delimiter_line, is_empty_line, LineKind};
pub use parser::{LineParser, ParserState};
pub use sink::{ArticleSink, SinkOptions, SubmitOutcome, TitleRegistry};
pub use splitter::{SplitOutput, Splitter};
pub use stats::RunStatistics;
pub use title::{Emphasis, MarkupPattern, TitleExtractor};
pub use writer::{ArticleWriter, FsWriter, MemoryWriter};
