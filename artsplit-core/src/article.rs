//! Completed article handed from the parser to the sink

/// One article: its title and every buffered line
///
/// `lines` keeps interior and trailing empty lines in input order;
/// `trailing_empty` counts the empty lines right before the boundary, which
/// are excluded from emitted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Extracted title
    pub title: String,
    /// Buffered lines, including the trailing empty run
    pub lines: Vec<String>,
    /// Length of the trailing empty run
    pub trailing_empty: usize,
}

impl Article {
    /// Create an article
    pub fn new(title: impl Into<String>, lines: Vec<String>, trailing_empty: usize) -> Self {
        debug_assert!(trailing_empty <= lines.len());
        Self {
            title: title.into(),
            lines,
            trailing_empty,
        }
    }

    /// Number of lines that make up the article's content
    pub fn content_line_count(&self) -> usize {
        self.lines.len().saturating_sub(self.trailing_empty)
    }

    /// Lines to emit, without the trailing empty run
    pub fn content(&self) -> &[String] {
        &self.lines[..self.content_line_count()]
    }
}
