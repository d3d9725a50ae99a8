//! Line classification predicates
//!
//! Both predicates are pure: classifying a line twice always yields the same
//! result.

use crate::config::SplitConfig;

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or whitespace-only line
    Empty,
    /// Run of delimiter characters closing an article
    Delimiter,
    /// Any other line
    Content,
}

/// True when the line holds nothing but whitespace
pub fn is_empty_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// True when the line is a delimiter run of at least `min_len` characters
///
/// Only trailing whitespace is ignored. Leading whitespace is part of the
/// line and makes it ordinary content.
pub fn is_delimiter_line(line: &str, delimiter: char, min_len: usize) -> bool {
    let trimmed = line.trim_end();
    let mut len = 0;
    for ch in trimmed.chars() {
        if ch != delimiter {
            return false;
        }
        len += 1;
    }
    len >= min_len
}

/// Classify a line; emptiness wins over delimiter detection
pub fn classify(line: &str, config: &SplitConfig) -> LineKind {
    if is_empty_line(line) {
        LineKind::Empty
    } else if is_delimiter_line(line, config.delimiter, config.min_delimiter_len) {
        LineKind::Delimiter
    } else {
        LineKind::Content
    }
}
