//! Title extraction for the first line of an article

use crate::config::TitleMode;
use crate::error::{Result, SplitError};
use regex::Regex;

/// Wiki emphasis markers, in tie-break precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `''''text''''`
    BoldItalic,
    /// `'''text'''`
    Bold,
    /// `''text''`
    Italic,
}

impl Emphasis {
    /// All markers, highest precedence first
    pub const ALL: [Emphasis; 3] = [Emphasis::BoldItalic, Emphasis::Bold, Emphasis::Italic];

    fn pattern(self) -> &'static str {
        match self {
            Emphasis::BoldItalic => r"''''(.+?)''''",
            Emphasis::Bold => r"'''(.+?)'''",
            Emphasis::Italic => r"''(.+?)''",
        }
    }
}

/// Compiled emphasis pattern
#[derive(Debug)]
pub struct MarkupPattern {
    emphasis: Emphasis,
    regex: Regex,
}

/// Extracts the title from the line that starts an article
#[derive(Debug)]
pub enum TitleExtractor {
    /// First whitespace-delimited word
    FirstWord,
    /// Earliest wiki emphasis span
    Markup(Vec<MarkupPattern>),
}

impl TitleExtractor {
    /// Create an extractor for the given mode
    pub fn new(mode: TitleMode) -> Result<Self> {
        match mode {
            TitleMode::FirstWord => Ok(TitleExtractor::FirstWord),
            TitleMode::Markup => {
                let patterns = Emphasis::ALL
                    .into_iter()
                    .map(|emphasis| -> Result<MarkupPattern> {
                        Ok(MarkupPattern {
                            emphasis,
                            regex: Regex::new(emphasis.pattern())?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(TitleExtractor::Markup(patterns))
            }
        }
    }

    /// Extract the title from `line`
    pub fn extract(&self, line: &str) -> Result<String> {
        match self {
            TitleExtractor::FirstWord => first_word(line),
            TitleExtractor::Markup(patterns) => {
                markup_span(patterns, line).map(|(_, title)| title.to_string())
            }
        }
    }
}

fn first_word(line: &str) -> Result<String> {
    line.split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| SplitError::NoTitleWord {
            line: line.to_string(),
        })
}

/// Earliest-starting span wins; equal starts keep the higher-precedence marker
fn markup_span<'a>(patterns: &[MarkupPattern], line: &'a str) -> Result<(Emphasis, &'a str)> {
    let mut best: Option<(usize, Emphasis, &'a str)> = None;

    for pattern in patterns {
        let Some(captures) = pattern.regex.captures(line) else {
            continue;
        };
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        match best {
            Some((start, _, _)) if whole.start() >= start => {}
            _ => best = Some((whole.start(), pattern.emphasis, inner.as_str())),
        }
    }

    best.map(|(_, emphasis, title)| (emphasis, title))
        .ok_or_else(|| SplitError::NoTitleMarkup {
            line: line.to_string(),
        })
}
