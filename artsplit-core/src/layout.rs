//! Output identifiers and on-disk layout

use std::path::{Path, PathBuf};

/// Name of the duplicates directory inside the output directory
pub const DUPLICATES_DIR_NAME: &str = "dupes";

/// Identifier of one article's output artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleTarget<'a> {
    /// Article title
    pub title: &'a str,
    /// 1 for the first article with this title, 2 for the second, ...
    pub occurrence: usize,
}

impl<'a> ArticleTarget<'a> {
    /// Create a target
    pub fn new(title: &'a str, occurrence: usize) -> Self {
        Self { title, occurrence }
    }

    /// Whether this is a repeated title
    pub fn is_duplicate(&self) -> bool {
        self.occurrence > 1
    }

    /// `title` for a first occurrence, `title (N)` otherwise
    pub fn file_stem(&self) -> String {
        if self.is_duplicate() {
            format!("{} ({})", self.title, self.occurrence)
        } else {
            self.title.to_string()
        }
    }
}

/// Where article files go and how they are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory for first occurrences
    pub output_dir: PathBuf,
    /// Directory for repeated titles
    pub duplicates_dir: PathBuf,
    /// Extension appended to every file name, including the dot
    pub extension: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new("output", ".txt")
    }
}

impl OutputLayout {
    /// Layout with the duplicates directory nested in `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let output_dir = output_dir.into();
        let duplicates_dir = output_dir.join(DUPLICATES_DIR_NAME);
        Self {
            output_dir,
            duplicates_dir,
            extension: extension.into(),
        }
    }

    /// Override the duplicates directory
    pub fn with_duplicates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.duplicates_dir = dir.into();
        self
    }

    /// Path of the artifact for `target`
    pub fn path_for(&self, target: &ArticleTarget<'_>) -> PathBuf {
        let file_name = format!("{}{}", target.file_stem(), self.extension);
        let dir = if target.is_duplicate() {
            &self.duplicates_dir
        } else {
            &self.output_dir
        };
        join_clean(dir, &file_name)
    }
}

/// `""` and `"."` yield the bare file name
fn join_clean(dir: &Path, file_name: &str) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}
