//! Output backends for article content
//!
//! A writer holds at most one open artifact. Opening while another is open,
//! or writing/closing with nothing open, is a bug in the caller and panics.

use crate::error::{Result, SplitError};
use crate::layout::{ArticleTarget, OutputLayout};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Capability set the sink uses to emit article content
pub trait ArticleWriter {
    /// Start a new artifact for `target`
    fn open(&mut self, target: &ArticleTarget<'_>) -> Result<()>;

    /// Append one line; the line terminator is added by the writer
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flush and release the open artifact
    ///
    /// The writer is closed afterwards even when flushing fails.
    fn close(&mut self) -> Result<()>;
}

struct OpenFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Writes articles to the local filesystem
pub struct FsWriter {
    layout: OutputLayout,
    current: Option<OpenFile>,
}

impl std::fmt::Debug for FsWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsWriter")
            .field("layout", &self.layout)
            .field("current", &self.current.as_ref().map(|open| &open.path))
            .finish()
    }
}

impl FsWriter {
    /// Create a writer; directories must already exist
    pub fn new(layout: OutputLayout) -> Self {
        Self {
            layout,
            current: None,
        }
    }
}

impl ArticleWriter for FsWriter {
    fn open(&mut self, target: &ArticleTarget<'_>) -> Result<()> {
        let path = self.layout.path_for(target);
        assert!(
            self.current.is_none(),
            "cannot open {}: another article is still open",
            path.display()
        );

        let file = File::create(&path).map_err(|source| SplitError::Open {
            path: path.clone(),
            source,
        })?;
        self.current = Some(OpenFile {
            path,
            writer: BufWriter::new(file),
        });
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let open = self
            .current
            .as_mut()
            .expect("cannot write a line before opening an article");
        writeln!(open.writer, "{line}").map_err(|source| SplitError::Write {
            path: open.path.clone(),
            source,
        })
    }

    fn close(&mut self) -> Result<()> {
        let mut open = self
            .current
            .take()
            .expect("cannot close: no article is open");
        open.writer.flush().map_err(|source| SplitError::Write {
            path: open.path,
            source,
        })
    }
}

/// Captures written articles in memory, keyed by path
#[derive(Debug, Default)]
pub struct MemoryWriter {
    layout: OutputLayout,
    files: BTreeMap<PathBuf, String>,
    current: Option<PathBuf>,
}

impl MemoryWriter {
    /// Create an empty in-memory writer
    pub fn new(layout: OutputLayout) -> Self {
        Self {
            layout,
            files: BTreeMap::new(),
            current: None,
        }
    }

    /// All captured files
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    /// Content of one captured file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl ArticleWriter for MemoryWriter {
    fn open(&mut self, target: &ArticleTarget<'_>) -> Result<()> {
        let path = self.layout.path_for(target);
        assert!(
            self.current.is_none(),
            "cannot open {}: another article is still open",
            path.display()
        );

        self.files.insert(path.clone(), String::new());
        self.current = Some(path);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let path = self
            .current
            .as_ref()
            .expect("cannot write a line before opening an article");
        if let Some(content) = self.files.get_mut(path) {
            content.push_str(line);
            content.push('\n');
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.current
            .take()
            .expect("cannot close: no article is open");
        Ok(())
    }
}
