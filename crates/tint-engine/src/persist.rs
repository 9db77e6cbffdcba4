//! Storage ports for the palette store.
//!
//! The store never touches the filesystem directly; it talks to a
//! [`ThemeStorage`] port. The file-backed implementation is what the CLI
//! wires in. The in-memory one backs tests and hosts that keep
//! persistence elsewhere.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the serialized theme list lives between runs.
pub trait ThemeStorage {
    /// Read the previously persisted document, or `None` on first run.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium exists but cannot be read.
    /// A missing document is not an error.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the persisted document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be written.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// File-backed storage. One JSON document per store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this storage reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStorage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            // A bare filename has an empty parent; nothing to create.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)
    }
}

/// In-memory storage. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    text: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a document, as if a previous run wrote it.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    /// The last written document, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ThemeStorage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
