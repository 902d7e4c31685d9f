//! In-memory file overrides.

use std::io::Read;

use crate::error::Result;

/// Content to use for `path` instead of what is on disk.
///
/// Bytes are handed to the engine verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedFile {
    path: String,
    contents: Vec<u8>,
}

impl UnsavedFile {
    pub fn new(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Read the whole of `reader` as the override content.
    pub fn from_reader(path: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(Self::new(path, contents))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}
