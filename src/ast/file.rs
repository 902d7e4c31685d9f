//! Files that took part in a translation unit.

use std::fmt;
use std::path::Path;

use crate::base::RawFile;
use crate::error::Result;
use crate::native::take_string;

use super::translation_unit::TranslationUnit;

/// A file that took part in a translation unit.
///
/// Keeps its unit alive; the native handle belongs to the unit.
#[derive(Clone)]
pub struct File {
    raw: RawFile,
    tu: TranslationUnit,
}

impl File {
    pub(crate) fn new(raw: RawFile, tu: TranslationUnit) -> Self {
        Self { raw, tu }
    }

    /// Same as [`TranslationUnit::get_file`].
    pub fn from_name(tu: &TranslationUnit, path: impl AsRef<Path>) -> Result<Self> {
        tu.get_file(path)
    }

    pub fn name(&self) -> Result<String> {
        take_string(self.tu.engine(), self.tu.engine().file_name(self.raw), "file_name")
    }

    /// Last modification time, in seconds since the Unix epoch.
    pub fn time(&self) -> i64 {
        self.tu.engine().file_time(self.raw)
    }

    pub fn translation_unit(&self) -> &TranslationUnit {
        &self.tu
    }

    pub fn raw(&self) -> RawFile {
        self.raw
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().unwrap_or_default())
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<File: {self}>")
    }
}
