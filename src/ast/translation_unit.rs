//! A parsed source file and its include closure.

use std::cell::Cell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, warn};

use super::cursor::Cursor;
use super::file::File;
use super::index::Index;
use super::marshal::{UnsavedBuffers, path_cstring};
use super::options::{IndexOptions, ParseOptions, ReparseOptions};
use super::unsaved::UnsavedFile;
use crate::base::{NullHandle, RawTranslationUnit};
use crate::error::{Error, ErrorCode, Result, SaveError};
use crate::native::{EngineDisposer, SharedEngine, UniqueTranslationUnit, take_string};

struct TranslationUnitInner {
    // Declared before `index` so the unit is disposed before its index is released
    raw: UniqueTranslationUnit,
    index: Index,
    generation: Cell<u64>,
}

/// A translation unit, shared by every [`Cursor`] and [`File`] taken from it.
///
/// Cloning shares the same native unit.
#[derive(Clone)]
pub struct TranslationUnit {
    inner: Rc<TranslationUnitInner>,
}

impl TranslationUnit {
    pub(crate) fn from_raw(raw: RawTranslationUnit, index: Index) -> Self {
        let raw = UniqueTranslationUnit::new(raw, EngineDisposer(index.engine().clone()));
        Self {
            inner: Rc::new(TranslationUnitInner {
                raw,
                index,
                generation: Cell::new(0),
            }),
        }
    }

    /// Parse `path` on a fresh index owned by the returned unit.
    pub fn from_source<S: AsRef<str>>(
        engine: SharedEngine,
        path: impl AsRef<Path>,
        args: &[S],
        unsaved_files: &[UnsavedFile],
        options: ParseOptions,
    ) -> Result<Self> {
        Index::create(engine, IndexOptions::default())?.parse(path, args, unsaved_files, options)
    }

    /// Load a saved AST file on a fresh index owned by the returned unit.
    pub fn from_ast_file(engine: SharedEngine, path: impl AsRef<Path>) -> Result<Self> {
        Index::create(engine, IndexOptions::default())?.read(path)
    }

    pub fn index(&self) -> &Index {
        &self.inner.index
    }

    pub fn engine(&self) -> &SharedEngine {
        self.inner.index.engine()
    }

    pub fn raw(&self) -> RawTranslationUnit {
        self.inner.raw.get()
    }

    /// Incremented by every successful [`reparse`](Self::reparse).
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    /// Whether `other` is a clone of this unit.
    pub fn ptr_eq(&self, other: &TranslationUnit) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The main file name the unit was built from.
    pub fn spelling(&self) -> Result<String> {
        take_string(
            self.engine(),
            self.engine().translation_unit_spelling(self.raw()),
            "translation_unit_spelling",
        )
    }

    /// The cursor for the whole unit.
    pub fn cursor(&self) -> Result<Cursor> {
        let raw = self.engine().translation_unit_cursor(self.raw());
        if raw.is_null() {
            warn!("translation unit has no root cursor");
            return Err(Error::RootCursorUnavailable);
        }
        Ok(Cursor::new(raw, self.clone()))
    }

    /// Look up `path` among the files that took part in this unit.
    pub fn get_file(&self, path: impl AsRef<Path>) -> Result<File> {
        let path = path.as_ref();
        let c_path = path_cstring(path)?;
        let raw = self.engine().get_file(self.raw(), &c_path);
        if raw.is_null() {
            return Err(Error::FileNotInTranslationUnit {
                path: path.display().to_string(),
            });
        }
        Ok(File::new(raw, self.clone()))
    }

    /// Re-parse in place. `None` uses the engine's default reparse options.
    ///
    /// Cursors taken before a successful reparse become stale; see
    /// [`Cursor::is_stale`].
    pub fn reparse(&self, unsaved_files: &[UnsavedFile], options: Option<ReparseOptions>) -> Result<()> {
        let buffers = UnsavedBuffers::new(unsaved_files)?;
        let options = match options {
            Some(options) => options.bits(),
            None => self.engine().default_reparse_options(self.raw()),
        };
        let status = self
            .engine()
            .reparse_translation_unit(self.raw(), &buffers.native(), options);
        if status != 0 {
            let code = ErrorCode::from_raw(status);
            warn!("reparse failed: {code}");
            return Err(Error::ReparseFailed { code });
        }
        self.inner.generation.set(self.generation() + 1);
        debug!(generation = self.generation(), "reparsed translation unit");
        Ok(())
    }

    /// Write the unit to `path` with the engine's default save options.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let c_path = path_cstring(path)?;
        let options = self.engine().default_save_options(self.raw());
        let status = self.engine().save_translation_unit(self.raw(), &c_path, options);
        if status != 0 {
            let code = SaveError::from_raw(status);
            warn!("failed to save translation unit to {}: {code}", path.display());
            return Err(Error::SaveFailed {
                path: path.display().to_string(),
                code,
            });
        }
        debug!("saved translation unit to {}", path.display());
        Ok(())
    }
}

impl fmt::Debug for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationUnit")
            .field("raw", &self.raw().as_ptr())
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}
