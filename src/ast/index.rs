//! The root of an ownership graph.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, warn};

use super::marshal::{UnsavedBuffers, arg_cstrings, borrow_all, path_cstring};
use super::options::{IndexOptions, ParseOptions};
use super::translation_unit::TranslationUnit;
use super::unsaved::UnsavedFile;
use crate::base::{NullHandle, RawIndex};
use crate::error::{Error, Result};
use crate::native::{EngineDisposer, SharedEngine, UniqueIndex};

struct IndexInner {
    raw: UniqueIndex,
    engine: SharedEngine,
}

/// A set of translation units sharing one engine context.
///
/// Cloning shares the same native index. It is disposed when the last clone
/// and the last [`TranslationUnit`] created from it are dropped.
#[derive(Clone)]
pub struct Index {
    inner: Rc<IndexInner>,
}

impl Index {
    /// Create a new index. Fails with [`Error::CreationFailed`] if the engine
    /// returns a null handle.
    pub fn create(engine: SharedEngine, options: IndexOptions) -> Result<Self> {
        let raw = engine.create_index(
            options.exclude_declarations_from_pch,
            options.display_diagnostics,
        );
        if raw.is_null() {
            warn!("engine returned a null index");
            return Err(Error::CreationFailed);
        }
        debug!(?options, "created index {:?}", raw.as_ptr());
        let raw = UniqueIndex::new(raw, EngineDisposer(engine.clone()));
        Ok(Self {
            inner: Rc::new(IndexInner { raw, engine }),
        })
    }

    /// Load libclang if needed and create an index on it.
    #[cfg(feature = "libclang")]
    pub fn libclang(options: IndexOptions) -> Result<Self> {
        Self::create(crate::native::Libclang::load()?, options)
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.inner.engine
    }

    pub fn raw(&self) -> RawIndex {
        self.inner.raw.get()
    }

    /// Whether `other` is a clone of this index.
    pub fn ptr_eq(&self, other: &Index) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Parse `path` with compiler `args`, substituting `unsaved_files` for the
    /// on-disk content of the paths they name.
    pub fn parse<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        args: &[S],
        unsaved_files: &[UnsavedFile],
        options: ParseOptions,
    ) -> Result<TranslationUnit> {
        let path = path.as_ref();
        let c_path = path_cstring(path)?;
        let c_args = arg_cstrings(args)?;
        let buffers = UnsavedBuffers::new(unsaved_files)?;

        let raw = self.engine().parse_translation_unit(
            self.raw(),
            &c_path,
            &borrow_all(&c_args),
            &buffers.native(),
            options.bits(),
        );
        if raw.is_null() {
            warn!("failed to parse {}", path.display());
            return Err(Error::ParseFailed {
                path: path.display().to_string(),
            });
        }
        debug!(
            args = c_args.len(),
            unsaved = unsaved_files.len(),
            "parsed {}",
            path.display()
        );
        Ok(TranslationUnit::from_raw(raw, self.clone()))
    }

    /// Load a translation unit previously written by [`TranslationUnit::save`].
    pub fn read(&self, path: impl AsRef<Path>) -> Result<TranslationUnit> {
        let path = path.as_ref();
        let c_path = path_cstring(path)?;
        let raw = self.engine().create_translation_unit(self.raw(), &c_path);
        if raw.is_null() {
            warn!("failed to load AST file {}", path.display());
            return Err(Error::LoadFailed {
                path: path.display().to_string(),
            });
        }
        debug!("loaded AST file {}", path.display());
        Ok(TranslationUnit::from_raw(raw, self.clone()))
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("raw", &self.raw().as_ptr())
            .field("owners", &Rc::strong_count(&self.inner))
            .finish()
    }
}
