//! Cursors: positions in a translation unit's AST.
//!
//! Every `Cursor` owns a private cache. The memoised accessors
//! ([`spelling`](Cursor::spelling), [`canonical`](Cursor::canonical),
//! [`hash`](Cursor::hash), ...) ask the engine at most once per instance and
//! then serve the stored answer. A clone starts with an empty cache.

use std::fmt;

use once_cell::unsync::OnceCell;
use tracing::{trace, warn};

use super::translation_unit::TranslationUnit;
use crate::base::{NullHandle, RawCursor};
use crate::error::{Error, Result};
use crate::kinds::CursorKind;
use crate::native::{ChildVisit, Engine, take_optional_string, take_string};
use crate::sequence::Sequence;

type DerivedQuery = fn(&dyn Engine, RawCursor) -> RawCursor;

#[derive(Default)]
struct CursorCache {
    spelling: OnceCell<String>,
    displayname: OnceCell<String>,
    hash: OnceCell<u32>,
    canonical: OnceCell<Box<Cursor>>,
    semantic_parent: OnceCell<Box<Cursor>>,
    lexical_parent: OnceCell<Box<Cursor>>,
    referenced: OnceCell<Box<Cursor>>,
    definition: OnceCell<Box<Cursor>>,
}

/// A node in a translation unit's AST.
///
/// A non-null cursor keeps its [`TranslationUnit`] (and through it the
/// [`Index`](super::Index)) alive. The null cursor belongs to no unit and every
/// engine query on it fails with [`Error::NativeQueryFailed`].
pub struct Cursor {
    raw: RawCursor,
    tu: Option<TranslationUnit>,
    generation: u64,
    cache: CursorCache,
}

impl Cursor {
    /// A cursor on the unit's current AST.
    pub(crate) fn new(raw: RawCursor, tu: TranslationUnit) -> Self {
        let generation = tu.generation();
        Self::with_generation(raw, tu, generation)
    }

    /// A cursor reached from another one; it belongs to the same AST generation.
    fn with_generation(raw: RawCursor, tu: TranslationUnit, generation: u64) -> Self {
        Self {
            raw,
            tu: Some(tu),
            generation,
            cache: CursorCache::default(),
        }
    }

    /// The null cursor, also used as "no such cursor" by
    /// [`referenced`](Self::referenced) and [`get_definition`](Self::get_definition).
    pub fn null() -> Self {
        Self {
            raw: RawCursor::null(),
            tu: None,
            generation: 0,
            cache: CursorCache::default(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null() || self.tu.is_none()
    }

    pub fn raw(&self) -> RawCursor {
        self.raw
    }

    pub fn translation_unit(&self) -> Option<&TranslationUnit> {
        self.tu.as_ref()
    }

    /// Whether the owning unit was reparsed after this cursor was obtained.
    pub fn is_stale(&self) -> bool {
        self.tu
            .as_ref()
            .is_some_and(|tu| tu.generation() != self.generation)
    }

    fn live(&self, operation: &'static str) -> Result<&TranslationUnit> {
        match &self.tu {
            Some(tu) if !self.raw.is_null() => Ok(tu),
            _ => Err(Error::query(operation)),
        }
    }

    pub fn kind(&self) -> Result<CursorKind> {
        CursorKind::from_raw(self.raw.kind)
    }

    pub fn spelling(&self) -> Result<&str> {
        self.cache
            .spelling
            .get_or_try_init(|| {
                let tu = self.live("spelling")?;
                let text = take_string(tu.engine(), tu.engine().cursor_spelling(self.raw), "spelling")?;
                trace!("cached spelling {text:?}");
                Ok(text)
            })
            .map(String::as_str)
    }

    pub fn displayname(&self) -> Result<&str> {
        self.cache
            .displayname
            .get_or_try_init(|| {
                let tu = self.live("displayname")?;
                take_string(
                    tu.engine(),
                    tu.engine().cursor_display_name(self.raw),
                    "displayname",
                )
            })
            .map(String::as_str)
    }

    pub fn hash(&self) -> Result<u32> {
        self.cache
            .hash
            .get_or_try_init(|| {
                let tu = self.live("hash")?;
                Ok(tu.engine().hash_cursor(self.raw))
            })
            .copied()
    }

    fn derived<'c>(
        &self,
        cell: &'c OnceCell<Box<Cursor>>,
        operation: &'static str,
        query: DerivedQuery,
        absent_is_null: bool,
    ) -> Result<&'c Cursor> {
        cell.get_or_try_init(|| {
            let tu = self.live(operation)?;
            let raw = query(&**tu.engine(), self.raw);
            if raw.is_null() {
                if absent_is_null {
                    trace!("cached absent {operation}");
                    return Ok(Box::new(Cursor::null()));
                }
                return Err(Error::query(operation));
            }
            trace!("cached {operation}");
            Ok(Box::new(Cursor::with_generation(raw, tu.clone(), self.generation)))
        })
        .map(Box::as_ref)
    }

    pub fn canonical(&self) -> Result<&Cursor> {
        self.derived(
            &self.cache.canonical,
            "canonical",
            |engine, raw| engine.canonical_cursor(raw),
            false,
        )
    }

    pub fn semantic_parent(&self) -> Result<&Cursor> {
        self.derived(
            &self.cache.semantic_parent,
            "semantic_parent",
            |engine, raw| engine.semantic_parent(raw),
            false,
        )
    }

    pub fn lexical_parent(&self) -> Result<&Cursor> {
        self.derived(
            &self.cache.lexical_parent,
            "lexical_parent",
            |engine, raw| engine.lexical_parent(raw),
            false,
        )
    }

    /// The entity this cursor refers to. A null cursor when there is none.
    pub fn referenced(&self) -> Result<&Cursor> {
        self.derived(
            &self.cache.referenced,
            "referenced",
            |engine, raw| engine.referenced(raw),
            true,
        )
    }

    /// The defining cursor of this entity. A null cursor when the definition
    /// is not in the unit.
    pub fn get_definition(&self) -> Result<&Cursor> {
        self.derived(
            &self.cache.definition,
            "get_definition",
            |engine, raw| engine.definition(raw),
            true,
        )
    }

    pub fn is_definition(&self) -> Result<bool> {
        let tu = self.live("is_definition")?;
        Ok(tu.engine().is_definition(self.raw))
    }

    pub fn is_static_method(&self) -> Result<bool> {
        let tu = self.live("is_static_method")?;
        Ok(tu.engine().is_static_method(self.raw))
    }

    /// Unified Symbol Resolution string.
    pub fn get_usr(&self) -> Result<String> {
        let tu = self.live("get_usr")?;
        take_string(tu.engine(), tu.engine().cursor_usr(self.raw), "get_usr")
    }

    /// First paragraph of the attached documentation comment, if any.
    pub fn brief_comment(&self) -> Result<Option<String>> {
        let tu = self.live("brief_comment")?;
        Ok(take_optional_string(tu.engine(), tu.engine().brief_comment(self.raw)))
    }

    /// The attached comment verbatim, if any.
    pub fn raw_comment(&self) -> Result<Option<String>> {
        let tu = self.live("raw_comment")?;
        Ok(take_optional_string(tu.engine(), tu.engine().raw_comment(self.raw)))
    }

    pub fn is_bitfield(&self) -> Result<bool> {
        let tu = self.live("is_bitfield")?;
        Ok(tu.engine().is_bit_field(self.raw))
    }

    /// Declared bit width; 0 for anything that is not a bit field.
    pub fn get_bitfield_width(&self) -> Result<u32> {
        let tu = self.live("get_bitfield_width")?;
        Ok(u32::try_from(tu.engine().field_bit_width(self.raw)).unwrap_or(0))
    }

    /// Direct children, collected by one traversal per call.
    pub fn get_children(&self) -> Result<Sequence<'static, Cursor>> {
        let tu = self.live("get_children")?.clone();
        let mut children = Vec::new();
        let mut saw_null = false;
        tu.engine().visit_children(self.raw, &mut |child| {
            if child.is_null() {
                saw_null = true;
                return ChildVisit::Break;
            }
            children.push(child);
            ChildVisit::Continue
        });
        if saw_null {
            warn!("child traversal yielded a null cursor");
            return Err(Error::ChildVisitFailed);
        }

        let len = children.len();
        let generation = self.generation;
        Ok(Sequence::new(len, move |index| {
            children
                .get(index)
                .map(|raw| Cursor::with_generation(*raw, tu.clone(), generation))
                .ok_or(Error::IndexOutOfRange { index, len })
        }))
    }

    /// Function or method parameters, fetched one per access.
    pub fn get_arguments(&self) -> Result<Sequence<'static, Cursor>> {
        let tu = self.live("get_arguments")?.clone();
        let len = usize::try_from(tu.engine().num_arguments(self.raw)).unwrap_or(0);
        let parent = self.raw;
        let generation = self.generation;
        Ok(Sequence::new(len, move |index| {
            let position = u32::try_from(index).map_err(|_| Error::IndexOutOfRange { index, len })?;
            let raw = tu.engine().argument(parent, position);
            if raw.is_null() {
                return Err(Error::query("get_arguments"));
            }
            Ok(Cursor::with_generation(raw, tu.clone(), generation))
        }))
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::null()
    }
}

impl Clone for Cursor {
    /// Shares the unit and handle; the copy answers queries from its own cache.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            tu: self.tu.clone(),
            generation: self.generation,
            cache: CursorCache::default(),
        }
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        match self.tu.as_ref().or(other.tu.as_ref()) {
            Some(tu) => tu.engine().equal_cursors(self.raw, other.raw),
            None => self.raw == other.raw,
        }
    }
}

impl Eq for Cursor {}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("Cursor(null)");
        }
        f.debug_struct("Cursor")
            .field("kind", &self.raw.kind)
            .field("stale", &self.is_stale())
            .finish_non_exhaustive()
    }
}
