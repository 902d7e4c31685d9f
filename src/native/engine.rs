//! The native call surface.
//!
//! Each method maps onto one engine entry point and traffics only in raw
//! handle values. Ownership of the values it returns is the caller's problem;
//! the graph types in [`crate::ast`] wrap them immediately.

use std::ffi::CStr;
use std::rc::Rc;

use crate::base::{RawCursor, RawFile, RawIndex, RawString, RawTranslationUnit};

/// Shared reference to an engine. Graphs hold one of these at their root.
pub type SharedEngine = Rc<dyn Engine>;

/// Marshaled unsaved-file override, borrowed for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub struct NativeUnsavedFile<'a> {
    pub path: &'a CStr,
    pub contents: &'a [u8],
}

/// Result of one child-visitor callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisit {
    Break,
    Continue,
}

/// Object-safe binding of the AST engine's C API.
pub trait Engine {
    fn create_index(&self, exclude_declarations_from_pch: bool, display_diagnostics: bool) -> RawIndex;
    fn dispose_index(&self, index: RawIndex);

    fn parse_translation_unit(
        &self,
        index: RawIndex,
        path: &CStr,
        args: &[&CStr],
        unsaved_files: &[NativeUnsavedFile<'_>],
        options: u32,
    ) -> RawTranslationUnit;
    fn create_translation_unit(&self, index: RawIndex, ast_path: &CStr) -> RawTranslationUnit;
    fn default_reparse_options(&self, tu: RawTranslationUnit) -> u32;
    fn reparse_translation_unit(
        &self,
        tu: RawTranslationUnit,
        unsaved_files: &[NativeUnsavedFile<'_>],
        options: u32,
    ) -> i32;
    fn default_save_options(&self, tu: RawTranslationUnit) -> u32;
    fn save_translation_unit(&self, tu: RawTranslationUnit, path: &CStr, options: u32) -> i32;
    fn dispose_translation_unit(&self, tu: RawTranslationUnit);
    fn translation_unit_spelling(&self, tu: RawTranslationUnit) -> RawString;
    fn translation_unit_cursor(&self, tu: RawTranslationUnit) -> RawCursor;

    fn get_file(&self, tu: RawTranslationUnit, path: &CStr) -> RawFile;
    fn file_name(&self, file: RawFile) -> RawString;
    /// Last modification time, seconds since the Unix epoch.
    fn file_time(&self, file: RawFile) -> i64;

    /// Copy the text out of a string handle. `None` for a null handle.
    fn string_to_owned(&self, s: RawString) -> Option<String>;
    fn dispose_string(&self, s: RawString);

    fn equal_cursors(&self, a: RawCursor, b: RawCursor) -> bool;
    fn hash_cursor(&self, cursor: RawCursor) -> u32;
    fn canonical_cursor(&self, cursor: RawCursor) -> RawCursor;
    fn semantic_parent(&self, cursor: RawCursor) -> RawCursor;
    fn lexical_parent(&self, cursor: RawCursor) -> RawCursor;
    fn referenced(&self, cursor: RawCursor) -> RawCursor;
    fn definition(&self, cursor: RawCursor) -> RawCursor;
    fn cursor_spelling(&self, cursor: RawCursor) -> RawString;
    fn cursor_display_name(&self, cursor: RawCursor) -> RawString;
    fn cursor_usr(&self, cursor: RawCursor) -> RawString;
    fn brief_comment(&self, cursor: RawCursor) -> RawString;
    fn raw_comment(&self, cursor: RawCursor) -> RawString;
    fn is_definition(&self, cursor: RawCursor) -> bool;
    fn is_static_method(&self, cursor: RawCursor) -> bool;
    fn num_arguments(&self, cursor: RawCursor) -> i32;
    fn argument(&self, cursor: RawCursor, index: u32) -> RawCursor;
    fn is_bit_field(&self, cursor: RawCursor) -> bool;
    fn field_bit_width(&self, cursor: RawCursor) -> i32;

    /// Visit the direct children of `cursor` in order.
    ///
    /// Returns `true` if the visitor stopped the walk with [`ChildVisit::Break`].
    fn visit_children(
        &self,
        cursor: RawCursor,
        visitor: &mut dyn FnMut(RawCursor) -> ChildVisit,
    ) -> bool;
}
