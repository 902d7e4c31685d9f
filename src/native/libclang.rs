//! [`Engine`] backed by libclang through `clang-sys`.
//!
//! The shared library is loaded at runtime; see [`Libclang::load`].

use std::ffi::{CStr, c_char, c_void};
use std::ptr;
use std::rc::Rc;

use clang_sys::*;
use tracing::{debug, warn};

use super::engine::{ChildVisit, Engine, NativeUnsavedFile, SharedEngine};
use crate::base::{RawCursor, RawFile, RawIndex, RawString, RawTranslationUnit};
use crate::error::{Error, Result};

/// The real engine.
///
/// Zero-sized; every call goes straight to the loaded library.
#[derive(Debug)]
pub struct Libclang {
    _loaded: (),
}

impl Libclang {
    /// Load libclang for the current thread and return a shared engine.
    ///
    /// Library discovery follows `clang-sys` (`LIBCLANG_PATH`, then the
    /// usual system locations).
    ///
    /// Fails with [`Error::EngineUnavailable`] when the library is older than
    /// [`MIN_SUPPORTED_MAJOR`], whose cursor-kind numbering differs.
    pub fn load() -> Result<SharedEngine> {
        if !clang_sys::is_loaded() {
            clang_sys::load().map_err(Error::EngineUnavailable)?;
            debug!("loaded libclang");
        }
        let version = clang_version();
        match upstream_major(&version) {
            Some(major) if major >= MIN_SUPPORTED_MAJOR => {
                debug!(major, "libclang version accepted");
            }
            _ => {
                warn!("unsupported libclang: {version}");
                return Err(Error::EngineUnavailable(format!(
                    "{version:?} is older than libclang {MIN_SUPPORTED_MAJOR}"
                )));
            }
        }
        Ok(Rc::new(Libclang { _loaded: () }))
    }
}

/// Oldest upstream LLVM release whose `CXCursorKind` numbering matches
/// [`CursorKind`](crate::kinds::CursorKind).
pub const MIN_SUPPORTED_MAJOR: u32 = 16;

fn clang_version() -> String {
    unsafe {
        let raw = clang_getClangVersion();
        let text = clang_getCString(raw);
        let version = if text.is_null() {
            String::new()
        } else {
            CStr::from_ptr(text).to_string_lossy().into_owned()
        };
        clang_disposeString(raw);
        version
    }
}

/// Upstream LLVM major version from a `clang_getClangVersion` string.
///
/// Apple clang numbering runs one release behind upstream.
fn upstream_major(version: &str) -> Option<u32> {
    let start = version.find("version ")? + "version ".len();
    let major: u32 = version[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()?
        .parse()
        .ok()?;
    if version.starts_with("Apple") {
        Some(major + 1)
    } else {
        Some(major)
    }
}

fn to_cx(cursor: RawCursor) -> CXCursor {
    CXCursor {
        kind: cursor.kind as _,
        xdata: cursor.xdata as _,
        data: cursor.data,
    }
}

fn from_cx(cursor: CXCursor) -> RawCursor {
    RawCursor {
        kind: cursor.kind as i32,
        xdata: cursor.xdata as i32,
        data: cursor.data,
    }
}

fn to_cx_string(s: RawString) -> CXString {
    CXString {
        data: s.data,
        private_flags: s.private_flags as _,
    }
}

fn from_cx_string(s: CXString) -> RawString {
    RawString {
        data: s.data,
        private_flags: s.private_flags as u32,
    }
}

fn to_cx_tu(tu: RawTranslationUnit) -> CXTranslationUnit {
    tu.as_ptr() as CXTranslationUnit
}

fn marshal_unsaved(files: &[NativeUnsavedFile<'_>]) -> Vec<CXUnsavedFile> {
    files
        .iter()
        .map(|file| CXUnsavedFile {
            Filename: file.path.as_ptr(),
            Contents: file.contents.as_ptr() as *const c_char,
            Length: file.contents.len() as _,
        })
        .collect()
}

type Visitor<'a> = &'a mut dyn FnMut(RawCursor) -> ChildVisit;

extern "C" fn visit_trampoline(
    cursor: CXCursor,
    _parent: CXCursor,
    data: CXClientData,
) -> CXChildVisitResult {
    // Safety: `data` is the `&mut Visitor` passed by `visit_children`, alive for the walk
    let visitor = unsafe { &mut *(data as *mut Visitor<'_>) };
    match visitor(from_cx(cursor)) {
        ChildVisit::Break => CXChildVisit_Break,
        ChildVisit::Continue => CXChildVisit_Continue,
    }
}

impl Engine for Libclang {
    fn create_index(&self, exclude_declarations_from_pch: bool, display_diagnostics: bool) -> RawIndex {
        unsafe {
            RawIndex(clang_createIndex(
                exclude_declarations_from_pch as _,
                display_diagnostics as _,
            ))
        }
    }

    fn dispose_index(&self, index: RawIndex) {
        unsafe { clang_disposeIndex(index.as_ptr()) }
    }

    fn parse_translation_unit(
        &self,
        index: RawIndex,
        path: &CStr,
        args: &[&CStr],
        unsaved_files: &[NativeUnsavedFile<'_>],
        options: u32,
    ) -> RawTranslationUnit {
        let c_args: Vec<*const c_char> = args.iter().map(|a| a.as_ptr()).collect();
        let mut c_unsaved = marshal_unsaved(unsaved_files);
        let unsaved_ptr = if c_unsaved.is_empty() {
            ptr::null_mut()
        } else {
            c_unsaved.as_mut_ptr()
        };
        unsafe {
            let tu = clang_parseTranslationUnit(
                index.as_ptr(),
                path.as_ptr(),
                c_args.as_ptr(),
                c_args.len() as _,
                unsaved_ptr,
                c_unsaved.len() as _,
                options as _,
            );
            RawTranslationUnit(tu as *mut c_void)
        }
    }

    fn create_translation_unit(&self, index: RawIndex, ast_path: &CStr) -> RawTranslationUnit {
        unsafe {
            let tu = clang_createTranslationUnit(index.as_ptr(), ast_path.as_ptr());
            RawTranslationUnit(tu as *mut c_void)
        }
    }

    fn default_reparse_options(&self, tu: RawTranslationUnit) -> u32 {
        unsafe { clang_defaultReparseOptions(to_cx_tu(tu)) as u32 }
    }

    fn reparse_translation_unit(
        &self,
        tu: RawTranslationUnit,
        unsaved_files: &[NativeUnsavedFile<'_>],
        options: u32,
    ) -> i32 {
        let mut c_unsaved = marshal_unsaved(unsaved_files);
        let unsaved_ptr = if c_unsaved.is_empty() {
            ptr::null_mut()
        } else {
            c_unsaved.as_mut_ptr()
        };
        unsafe {
            clang_reparseTranslationUnit(
                to_cx_tu(tu),
                c_unsaved.len() as _,
                unsaved_ptr,
                options as _,
            ) as i32
        }
    }

    fn default_save_options(&self, tu: RawTranslationUnit) -> u32 {
        unsafe { clang_defaultSaveOptions(to_cx_tu(tu)) as u32 }
    }

    fn save_translation_unit(&self, tu: RawTranslationUnit, path: &CStr, options: u32) -> i32 {
        unsafe { clang_saveTranslationUnit(to_cx_tu(tu), path.as_ptr(), options as _) as i32 }
    }

    fn dispose_translation_unit(&self, tu: RawTranslationUnit) {
        unsafe { clang_disposeTranslationUnit(to_cx_tu(tu)) }
    }

    fn translation_unit_spelling(&self, tu: RawTranslationUnit) -> RawString {
        unsafe { from_cx_string(clang_getTranslationUnitSpelling(to_cx_tu(tu))) }
    }

    fn translation_unit_cursor(&self, tu: RawTranslationUnit) -> RawCursor {
        unsafe { from_cx(clang_getTranslationUnitCursor(to_cx_tu(tu))) }
    }

    fn get_file(&self, tu: RawTranslationUnit, path: &CStr) -> RawFile {
        unsafe { RawFile(clang_getFile(to_cx_tu(tu), path.as_ptr()) as *mut c_void) }
    }

    fn file_name(&self, file: RawFile) -> RawString {
        unsafe { from_cx_string(clang_getFileName(file.as_ptr() as CXFile)) }
    }

    fn file_time(&self, file: RawFile) -> i64 {
        unsafe { clang_getFileTime(file.as_ptr() as CXFile) as i64 }
    }

    fn string_to_owned(&self, s: RawString) -> Option<String> {
        if s.data.is_null() {
            return None;
        }
        unsafe {
            let text = clang_getCString(to_cx_string(s));
            if text.is_null() {
                return None;
            }
            Some(CStr::from_ptr(text).to_string_lossy().into_owned())
        }
    }

    fn dispose_string(&self, s: RawString) {
        unsafe { clang_disposeString(to_cx_string(s)) }
    }

    fn equal_cursors(&self, a: RawCursor, b: RawCursor) -> bool {
        unsafe { clang_equalCursors(to_cx(a), to_cx(b)) != 0 }
    }

    fn hash_cursor(&self, cursor: RawCursor) -> u32 {
        unsafe { clang_hashCursor(to_cx(cursor)) as u32 }
    }

    fn canonical_cursor(&self, cursor: RawCursor) -> RawCursor {
        unsafe { from_cx(clang_getCanonicalCursor(to_cx(cursor))) }
    }

    fn semantic_parent(&self, cursor: RawCursor) -> RawCursor {
        unsafe { from_cx(clang_getCursorSemanticParent(to_cx(cursor))) }
    }

    fn lexical_parent(&self, cursor: RawCursor) -> RawCursor {
        unsafe { from_cx(clang_getCursorLexicalParent(to_cx(cursor))) }
    }

    fn referenced(&self, cursor: RawCursor) -> RawCursor {
        unsafe { from_cx(clang_getCursorReferenced(to_cx(cursor))) }
    }

    fn definition(&self, cursor: RawCursor) -> RawCursor {
        unsafe { from_cx(clang_getCursorDefinition(to_cx(cursor))) }
    }

    fn cursor_spelling(&self, cursor: RawCursor) -> RawString {
        unsafe { from_cx_string(clang_getCursorSpelling(to_cx(cursor))) }
    }

    fn cursor_display_name(&self, cursor: RawCursor) -> RawString {
        unsafe { from_cx_string(clang_getCursorDisplayName(to_cx(cursor))) }
    }

    fn cursor_usr(&self, cursor: RawCursor) -> RawString {
        unsafe { from_cx_string(clang_getCursorUSR(to_cx(cursor))) }
    }

    fn brief_comment(&self, cursor: RawCursor) -> RawString {
        unsafe { from_cx_string(clang_Cursor_getBriefCommentText(to_cx(cursor))) }
    }

    fn raw_comment(&self, cursor: RawCursor) -> RawString {
        unsafe { from_cx_string(clang_Cursor_getRawCommentText(to_cx(cursor))) }
    }

    fn is_definition(&self, cursor: RawCursor) -> bool {
        unsafe { clang_isCursorDefinition(to_cx(cursor)) != 0 }
    }

    fn is_static_method(&self, cursor: RawCursor) -> bool {
        unsafe { clang_CXXMethod_isStatic(to_cx(cursor)) != 0 }
    }

    fn num_arguments(&self, cursor: RawCursor) -> i32 {
        unsafe { clang_Cursor_getNumArguments(to_cx(cursor)) as i32 }
    }

    fn argument(&self, cursor: RawCursor, index: u32) -> RawCursor {
        unsafe { from_cx(clang_Cursor_getArgument(to_cx(cursor), index as _)) }
    }

    fn is_bit_field(&self, cursor: RawCursor) -> bool {
        unsafe { clang_Cursor_isBitField(to_cx(cursor)) != 0 }
    }

    fn field_bit_width(&self, cursor: RawCursor) -> i32 {
        unsafe { clang_getFieldDeclBitWidth(to_cx(cursor)) as i32 }
    }

    fn visit_children(
        &self,
        cursor: RawCursor,
        visitor: &mut dyn FnMut(RawCursor) -> ChildVisit,
    ) -> bool {
        let mut visitor: Visitor<'_> = visitor;
        let data = &mut visitor as *mut Visitor<'_> as CXClientData;
        unsafe { clang_visitChildren(to_cx(cursor), visit_trampoline, data) != 0 }
    }
}
