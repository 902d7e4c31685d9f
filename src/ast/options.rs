//! Index and parse configuration.
//!
//! Option bitmasks pass through to the engine unchanged, including bits this
//! crate has no name for.

use bitflags::bitflags;

/// Flags for index creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IndexOptions {
    /// Skip declarations coming from precompiled headers when enumerating.
    pub exclude_declarations_from_pch: bool,
    /// Let the engine print diagnostics while parsing.
    pub display_diagnostics: bool,
}

impl IndexOptions {
    pub fn excluding_pch_declarations() -> Self {
        Self {
            exclude_declarations_from_pch: true,
            ..Self::default()
        }
    }
}

bitflags! {
    /// Engine-defined parse behaviors (`CXTranslationUnit_Flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParseOptions: u32 {
        const DETAILED_PREPROCESSING_RECORD = 0x0001;
        const INCOMPLETE = 0x0002;
        const PRECOMPILED_PREAMBLE = 0x0004;
        const CACHE_COMPLETION_RESULTS = 0x0008;
        const FOR_SERIALIZATION = 0x0010;
        const CXX_CHAINED_PCH = 0x0020;
        const SKIP_FUNCTION_BODIES = 0x0040;
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION = 0x0080;
        const CREATE_PREAMBLE_ON_FIRST_PARSE = 0x0100;
        const KEEP_GOING = 0x0200;
        const SINGLE_FILE_PARSE = 0x0400;
        const LIMIT_SKIP_FUNCTION_BODIES_TO_PREAMBLE = 0x0800;
        const INCLUDE_ATTRIBUTED_TYPES = 0x1000;
        const VISIT_IMPLICIT_ATTRIBUTES = 0x2000;
        const IGNORE_NON_ERRORS_FROM_INCLUDED_FILES = 0x4000;
        const RETAIN_EXCLUDED_CONDITIONAL_BLOCKS = 0x8000;

        const _ = !0;
    }
}

bitflags! {
    /// Reparse behaviors (`CXReparse_Flags`). The engine reserves these bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ReparseOptions: u32 {
        const _ = !0;
    }
}
