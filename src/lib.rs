//! # cxhandle
//!
//! Safe ownership layer over libclang-style native handles.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ast       → Index / TranslationUnit / Cursor / File ownership graph
//!   ↓
//! sequence  → Lazy random-access views (children, arguments)
//!   ↓
//! kinds     → Write-once cursor-kind registry, name normalization
//!   ↓
//! native    → Engine trait, libclang binding, engine-backed disposers
//!   ↓
//! base      → Raw handle layouts, exactly-once disposal
//! ```

// ============================================================================
// MODULES (dependency order: base → native → kinds → sequence → ast)
// ============================================================================

/// Foundation types: raw handles, null sentinels, `Unique`
pub mod base;

/// Engine seam: the `Engine` trait and the libclang binding
pub mod native;

/// Cursor kinds and the process-wide registry
pub mod kinds;

/// Lazy indexed sequences
pub mod sequence;

/// Ownership graph over translation units
pub mod ast;

/// Error and status-code types
pub mod error;

pub use ast::{Cursor, File, Index, IndexOptions, ParseOptions, ReparseOptions, TranslationUnit, UnsavedFile};
pub use base::{Dispose, NullHandle, Unique};
pub use error::{Error, ErrorCode, Result, SaveError};
pub use kinds::{CursorKind, KindRegistry};
pub use native::{Engine, SharedEngine};
pub use sequence::Sequence;
