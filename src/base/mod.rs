//! Foundation types for native handle ownership.
//!
//! This module provides:
//! - [`RawIndex`], [`RawTranslationUnit`], [`RawFile`], [`RawCursor`], [`RawString`] -
//!   by-value native handle layouts
//! - [`NullHandle`] - type-specific null sentinels
//! - [`Unique`], [`Dispose`] - exactly-once disposal
//!
//! This module has NO dependencies on other crate modules.

mod handle;
mod raw;

pub use handle::{Dispose, FnDisposer, Unique};
pub use raw::{
    NULL_CURSOR_KIND, NullHandle, RawCursor, RawFile, RawIndex, RawString, RawTranslationUnit,
};
