//! Named kinds for native enumeration integers.
//!
//! The process-wide cursor-kind registry is built once, from a fixed table,
//! by [`initialize`] (or lazily by the first [`CursorKind::from_raw`]).
//! After that it is read-only and needs no locking.

mod cursor_kind;
mod registry;

use once_cell::sync::OnceCell;
use tracing::debug;

pub use cursor_kind::CursorKind;
pub use registry::{KindRegistry, NativeKind, normalize_kind_name};

use crate::error::Result;

static CURSOR_KINDS: OnceCell<KindRegistry<CursorKind>> = OnceCell::new();

/// Build the process-wide cursor-kind registry. Later calls are no-ops.
pub fn initialize() -> Result<&'static KindRegistry<CursorKind>> {
    CURSOR_KINDS.get_or_try_init(|| {
        let mut registry = KindRegistry::new();
        for (value, token, _) in cursor_kind::BUILTIN_KINDS {
            registry.register(*value, token)?;
        }
        debug!(kinds = registry.len(), "cursor kind registry initialized");
        Ok(registry)
    })
}

/// Every registered cursor kind with its name.
pub fn all_cursor_kinds() -> Result<impl Iterator<Item = (CursorKind, &'static str)>> {
    Ok(initialize()?.iter())
}
