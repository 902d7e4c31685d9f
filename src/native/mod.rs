//! Native engine seam.
//!
//! - [`Engine`] - one method per engine entry point
//! - [`EngineDisposer`] - routes [`Unique`](crate::base::Unique) disposal back to the engine
//! - [`Libclang`] - the real engine (feature `libclang`)

mod engine;
#[cfg(feature = "libclang")]
mod libclang;
mod string;

pub use engine::{ChildVisit, Engine, NativeUnsavedFile, SharedEngine};
#[cfg(feature = "libclang")]
pub use libclang::{Libclang, MIN_SUPPORTED_MAJOR};
pub use string::{
    EngineDisposer, UniqueIndex, UniqueString, UniqueTranslationUnit, take_optional_string, take_string,
};
