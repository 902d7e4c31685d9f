//! Engine-backed disposers and string marshaling.

use tracing::trace;

use super::engine::SharedEngine;
use crate::base::{Dispose, RawIndex, RawString, RawTranslationUnit, Unique};
use crate::error::{Error, Result};

/// Disposes handles through the engine that produced them.
#[derive(Clone)]
pub struct EngineDisposer(pub SharedEngine);

impl Dispose<RawIndex> for EngineDisposer {
    fn dispose(&self, raw: RawIndex) {
        trace!("disposing index {:?}", raw.as_ptr());
        self.0.dispose_index(raw);
    }
}

impl Dispose<RawTranslationUnit> for EngineDisposer {
    fn dispose(&self, raw: RawTranslationUnit) {
        trace!("disposing translation unit {:?}", raw.as_ptr());
        self.0.dispose_translation_unit(raw);
    }
}

impl Dispose<RawString> for EngineDisposer {
    fn dispose(&self, raw: RawString) {
        self.0.dispose_string(raw);
    }
}

pub type UniqueIndex = Unique<RawIndex, EngineDisposer>;
pub type UniqueTranslationUnit = Unique<RawTranslationUnit, EngineDisposer>;
pub type UniqueString = Unique<RawString, EngineDisposer>;

/// Take ownership of a returned string handle and copy its text out.
///
/// The handle is disposed on every path. A null handle is reported as a failed
/// `operation`.
pub fn take_string(engine: &SharedEngine, raw: RawString, operation: &'static str) -> Result<String> {
    let owned = UniqueString::new(raw, EngineDisposer(engine.clone()));
    if owned.is_null() {
        return Err(Error::query(operation));
    }
    engine
        .string_to_owned(owned.get())
        .ok_or(Error::query(operation))
}

/// Like [`take_string`], but a null handle means "no text" rather than failure.
pub fn take_optional_string(engine: &SharedEngine, raw: RawString) -> Option<String> {
    let owned = UniqueString::new(raw, EngineDisposer(engine.clone()));
    if owned.is_null() {
        return None;
    }
    engine.string_to_owned(owned.get())
}
