//! Single-owner wrapper around one native handle.

use std::fmt;
use std::mem;

use super::raw::NullHandle;

/// The operation that releases a native handle of type `H`.
pub trait Dispose<H> {
    fn dispose(&self, raw: H);
}

/// Adapts any `Fn(H)` into a disposer.
#[derive(Clone, Copy, Default)]
pub struct FnDisposer<F>(pub F);

impl<H, F: Fn(H)> Dispose<H> for FnDisposer<F> {
    fn dispose(&self, raw: H) {
        (self.0)(raw)
    }
}

/// Owns exactly one native handle and disposes it exactly once.
///
/// The null sentinel of `H` marks the empty state and is never handed to the
/// disposer. The wrapper is move-only; [`take`](Self::take) transfers
/// ownership out of a binding that stays alive, leaving it null.
pub struct Unique<H: NullHandle, D: Dispose<H>> {
    raw: H,
    disposer: D,
}

impl<H: NullHandle, D: Dispose<H>> Unique<H, D> {
    /// Take ownership of `raw`.
    pub fn new(raw: H, disposer: D) -> Self {
        Self { raw, disposer }
    }

    /// An empty wrapper.
    pub fn null(disposer: D) -> Self {
        Self::new(H::null(), disposer)
    }

    /// The held value. Ownership stays with the wrapper.
    pub fn get(&self) -> H {
        self.raw
    }

    pub fn disposer(&self) -> &D {
        &self.disposer
    }

    /// Give up ownership without disposing.
    pub fn release(&mut self) -> H {
        mem::replace(&mut self.raw, H::null())
    }

    /// Dispose the held value (if any) and own `raw` instead.
    pub fn reset(&mut self, raw: H) {
        let old = mem::replace(&mut self.raw, raw);
        if !old.is_null() {
            self.disposer.dispose(old);
        }
    }

    /// Dispose the held value and become null.
    pub fn clear(&mut self) {
        self.reset(H::null());
    }

    /// Move ownership into a new wrapper, leaving this one null.
    pub fn take(&mut self) -> Self
    where
        D: Clone,
    {
        let raw = self.release();
        Self::new(raw, self.disposer.clone())
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn is_valid(&self) -> bool {
        !self.raw.is_null()
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }
}

impl<H: NullHandle, D: Dispose<H>> Drop for Unique<H, D> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<H: NullHandle, D: Dispose<H> + Default> Default for Unique<H, D> {
    fn default() -> Self {
        Self::null(D::default())
    }
}

impl<H: NullHandle + fmt::Debug, D: Dispose<H>> fmt::Debug for Unique<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unique").field(&self.raw).finish()
    }
}
