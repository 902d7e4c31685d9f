//! Raw native handle values.
//!
//! These mirror the engine's by-value handle layouts (`CXIndex`,
//! `CXTranslationUnit`, `CXFile`, `CXCursor`, `CXString`). They carry no
//! ownership; see [`Unique`](super::Unique) for that.

use std::ffi::c_void;
use std::ptr;

/// A handle type with a type-specific null sentinel.
pub trait NullHandle: Copy {
    /// The empty / moved-from value.
    fn null() -> Self;

    /// Whether this value is the null sentinel.
    fn is_null(&self) -> bool;
}

macro_rules! pointer_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(pub *mut c_void);

        impl $name {
            pub fn as_ptr(self) -> *mut c_void {
                self.0
            }
        }

        impl NullHandle for $name {
            fn null() -> Self {
                Self(ptr::null_mut())
            }

            fn is_null(&self) -> bool {
                self.0.is_null()
            }
        }
    };
}

pointer_handle!(
    /// Native index handle.
    RawIndex
);
pointer_handle!(
    /// Native translation-unit handle.
    RawTranslationUnit
);
pointer_handle!(
    /// Native file handle. Owned by its translation unit, never disposed directly.
    RawFile
);

/// Native string handle (`CXString`).
///
/// Null when `data` is null; `private_flags` is engine bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct RawString {
    pub data: *const c_void,
    pub private_flags: u32,
}

impl NullHandle for RawString {
    fn null() -> Self {
        Self {
            data: ptr::null(),
            private_flags: 0,
        }
    }

    fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

/// Kind value the engine stores in a null cursor (`CXCursor_InvalidFile`).
pub const NULL_CURSOR_KIND: i32 = 70;

/// Native cursor handle (`CXCursor`).
///
/// The null cursor is a multi-field sentinel: the invalid-file kind with
/// every data pointer null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct RawCursor {
    pub kind: i32,
    pub xdata: i32,
    pub data: [*const c_void; 3],
}

impl NullHandle for RawCursor {
    fn null() -> Self {
        Self {
            kind: NULL_CURSOR_KIND,
            xdata: 0,
            data: [ptr::null(); 3],
        }
    }

    fn is_null(&self) -> bool {
        self.kind == NULL_CURSOR_KIND && self.data.iter().all(|p| p.is_null())
    }
}

impl Default for RawCursor {
    fn default() -> Self {
        Self::null()
    }
}
