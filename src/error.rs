//! Error types for handle and graph operations.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by the wrapper layer.
///
/// Every variant is returned to the immediate caller; nothing is retried or
/// swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine returned a null index handle.
    #[error("error creating index")]
    CreationFailed,

    /// The engine could not produce a translation unit from source.
    #[error("error parsing translation unit: {path}")]
    ParseFailed { path: String },

    /// The engine could not load a serialized AST file.
    #[error("error loading translation unit from AST file: {path}")]
    LoadFailed { path: String },

    /// Re-parsing returned a non-zero status.
    #[error("error reparsing translation unit ({code})")]
    ReparseFailed { code: ErrorCode },

    /// Saving returned a non-zero status.
    #[error("error {code} saving translation unit to {path}")]
    SaveFailed { path: String, code: SaveError },

    /// The translation unit yielded a null root cursor.
    #[error("error retrieving the cursor that represents the translation unit")]
    RootCursorUnavailable,

    /// The path was never part of the translation unit's compilation.
    #[error("the file was not a part of this translation unit: {path}")]
    FileNotInTranslationUnit { path: String },

    /// A child traversal produced a null cursor.
    #[error("child traversal produced a null cursor")]
    ChildVisitFailed,

    /// A native kind value was registered twice.
    #[error("kind {value} is already registered as {existing}")]
    DuplicateKind { value: i32, existing: String },

    /// A native kind value is absent from the registry.
    #[error("unknown kind: {0}")]
    UnknownKind(i32),

    /// Checked positional access past the end of a sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A single-value query failed, usually because the receiver was null.
    #[error("native query failed: {operation}")]
    NativeQueryFailed { operation: &'static str },

    /// A string passed to the engine contained an interior NUL byte.
    #[error("{what} contains an interior NUL byte")]
    InteriorNul { what: &'static str },

    /// The engine shared library could not be loaded.
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Reading unsaved-file contents failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a query failure for the named operation.
    pub fn query(operation: &'static str) -> Self {
        Self::NativeQueryFailed { operation }
    }

    /// Check if this error marks a failed native single-value query.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::NativeQueryFailed { .. })
    }
}

/// Status subcode returned by the engine's save entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveError {
    None,
    /// Unknown error, possibly an I/O failure.
    Unknown,
    /// Errors during translation prevented the save.
    TranslationErrors,
    /// The translation unit is invalid.
    InvalidTranslationUnit,
    /// A code the crate has no name for.
    Other(i32),
}

impl SaveError {
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Unknown,
            2 => Self::TranslationErrors,
            3 => Self::InvalidTranslationUnit,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Unknown => 1,
            Self::TranslationErrors => 2,
            Self::InvalidTranslationUnit => 3,
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Generic engine status code (`CXErrorCode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    Failure,
    Crashed,
    InvalidArguments,
    AstReadError,
    Other(i32),
}

impl ErrorCode {
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::Failure,
            2 => Self::Crashed,
            3 => Self::InvalidArguments,
            4 => Self::AstReadError,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Crashed => 2,
            Self::InvalidArguments => 3,
            Self::AstReadError => 4,
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure => f.write_str("failure"),
            Self::Crashed => f.write_str("crashed"),
            Self::InvalidArguments => f.write_str("invalid arguments"),
            Self::AstReadError => f.write_str("AST read error"),
            Self::Other(code) => write!(f, "code {code}"),
        }
    }
}
