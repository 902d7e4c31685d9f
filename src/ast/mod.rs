//! The ownership graph: [`Index`] → [`TranslationUnit`] → [`Cursor`] / [`File`].
//!
//! Children hold strong references to their parent only, so a graph is
//! released bottom-up: cursors and files, then the unit, then the index.
//! All of it is `Rc`-based and stays on the thread that built it.

mod cursor;
mod file;
mod index;
mod marshal;
mod options;
mod translation_unit;
mod unsaved;

pub use cursor::Cursor;
pub use file::File;
pub use index::Index;
pub use options::{IndexOptions, ParseOptions, ReparseOptions};
pub use translation_unit::TranslationUnit;
pub use unsaved::UnsavedFile;
