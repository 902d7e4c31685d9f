//! Conversions from Rust values to the engine's C strings.

use std::ffi::{CStr, CString};
use std::path::Path;

use super::unsaved::UnsavedFile;
use crate::error::{Error, Result};
use crate::native::NativeUnsavedFile;

pub(crate) fn path_cstring(path: &Path) -> Result<CString> {
    #[cfg(unix)]
    let bytes = {
        use std::os::unix::ffi::OsStrExt;
        path.as_os_str().as_bytes().to_vec()
    };
    #[cfg(not(unix))]
    let bytes = path.to_string_lossy().into_owned().into_bytes();

    CString::new(bytes).map_err(|_| Error::InteriorNul { what: "path" })
}

pub(crate) fn arg_cstrings<S: AsRef<str>>(args: &[S]) -> Result<Vec<CString>> {
    args.iter()
        .map(|arg| {
            CString::new(arg.as_ref()).map_err(|_| Error::InteriorNul {
                what: "compiler argument",
            })
        })
        .collect()
}

pub(crate) fn borrow_all(strings: &[CString]) -> Vec<&CStr> {
    strings.iter().map(CString::as_c_str).collect()
}

/// Owns the NUL-terminated paths for a batch of unsaved files.
pub(crate) struct UnsavedBuffers<'a> {
    paths: Vec<CString>,
    files: &'a [UnsavedFile],
}

impl<'a> UnsavedBuffers<'a> {
    pub(crate) fn new(files: &'a [UnsavedFile]) -> Result<Self> {
        let paths = files
            .iter()
            .map(|file| {
                CString::new(file.path()).map_err(|_| Error::InteriorNul {
                    what: "unsaved file path",
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths, files })
    }

    pub(crate) fn native(&self) -> Vec<NativeUnsavedFile<'_>> {
        self.paths
            .iter()
            .zip(self.files)
            .map(|(path, file)| NativeUnsavedFile {
                path: path.as_c_str(),
                contents: file.contents(),
            })
            .collect()
    }
}
