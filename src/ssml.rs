//! Loading SSML documents.
//!
//! The document is passed to the engine as-is. No parsing or validation happens here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Error, Result};

/// Reads the whole SSML document at `path` into memory.
///
/// The content is returned byte for byte, including any byte order mark. A missing file is
/// reported as [`Error::FileNotFound`], or as [`Error::DirectoryNotFound`] if its directory does
/// not exist either. Content that is not valid UTF-8 is reported as [`Error::InvalidEncoding`].
pub fn read_ssml_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| file_error(path, err))?;
    debug!("read {} bytes of SSML from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|source| Error::InvalidEncoding {
        path: path.to_owned(),
        source,
    })
}

/// Returns `true` if the directory that would contain `path` exists. A bare file name refers to
/// the current directory, which always exists.
pub fn parent_dir_exists(path: &Path) -> bool {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
        _ => true,
    }
}

fn file_error(path: &Path, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound if !parent_dir_exists(path) => {
            Error::DirectoryNotFound(PathBuf::from(path))
        }
        io::ErrorKind::NotFound => Error::FileNotFound(PathBuf::from(path)),
        _ => Error::File {
            path: PathBuf::from(path),
            source: err,
        },
    }
}
