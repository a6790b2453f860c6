//! Filesystem checks that tell "nothing there" apart from real faults.

use crate::error::{LocateError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

fn is_absent(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound
            | ErrorKind::NotADirectory
            | ErrorKind::InvalidInput
            | ErrorKind::InvalidFilename
    )
}

/// `Ok(true)` if a regular file (following symlinks) exists at `path`.
pub fn is_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if is_absent(e.kind()) => Ok(false),
        Err(e) => Err(LocateError::io(path, e)),
    }
}

/// `Ok(true)` if a directory (following symlinks) exists at `path`.
pub fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if is_absent(e.kind()) => Ok(false),
        Err(e) => Err(LocateError::io(path, e)),
    }
}

/// Canonical form of `path`, or `path` unchanged when it cannot be resolved.
pub fn canonicalize_or_keep(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Joins a base directory and a relative reference with exactly one `/`.
///
/// Plain string concatenation: an absolute `relative` is appended, not
/// substituted the way `Path::join` would.
pub fn join_base(base: &Path, relative: &str) -> PathBuf {
    let base = base.to_string_lossy();
    PathBuf::from(format!("{}/{}", base.trim_end_matches('/'), relative))
}
