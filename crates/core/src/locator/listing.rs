use super::{FileLocator, ensure_ext};
use crate::error::{LocateError, Result};
use crate::util::{canonicalize_or_keep, is_dir, is_file, join_base};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Appends every regular file below `dir` to `out`, skipping dot-entries.
///
/// Entries within a directory are visited in file-name order.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let dir = canonicalize_or_keep(dir);
    if !is_dir(&dir)? {
        return Ok(());
    }

    let walker = WalkDir::new(&dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => out.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                match err.into_io_error() {
                    Some(io) => return Err(LocateError::io(path, io)),
                    // Symlink loop
                    None => trace!("Skipping loop at {}", path.display()),
                }
            }
        }
    }
    Ok(())
}

impl FileLocator {
    /// All files below `subpath` in every registered namespace directory.
    ///
    /// Results from different namespaces are concatenated in registry order;
    /// the same file can appear more than once if base paths overlap.
    pub fn list_files(&self, subpath: &str) -> Result<Vec<PathBuf>> {
        if subpath.is_empty() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in self.source.flattened() {
            collect_files(&join_base(&entry.path, subpath), &mut files)?;
        }
        debug!("list_files({}) -> {} files", subpath, files.len());
        Ok(files)
    }

    /// Like [`list_files`](Self::list_files), limited to one namespace.
    pub fn list_namespace_files(&self, prefix: &str, subpath: &str) -> Result<Vec<PathBuf>> {
        if subpath.is_empty() || prefix.is_empty() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for base in self.source.namespace(prefix).unwrap_or_default() {
            collect_files(&join_base(&base, subpath), &mut files)?;
        }
        debug!(
            "list_namespace_files({}, {}) -> {} files",
            prefix,
            subpath,
            files.len()
        );
        Ok(files)
    }

    /// Every namespace directory that holds `subpath`, as canonical paths.
    ///
    /// With `prioritize_app` the matches keep registry order. Without it,
    /// matches inside the application directory are moved to the end.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn search(&self, subpath: &str, ext: &str, prioritize_app: bool) -> Result<Vec<PathBuf>> {
        let subpath = ensure_ext(subpath, ext);
        let app_path = canonicalize_or_keep(&self.app_path);

        let mut found = Vec::new();
        let mut app_found = Vec::new();

        for entry in self.source.flattened() {
            let candidate = join_base(&entry.path, &subpath);
            if !is_file(&candidate)? {
                continue;
            }
            let full = canonicalize_or_keep(&candidate);
            if !prioritize_app && full.starts_with(&app_path) {
                app_found.push(full);
            } else {
                found.push(full);
            }
        }

        found.extend(app_found);
        let unique: IndexSet<PathBuf> = found.into_iter().collect();
        Ok(unique.into_iter().collect())
    }
}
