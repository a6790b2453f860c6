use super::FileLocator;
use crate::error::Result;
use crate::scanner::qualified_class_name;
use crate::util::{canonicalize_or_keep, is_file};
use nslocate_api::NAMESPACE_SEPARATOR;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, trace, warn};

/// Drops the source extension from the last segment of a derived name.
///
/// The configured extension is stripped when present; any other extension
/// is removed the way `Path::file_stem` would.
fn strip_extension(segment: &str, ext: &str) -> String {
    let suffix = format!(".{ext}");
    if !ext.is_empty() && segment.len() > suffix.len() && segment.ends_with(&suffix) {
        return segment[..segment.len() - suffix.len()].to_string();
    }
    Path::new(segment)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| segment.to_string())
}

/// `Prefix\Sub\Name` for a file at `relative` below a namespace base path.
fn derive_class_name(prefix: &str, relative: &Path, ext: &str) -> Option<String> {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let last = segments.pop()?;
    segments.push(strip_extension(&last, ext));

    let sep = NAMESPACE_SEPARATOR.to_string();
    let local = segments.join(&sep);
    if prefix.is_empty() {
        Some(local)
    } else {
        Some(format!("{prefix}{sep}{local}"))
    }
}

impl FileLocator {
    /// Fully-qualified name of the first class declared in the file at
    /// `path`, or an empty string.
    ///
    /// Never fails: directories, unreadable files and files without a class
    /// declaration all yield `""`.
    pub fn get_classname(&self, path: &Path) -> String {
        if path.is_dir() {
            return String::new();
        }
        match fs::read(path) {
            Ok(bytes) => qualified_class_name(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Map a file back to the class it is expected to declare.
    ///
    /// Every namespace base path containing the file proposes a class name;
    /// the first one the resolver accepts is returned. Rejected names are
    /// remembered so later calls skip them without asking again.
    pub fn find_qualified_name_from_path(&self, path: &Path) -> Result<Option<String>> {
        let path = canonicalize_or_keep(path);
        if !is_file(&path)? {
            return Ok(None);
        }

        for entry in self.source.flattened() {
            let Ok(base) = fs::canonicalize(&entry.path) else {
                trace!("Skipping unresolvable base path {}", entry.path.display());
                continue;
            };
            if base.as_os_str().is_empty() {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&base) else {
                continue;
            };
            let Some(candidate) = derive_class_name(&entry.prefix, relative, &self.extension)
            else {
                continue;
            };

            if self.invalid_classnames.contains(&candidate) {
                trace!("Skipping known-invalid class name {}", candidate);
                continue;
            }

            if self.resolver.class_exists(&candidate) {
                debug!("{} -> {}", path.display(), candidate);
                return Ok(Some(candidate));
            }

            trace!("Recording invalid class name {}", candidate);
            self.invalid_classnames.insert(candidate);
        }

        Ok(None)
    }
}
