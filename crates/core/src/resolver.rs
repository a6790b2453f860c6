//! Class-existence predicates used by reverse resolution.
//!
//! - [`KnownClasses`]: a fixed table of class names registered at startup.
//! - [`AutoloadResolver`]: answers the way an autoloader would, from a
//!   classmap plus the PSR-4 layout on disk.

use crate::error::{LocateError, Result};
use crate::locator::{ensure_ext, resolve_namespaced};
use crate::scanner::qualified_class_name;
use indexmap::IndexMap;
use nslocate_api::{ClassResolver, NAMESPACE_SEPARATOR, NamespaceSource};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

fn normalize(fqcn: &str) -> &str {
    fqcn.trim_start_matches(NAMESPACE_SEPARATOR)
}

/// Class names registered up front. A leading separator is ignored.
#[derive(Debug, Clone, Default)]
pub struct KnownClasses {
    names: HashSet<String>,
}

impl KnownClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, fqcn: &str) -> &mut Self {
        self.names.insert(normalize(fqcn).to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownClasses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut known = Self::new();
        for name in iter {
            known.register(name.as_ref());
        }
        known
    }
}

impl ClassResolver for KnownClasses {
    fn class_exists(&self, fqcn: &str) -> bool {
        self.names.contains(normalize(fqcn))
    }
}

/// Resolves a class if the classmap lists it, or if its PSR-4 location
/// holds a file declaring exactly that class.
pub struct AutoloadResolver {
    source: Arc<dyn NamespaceSource>,
    classmap: IndexMap<String, PathBuf>,
    extension: String,
}

impl AutoloadResolver {
    pub fn new(source: Arc<dyn NamespaceSource>, extension: &str) -> Self {
        Self {
            source,
            classmap: IndexMap::new(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn with_classmap(mut self, classmap: IndexMap<String, PathBuf>) -> Self {
        for (name, path) in classmap {
            self.classmap.insert(normalize(&name).to_string(), path);
        }
        self
    }

    pub fn classmap(&self) -> &IndexMap<String, PathBuf> {
        &self.classmap
    }

    fn declares(path: &Path, fqcn: &str) -> bool {
        match fs::read(path) {
            Ok(bytes) => {
                let declared = qualified_class_name(&String::from_utf8_lossy(&bytes));
                normalize(&declared) == fqcn
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl ClassResolver for AutoloadResolver {
    fn class_exists(&self, fqcn: &str) -> bool {
        let fqcn = normalize(fqcn);
        if fqcn.is_empty() {
            return false;
        }

        if let Some(path) = self.classmap.get(fqcn) {
            trace!("{} found in classmap at {}", fqcn, path.display());
            return path.is_file();
        }

        let reference = ensure_ext(fqcn, &self.extension);
        match resolve_namespaced(self.source.as_ref(), &reference, None) {
            Ok(Some(path)) => Self::declares(&path, fqcn),
            Ok(None) => false,
            Err(e) => {
                warn!("Autoload lookup for {} failed: {}", fqcn, e);
                false
            }
        }
    }
}

/// Builds a classmap by scanning files (or directories of files) with the
/// given extension and recording the class each one declares.
///
/// Files without a class declaration are skipped; for duplicate class
/// names the first file scanned wins.
pub fn scan_classmap(roots: &[PathBuf], extension: &str) -> Result<IndexMap<String, PathBuf>> {
    let extension = extension.trim_start_matches('.');
    let mut classmap = IndexMap::new();

    for root in roots {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                LocateError::io(path, io)
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(extension)
            {
                continue;
            }

            let content = fs::read(path).map_err(|e| LocateError::io(path, e))?;
            let declared = qualified_class_name(&String::from_utf8_lossy(&content));
            let name = normalize(&declared);
            if !name.is_empty() && !classmap.contains_key(name) {
                classmap.insert(name.to_string(), path.to_path_buf());
            }
        }
    }

    debug!("Classmap scan found {} classes", classmap.len());
    Ok(classmap)
}
