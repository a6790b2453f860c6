//! Namespace-aware file locator.
//!
//! Resolves logical references such as `App\Models\User` to files under the
//! registered namespace directories, and maps files back to the class
//! names they are expected to declare.
//!
//! ## Ordering
//!
//! Every operation walks the registry in [`NamespaceSource::namespaces`]
//! order. For forward resolution the *last* matching prefix wins; within a
//! prefix the first path holding the file wins. The framework namespace is
//! listed last by the registry and so is always consulted last.

mod forward;
mod listing;
mod reverse;

pub use forward::resolve_namespaced;

use dashmap::DashSet;
use nslocate_api::{ClassResolver, DEFAULT_EXTENSION, NamespaceSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Appends `.ext` unless `path` already ends with it (literal, case-sensitive).
pub fn ensure_ext(path: &str, ext: &str) -> String {
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() {
        return path.to_string();
    }
    let suffix = format!(".{ext}");
    if path.ends_with(&suffix) {
        path.to_string()
    } else {
        format!("{path}{suffix}")
    }
}

pub struct FileLocator {
    source: Arc<dyn NamespaceSource>,
    resolver: Arc<dyn ClassResolver>,
    app_path: PathBuf,
    extension: String,
    /// Class names already known not to resolve; only ever grows.
    invalid_classnames: DashSet<String>,
}

impl FileLocator {
    pub fn builder(source: Arc<dyn NamespaceSource>) -> FileLocatorBuilder {
        FileLocatorBuilder::new(source)
    }

    pub fn source(&self) -> &Arc<dyn NamespaceSource> {
        &self.source
    }

    pub fn resolver(&self) -> &Arc<dyn ClassResolver> {
        &self.resolver
    }

    /// Base directory for references without a namespace
    pub fn app_path(&self) -> &PathBuf {
        &self.app_path
    }

    /// Extension of source files, without the leading dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Snapshot of the class names recorded as unresolvable
    pub fn invalid_classnames(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .invalid_classnames
            .iter()
            .map(|n| n.key().clone())
            .collect();
        names.sort();
        names
    }
}

pub struct FileLocatorBuilder {
    source: Arc<dyn NamespaceSource>,
    resolver: Option<Arc<dyn ClassResolver>>,
    app_path: PathBuf,
    extension: String,
}

impl FileLocatorBuilder {
    pub fn new(source: Arc<dyn NamespaceSource>) -> Self {
        Self {
            source,
            resolver: None,
            app_path: PathBuf::from("app"),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn app_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.app_path = path.into();
        self
    }

    pub fn extension(mut self, ext: impl AsRef<str>) -> Self {
        self.extension = ext.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn ClassResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Without an explicit resolver no class name ever resolves.
    pub fn build(self) -> FileLocator {
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(|_: &str| false) as Arc<dyn ClassResolver>);

        FileLocator {
            source: self.source,
            resolver,
            app_path: self.app_path,
            extension: self.extension,
            invalid_classnames: DashSet::new(),
        }
    }
}
