//! Ordered in-memory namespace registry.
//!
//! Provides the prefix → base paths table the locator reads from.

use indexmap::IndexMap;
use nslocate_api::{NAMESPACE_SEPARATOR, NamespaceEntry, NamespaceSource};
use std::path::PathBuf;

/// Namespace registry preserving registration order.
///
/// Re-registering a prefix replaces its paths but keeps its position. The
/// system namespace is held apart and always listed last.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    namespaces: IndexMap<String, Vec<PathBuf>>,
    system: Option<NamespaceEntry>,
}

fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_matches(NAMESPACE_SEPARATOR).to_string()
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = NamespaceEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.add_namespace(&entry.prefix, entry.paths);
        }
        registry
    }

    /// Register (or replace) the paths for a prefix
    pub fn add_namespace<P: Into<PathBuf>>(
        &mut self,
        prefix: &str,
        paths: impl IntoIterator<Item = P>,
    ) -> &mut Self {
        let prefix = normalize_prefix(prefix);
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();

        if let Some(system) = self.system.as_mut().filter(|s| s.prefix == prefix) {
            system.paths = paths;
        } else {
            self.namespaces.insert(prefix, paths);
        }
        self
    }

    /// Register the framework namespace, resolved after everything else
    pub fn set_system_namespace(&mut self, prefix: &str, path: impl Into<PathBuf>) -> &mut Self {
        let prefix = normalize_prefix(prefix);
        // A regular registration under the same prefix would otherwise shadow it.
        self.namespaces.shift_remove(&prefix);
        self.system = Some(NamespaceEntry::new(prefix, vec![path.into()]));
        self
    }

    pub fn system_prefix(&self) -> Option<&str> {
        self.system.as_ref().map(|s| s.prefix.as_str())
    }

    /// Number of registered prefixes, system namespace included
    pub fn len(&self) -> usize {
        self.namespaces.len() + usize::from(self.system.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NamespaceSource for NamespaceRegistry {
    fn namespaces(&self) -> Vec<NamespaceEntry> {
        self.namespaces
            .iter()
            .map(|(prefix, paths)| NamespaceEntry::new(prefix.clone(), paths.clone()))
            .chain(self.system.iter().cloned())
            .collect()
    }

    fn namespace(&self, prefix: &str) -> Option<Vec<PathBuf>> {
        let prefix = normalize_prefix(prefix);
        if let Some(paths) = self.namespaces.get(&prefix) {
            return Some(paths.clone());
        }
        self.system
            .as_ref()
            .filter(|s| s.prefix == prefix)
            .map(|s| s.paths.clone())
    }
}
