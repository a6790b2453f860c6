use crate::models::{NamespaceEntry, NamespacePath};
use std::path::PathBuf;

/// Read-only view of the namespace registry consulted by the locator.
///
/// Ordering is part of the contract: `namespaces` lists entries in
/// registration order, and the framework namespace (if one is registered)
/// always comes last. Forward resolution relies on this, since the last
/// matching prefix wins.
pub trait NamespaceSource: Send + Sync {
    /// All registered namespaces, framework namespace last.
    fn namespaces(&self) -> Vec<NamespaceEntry>;

    /// Base paths registered for one prefix.
    fn namespace(&self, prefix: &str) -> Option<Vec<PathBuf>>;

    /// One item per (prefix, path) pair, in listing order.
    fn flattened(&self) -> Vec<NamespacePath> {
        self.namespaces()
            .into_iter()
            .flat_map(|entry| {
                let prefix = entry.prefix;
                entry.paths.into_iter().map(move |path| NamespacePath {
                    prefix: prefix.clone(),
                    path,
                })
            })
            .collect()
    }
}
