use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A namespace prefix and the base directories it maps to, in search order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub prefix: String,
    pub paths: Vec<PathBuf>,
}

impl NamespaceEntry {
    pub fn new(prefix: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            paths,
        }
    }
}

/// One (prefix, base path) pair from the flattened registry listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamespacePath {
    pub prefix: String,
    pub path: PathBuf,
}
