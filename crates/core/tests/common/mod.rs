use nslocate_api::ClassResolver;
use nslocate_core::{FileLocator, NamespaceRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary project tree; paths are relative to its root.
pub struct Fixture {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn canonical(&self, rel: &str) -> PathBuf {
        fs::canonicalize(self.path(rel)).unwrap()
    }

    /// Locator whose application directory is `<root>/app`.
    pub fn locator(
        &self,
        registry: NamespaceRegistry,
        resolver: Option<Arc<dyn ClassResolver>>,
    ) -> FileLocator {
        let mut builder = FileLocator::builder(Arc::new(registry)).app_path(self.path("app"));
        if let Some(resolver) = resolver {
            builder = builder.resolver(resolver);
        }
        builder.build()
    }
}

#[allow(dead_code)]
pub fn php_class(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        format!("<?php\n\nclass {name}\n{{\n}}\n")
    } else {
        format!("<?php\n\nnamespace {namespace};\n\nclass {name}\n{{\n}}\n")
    }
}
