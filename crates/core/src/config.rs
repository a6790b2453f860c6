//! Locator configuration.
//!
//! Read from `nslocate.json` in the project root (or the file named by
//! `--config` / `NSLOCATE_CONFIG`). Projects without one fall back to the
//! `autoload` sections of their `composer.json`.

use crate::error::{LocateError, Result};
use crate::registry::NamespaceRegistry;
use crate::resolver::scan_classmap;
use indexmap::IndexMap;
use nslocate_api::DEFAULT_EXTENSION;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "nslocate.json";
pub const COMPOSER_FILE: &str = "composer.json";
pub const CONFIG_ENV: &str = "NSLOCATE_CONFIG";

/// One path or a list of paths; composer accepts both.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PathList {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathList {
    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            PathList::One(p) => vec![p],
            PathList::Many(ps) => ps,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemNamespace {
    pub prefix: String,
    pub path: PathBuf,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LocatorConfig {
    /// Directory for references without a namespace
    pub app_path: Option<PathBuf>,
    /// Source extension, without the dot
    pub extension: Option<String>,
    /// Prefix → base path(s), in resolution order
    pub psr4: IndexMap<String, PathList>,
    /// Framework namespace, always resolved last
    pub system: Option<SystemNamespace>,
    /// Explicit class name → file entries
    pub classmap: IndexMap<String, PathBuf>,
    /// Files or directories scanned for classes at startup
    pub classmap_dirs: Vec<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
struct ComposerManifest {
    #[serde(default)]
    autoload: ComposerAutoload,
    #[serde(default, rename = "autoload-dev")]
    autoload_dev: ComposerAutoload,
}

#[derive(Deserialize, Debug, Default)]
struct ComposerAutoload {
    #[serde(default, rename = "psr-4")]
    psr4: IndexMap<String, PathList>,
    #[serde(default)]
    classmap: Vec<PathBuf>,
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LocateError::io(path, e))
}

impl LocatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config derived from a `composer.json` manifest.
    pub fn from_composer_str(json: &str) -> Result<Self> {
        let manifest: ComposerManifest = serde_json::from_str(json)?;
        let mut config = LocatorConfig::default();

        for autoload in [manifest.autoload, manifest.autoload_dev] {
            for (prefix, paths) in autoload.psr4 {
                config.psr4.insert(prefix, paths);
            }
            config.classmap_dirs.extend(autoload.classmap);
        }
        Ok(config)
    }

    /// Load the configuration for a project.
    ///
    /// Precedence: `explicit`, then `$NSLOCATE_CONFIG`, then
    /// `<root>/nslocate.json`, then `<root>/composer.json`.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            let path = resolve(root, &path);
            debug!("Loading config from {}", path.display());
            return Self::from_json_str(&read_to_string(&path)?);
        }

        let config_path = root.join(CONFIG_FILE);
        if config_path.is_file() {
            debug!("Loading config from {}", config_path.display());
            return Self::from_json_str(&read_to_string(&config_path)?);
        }

        let composer_path = root.join(COMPOSER_FILE);
        if composer_path.is_file() {
            info!("No {} found, using {}", CONFIG_FILE, composer_path.display());
            return Self::from_composer_str(&read_to_string(&composer_path)?);
        }

        Err(LocateError::Config(format!(
            "neither {} nor {} found in {}",
            CONFIG_FILE,
            COMPOSER_FILE,
            root.display()
        )))
    }

    pub fn extension(&self) -> &str {
        self.extension
            .as_deref()
            .map(|e| e.trim_start_matches('.'))
            .unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn app_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.app_path.as_deref().unwrap_or(Path::new("app")))
    }

    /// Registry with every path resolved against `root`.
    pub fn registry(&self, root: &Path) -> NamespaceRegistry {
        let mut registry = NamespaceRegistry::new();
        if let Some(system) = &self.system {
            registry.set_system_namespace(&system.prefix, resolve(root, &system.path));
        }
        for (prefix, paths) in &self.psr4 {
            let paths = paths.clone().into_vec();
            registry.add_namespace(prefix, paths.iter().map(|p| resolve(root, p)));
        }
        registry
    }

    /// Explicit classmap entries plus everything found under `classmap_dirs`.
    /// Explicit entries take precedence.
    pub fn classmap(&self, root: &Path) -> Result<IndexMap<String, PathBuf>> {
        let dirs: Vec<PathBuf> = self
            .classmap_dirs
            .iter()
            .map(|d| resolve(root, d))
            .collect();
        let mut classmap = scan_classmap(&dirs, self.extension())?;

        for (name, path) in &self.classmap {
            classmap.insert(name.clone(), resolve(root, path));
        }
        Ok(classmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nslocate_api::NamespaceSource;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "app_path": "application",
            "extension": ".php",
            "psr4": { "Config": "app/Config", "App": ["app", "shared"] },
            "system": { "prefix": "CodeIgniter", "path": "system" },
            "classmap": { "Foo\\Bar": "lib/Bar.php" }
        }"#;
        let config = LocatorConfig::from_json_str(json).unwrap();
        let root = Path::new("/project");

        assert_eq!(config.extension(), "php");
        assert_eq!(config.app_path(root), PathBuf::from("/project/application"));

        let registry = config.registry(root);
        let listing: Vec<(String, Vec<PathBuf>)> = registry
            .namespaces()
            .into_iter()
            .map(|e| (e.prefix, e.paths))
            .collect();
        assert_eq!(
            listing,
            vec![
                (
                    "Config".to_string(),
                    vec![PathBuf::from("/project/app/Config")]
                ),
                (
                    "App".to_string(),
                    vec![
                        PathBuf::from("/project/app"),
                        PathBuf::from("/project/shared")
                    ]
                ),
                (
                    "CodeIgniter".to_string(),
                    vec![PathBuf::from("/project/system")]
                ),
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let config = LocatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config.extension(), "php");
        assert_eq!(config.app_path(Path::new("/p")), PathBuf::from("/p/app"));
        assert!(config.registry(Path::new("/p")).is_empty());
    }

    #[test]
    fn test_composer_autoload() {
        let json = r#"{
            "name": "acme/site",
            "autoload": {
                "psr-4": { "App\\": "app/", "Acme\\Lib\\": ["lib/", "lib2/"] },
                "classmap": ["legacy/"]
            },
            "autoload-dev": { "psr-4": { "Tests\\": "tests/" } }
        }"#;
        let config = LocatorConfig::from_composer_str(json).unwrap();
        let registry = config.registry(Path::new("/p"));
        let prefixes: Vec<String> = registry.namespaces().into_iter().map(|e| e.prefix).collect();

        assert_eq!(prefixes, vec!["App", "Acme\\Lib", "Tests"]);
        assert_eq!(
            registry.namespace("Acme\\Lib"),
            Some(vec![PathBuf::from("/p/lib/"), PathBuf::from("/p/lib2/")])
        );
        assert_eq!(config.classmap_dirs, vec![PathBuf::from("legacy/")]);
    }

    #[test]
    fn test_load_precedence() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();

        assert!(matches!(
            LocatorConfig::load(root, None),
            Err(LocateError::Config(_))
        ));

        fs::write(
            root.join(COMPOSER_FILE),
            r#"{"autoload": {"psr-4": {"FromComposer\\": "src/"}}}"#,
        )
        .unwrap();
        let config = LocatorConfig::load(root, None).unwrap();
        assert!(config.psr4.contains_key("FromComposer\\"));

        fs::write(root.join(CONFIG_FILE), r#"{"psr4": {"FromConfig": "src"}}"#).unwrap();
        let config = LocatorConfig::load(root, None).unwrap();
        assert!(config.psr4.contains_key("FromConfig"));

        fs::write(root.join("custom.json"), r#"{"psr4": {"Custom": "src"}}"#).unwrap();
        let config = LocatorConfig::load(root, Some(Path::new("custom.json"))).unwrap();
        assert!(config.psr4.contains_key("Custom"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            LocatorConfig::from_json_str("{not json"),
            Err(LocateError::Json(_))
        ));
    }

    #[test]
    fn test_classmap_merges_scan_and_explicit() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("legacy")).unwrap();
        fs::write(root.join("legacy/Old.php"), "<?php class OldThing {}").unwrap();

        let json = r#"{"classmap": {"Extra\\Thing": "extra.php"}, "classmap_dirs": ["legacy"]}"#;
        let config = LocatorConfig::from_json_str(json).unwrap();
        let classmap = config.classmap(root).unwrap();

        assert_eq!(classmap.get("OldThing"), Some(&root.join("legacy/Old.php")));
        assert_eq!(classmap.get("Extra\\Thing"), Some(&root.join("extra.php")));
    }
}
