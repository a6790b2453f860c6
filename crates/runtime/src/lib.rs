use nslocate_api::LocateResult;
use nslocate_core::{AutoloadResolver, FileLocator, LocatorConfig};
use std::path::Path;
use std::sync::Arc;

/// Bootstraps a locator for the project at `root`.
///
/// Loads the project configuration, builds the namespace registry and an
/// autoload-backed class resolver sharing that registry.
pub fn build_default_locator(root: &Path, config: Option<&Path>) -> LocateResult<FileLocator> {
    let config = LocatorConfig::load(root, config)?;
    build_locator(root, &config)
}

/// Builds a locator from an already loaded configuration.
pub fn build_locator(root: &Path, config: &LocatorConfig) -> LocateResult<FileLocator> {
    let registry = Arc::new(config.registry(root));
    let classmap = config.classmap(root)?;

    tracing::info!(
        "Locator ready: {} namespaces, {} classmap entries, app path {}",
        registry.len(),
        classmap.len(),
        config.app_path(root).display()
    );

    let resolver =
        AutoloadResolver::new(registry.clone(), config.extension()).with_classmap(classmap);

    Ok(FileLocator::builder(registry)
        .app_path(config.app_path(root))
        .extension(config.extension())
        .resolver(Arc::new(resolver))
        .build())
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(nslocate_core::logging::init_logging(component, to_stderr))
}
