pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod util;

pub use config::LocatorConfig;
pub use error::Result;
pub use locator::{FileLocator, FileLocatorBuilder};
pub use registry::NamespaceRegistry;
pub use resolver::{AutoloadResolver, KnownClasses};
