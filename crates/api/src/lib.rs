pub mod error;
pub mod models;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use error::{LocateError, LocateResult};
pub use models::*;
pub use registry::NamespaceSource;
pub use resolver::ClassResolver;
