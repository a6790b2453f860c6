pub mod namespace;

pub use namespace::*;

/// Separator between namespace segments in a qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Source extension assumed when a caller does not name one.
pub const DEFAULT_EXTENSION: &str = "php";
