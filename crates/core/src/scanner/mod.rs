//! Class-name extraction from PHP-shaped source text.
//!
//! Not a parser: the lexer only recognises enough token shapes (names,
//! separators, comments, strings, tags) for the [`ClassNameScanner`] to
//! find the namespace declaration and the first class declaration.

mod class_name;
mod lexer;
mod token;

pub use class_name::{ClassNameScanner, ScanState, extract_class_name, qualified_class_name};
pub use lexer::{Lexer, tokenize};
pub use token::{Keyword, Token};
