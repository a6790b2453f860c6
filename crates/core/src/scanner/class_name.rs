use super::lexer::Lexer;
use super::token::{Keyword, Token};
use nslocate_api::NAMESPACE_SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for a namespace or class declaration
    Seeking,
    /// Inside `namespace A\B\...`, accumulating segments
    InNamespacePath,
    /// First class declaration captured
    Done,
}

/// Token-driven state machine recovering the namespace and the first
/// declared class of a source file.
///
/// Each token is judged together with the two tokens before it, so the
/// first two tokens of a stream are never capture targets.
#[derive(Debug)]
pub struct ClassNameScanner<'a> {
    state: ScanState,
    window: [Option<Token<'a>>; 2],
    index: usize,
    namespace: String,
    class_name: Option<&'a str>,
}

impl<'a> ClassNameScanner<'a> {
    pub fn new() -> Self {
        Self {
            state: ScanState::Seeking,
            window: [None, None],
            index: 0,
            namespace: String::new(),
            class_name: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn class_name(&self) -> Option<&'a str> {
        self.class_name
    }

    /// Feed one token; returns the state after it.
    pub fn feed(&mut self, token: Token<'a>) -> ScanState {
        if self.state == ScanState::Done {
            return self.state;
        }

        if self.index >= 2 {
            self.step(&token);
        }

        self.index += 1;
        self.window = [self.window[1].take(), Some(token)];
        self.state
    }

    fn step(&mut self, token: &Token<'a>) {
        let (Some(before), Some(prev)) = (&self.window[0], &self.window[1]) else {
            return;
        };

        let after_namespace_keyword = before.is_keyword(Keyword::Namespace) && prev.is_whitespace();

        match self.state {
            ScanState::Seeking if after_namespace_keyword => {
                // A new declaration replaces the previous one, even `namespace {`.
                self.namespace.clear();
                if let Some(name) = token.name() {
                    self.namespace.push_str(name);
                    self.state = ScanState::InNamespacePath;
                }
            }
            ScanState::InNamespacePath => match token {
                Token::Name(name) if *prev == Token::NsSeparator => {
                    self.namespace.push(NAMESPACE_SEPARATOR);
                    self.namespace.push_str(name);
                }
                Token::Name(_) | Token::NsSeparator => {}
                _ => self.state = ScanState::Seeking,
            },
            _ => {}
        }

        if before.is_keyword(Keyword::Class) && prev.is_whitespace() {
            if let Token::Name(name) = token {
                self.class_name = Some(*name);
                self.state = ScanState::Done;
            }
        }
    }

    /// Namespace and local class name, once a class has been seen.
    pub fn finish(self) -> Option<(String, String)> {
        self.class_name
            .map(|name| (self.namespace, name.to_string()))
    }
}

impl Default for ClassNameScanner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Namespace and local name of the first class declared in `source`.
pub fn extract_class_name(source: &str) -> Option<(String, String)> {
    let mut scanner = ClassNameScanner::new();
    for token in Lexer::new(source) {
        if scanner.feed(token) == ScanState::Done {
            break;
        }
    }
    scanner.finish()
}

/// `Namespace\Class` for the first class declared in `source`, or `""`.
///
/// A class outside any namespace still gets the leading separator.
pub fn qualified_class_name(source: &str) -> String {
    match extract_class_name(source) {
        Some((namespace, name)) => format!("{namespace}{NAMESPACE_SEPARATOR}{name}"),
        None => String::new(),
    }
}
