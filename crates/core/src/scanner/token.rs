/// Reserved words the scanner cares about; everything else reserved is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Class,
    Namespace,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text outside `<?php ... ?>`
    InlineHtml(&'a str),
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    /// Identifier that is not a reserved word
    Name(&'a str),
    Keyword(Keyword),
    NsSeparator,
    Variable(&'a str),
    StringLiteral,
    Number,
    Punct(char),
}

impl Token<'_> {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Name(name) => Some(*name),
            _ => None,
        }
    }
}

const RESERVED: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "die",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "eval",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Classifies an identifier; reserved words match case-insensitively.
pub(crate) fn classify_word(word: &str) -> Token<'_> {
    if word.eq_ignore_ascii_case("class") {
        Token::Keyword(Keyword::Class)
    } else if word.eq_ignore_ascii_case("namespace") {
        Token::Keyword(Keyword::Namespace)
    } else if RESERVED.iter().any(|r| word.eq_ignore_ascii_case(r)) {
        Token::Keyword(Keyword::Other)
    } else {
        Token::Name(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_word("class"), Token::Keyword(Keyword::Class));
        assert_eq!(classify_word("CLASS"), Token::Keyword(Keyword::Class));
        assert_eq!(classify_word("Namespace"), Token::Keyword(Keyword::Namespace));
        assert_eq!(classify_word("extends"), Token::Keyword(Keyword::Other));
        assert_eq!(classify_word("User"), Token::Name("User"));
        assert_eq!(classify_word("null"), Token::Name("null"));
    }
}
