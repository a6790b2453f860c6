use super::token::{Token, classify_word};

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn is_inline_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Streaming tokenizer over PHP-shaped source.
///
/// Never fails: any byte sequence produces some token stream. Multi-byte
/// UTF-8 only ever appears inside identifiers, strings, comments or inline
/// HTML, so every slice boundary falls on an ASCII byte.
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    in_code: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            in_code: false,
        }
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with_at(&self, at: usize, needle: &[u8]) -> bool {
        self.bytes
            .get(at..at + needle.len())
            .is_some_and(|s| s == needle)
    }

    fn find_from(&self, from: usize, needle: &[u8]) -> Option<usize> {
        (from..self.bytes.len()).find(|&i| self.starts_with_at(i, needle))
    }

    /// Position of the next `<?php` (followed by whitespace or end) or `<?=`.
    fn find_open_tag(&self, from: usize) -> Option<usize> {
        (from..self.bytes.len()).find(|&i| {
            if !self.starts_with_at(i, b"<?") {
                return false;
            }
            if self.bytes.get(i + 2) == Some(&b'=') {
                return true;
            }
            let is_php = self
                .bytes
                .get(i + 2..i + 5)
                .is_some_and(|s| s.eq_ignore_ascii_case(b"php"));
            is_php
                && self
                    .bytes
                    .get(i + 5)
                    .is_none_or(|b| b.is_ascii_whitespace())
        })
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.bytes.len() && pred(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Consumes a single line break ("\n" or "\r\n") if one follows.
    fn skip_newline(&mut self) {
        if self.starts_with_at(self.pos, b"\r\n") {
            self.pos += 2;
        } else if self.peek_at(0) == Some(b'\n') {
            self.pos += 1;
        }
    }

    fn inline_html(&mut self) -> Token<'a> {
        let start = self.pos;
        match self.find_open_tag(start) {
            Some(tag) if tag == start => {
                if self.peek_at(2) == Some(b'=') {
                    self.pos += 3;
                } else {
                    self.pos += 5;
                    if self.starts_with_at(self.pos, b"\r\n") {
                        self.pos += 2;
                    } else if self.peek_at(0).is_some_and(|b| b.is_ascii_whitespace()) {
                        self.pos += 1;
                    }
                }
                self.in_code = true;
                Token::OpenTag
            }
            Some(tag) => {
                self.pos = tag;
                Token::InlineHtml(&self.src[start..tag])
            }
            None => {
                self.pos = self.bytes.len();
                Token::InlineHtml(&self.src[start..])
            }
        }
    }

    fn line_comment(&mut self) -> Token<'a> {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'\n' || self.starts_with_at(self.pos, b"?>") {
                break;
            }
            self.pos += 1;
        }
        Token::Comment
    }

    fn block_comment(&mut self) -> Token<'a> {
        self.pos = match self.find_from(self.pos + 2, b"*/") {
            Some(end) => end + 2,
            None => self.bytes.len(),
        };
        Token::Comment
    }

    fn quoted(&mut self, quote: u8) -> Token<'a> {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b if b == quote => {
                    self.pos += 1;
                    break;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.bytes.len());
        Token::StringLiteral
    }

    /// Heredoc or nowdoc body, consumed up to and including the closing label.
    fn heredoc(&mut self) -> Option<Token<'a>> {
        let mut p = self.pos + 3;
        while self.bytes.get(p).copied().is_some_and(is_inline_space) {
            p += 1;
        }
        let quote = match self.bytes.get(p) {
            Some(&q @ (b'\'' | b'"')) => {
                p += 1;
                Some(q)
            }
            _ => None,
        };
        let label_start = p;
        while self.bytes.get(p).copied().is_some_and(is_ident_char) {
            p += 1;
        }
        if p == label_start {
            return None;
        }
        let label = &self.bytes[label_start..p];
        if let Some(q) = quote {
            if self.bytes.get(p) != Some(&q) {
                return None;
            }
            p += 1;
        }
        if !matches!(self.bytes.get(p), Some(b'\n' | b'\r')) {
            return None;
        }

        let mut line = p;
        while let Some(nl) = (line..self.bytes.len()).find(|&i| self.bytes[i] == b'\n') {
            let mut body = nl + 1;
            while self.bytes.get(body).copied().is_some_and(is_inline_space) {
                body += 1;
            }
            if self.starts_with_at(body, label)
                && !self
                    .bytes
                    .get(body + label.len())
                    .copied()
                    .is_some_and(is_ident_char)
            {
                self.pos = body + label.len();
                return Some(Token::StringLiteral);
            }
            line = nl + 1;
        }
        self.pos = self.bytes.len();
        Some(Token::StringLiteral)
    }

    fn code_token(&mut self) -> Token<'a> {
        let b = self.bytes[self.pos];
        let next = self.peek_at(1);

        match b {
            _ if b.is_ascii_whitespace() => {
                self.take_while(|c| c.is_ascii_whitespace());
                Token::Whitespace
            }
            b'?' if next == Some(b'>') => {
                self.pos += 2;
                self.skip_newline();
                self.in_code = false;
                Token::CloseTag
            }
            b'#' if next == Some(b'[') => {
                self.pos += 1;
                Token::Punct('#')
            }
            b'#' => self.line_comment(),
            b'/' if next == Some(b'/') => self.line_comment(),
            b'/' if next == Some(b'*') => self.block_comment(),
            b'\'' | b'"' | b'`' => self.quoted(b),
            b'<' if self.starts_with_at(self.pos, b"<<<") => match self.heredoc() {
                Some(token) => token,
                None => {
                    self.pos += 1;
                    Token::Punct('<')
                }
            },
            b'$' if next.is_some_and(is_ident_start) => {
                let start = self.pos;
                self.pos += 1;
                self.take_while(is_ident_char);
                Token::Variable(&self.src[start..self.pos])
            }
            b'\\' => {
                self.pos += 1;
                Token::NsSeparator
            }
            _ if is_ident_start(b) => {
                let start = self.pos;
                self.take_while(is_ident_char);
                classify_word(&self.src[start..self.pos])
            }
            _ if b.is_ascii_digit() => {
                self.take_while(|c| c.is_ascii_alphanumeric() || c == b'_' || c == b'.');
                Token::Number
            }
            _ => {
                self.pos += 1;
                Token::Punct(b as char)
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        if self.in_code {
            Some(self.code_token())
        } else {
            Some(self.inline_html())
        }
    }
}

pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    Lexer::new(src).collect()
}
