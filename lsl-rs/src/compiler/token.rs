//! Source tokens and a small LSL lexer.
//!
//! Tokens keep their exact source text (string and char literals include
//! their quotes) so the tree builder can decide how to classify them.

use serde::Serialize;

/// An atomic lexical unit and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Token {
            text: text.into(),
            line,
        }
    }
}

/// Two-character operators, matched before single characters.
const OPERATORS2: &[&str] = &[
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=",
];

// ── Lexer ─────────────────────────────────────────────────────────────────────

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer { src, pos: 0, line: 1 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match (self.peek(), self.peek2()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.advance();
                    }
                }
                (Some('/'), Some('*')) => {
                    self.pos += 2;
                    while self.peek().is_some() && !self.rest().starts_with("*/") {
                        self.advance();
                    }
                    if self.rest().starts_with("*/") {
                        self.pos += 2;
                    }
                }
                _ => break,
            }
        }
    }

    fn read_quoted(&mut self, quote: char) {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => break,
                '\\' => {
                    self.advance();
                    if self.peek() != Some('\n') {
                        self.advance();
                    }
                }
                c if c == quote => {
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn read_ident(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
    }

    fn read_number(&mut self, start: usize) {
        let is_hex = self.src[start..].starts_with("0x") || self.src[start..].starts_with("0X");
        while let Some(ch) = self.peek() {
            let prev_is_exp = matches!(self.src[start..self.pos].chars().last(), Some('e' | 'E'));
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
                self.advance();
            } else if (ch == '+' || ch == '-') && prev_is_exp && !is_hex {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_trivia();
        let start = self.pos;
        let line = self.line;
        let ch = self.advance()?;

        match ch {
            '"' | '\'' => self.read_quoted(ch),
            c if c.is_ascii_digit() => self.read_number(start),
            '.' if matches!(self.peek(), Some(d) if d.is_ascii_digit()) => self.read_number(start),
            c if c.is_ascii_alphabetic() || c == '_' => self.read_ident(),
            _ => {
                if OPERATORS2.iter().any(|op| self.src[start..].starts_with(*op)) {
                    self.advance();
                }
            }
        }

        Some(Token::new(&self.src[start..self.pos], line))
    }
}

/// Split LSL source into tokens with 1-based line numbers.
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.next_token() {
        tokens.push(tok);
    }
    tokens
}

// ── Tests ─────────────────────────────────────────────────────────────────────
