use std::io::Write;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorReporter},
    Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, COMPOUND_LOOKUP, SINGLE_CHAR_LOOKUP};

lazy_static! {
    // `.` stops before '\n', so the comment ends at the newline or end of input
    static ref LINE_COMMENT: Regex = Regex::new("^//.*").unwrap();
}

pub struct Lexer<'src, 'rep, W: Write> {
    tokens: Vec<Token>,
    source: &'src str,
    start: usize,
    pos: usize,
    line: usize,
    reporter: &'rep mut ErrorReporter<W>,
}

impl<'src, 'rep, W: Write> Lexer<'src, 'rep, W> {
    pub fn new(source: &'src str, reporter: &'rep mut ErrorReporter<W>) -> Self {
        Lexer {
            tokens: vec![],
            source,
            start: 0,
            pos: 0,
            line: 1,
            reporter,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character only if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn push(&mut self, kind: TokenKind) {
        let lexeme = String::from(&self.source[self.start..self.pos]);
        let span = Span::new(self.start, self.pos);

        self.tokens.push(MK_TOKEN!(kind, lexeme, None, self.line, span));
    }

    fn scan_token(&mut self) {
        let c = match self.advance() {
            Some(c) => c,
            None => return,
        };

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c) {
            self.push(*kind);
            return;
        }

        if let Some((single, double)) = COMPOUND_LOOKUP.get(&c) {
            compound_handler(self, *single, *double);
            return;
        }

        match c {
            '/' => slash_handler(self),
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            _ => self.reporter.report_error(Error::new(
                ErrorImpl::UnexpectedCharacter { character: c },
                self.line,
            )),
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.pos;
            self.scan_token();
        }

        self.start = self.pos;
        self.push(TokenKind::EOF);

        self.tokens
    }
}

fn compound_handler<W: Write>(
    lexer: &mut Lexer<'_, '_, W>,
    single: TokenKind,
    double: TokenKind,
) {
    if lexer.matches('=') {
        lexer.push(double);
    } else {
        lexer.push(single);
    }
}

fn slash_handler<W: Write>(lexer: &mut Lexer<'_, '_, W>) {
    let source = lexer.source;

    match LINE_COMMENT.find(&source[lexer.start..]) {
        Some(comment) => lexer.pos = lexer.start + comment.end(),
        None => lexer.push(TokenKind::Slash),
    }
}

/// Scans `source` into tokens, always ending with a single `EOF` token.
///
/// Characters outside the language are reported to `reporter` and skipped;
/// scanning never stops early.
pub fn tokenize<W: Write>(source: &str, reporter: &mut ErrorReporter<W>) -> Vec<Token> {
    Lexer::new(source, reporter).scan_tokens()
}
