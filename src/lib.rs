#![allow(clippy::module_inception)]

//! Lexical analysis front end for the Lox scripting language.
//!
//! ```
//! use loxscan::{errors::errors::ErrorReporter, lexer::{lexer::tokenize, tokens::TokenKind}};
//!
//! let mut reporter = ErrorReporter::with_sink(Vec::new());
//! let tokens = tokenize("(1)", &mut reporter);
//!
//! assert_eq!(tokens[0].kind, TokenKind::LeftParen);
//! assert!(reporter.had_error());
//! ```

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte range of a token in its source text. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slices `source` with this span. Returns `None` if the span is out of
    /// bounds or does not fall on character boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
