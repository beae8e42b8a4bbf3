//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat sequence of tokens for parsing. It handles:
//!
//! - Single-character punctuation via a static lookup table
//! - One-or-two character operators using one character of lookahead
//! - Line comments and whitespace, which produce no tokens
//! - Line tracking for error reporting
//! - Recovery from unexpected characters

pub mod lexer;
pub mod tokens;
