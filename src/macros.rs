//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps token construction in the lexer to a single line per call site.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The decoded literal value, if any
/// * `$line` - The line the token starts on
/// * `$span` - The byte range of the token in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, String::from("+"), None, 1, Span { start: 0, end: 1 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
            span: $span,
        }
    };
}
