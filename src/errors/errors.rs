use std::{
    fmt::Display,
    io::{self, Stderr, Write},
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    location: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            location: String::new(),
        }
    }

    /// Attaches free-text location context, printed directly after `Error`.
    /// Callers supply their own leading space, e.g. `" at end"`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_location(&self) -> &str {
        &self.location
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::Custom { .. } => "Custom",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "Character {:?} is not part of the language, remove it or move it into a comment",
                character
            )),
            ErrorImpl::Custom { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("{message}")]
    Custom { message: String },
}

/// Collects diagnostics for one scan session.
///
/// Every reported error is written to the sink as a single line and kept in
/// order. Once an error is reported the `had_error` flag stays set for the
/// lifetime of the reporter.
#[derive(Debug)]
pub struct ErrorReporter<W: Write = Stderr> {
    sink: W,
    had_error: bool,
    diagnostics: Vec<Error>,
}

impl ErrorReporter<Stderr> {
    pub fn new() -> Self {
        ErrorReporter::with_sink(io::stderr())
    }
}

impl Default for ErrorReporter<Stderr> {
    fn default() -> Self {
        ErrorReporter::new()
    }
}

impl<W: Write> ErrorReporter<W> {
    pub fn with_sink(sink: W) -> Self {
        ErrorReporter {
            sink,
            had_error: false,
            diagnostics: vec![],
        }
    }

    /// Shorthand for `report(line, "", message)`.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: usize, location: &str, message: &str) {
        self.report_error(
            Error::new(
                ErrorImpl::Custom {
                    message: String::from(message),
                },
                line,
            )
            .with_location(location),
        );
    }

    pub fn report_error(&mut self, error: Error) {
        // Write failures are ignored, the error is still recorded.
        let _ = writeln!(self.sink, "{}", error);

        self.had_error = true;
        self.diagnostics.push(error);
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
