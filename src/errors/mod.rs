//! Error types and error reporting for the scanner.
//!
//! This module defines the diagnostics produced while scanning. It includes:
//!
//! - Error structures carrying the source line they refer to
//! - Specific error variants for each lexical error kind
//! - The `ErrorReporter` session object that prints diagnostics and holds
//!   the sticky error flag

pub mod errors;
