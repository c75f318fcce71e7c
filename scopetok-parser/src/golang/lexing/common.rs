//! Common lexer module
//!
//! Shared options and errors for the lexing pipeline.

use serde::Deserialize;
use std::fmt;
use std::ops::Range;

/// Knobs for the lexing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Insert `;` at line ends the way Go's scanner does.
    pub insert_semicolons: bool,
    /// Also insert the final `;` at end of input. Only meaningful for complete documents; a
    /// window cut at the cursor does not end a statement.
    pub semicolon_at_eof: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            insert_semicolons: true,
            semicolon_at_eof: false,
        }
    }
}

impl LexerOptions {
    /// Options for lexing a complete document.
    pub fn for_document() -> Self {
        LexerOptions {
            insert_semicolons: true,
            semicolon_at_eof: true,
        }
    }
}

/// Errors that can occur during strict lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Bytes that do not start any Go lexeme
    Unrecognized(Range<usize>),
    /// A string, rune or comment missing its closing delimiter
    Unterminated(Range<usize>),
}

impl LexError {
    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::Unrecognized(span) | LexError::Unterminated(span) => span.clone(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::Unrecognized(span) => {
                write!(f, "Lexing error: unrecognized input at {}..{}", span.start, span.end)
            }
            LexError::Unterminated(span) => {
                write!(f, "Lexing error: unterminated literal at {}..{}", span.start, span.end)
            }
        }
    }
}

impl std::error::Error for LexError {}
