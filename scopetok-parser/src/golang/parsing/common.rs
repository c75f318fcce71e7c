//! Parse errors

use std::fmt;
use std::ops::Range;

use crate::golang::lexing::LexError;

/// Why a document could not be parsed. Byte spans point into the parsed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source is not valid UTF-8
    Encoding { valid_up_to: usize },
    /// The lexical grammar rejected the source
    Lexical(LexError),
    /// The token stream does not form a Go file
    Syntax { message: String, span: Range<usize> },
}

impl ParseError {
    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::Encoding { valid_up_to } => *valid_up_to..*valid_up_to,
            ParseError::Lexical(err) => err.span(),
            ParseError::Syntax { span, .. } => span.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Encoding { valid_up_to } => {
                write!(f, "Parse error: invalid UTF-8 after byte {}", valid_up_to)
            }
            ParseError::Lexical(err) => write!(f, "Parse error: {}", err),
            ParseError::Syntax { message, span } => {
                write!(f, "Parse error: {} at {}..{}", message, span.start, span.end)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lexical(err)
    }
}
