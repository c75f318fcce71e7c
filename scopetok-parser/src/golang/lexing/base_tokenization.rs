//! Base tokenization implementation for the Go lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! This is NOT a transformation - transformations operate on token streams.
//! This is the source that creates the initial token stream from a string.

use logos::Logos;

use super::common::LexError;
use crate::golang::token::GoToken;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Tokenize source code with location information, skipping what logos cannot recognize.
///
/// Never fails. Unrecognized bytes are dropped (and logged at trace level), which is how
/// partial and malformed text near the cursor keeps producing tokens.
pub fn scan(source: &str) -> Vec<(GoToken, logos::Span)> {
    let mut lexer = GoToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => log::trace!("skipping unrecognized input at {:?}", lexer.span()),
        }
    }

    tokens
}

/// Tokenize a complete document, rejecting anything a Go compiler would reject lexically.
///
/// A byte order mark at offset 0 is skipped; spans still point into `source`.
pub fn scan_strict(source: &str) -> Result<Vec<(GoToken, logos::Span)>, LexError> {
    let offset = if source.starts_with(BYTE_ORDER_MARK) {
        BYTE_ORDER_MARK.len_utf8()
    } else {
        0
    };
    let mut lexer = GoToken::lexer(&source[offset..]);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let span = span.start + offset..span.end + offset;
        match result {
            Ok(token) if token.is_terminated(lexer.slice()) => tokens.push((token, span)),
            Ok(_) => return Err(LexError::Unterminated(span)),
            Err(()) => return Err(LexError::Unrecognized(span)),
        }
    }

    Ok(tokens)
}
