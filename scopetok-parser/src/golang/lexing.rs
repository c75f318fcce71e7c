//! Lexer
//!
//!     This module orchestrates tokenization of Go text into the abstracted completion
//!     vocabulary.
//!
//! The Lexing Pipeline
//!
//!     1. Core tokenization using logos. See [base_tokenization](base_tokenization).
//!        Newlines and comments are real tokens at this stage.
//!
//!     2. Semicolon insertion. See
//!        [semicolon_insertion](transformations::semicolon_insertion).
//!        Trivia is dropped and Go's implicit semicolons are materialized.
//!
//!     3. Abstraction. Each remaining lexeme becomes a [`Token`]: literals collapse to their
//!        kind, identifiers to the placeholder (except `nil` and `err`), everything else keeps
//!        its spelling.
//!
//!     Byte ranges are carried through every step, so callers that need the concrete text of a
//!     token (full rendering, identifier extraction) can still recover it.
//!
//! Failure Model
//!
//!     Tokenizing a window never fails. The text handed in is usually cut at the cursor and is
//!     rarely valid on its own: unrecognized bytes are skipped and unterminated literals still
//!     count as one literal. Only [`lex_document`] is strict, for the structural parser.

pub mod base_tokenization;
pub mod common;
pub mod transformations;

pub use base_tokenization::{scan, scan_strict};
pub use common::{LexError, LexerOptions};

use std::collections::HashSet;
use std::ops::Range;

use crate::golang::token::{GoToken, Token, TokenList, BOOLEAN_IDENTIFIERS, SENTINEL_IDENTIFIERS};
use transformations::SemicolonInsertionMapper;

/// Lex `text` into abstracted tokens paired with their byte ranges in `text`.
pub fn lex(text: &str, options: &LexerOptions) -> Vec<(Token, Range<usize>)> {
    SemicolonInsertionMapper::new(options)
        .map(scan(text), text)
        .into_iter()
        .filter_map(|(kind, range)| {
            let slice = text.get(range.clone()).unwrap_or_default();
            Token::from_lexeme(kind, slice).map(|token| (token, range))
        })
        .collect()
}

/// Tokenize `text` with the default options.
pub fn tokenize(text: &str) -> TokenList {
    tokenize_with(text, &LexerOptions::default())
}

pub fn tokenize_with(text: &str, options: &LexerOptions) -> TokenList {
    lex(text, options).into_iter().map(|(token, _)| token).collect()
}

/// Lex a complete document for parsing: strict, trivia-free, with every implicit semicolon.
pub fn lex_document(source: &str) -> Result<Vec<(GoToken, Range<usize>)>, LexError> {
    let tokens = scan_strict(source)?;
    Ok(SemicolonInsertionMapper::new(&LexerOptions::for_document()).map(tokens, source))
}

/// Distinct identifier spellings of `text`, in order of first appearance.
///
/// Sentinel and boolean spellings are left out: they never appear as the identifier
/// placeholder in a token stream.
pub fn identifiers(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan(text)
        .into_iter()
        .filter(|(kind, _)| *kind == GoToken::Ident)
        .filter_map(|(_, range)| text.get(range))
        .filter(|name| !SENTINEL_IDENTIFIERS.contains(name) && !BOOLEAN_IDENTIFIERS.contains(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
