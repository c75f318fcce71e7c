//! Structural parsing
//!
//!     Scope resolution needs to know which top-level declaration surrounds the cursor, and
//!     where the brace blocks inside it are. This module recovers exactly that from a complete
//!     document and nothing more: no expression trees, no statements, no types.
//!
//!     The parse is all-or-nothing. A lexical error (an unknown byte, an unterminated literal or
//!     comment), an unbalanced delimiter, or anything at top level that is not a declaration
//!     fails the whole file. Callers treat a failure as the usual state of a file being edited
//!     and fall back to lexing; see [scope](crate::golang::scope).
//!
//!     The grammar lives in [declarations] and is built from the helpers in [combinators],
//!     running over the semicolon-inserted token stream of [lex_document].

pub mod combinators;
pub mod common;
pub mod declarations;
pub mod ir;

pub use common::ParseError;
pub use ir::{Declaration, DeclarationKind, SourceFile};

use chumsky::Parser;
use std::ops::Range;

use crate::golang::lexing::lex_document;
use combinators::{ParserError, TokenLocation};

/// Parse raw bytes. Anything that is not UTF-8 is a parse error.
pub fn parse_bytes(source: &[u8]) -> Result<SourceFile, ParseError> {
    let text = std::str::from_utf8(source).map_err(|e| ParseError::Encoding {
        valid_up_to: e.valid_up_to(),
    })?;
    parse_source_file(text)
}

/// Parse a complete Go file into its top-level declarations.
pub fn parse_source_file(source: &str) -> Result<SourceFile, ParseError> {
    let tokens = lex_document(source)?;
    let (package, nodes) = declarations::source_file()
        .parse(tokens.clone())
        .map_err(|errors| syntax_error(source, &tokens, errors))?;

    let declarations = nodes
        .into_iter()
        .map(|node| Declaration {
            name: text_at(source, &node.name),
            kind: node.kind,
            span: node.span,
            blocks: node.blocks,
        })
        .collect();

    Ok(SourceFile {
        package: text_at(source, &package),
        declarations,
    })
}

fn text_at(source: &str, range: &Range<usize>) -> String {
    source.get(range.clone()).unwrap_or_default().to_string()
}

/// Convert the first chumsky error into a byte-located [`ParseError`].
///
/// Chumsky reports spans as token indices; they are mapped back onto the token locations.
fn syntax_error(source: &str, tokens: &[TokenLocation], errors: Vec<ParserError>) -> ParseError {
    let eof = source.len()..source.len();
    let Some(error) = errors.into_iter().next() else {
        return ParseError::Syntax {
            message: "invalid document".to_string(),
            span: eof,
        };
    };

    let span = tokens
        .get(error.span().start)
        .map(|(_, range)| range.clone())
        .unwrap_or(eof);
    let found = match error.found() {
        Some((token, _)) => format!("unexpected {:?}", token),
        None => "unexpected end of input".to_string(),
    };
    let message = match error.label() {
        Some(label) => format!("{} in {}", found, label),
        None => found,
    };

    ParseError::Syntax { message, span }
}
