//! Semicolon insertion mapper
//!
//!     Go's formal grammar terminates statements with semicolons, but source code rarely spells
//!     them. The scanner inserts one when a line ends right after a token that can end a
//!     statement (identifiers, basic literals, `break continue fallthrough return`, `++ --`,
//!     and closing delimiters). Completion models are trained on that stream, so the tokenizer
//!     reproduces it.
//!
//!     This mapper also removes trivia. Line comments disappear and the newline after them does
//!     the work. A general comment that spans lines acts like a newline.
//!
//! Algorithm
//!
//!     1. Track whether the last emitted token can end a statement
//!     2. On a newline (or a multi-line comment) with that flag set, emit `;` spanning the
//!        newline (or the comment) and clear the flag
//!     3. Drop all trivia; pass everything else through unchanged
//!     4. Optionally emit a zero-width `;` at end of input when the flag is still set
use crate::golang::lexing::common::LexerOptions;
use crate::golang::token::GoToken;
use std::ops::Range as ByteRange;

/// A mapper that drops trivia and inserts Go's implicit semicolons.
///
/// Ranges of passed-through tokens are preserved exactly.
pub struct SemicolonInsertionMapper {
    enabled: bool,
    at_eof: bool,
}

impl SemicolonInsertionMapper {
    pub fn new(options: &LexerOptions) -> Self {
        SemicolonInsertionMapper {
            enabled: options.insert_semicolons,
            at_eof: options.semicolon_at_eof,
        }
    }

    /// Transforms the flat token stream of `source`.
    ///
    /// # Example
    ///
    /// Input:  `[Ident, Define, Int, Newline, RBrace]`
    /// Output: `[Ident, Define, Int, Semicolon, RBrace]`
    pub fn map(
        &self,
        tokens: Vec<(GoToken, ByteRange<usize>)>,
        source: &str,
    ) -> Vec<(GoToken, ByteRange<usize>)> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut can_end_statement = false;

        for (token, range) in tokens {
            let breaks_line = match token {
                GoToken::Newline => true,
                GoToken::BlockComment => source
                    .get(range.clone())
                    .map(|text| text.contains('\n'))
                    .unwrap_or(false),
                GoToken::LineComment => false,
                _ => {
                    can_end_statement = token.ends_statement();
                    result.push((token, range));
                    continue;
                }
            };

            if breaks_line {
                if self.enabled && can_end_statement {
                    result.push((GoToken::Semicolon, range));
                }
                can_end_statement = false;
            }
        }

        if self.enabled && self.at_eof && can_end_statement {
            result.push((GoToken::Semicolon, source.len()..source.len()));
        }

        result
    }
}

impl Default for SemicolonInsertionMapper {
    fn default() -> Self {
        Self::new(&LexerOptions::default())
    }
}
