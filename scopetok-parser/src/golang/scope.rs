//! Scope resolution
//!
//!     Given a whole document and a cursor, decide which text the completion model should see
//!     and tokenize it.
//!
//! Routes
//!
//!     Scope: the document parses and a top-level declaration strictly contains the cursor. The
//!     window runs from the first byte of that declaration to the cursor. With
//!     [`Granularity::Block`] it starts right after the `{` of the innermost brace block that
//!     contains the cursor instead.
//!
//!     Fallback: the document does not parse, no declaration contains the cursor, or the scope
//!     window holds no tokens. The window runs from the start of the document to the cursor.
//!
//!     Either way the window end is clamped to `len - 1`, so a cursor past the end of the
//!     buffer is safe. Windows are decoded lossily: a cursor inside a multi-byte character
//!     still yields a window, and the broken character is skipped by the lexer.
//!
//!     Nothing here fails. A document that does not parse is the normal state of a file being
//!     edited.

use serde::Deserialize;
use std::borrow::Cow;
use std::ops::Range;

use crate::golang::lexing::{lex, LexerOptions};
use crate::golang::parsing::{parse_bytes, Declaration, DeclarationKind, ParseError};
use crate::golang::token::{render, render_items, RenderMode, Token, TokenList};

/// Where a scope window starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// At the enclosing top-level declaration.
    #[default]
    Declaration,
    /// Inside the innermost brace block of the enclosing declaration.
    Block,
}

/// Why the resolver lexed the document prefix instead of a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Unparseable(ParseError),
    NoEnclosingDeclaration,
    EmptyScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionRoute {
    Scope { name: String, kind: DeclarationKind },
    Fallback(FallbackReason),
}

/// The tokenized window and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: ResolutionRoute,
    /// Byte range of the window in the source.
    pub range: Range<usize>,
    /// The window text, decoded.
    pub text: String,
    /// Tokens with byte ranges relative to `text`.
    pub lexemes: Vec<(Token, Range<usize>)>,
}

impl Resolution {
    pub fn tokens(&self) -> TokenList {
        self.lexemes.iter().map(|(token, _)| token.clone()).collect()
    }

    pub fn render(&self, mode: RenderMode) -> String {
        render(&self.text, &self.lexemes, mode)
    }

    /// The rendered items without the surrounding brackets, for structured output.
    pub fn render_items(&self, mode: RenderMode) -> Vec<String> {
        render_items(&self.text, &self.lexemes, mode)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.route, ResolutionRoute::Fallback(_))
    }
}

/// Resolves a cursor to its token window. Stateless; one value can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    granularity: Granularity,
    lexer: LexerOptions,
}

impl ScopeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_lexer_options(mut self, options: LexerOptions) -> Self {
        self.lexer = options;
        self
    }

    /// Resolve `cursor` in `source` and tokenize the chosen window.
    pub fn resolve(&self, source: &[u8], cursor: usize) -> Resolution {
        let file = match parse_bytes(source) {
            Ok(file) => file,
            Err(err) => {
                log::debug!(
                    "falling back to prefix lexing, document breaks at {:?}: {}",
                    err.span(),
                    err
                );
                return self.fallback(source, cursor, FallbackReason::Unparseable(err));
            }
        };

        let Some(decl) = file.enclosing_declaration(cursor) else {
            log::debug!("no declaration encloses offset {}", cursor);
            return self.fallback(source, cursor, FallbackReason::NoEnclosingDeclaration);
        };

        log::debug!(
            "cursor {} is inside {} {} at {:?}",
            cursor,
            decl.kind,
            decl.name,
            decl.span
        );

        for start in self.scope_starts(decl, cursor) {
            let resolution = self.window(source, start, cursor, scope_route(decl));
            if !resolution.lexemes.is_empty() {
                return resolution;
            }
        }

        log::debug!("scope of {} is empty before offset {}", decl.name, cursor);
        self.fallback(source, cursor, FallbackReason::EmptyScope)
    }

    /// Candidate window starts, narrowest first.
    fn scope_starts(&self, decl: &Declaration, cursor: usize) -> Vec<usize> {
        let mut starts = Vec::with_capacity(2);
        if self.granularity == Granularity::Block {
            if let Some(block) = decl.innermost_block(cursor) {
                starts.push(block.start + 1);
            }
        }
        starts.push(decl.span.start);
        starts
    }

    fn fallback(&self, source: &[u8], cursor: usize, reason: FallbackReason) -> Resolution {
        self.window(source, 0, cursor, ResolutionRoute::Fallback(reason))
    }

    fn window(
        &self,
        source: &[u8],
        start: usize,
        cursor: usize,
        route: ResolutionRoute,
    ) -> Resolution {
        let range = clamp_window(source.len(), start, cursor);
        let text = match String::from_utf8_lossy(&source[range.clone()]) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                log::trace!("window {:?} is not valid UTF-8, decoded lossily", range);
                text
            }
        };
        let lexemes = lex(&text, &self.lexer);
        Resolution {
            route,
            range,
            text,
            lexemes,
        }
    }
}

fn scope_route(decl: &Declaration) -> ResolutionRoute {
    ResolutionRoute::Scope {
        name: decl.name.clone(),
        kind: decl.kind,
    }
}

/// The byte window `[start, cursor)`, with the end clamped to `len - 1` (saturating at zero)
/// and the start clamped to the end.
pub fn clamp_window(len: usize, start: usize, cursor: usize) -> Range<usize> {
    let end = cursor.min(len.saturating_sub(1));
    start.min(end)..end
}

/// Resolve with default settings and return only the tokens.
pub fn resolve_scope(source: &[u8], cursor: usize) -> TokenList {
    ScopeResolver::default().resolve(source, cursor).tokens()
}
