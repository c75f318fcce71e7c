//! Core token types shared across the lexer, parser, and resolver.
//!
//! Two layers live here. [`GoToken`] is the raw lexeme kind produced by logos and consumed by
//! the structural parser. [`Token`] is the abstracted vocabulary handed to completion models,
//! where literal values and most identifiers are collapsed into category markers.

pub mod abstraction;
pub mod core;
pub mod formatting;

pub use abstraction::{LiteralKind, Token, TokenList, BOOLEAN_IDENTIFIERS, SENTINEL_IDENTIFIERS};
pub use core::GoToken;
pub use formatting::{render, render_items, RenderMode};
