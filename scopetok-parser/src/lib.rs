//! # scopetok
//!
//! Scope-aware tokenization of Go source for code-completion models.
//!
//! File Layout
//!
//! The crate follows the same split the pipeline has: tokens, lexing, parsing and the
//! resolution that ties them together.
//!
//! src/golang
//!   ├── token      Raw logos tokens and the abstracted completion vocabulary
//!   ├── lexing     Base tokenization plus transformations (semicolon insertion)
//!   ├── parsing    Structural parse of a whole file into top-level declarations
//!   ├── scope      Cursor to token-window resolution, with the lexical fallback
//!   └── suggest    The prediction capability consumed downstream
//!
//! Nothing in the resolution path fails: a document that does not parse is the common
//! case while the user is typing, and is handled by lexing the prefix up to the cursor.

pub mod golang;

pub use golang::lexing::{identifiers, tokenize};
pub use golang::scope::{resolve_scope, Granularity, Resolution, ResolutionRoute, ScopeResolver};
pub use golang::token::{LiteralKind, Token, TokenList};
