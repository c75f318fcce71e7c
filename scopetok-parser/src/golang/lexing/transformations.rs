//! Transformations over the flat `(GoToken, range)` stream produced by base tokenization.

pub mod semicolon_insertion;

pub use semicolon_insertion::SemicolonInsertionMapper;
