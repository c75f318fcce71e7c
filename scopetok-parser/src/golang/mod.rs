//! Main module for Go tokenization functionality

pub mod lexing;
pub mod parsing;
pub mod scope;
pub mod suggest;
pub mod testing;
pub mod token;
