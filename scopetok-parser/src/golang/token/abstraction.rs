//! The abstracted completion vocabulary
//!
//!     A completion model cannot work over an unbounded vocabulary, so the concrete lexemes of a
//!     document are mapped onto a closed set. Literal values are dropped and only their category
//!     survives; identifiers collapse into a single placeholder; keywords, operators and
//!     delimiters keep their exact spelling.
//!
//!     Two identifier spellings are kept verbatim: `nil` and `err`. They are frequent and carry
//!     meaning a model can use (comparisons against nil, the `if err != nil` idiom).
//!
//!     `true` and `false` are plain identifiers in Go's grammar but are emitted as boolean
//!     literals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use super::core::GoToken;

/// Identifiers that are emitted as fixed tokens instead of the identifier placeholder.
pub const SENTINEL_IDENTIFIERS: &[&str] = &["nil", "err"];

/// Identifiers that are emitted as boolean literals.
pub const BOOLEAN_IDENTIFIERS: &[&str] = &["true", "false"];

/// Category of a literal token. The literal's value is never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Identifier,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    CharacterLiteral,
    ImaginaryLiteral,
}

impl LiteralKind {
    /// The marker a completion model sees for this kind.
    pub fn marker(&self) -> &'static str {
        match self {
            LiteralKind::Identifier => "ID_S",
            LiteralKind::StringLiteral => "ID_LIT_STR",
            LiteralKind::IntegerLiteral => "ID_LIT_INT",
            LiteralKind::FloatLiteral => "ID_LIT_FLOAT",
            LiteralKind::BooleanLiteral => "ID_LIT_BOOL",
            LiteralKind::CharacterLiteral => "ID_LIT_CHAR",
            LiteralKind::ImaginaryLiteral => "ID_LIT_IMAG",
        }
    }
}

/// An abstracted lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// A literal or identifier reduced to its category.
    Literal(LiteralKind),
    /// A keyword, operator, delimiter or sentinel identifier, with its exact spelling.
    Fixed(String),
}

impl Token {
    /// Abstract a raw lexeme given its source slice.
    ///
    /// Returns `None` for trivia (newlines and comments), which have no place in the stream.
    pub fn from_lexeme(kind: GoToken, slice: &str) -> Option<Token> {
        let token = match kind {
            _ if kind.is_trivia() => return None,
            GoToken::Int => Token::Literal(LiteralKind::IntegerLiteral),
            GoToken::Float => Token::Literal(LiteralKind::FloatLiteral),
            GoToken::Imag => Token::Literal(LiteralKind::ImaginaryLiteral),
            GoToken::Char => Token::Literal(LiteralKind::CharacterLiteral),
            GoToken::String => Token::Literal(LiteralKind::StringLiteral),
            GoToken::Ident => Token::from_identifier(slice),
            _ => Token::Fixed(kind.spelling(slice).to_string()),
        };
        Some(token)
    }

    /// Abstract an identifier spelling.
    pub fn from_identifier(name: &str) -> Token {
        if BOOLEAN_IDENTIFIERS.contains(&name) {
            Token::Literal(LiteralKind::BooleanLiteral)
        } else if SENTINEL_IDENTIFIERS.contains(&name) {
            Token::Fixed(name.to_string())
        } else {
            Token::Literal(LiteralKind::Identifier)
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Literal(LiteralKind::Identifier))
    }

    /// The fixed spelling, if this is a fixed token.
    pub fn spelling(&self) -> Option<&str> {
        match self {
            Token::Fixed(spelling) => Some(spelling),
            Token::Literal(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(kind) => f.write_str(kind.marker()),
            Token::Fixed(spelling) => write!(f, "{:?}", spelling),
        }
    }
}

/// An ordered sequence of abstracted tokens.
///
/// Displays as `[ID_S, ":=", ID_LIT_INT]`, the line format completion models read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList(Vec<Token>);

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn into_inner(self) -> Vec<Token> {
        self.0
    }

    /// Display forms of every token, in order.
    pub fn display_forms(&self) -> Vec<String> {
        self.0.iter().map(|t| t.to_string()).collect()
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList(tokens)
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.display_forms().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_fixed() {
        assert_eq!(Token::from_identifier("nil"), Token::Fixed("nil".into()));
        assert_eq!(Token::from_identifier("err"), Token::Fixed("err".into()));
        assert_eq!(
            Token::from_identifier("errs"),
            Token::Literal(LiteralKind::Identifier)
        );
    }

    #[test]
    fn test_booleans_are_literals() {
        assert_eq!(
            Token::from_identifier("true"),
            Token::Literal(LiteralKind::BooleanLiteral)
        );
        assert_eq!(
            Token::from_identifier("false"),
            Token::Literal(LiteralKind::BooleanLiteral)
        );
    }

    #[test]
    fn test_trivia_is_dropped() {
        assert_eq!(Token::from_lexeme(GoToken::LineComment, "// hi"), None);
        assert_eq!(Token::from_lexeme(GoToken::Newline, "\n"), None);
    }

    #[test]
    fn test_inserted_semicolon_spelling() {
        assert_eq!(
            Token::from_lexeme(GoToken::Semicolon, "\n"),
            Some(Token::Fixed(";".into()))
        );
    }

    #[test]
    fn test_display() {
        let list: TokenList = vec![
            Token::Literal(LiteralKind::Identifier),
            Token::Fixed(":=".into()),
            Token::Literal(LiteralKind::IntegerLiteral),
        ]
        .into();
        assert_eq!(list.to_string(), r#"[ID_S, ":=", ID_LIT_INT]"#);
        assert_eq!(TokenList::new().to_string(), "[]");
    }

    #[test]
    fn test_json_shape() {
        let list: TokenList = vec![
            Token::Literal(LiteralKind::StringLiteral),
            Token::Fixed("if".into()),
        ]
        .into();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"literal","value":"string_literal"},{"type":"fixed","value":"if"}]"#
        );
    }
}
