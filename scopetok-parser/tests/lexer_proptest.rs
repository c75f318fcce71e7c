//! Property-based tests for the Go lexer and the prefix fallback
//!
//! These check that tokenization is total, that literals and identifiers abstract the same way
//! wherever they appear, and that a document which cannot be parsed is tokenized as a plain
//! prefix.

use proptest::prelude::*;
use scopetok_parser::golang::lexing::{lex, LexerOptions};
use scopetok_parser::golang::token::{LiteralKind, Token, BOOLEAN_IDENTIFIERS, SENTINEL_IDENTIFIERS};
use scopetok_parser::{resolve_scope, tokenize};

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Generate plain identifiers: never a keyword, sentinel, or boolean.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_filter("reserved word", |name| {
        !KEYWORDS.contains(&name.as_str())
            && !SENTINEL_IDENTIFIERS.contains(&name.as_str())
            && !BOOLEAN_IDENTIFIERS.contains(&name.as_str())
    })
}

/// Generate a single Go lexeme with its expected abstraction.
fn lexeme_strategy() -> impl Strategy<Value = (String, Token)> {
    let literal = |kind| Token::Literal(kind);
    prop_oneof![
        identifier_strategy().prop_map(move |name| (name, literal(LiteralKind::Identifier))),
        "[1-9][0-9]{0,8}|0x[0-9a-f]{1,6}|0"
            .prop_map(move |text| (text, literal(LiteralKind::IntegerLiteral))),
        "[0-9]{1,4}\\.[0-9]{1,4}".prop_map(move |text| (text, literal(LiteralKind::FloatLiteral))),
        "[0-9]{1,4}i|0b[01]{1,6}i|0o[0-7]{1,4}i|0x[0-9a-f]{1,3}p-[0-9]i"
            .prop_map(move |text| (text, literal(LiteralKind::ImaginaryLiteral))),
        "\"[a-z %]{0,10}\"|`[a-z\n]{0,10}`"
            .prop_map(move |text| (text, literal(LiteralKind::StringLiteral))),
        "'[a-z]'".prop_map(move |text| (text, literal(LiteralKind::CharacterLiteral))),
        prop::sample::select(BOOLEAN_IDENTIFIERS)
            .prop_map(move |text| (text.to_string(), literal(LiteralKind::BooleanLiteral))),
        prop::sample::select(SENTINEL_IDENTIFIERS)
            .prop_map(|text| (text.to_string(), Token::Fixed(text.to_string()))),
        prop::sample::select(KEYWORDS)
            .prop_map(|text| (text.to_string(), Token::Fixed(text.to_string()))),
        prop::sample::select(&[":=", "+", "==", "&&", "<-", "...", ".", ",", "*"][..])
            .prop_map(|text| (text.to_string(), Token::Fixed(text.to_string()))),
    ]
}

/// Generate Go-looking statement text without a package clause, so it never parses.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,6} := [0-9]{1,3}",
            "[a-z]{1,6}\\([a-z, ]{0,8}\\)",
            "if [a-z]{1,4} != nil \\{",
            "\\}",
            "return [a-z]{1,4}, err",
            "// [a-z ]{0,10}",
            "s := \"[a-z]{0,5}\"",
        ],
        1..12,
    )
    .prop_map(|lines| format!("x := 1\n{}", lines.join("\n")))
}

proptest! {
    #[test]
    fn test_tokenize_never_panics(input in "\\PC*") {
        let _tokens = tokenize(&input);
    }

    #[test]
    fn test_lexeme_ranges_are_ordered_and_in_bounds(input in "\\PC*") {
        let lexemes = lex(&input, &LexerOptions::default());
        let mut previous_end = 0;
        for (_, range) in &lexemes {
            prop_assert!(range.start >= previous_end);
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= input.len());
            previous_end = range.end;
        }
    }

    #[test]
    fn test_lexemes_abstract_the_same_in_any_position(
        lexemes in prop::collection::vec(lexeme_strategy(), 1..12)
    ) {
        let text = lexemes.iter().map(|(text, _)| text.as_str()).collect::<Vec<_>>().join(" ");
        let expected: Vec<Token> = lexemes.into_iter().map(|(_, token)| token).collect();
        prop_assert_eq!(tokenize(&text).into_inner(), expected);
    }

    #[test]
    fn test_horizontal_whitespace_is_insignificant(
        lexemes in prop::collection::vec(lexeme_strategy(), 1..12),
        gap in "[ \t]{1,4}"
    ) {
        let texts: Vec<&str> = lexemes.iter().map(|(text, _)| text.as_str()).collect();
        prop_assert_eq!(tokenize(&texts.join(" ")), tokenize(&texts.join(&gap)));
    }

    #[test]
    fn test_identifier_names_never_leak(name in identifier_strategy()) {
        let tokens = tokenize(&format!("{name} := {name}"));
        prop_assert!(tokens.iter().all(|token| token.spelling() != Some(name.as_str())));
    }

    #[test]
    fn test_unparseable_documents_use_the_prefix(
        document in fragment_strategy(),
        cursor in 0usize..400
    ) {
        let end = cursor.min(document.len() - 1);
        prop_assert_eq!(
            resolve_scope(document.as_bytes(), cursor),
            tokenize(&document[..end])
        );
    }

    #[test]
    fn test_resolution_is_deterministic(document in fragment_strategy(), cursor in 0usize..400) {
        prop_assert_eq!(
            resolve_scope(document.as_bytes(), cursor),
            resolve_scope(document.as_bytes(), cursor)
        );
    }

    #[test]
    fn test_resolve_tolerates_arbitrary_bytes(
        bytes in prop::collection::vec(any::<u8>(), 0..200),
        cursor in any::<usize>()
    ) {
        let _tokens = resolve_scope(&bytes, cursor);
    }
}
