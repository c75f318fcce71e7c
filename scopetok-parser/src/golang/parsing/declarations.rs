//! Go file grammar, down to declaration granularity
//!
//!     file        = "package" IDENT ";" { import ";" } { top_decl ";" } EOF
//!     import      = "import" ( spec | "(" [ spec { ";" spec } [ ";" ] ] ")" )
//!     spec        = [ "." | IDENT ] STRING
//!     top_decl    = func_decl | gen_decl
//!     func_decl   = "func" [ "(" tree* ")" ] IDENT item*
//!     gen_decl    = ( "var" | "const" | "type" ) ( decl_spec | "(" [ decl_spec { ";" decl_spec } [ ";" ] ] ")" )
//!     decl_spec   = IDENT item*
//!
//!     `item` is a delimited group or any token other than `;`, and `tree` any balanced token
//!     tree. Statements and expressions are never looked at beyond delimiter balance; a function
//!     body is simply the brace group its items end with.

use chumsky::prelude::*;
use std::ops::Range;

use super::combinators::{
    blocks_of, declaration_item, one_of_tokens, paren_group, span_through, token, ParserError,
    TokenLocation,
};
use super::ir::DeclarationKind;
use crate::golang::token::GoToken;

/// A declaration before its name is read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeclarationNode {
    pub kind: DeclarationKind,
    pub name: Range<usize>,
    pub span: Range<usize>,
    pub blocks: Vec<Range<usize>>,
}

/// Output of the file grammar: the package name location and every declaration.
pub(crate) type FileNode = (Range<usize>, Vec<DeclarationNode>);

fn semicolon() -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    token(GoToken::Semicolon)
}

fn import_spec() -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    one_of_tokens(&[GoToken::Period, GoToken::Ident])
        .or_not()
        .ignore_then(token(GoToken::String))
}

fn import_decl() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    let grouped = token(GoToken::LParen)
        .ignore_then(import_spec().separated_by(semicolon()).allow_trailing())
        .then_ignore(token(GoToken::RParen))
        .ignored();

    token(GoToken::Import)
        .ignore_then(import_spec().ignored().or(grouped))
        .labelled("import declaration")
}

fn func_decl() -> impl Parser<TokenLocation, Vec<DeclarationNode>, Error = ParserError> + Clone {
    token(GoToken::Func)
        .then(paren_group().or_not())
        .then(token(GoToken::Ident))
        .then(declaration_item().repeated())
        .map(|(((func, receiver), name), items)| {
            let kind = if receiver.is_some() {
                DeclarationKind::Method
            } else {
                DeclarationKind::Function
            };
            let span = span_through(&func, &items);
            let span = func.start..span.end.max(name.end);
            vec![DeclarationNode {
                kind,
                name,
                span,
                blocks: blocks_of(&items),
            }]
        })
        .labelled("function declaration")
}

fn decl_spec(kind: DeclarationKind) -> impl Parser<TokenLocation, DeclarationNode, Error = ParserError> + Clone {
    token(GoToken::Ident)
        .then(declaration_item().repeated())
        .map(move |(name, items)| DeclarationNode {
            kind,
            span: span_through(&name, &items),
            blocks: blocks_of(&items),
            name,
        })
}

fn gen_decl_of(
    keyword: GoToken,
    kind: DeclarationKind,
) -> impl Parser<TokenLocation, Vec<DeclarationNode>, Error = ParserError> + Clone {
    let single = decl_spec(kind).map(|node| vec![node]);
    let grouped = token(GoToken::LParen)
        .ignore_then(decl_spec(kind).separated_by(semicolon()).allow_trailing())
        .then_ignore(token(GoToken::RParen));

    token(keyword).ignore_then(single.or(grouped))
}

fn gen_decl() -> impl Parser<TokenLocation, Vec<DeclarationNode>, Error = ParserError> + Clone {
    choice((
        gen_decl_of(GoToken::Var, DeclarationKind::Variable),
        gen_decl_of(GoToken::Const, DeclarationKind::Constant),
        gen_decl_of(GoToken::Type, DeclarationKind::Type),
    ))
    .labelled("declaration")
}

/// The complete file grammar.
pub(crate) fn source_file() -> impl Parser<TokenLocation, FileNode, Error = ParserError> + Clone {
    let package_clause = token(GoToken::Package)
        .ignore_then(token(GoToken::Ident))
        .then_ignore(semicolon())
        .labelled("package clause");

    let imports = import_decl().then_ignore(semicolon()).repeated();

    let declarations = func_decl()
        .or(gen_decl())
        .then_ignore(semicolon())
        .repeated()
        .map(|groups| groups.into_iter().flatten().collect::<Vec<_>>());

    package_clause
        .then_ignore(imports)
        .then(declarations)
        .then_ignore(end())
}
