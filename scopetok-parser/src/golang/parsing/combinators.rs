//! Parser combinator functions shared by the declaration grammar.

use chumsky::prelude::*;
use std::ops::Range;

use crate::golang::token::GoToken;

/// Type alias for token with location
pub(crate) type TokenLocation = (GoToken, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// A balanced run of tokens: either a single token or a delimited group.
///
/// Only what scope resolution needs survives: the byte span, and the spans of all brace
/// blocks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tree {
    pub span: Range<usize>,
    pub blocks: Vec<Range<usize>>,
}

impl Tree {
    fn leaf(span: Range<usize>) -> Self {
        Tree {
            span,
            blocks: Vec::new(),
        }
    }

    fn group(open: GoToken, span: Range<usize>, children: Vec<Tree>) -> Self {
        let mut blocks = Vec::new();
        if open == GoToken::LBrace {
            blocks.push(span.clone());
        }
        for child in children {
            blocks.extend(child.blocks);
        }
        Tree { span, blocks }
    }
}

fn is_delimiter(token: &GoToken) -> bool {
    token.closing_delimiter().is_some() || token.is_closing_delimiter()
}

/// Helper: match a specific token type, returning its location
pub(crate) fn token(t: GoToken) -> impl Parser<TokenLocation, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| *tok == t).map(|(_, range)| range)
}

/// Match any of the given token types, returning the matched token and its location
pub(crate) fn one_of_tokens(
    kinds: &'static [GoToken],
) -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| kinds.contains(tok))
}

/// A delimited group `open tree* close`
fn group<P>(
    open: GoToken,
    close: GoToken,
    tree: P,
) -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone
where
    P: Parser<TokenLocation, Tree, Error = ParserError> + Clone,
{
    token(open)
        .then(tree.repeated())
        .then(token(close))
        .map(move |((open_range, children), close_range)| {
            Tree::group(open, open_range.start..close_range.end, children)
        })
}

/// Any of the three delimited group forms around `tree`.
fn delimited<P>(tree: P) -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone
where
    P: Parser<TokenLocation, Tree, Error = ParserError> + Clone,
{
    choice((
        group(GoToken::LParen, GoToken::RParen, tree.clone()),
        group(GoToken::LBrack, GoToken::RBrack, tree.clone()),
        group(GoToken::LBrace, GoToken::RBrace, tree),
    ))
}

/// A balanced token tree. Inside delimiters everything is allowed, semicolons included.
pub(crate) fn tree() -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone {
    recursive(|tree| {
        let leaf = filter(|(tok, _): &TokenLocation| !is_delimiter(tok))
            .map(|(_, range): TokenLocation| Tree::leaf(range));
        delimited(tree).or(leaf)
    })
}

/// A delimited group at declaration level.
pub(crate) fn delimited_group() -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone {
    delimited(tree())
}

/// A parenthesized group at declaration level, such as a method receiver.
pub(crate) fn paren_group() -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone {
    group(GoToken::LParen, GoToken::RParen, tree())
}

/// One item of a declaration body: a group, or a single token that does not end the
/// declaration.
pub(crate) fn declaration_item() -> impl Parser<TokenLocation, Tree, Error = ParserError> + Clone {
    let leaf = filter(|(tok, _): &TokenLocation| !is_delimiter(tok) && *tok != GoToken::Semicolon)
        .map(|(_, range): TokenLocation| Tree::leaf(range));
    delimited_group().or(leaf)
}

/// Helper: compute the byte span covered by a start location and trailing items
pub(crate) fn span_through(start: &Range<usize>, items: &[Tree]) -> Range<usize> {
    let end = items.last().map(|t| t.span.end).unwrap_or(start.end);
    start.start..end
}

/// Helper: collect the brace blocks of a sequence of items
pub(crate) fn blocks_of(items: &[Tree]) -> Vec<Range<usize>> {
    items.iter().flat_map(|t| t.blocks.iter().cloned()).collect()
}
