//! Raw Go lexemes
//!
//! Token definitions follow the Go lexical grammar (keywords, operators, delimiters, literal
//! forms and comments). The enum carries no data: the spelling of a lexeme is always recovered
//! from its byte range, which keeps the token `Copy` and usable as a parser input item.
//!
//! Literal patterns are intentionally permissive. Digit separators are accepted anywhere and
//! an unterminated string, rune or comment still produces a single lexeme, so a text cut at
//! the cursor keeps its trailing literal. The structural parser is the one that rejects those
//! through [`GoToken::is_terminated`].

use logos::{Lexer, Logos};

/// All lexemes of the Go language.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r]+")]
pub enum GoToken {
    // Trivia. Newlines are kept until semicolon insertion has looked at them.
    #[token("\n")]
    Newline,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("chan")]
    Chan,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("defer")]
    Defer,
    #[token("else")]
    Else,
    #[token("fallthrough")]
    Fallthrough,
    #[token("for")]
    For,
    #[token("func")]
    Func,
    #[token("go")]
    Go,
    #[token("goto")]
    Goto,
    #[token("if")]
    If,
    #[token("import")]
    Import,
    #[token("interface")]
    Interface,
    #[token("map")]
    Map,
    #[token("package")]
    Package,
    #[token("range")]
    Range,
    #[token("return")]
    Return,
    #[token("select")]
    Select,
    #[token("struct")]
    Struct,
    #[token("switch")]
    Switch,
    #[token("type")]
    Type,
    #[token("var")]
    Var,

    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")]
    Ident,

    // Basic literals
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    Int,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?[pP][+-]?[0-9_]+")]
    Float,
    #[regex(r"[0-9][0-9_]*i")]
    #[regex(r"0[xX][0-9a-fA-F_]+i")]
    #[regex(r"0[bB][01_]+i")]
    #[regex(r"0[oO][0-7_]+i")]
    #[regex(r"0[xX][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?[pP][+-]?[0-9_]+i")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?i")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+i")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?i")]
    Imag,
    #[regex(r"'([^'\\\n]|\\[^\n])*'?")]
    Char,
    #[regex(r#""([^"\\\n]|\\[^\n])*"?"#)]
    #[regex(r"`[^`]*`?")]
    String,

    // Operators
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Quo,
    #[token("%")]
    Rem,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("^")]
    Xor,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&^")]
    AndNot,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    QuoAssign,
    #[token("%=")]
    RemAssign,
    #[token("&=")]
    AndAssign,
    #[token("|=")]
    OrAssign,
    #[token("^=")]
    XorAssign,
    #[token("<<=")]
    ShlAssign,
    #[token(">>=")]
    ShrAssign,
    #[token("&^=")]
    AndNotAssign,
    #[token("&&")]
    LAnd,
    #[token("||")]
    LOr,
    #[token("<-")]
    Arrow,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("==")]
    Eql,
    #[token("<")]
    Lss,
    #[token(">")]
    Gtr,
    #[token("=")]
    Assign,
    #[token("!")]
    Not,
    #[token("~")]
    Tilde,
    #[token("!=")]
    Neq,
    #[token("<=")]
    Leq,
    #[token(">=")]
    Geq,
    #[token(":=")]
    Define,
    #[token("...")]
    Ellipsis,

    // Delimiters
    #[token("(")]
    LParen,
    #[token("[")]
    LBrack,
    #[token("{")]
    LBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token(")")]
    RParen,
    #[token("]")]
    RBrack,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
}

/// Consume a general comment up to and including its `*/`, or to the end of input when the
/// comment is never closed.
fn block_comment(lex: &mut Lexer<GoToken>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map(|i| i + 2).unwrap_or(rest.len());
    lex.bump(len);
    true
}

impl GoToken {
    /// Newlines and comments, which never reach the abstracted stream.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            GoToken::Newline | GoToken::LineComment | GoToken::BlockComment
        )
    }

    /// Basic literal kinds (booleans are identifiers at this level).
    pub fn is_basic_literal(&self) -> bool {
        matches!(
            self,
            GoToken::Int | GoToken::Float | GoToken::Imag | GoToken::Char | GoToken::String
        )
    }

    /// Whether a line break after this token terminates the statement.
    ///
    /// These are exactly the tokens after which Go's scanner inserts a semicolon.
    pub fn ends_statement(&self) -> bool {
        self.is_basic_literal()
            || matches!(
                self,
                GoToken::Ident
                    | GoToken::Break
                    | GoToken::Continue
                    | GoToken::Fallthrough
                    | GoToken::Return
                    | GoToken::Inc
                    | GoToken::Dec
                    | GoToken::RParen
                    | GoToken::RBrack
                    | GoToken::RBrace
            )
    }

    /// The closing delimiter matching an opening one.
    pub fn closing_delimiter(&self) -> Option<GoToken> {
        match self {
            GoToken::LParen => Some(GoToken::RParen),
            GoToken::LBrack => Some(GoToken::RBrack),
            GoToken::LBrace => Some(GoToken::RBrace),
            _ => None,
        }
    }

    pub fn is_closing_delimiter(&self) -> bool {
        matches!(self, GoToken::RParen | GoToken::RBrack | GoToken::RBrace)
    }

    /// The spelling of this token given its source slice.
    ///
    /// Inserted semicolons cover a newline (or nothing, at end of input), so their spelling is
    /// fixed rather than read from the source.
    pub fn spelling<'a>(&self, slice: &'a str) -> &'a str {
        match self {
            GoToken::Semicolon => ";",
            _ => slice,
        }
    }

    /// Whether a literal or comment lexeme is properly closed.
    ///
    /// The lexer accepts unterminated forms so that partial input still tokenizes; a complete
    /// document must not contain any.
    pub fn is_terminated(&self, slice: &str) -> bool {
        match self {
            GoToken::String => {
                let quote = if slice.starts_with('`') { '`' } else { '"' };
                slice.len() >= 2 && slice.ends_with(quote) && !ends_with_escape(slice)
            }
            GoToken::Char => slice.len() >= 3 && slice.ends_with('\'') && !ends_with_escape(slice),
            GoToken::BlockComment => slice.len() >= 4 && slice.ends_with("*/"),
            _ => true,
        }
    }
}

/// True when the closing quote of `slice` is itself escaped (`"abc\"`).
fn ends_with_escape(slice: &str) -> bool {
    if slice.starts_with('`') {
        return false;
    }
    let body = &slice[..slice.len() - 1];
    let backslashes = body.bytes().rev().take_while(|b| *b == b'\\').count();
    backslashes % 2 == 1
}
