//! Parse results
//!
//! The structural parse keeps only what scope resolution needs: the top-level declarations of a
//! file, their byte spans, and the brace blocks nested in them.

use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Function,
    Method,
    Type,
    Variable,
    Constant,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Function => "func",
            DeclarationKind::Method => "method",
            DeclarationKind::Type => "type",
            DeclarationKind::Variable => "var",
            DeclarationKind::Constant => "const",
        };
        f.write_str(name)
    }
}

/// A top-level declaration.
///
/// Grouped `var`/`const`/`type` declarations yield one declaration per spec. The span of a
/// function starts at the `func` keyword; the span of a spec starts at its first name. Spans
/// are 0-based and half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub span: Range<usize>,
    /// Every `{ ... }` block inside the declaration, outer blocks before the blocks they
    /// contain.
    pub blocks: Vec<Range<usize>>,
}

impl Declaration {
    /// Strict interior containment: a cursor on either boundary is outside.
    pub fn contains(&self, cursor: usize) -> bool {
        strictly_contains(&self.span, cursor)
    }

    /// The innermost brace block strictly containing `cursor`.
    pub fn innermost_block(&self, cursor: usize) -> Option<&Range<usize>> {
        self.blocks
            .iter()
            .filter(|block| strictly_contains(block, cursor))
            .min_by_key(|block| block.len())
    }

    /// Whether Go would enter this declaration in the package scope.
    pub fn is_visible(&self) -> bool {
        self.name != "_"
    }
}

pub(crate) fn strictly_contains(span: &Range<usize>, cursor: usize) -> bool {
    span.start < cursor && cursor < span.end
}

/// A parsed Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: String,
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    /// The declaration enclosing `cursor`.
    ///
    /// Well-formed declarations never overlap, but the choice does not rely on it: the smallest
    /// enclosing span wins, then the earliest start.
    pub fn enclosing_declaration(&self, cursor: usize) -> Option<&Declaration> {
        self.declarations
            .iter()
            .filter(|decl| decl.is_visible() && decl.contains(cursor))
            .min_by_key(|decl| (decl.span.len(), decl.span.start))
    }
}
