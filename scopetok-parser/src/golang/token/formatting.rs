//! Rendering of abstracted token streams
//!
//! The abstract form is the [`TokenList`](super::TokenList) display. The full form follows
//! every identifier placeholder with the identifier's own spelling, for consumers that rank
//! candidate names against the tokens the model sees.

use serde::Deserialize;
use std::ops::Range;

use super::abstraction::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// `[ID_S, ":=", ID_LIT_INT]`
    #[default]
    Abstract,
    /// `[ID_S, "x", ":=", ID_LIT_INT]`
    Full,
}

/// Display forms of lexed tokens of `text`, in order.
///
/// `tokens` must carry byte ranges into `text`, as produced by
/// [`lex`](crate::golang::lexing::lex).
pub fn render_items(text: &str, tokens: &[(Token, Range<usize>)], mode: RenderMode) -> Vec<String> {
    let mut parts = Vec::with_capacity(tokens.len());
    for (token, range) in tokens {
        parts.push(token.to_string());
        if mode == RenderMode::Full && token.is_identifier() {
            let name = text.get(range.clone()).unwrap_or_default();
            parts.push(format!("{:?}", name));
        }
    }
    parts
}

/// Render lexed tokens of `text` as a single bracketed line.
pub fn render(text: &str, tokens: &[(Token, Range<usize>)], mode: RenderMode) -> String {
    format!("[{}]", render_items(text, tokens, mode).join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golang::lexing::{lex, LexerOptions};

    #[test]
    fn test_abstract_matches_token_list_display() {
        let text = "x := y + 1";
        let lexed = lex(text, &LexerOptions::default());
        let list: crate::golang::token::TokenList =
            lexed.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(render(text, &lexed, RenderMode::Abstract), list.to_string());
    }

    #[test]
    fn test_full_mode_appends_names() {
        let text = "x := err";
        let lexed = lex(text, &LexerOptions::default());
        assert_eq!(
            render(text, &lexed, RenderMode::Full),
            r#"[ID_S, "x", ":=", "err"]"#
        );
    }

    #[test]
    fn test_items_keep_quotes() {
        let text = "f(x)";
        let lexed = lex(text, &LexerOptions::default());
        assert_eq!(
            render_items(text, &lexed, RenderMode::Full),
            vec!["ID_S", "\"f\"", "\"(\"", "ID_S", "\"x\"", "\")\""]
        );
    }
}
