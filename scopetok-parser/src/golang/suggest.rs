//! Next-token suggestions
//!
//! The prediction model is a collaborator, not part of this crate. Anything that maps a token
//! window to ranked suggestion strings can stand in for it through [`Suggester`].

use crate::golang::token::TokenList;

/// A source of completion suggestions for a resolved token window.
pub trait Suggester {
    /// Suggestions for the code at `cursor`, best first.
    fn suggest(&self, tokens: &TokenList, cursor: usize) -> Vec<String>;
}

/// Returns the same suggestions for every window.
///
/// Serves as the model until a trained one is wired in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSuggester {
    suggestions: Vec<String>,
}

impl StaticSuggester {
    pub fn new<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticSuggester {
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticSuggester {
    fn default() -> Self {
        StaticSuggester::new(["if", "for"])
    }
}

impl Suggester for StaticSuggester {
    fn suggest(&self, tokens: &TokenList, cursor: usize) -> Vec<String> {
        log::trace!(
            "static suggestions for {} tokens at offset {}",
            tokens.len(),
            cursor
        );
        self.suggestions.clone()
    }
}

impl<F> Suggester for F
where
    F: Fn(&TokenList, usize) -> Vec<String>,
{
    fn suggest(&self, tokens: &TokenList, cursor: usize) -> Vec<String> {
        self(tokens, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golang::lexing::tokenize;

    #[test]
    fn test_default_suggestions() {
        let suggestions = StaticSuggester::default().suggest(&tokenize("x"), 1);
        assert_eq!(suggestions, vec!["if", "for"]);
    }

    #[test]
    fn test_closures_are_suggesters() {
        let by_length = |tokens: &TokenList, _cursor: usize| vec![tokens.len().to_string()];
        assert_eq!(by_length.suggest(&tokenize("a + b"), 5), vec!["3"]);
    }

    fn boxed(suggester: &dyn Suggester) -> Vec<String> {
        suggester.suggest(&TokenList::new(), 0)
    }

    #[test]
    fn test_object_safe() {
        assert_eq!(boxed(&StaticSuggester::new(["go"])), vec!["go"]);
    }
}
