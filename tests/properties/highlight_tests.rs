use proptest::prelude::*;

use sitesearch::search::{HighlightMode, Highlighter, highlight, tokenize};

fn strip_marks(text: &str) -> String {
    text.replace("<mark>", "").replace("</mark>", "")
}

proptest! {
    #[test]
    fn test_tokenize_yields_lowercase_nonempty_tokens(query in "[A-Za-z0-9 \\t\\n.,!?-]{0,40}") {
        for token in tokenize(&query) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn test_tokenize_ignores_surrounding_whitespace(query in "[a-z ]{0,40}") {
        let padded = format!("  \t{query}\n ");
        prop_assert_eq!(tokenize(&padded), tokenize(&query));
    }

    #[test]
    fn test_highlight_without_terms_is_identity(text in ".*") {
        prop_assert_eq!(highlight(&text, &[]), text);
    }

    #[test]
    fn test_highlight_single_term_only_adds_wrappers(
        text in "[a-zA-Z ]{0,60}",
        term in "[a-z]{1,4}",
    ) {
        let highlighted = highlight(&text, &[term]);
        prop_assert_eq!(strip_marks(&highlighted), text);
    }

    #[test]
    fn test_highlight_metacharacters_are_literal(
        text in "[a-z.*+?()\\[\\]{}|^$\\\\ ]{0,40}",
        term in "[.*+?()\\[\\]{}|^$\\\\]{1,3}",
    ) {
        let highlighted = highlight(&text, &[term.clone()]);
        let expected_wraps = text.matches(term.as_str()).count();
        prop_assert_eq!(highlighted.matches("<mark>").count(), expected_wraps);
        prop_assert_eq!(strip_marks(&highlighted), text);
    }

    #[test]
    fn test_single_pass_never_nests(
        text in "[a-z ]{0,60}",
        terms in prop::collection::vec("[a-z]{1,3}", 1..4),
    ) {
        let highlighter = Highlighter::new(HighlightMode::SinglePass, "mark");
        let highlighted = highlighter.highlight(&text, &terms);
        prop_assert!(!highlighted.contains("<mark><mark>"));
        prop_assert_eq!(strip_marks(&highlighted), text);
    }
}
