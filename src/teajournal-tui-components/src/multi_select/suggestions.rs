//! Suggestion filtering.

use super::selection::{SelectionState, capitalize_first};

/// Candidates to offer for `input`.
///
/// Blank input offers every vocabulary entry that is not selected yet.
/// Otherwise the input is normalized like a selection entry and used as a
/// case-sensitive prefix. Vocabulary order is preserved.
///
/// ```rust
/// use teajournal_tui_components::multi_select::{SelectionState, filter_suggestions};
///
/// let vocabulary = ["Menthe", "Citron", "Thym"].map(String::from);
/// let selection = SelectionState::new();
///
/// assert_eq!(filter_suggestions(&vocabulary, &selection, "c"), ["Citron"]);
/// ```
pub fn filter_suggestions(
    vocabulary: &[String],
    selection: &SelectionState,
    input: &str,
) -> Vec<String> {
    let trimmed = input.trim();
    let prefix = capitalize_first(trimmed);

    vocabulary
        .iter()
        .filter(|candidate| prefix.is_empty() || candidate.starts_with(&prefix))
        .filter(|candidate| !selection.contains(candidate))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn selected(items: &[&str]) -> SelectionState {
        let mut sel = SelectionState::new();
        for item in items {
            sel.add(item);
        }
        sel
    }

    #[test]
    fn test_prefix_is_capitalized() {
        let v = vocab(&["Menthe", "Citron", "Thym"]);
        assert_eq!(filter_suggestions(&v, &selected(&[]), "c"), ["Citron"]);
        assert_eq!(filter_suggestions(&v, &selected(&[]), "  t "), ["Thym"]);
    }

    #[test]
    fn test_empty_input_excludes_selection() {
        let v = vocab(&["Menthe", "Citron"]);
        assert_eq!(filter_suggestions(&v, &selected(&["Menthe"]), ""), ["Citron"]);
    }

    #[test]
    fn test_empty_input_keeps_vocabulary_order() {
        let v = vocab(&["Thym", "Menthe", "Citron", "Gingembre"]);
        let sel = selected(&["Citron"]);
        assert_eq!(
            filter_suggestions(&v, &sel, "   "),
            vocab(&["Thym", "Menthe", "Gingembre"])
        );
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let v = vocab(&["Menthe", "menthe poivrée", "Mélisse"]);
        assert_eq!(filter_suggestions(&v, &selected(&[]), "me"), ["Menthe"]);
        assert_eq!(filter_suggestions(&v, &selected(&[]), "mé"), ["Mélisse"]);
    }

    #[test]
    fn test_prefix_excludes_selected() {
        let v = vocab(&["Citron", "Citronnelle", "Cannelle"]);
        let sel = selected(&["Citron"]);
        assert_eq!(filter_suggestions(&v, &sel, "cit"), ["Citronnelle"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let sel = selected(&[]);
        assert!(filter_suggestions(&[], &sel, "").is_empty());
        assert!(filter_suggestions(&[], &sel, "m").is_empty());
    }

    #[test]
    fn test_no_match() {
        let v = vocab(&["Menthe"]);
        assert!(filter_suggestions(&v, &selected(&[]), "x").is_empty());
    }

    #[test]
    fn test_results_never_overlap_selection() {
        let v = vocab(&["Menthe", "Citron", "Thym", "Cannelle", "Cardamome"]);
        let sel = selected(&["Cannelle", "Thym"]);
        for input in ["", "c", "ca", "t", "m", "z"] {
            let out = filter_suggestions(&v, &sel, input);
            assert!(out.iter().all(|s| !sel.contains(s)), "input {input:?}");
            assert!(out.iter().all(|s| s.starts_with(&capitalize_first(input))));
        }
    }
}
