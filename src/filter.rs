//! Derivation of the visible entry list.
//!
//! Two independent predicates select a subsequence of a sheet's entries. Both
//! return positions into the input slice, strictly increasing, so the visible list
//! always keeps the sheet's original order.
//!
//! The state machine applies exactly one of them at a time: [`by_search`] while a
//! search is being edited or is applied, [`by_tag`] otherwise. They are never
//! intersected, so a search always runs over the whole sheet.

use crate::domain::{Entry, ALL_TAG};

/// Positions of the entries carrying `tag`.
///
/// The [`ALL_TAG`] sentinel selects every entry. Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::domain::Entry;
/// use cheatsheet_viewer::filter::by_tag;
///
/// let mut tagged = Entry::new("git push", "");
/// tagged.tags = vec!["git".into()];
/// let entries = vec![Entry::new("ls", ""), tagged];
/// assert_eq!(by_tag(&entries, "git"), vec![1]);
/// assert_eq!(by_tag(&entries, "all"), vec![0, 1]);
/// ```
#[must_use]
pub fn by_tag(entries: &[Entry], tag: &str) -> Vec<usize> {
    if tag == ALL_TAG {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.has_tag(tag))
        .map(|(index, _)| index)
        .collect()
}

/// Positions of the entries whose name contains `query`, ignoring case.
///
/// An empty query selects every entry.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::domain::Entry;
/// use cheatsheet_viewer::filter::by_search;
///
/// let entries = vec![Entry::new("git status", ""), Entry::new("kubectl get pods", "")];
/// assert_eq!(by_search(&entries, "GIT"), vec![0]);
/// ```
#[must_use]
pub fn by_search(entries: &[Entry], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn commands() -> Vec<Entry> {
        vec![
            Entry::new("git status", "Show working tree status"),
            Entry::new("git commit", "Record changes to repository"),
            Entry::new("git push", "Update remote refs"),
            Entry::new("kubectl get pods", "List pods"),
            Entry::new("kubectl apply", "Apply configuration"),
        ]
    }

    fn names(entries: &[Entry], positions: &[usize]) -> Vec<String> {
        positions.iter().map(|&i| entries[i].name.clone()).collect()
    }

    #[test]
    fn search_matches_substrings_in_original_order() {
        let entries = commands();
        assert_eq!(by_search(&entries, "git"), vec![0, 1, 2]);
        assert_eq!(by_search(&entries, "kubectl"), vec![3, 4]);
        assert_eq!(names(&entries, &by_search(&entries, "push")), ["git push"]);
        assert_eq!(names(&entries, &by_search(&entries, "get")), ["kubectl get pods"]);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        assert!(by_search(&commands(), "nonexistent").is_empty());
    }

    #[test]
    fn search_ignores_description() {
        assert!(by_search(&commands(), "remote").is_empty());
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let mut entries = commands();
        entries[0].tags = vec!["git".into(), "basics".into()];
        entries[3].tags = vec!["k8s".into()];
        entries[4].tags = vec!["k8s".into(), "basics".into()];

        assert_eq!(by_tag(&entries, "basics"), vec![0, 4]);
        assert_eq!(by_tag(&entries, "k8s"), vec![3, 4]);
        assert!(by_tag(&entries, "K8S").is_empty());
        assert!(by_tag(&entries, "k8").is_empty());
    }

    fn entry_strategy() -> impl Strategy<Value = Entry> {
        (
            "[a-zA-Z ]{0,12}",
            prop::collection::vec(prop::sample::select(vec!["git", "k8s", "net", "fs"]), 0..3),
        )
            .prop_map(|(name, tags)| Entry {
                tags: tags.into_iter().map(String::from).collect(),
                ..Entry::new(name, "")
            })
    }

    proptest! {
        #[test]
        fn all_tag_is_identity(entries in prop::collection::vec(entry_strategy(), 0..20)) {
            prop_assert_eq!(by_tag(&entries, ALL_TAG), (0..entries.len()).collect::<Vec<_>>());
        }

        #[test]
        fn empty_query_is_identity(entries in prop::collection::vec(entry_strategy(), 0..20)) {
            prop_assert_eq!(by_search(&entries, ""), (0..entries.len()).collect::<Vec<_>>());
        }

        #[test]
        fn search_is_case_insensitive(
            entries in prop::collection::vec(entry_strategy(), 0..20),
            query in "[a-zA-Z]{1,3}",
        ) {
            prop_assert_eq!(
                by_search(&entries, &query.to_uppercase()),
                by_search(&entries, &query.to_lowercase())
            );
        }

        #[test]
        fn filters_yield_strictly_increasing_positions(
            entries in prop::collection::vec(entry_strategy(), 0..20),
            tag in prop::sample::select(vec!["git", "k8s", "net", "fs"]),
            query in "[a-z]{0,2}",
        ) {
            for positions in [by_tag(&entries, tag), by_search(&entries, &query)] {
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(positions.iter().all(|&p| p < entries.len()));
            }
        }
    }
}
