//! Category index and filter view
//!
//! Pure derivations over a loaded entity list. Both are recomputed whenever
//! the list changes; neither is persisted.

use crate::models::Categorized;

/// Sentinel filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Distinct categories present in `list`, prefixed with the
/// [`ALL_CATEGORIES`] sentinel.
///
/// Categories appear in first-seen order. Deduplication is case-insensitive
/// with the first-seen spelling kept, so the index can never offer two
/// options that select the same filtered subset.
pub fn categories<T: Categorized>(list: &[T]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    let mut seen: Vec<String> = Vec::new();

    for item in list {
        let key = item.category().to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(item.category().to_string());
        }
    }

    out
}

/// The subsequence of `list` visible under the `selected` category.
///
/// `ALL_CATEGORIES` yields the whole list; anything else matches
/// case-insensitively, preserving original order. Zero matches is an empty
/// result, not an error.
pub fn visible<'a, T: Categorized>(list: &'a [T], selected: &str) -> Vec<&'a T> {
    if selected == ALL_CATEGORIES {
        return list.iter().collect();
    }

    let wanted = selected.to_lowercase();
    list.iter()
        .filter(|item| item.category().to_lowercase() == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: &'static str,
        category: &'static str,
    }

    impl Categorized for Entry {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry { name: "a", category: "Focus" },
            Entry { name: "b", category: "Sleep" },
            Entry { name: "c", category: "focus" },
            Entry { name: "d", category: "Focus" },
            Entry { name: "e", category: "Energy" },
        ]
    }

    #[test]
    fn test_all_sentinel_is_identity() {
        let list = sample();
        let view = visible(&list, ALL_CATEGORIES);

        assert_eq!(view.len(), list.len());
        for (original, shown) in list.iter().zip(view) {
            assert_eq!(original.name, shown.name);
        }
    }

    #[test]
    fn test_filter_matches_case_insensitively_in_order() {
        let list = sample();
        let view = visible(&list, "FOCUS");

        let names: Vec<_> = view.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_filter_zero_matches_is_empty() {
        let list = sample();
        assert!(visible(&list, "Meditation").is_empty());
    }

    #[test]
    fn test_filter_empty_list() {
        let list: Vec<Entry> = Vec::new();
        assert!(visible(&list, "Focus").is_empty());
        assert!(visible(&list, ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_categories_starts_with_all() {
        let list = sample();
        let index = categories(&list);
        assert_eq!(index[0], ALL_CATEGORIES);
    }

    #[test]
    fn test_categories_first_seen_order_deduplicated() {
        let list = sample();
        let index = categories(&list);

        // "focus" collapses into the first-seen "Focus" spelling.
        assert_eq!(index, vec!["All", "Focus", "Sleep", "Energy"]);
    }

    #[test]
    fn test_categories_of_empty_list() {
        let list: Vec<Entry> = Vec::new();
        assert_eq!(categories(&list), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_every_index_option_selects_nonempty_subset() {
        let list = sample();
        for option in categories(&list).iter().skip(1) {
            assert!(
                !visible(&list, option).is_empty(),
                "index offered a category with no matches: {}",
                option
            );
        }
    }
}
