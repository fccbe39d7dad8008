//! Property-based tests using proptest
//!
//! These tests verify the keyword filter against randomized identifiers:
//! case-insensitivity, order preservation and keyword normalization.

use mansion_scan::resource::{KeywordFilter, Resource, DEFAULT_KEYWORDS};
use proptest::prelude::*;

/// Generate a public id that may or may not contain a default keyword
fn arb_public_id() -> impl Strategy<Value = String> {
    (
        "[a-z0-9_/-]{0,12}",
        prop_oneof![
            Just(String::new()),
            prop::sample::select(DEFAULT_KEYWORDS).prop_map(str::to_string),
        ],
        "[a-z0-9_-]{0,8}",
    )
        .prop_map(|(prefix, keyword, suffix)| format!("{}{}{}", prefix, keyword, suffix))
}

fn arb_resources() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec(arb_public_id().prop_map(|id| Resource::new(&id)), 0..60)
}

/// Flip the case of every other ASCII letter
fn scramble_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Any id built around a keyword matches, whatever its case
    #[test]
    fn keyword_in_id_always_matches(
        prefix in "[a-z0-9_/-]{0,12}",
        keyword in prop::sample::select(DEFAULT_KEYWORDS),
        suffix in "[a-z0-9_-]{0,12}",
    ) {
        let filter = KeywordFilter::default();
        let id = format!("{}{}{}", prefix, keyword, suffix);
        prop_assert!(filter.matches(&id));
        prop_assert!(filter.matches(&id.to_uppercase()));
        prop_assert!(filter.matches(&scramble_case(&id)));
    }

    /// Case of the id never changes the outcome
    #[test]
    fn matching_is_case_insensitive(id in arb_public_id()) {
        let filter = KeywordFilter::default();
        prop_assert_eq!(filter.matches(&id), filter.matches(&scramble_case(&id)));
    }

    /// Matches are an in-order subsequence of the input
    #[test]
    fn filter_preserves_order(resources in arb_resources()) {
        let filter = KeywordFilter::default();
        let matched = filter.filter(&resources);

        let expected: Vec<&Resource> = resources
            .iter()
            .filter(|r| filter.matches(r.public_id()))
            .collect();
        prop_assert_eq!(matched.iter().collect::<Vec<_>>(), expected);
    }

    /// Filtering is idempotent
    #[test]
    fn filter_is_idempotent(resources in arb_resources()) {
        let filter = KeywordFilter::default();
        let once = filter.filter(&resources);
        let twice = filter.filter(&once);
        prop_assert_eq!(once, twice);
    }

    /// Case variants of a keyword collapse into one entry
    #[test]
    fn keyword_variants_deduplicate(keyword in "[a-zA-Z]{1,10}") {
        let filter = KeywordFilter::new([
            keyword.clone(),
            keyword.to_uppercase(),
            keyword.to_lowercase(),
        ]);
        prop_assert_eq!(filter.keywords().len(), 1);
        prop_assert_eq!(&filter.keywords()[0], &keyword.to_lowercase());
    }
}
