//! Domain-specific assertion macros for tagsearch harnesses.

/// Assert the exact tag sequence of a store.
///
/// ```rust
/// assert_tags!(store, ["apple", "Mango", "Zebra"]);
/// ```
#[macro_export]
macro_rules! assert_tags {
    ($store:expr, $expected:expr) => {{
        let store: &tagsearch_core::TaggedSearchStore = &$store;
        let actual: Vec<&str> = store.tags().collect();
        let expected: Vec<&str> = $expected.iter().map(|s| &**s).collect();
        pretty_assertions::assert_eq!(actual, expected, "store tag sequence");
    }};
}

/// Assert that a store's tags are in case-insensitive order with no two tags
/// equal ignoring case.
#[macro_export]
macro_rules! assert_sorted_unique {
    ($store:expr) => {{
        let store: &tagsearch_core::TaggedSearchStore = &$store;
        let folded: Vec<String> = store.tags().map(tagsearch_core::types::fold_tag).collect();
        for pair in folded.windows(2) {
            assert!(
                pair[0] < pair[1],
                "assert_sorted_unique! failed: {:?} is not strictly before {:?}\n  tags: {:?}",
                pair[0],
                pair[1],
                store.tags().collect::<Vec<_>>()
            );
        }
    }};
}
