#![allow(unused)]
//! Store layer integration harness.
//!
//! # What this covers
//!
//! - **Ordering**: the tag sequence is always in case-insensitive order, no
//!   matter the insertion order.
//! - **Uniqueness**: tags that differ only in case are one entry; re-saving
//!   overwrites the query in place.
//! - **Delete**: removes from both the sequence and the backend.
//! - **Derived values**: search URL and share text for stored queries.
//! - **Durability**: a store reloaded from the JSON file sees every mutation.
//! - **Properties**: ordering, uniqueness and lookup agree with a reference
//!   model under random add/delete sequences (proptest).
//!
//! # Running
//!
//! ```sh
//! cargo test --test store_harness
//! ```

mod common;
use common::*;
use proptest::prelude::*;
use std::collections::BTreeMap;
use tagsearch_core::{types::fold_tag, JsonFileBackend, LinkTemplates, TaggedSearchStore};

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn loaded_searches_are_sorted_ignoring_case() {
    let mut builder = StoreBuilder::new();
    for (tag, query) in SEARCHES {
        builder = builder.search(*tag, *query);
    }
    let (store, _) = builder.build();
    assert_tags!(store, SEARCHES_SORTED);
}

#[test]
fn zebra_apple_mango() {
    let (mut store, _) = StoreBuilder::new().build();
    store.add_or_update("Zebra", "z");
    store.add_or_update("apple", "a");
    store.add_or_update("Mango", "m");
    assert_tags!(store, ["apple", "Mango", "Zebra"]);
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[test]
fn flower_roses_then_tulips() {
    let (mut store, backend) = StoreBuilder::new().build();
    store.add_or_update("flower", "roses");
    store.add_or_update("flower", "tulips");

    assert_eq!(store.lookup_query("flower"), "tulips");
    assert_eq!(store.tags().filter(|t| *t == "flower").count(), 1);
    assert_eq!(backend.snapshot().get("flower").map(String::as_str), Some("tulips"));
}

#[test]
fn case_variants_overwrite_instead_of_inserting() {
    let (mut store, backend) = StoreBuilder::new().search("Birds", "sparrow").build();
    store.add_or_update("BIRDS", "red robin");

    assert_tags!(store, ["Birds"]);
    assert_eq!(store.lookup_query("birds"), "red robin");
    assert_eq!(backend.snapshot().len(), 1);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_then_lookup_is_empty() {
    let (mut store, backend) = StoreBuilder::new()
        .search("birds", "red robin")
        .search("cats", "tabby")
        .build();

    store.delete("birds");

    assert_eq!(store.lookup_query("birds"), "");
    assert_tags!(store, ["cats"]);
    assert!(!backend.snapshot().contains_key("birds"));
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

#[test]
fn search_url_for_red_robin() {
    let (store, _) = StoreBuilder::new().search("birds", "red robin").build();
    assert_eq!(
        store.build_search_url("birds"),
        format!("{}red%20robin", store.links().base_url)
    );
}

#[test]
fn awkward_queries_encode_consistently() {
    for (query, encoded) in AWKWARD_QUERIES {
        let (store, _) = StoreBuilder::new().search("t", *query).build();
        assert_eq!(
            store.build_search_url("t"),
            format!("https://www.flickr.com/search/?q={encoded}"),
            "query {query:?}"
        );
    }
}

#[test]
fn custom_templates_flow_through() {
    let links = LinkTemplates {
        base_url: "https://example.test/s?q=".to_string(),
        share_message: "look: {url} ({url})".to_string(),
        ..LinkTemplates::default()
    };
    let (store, _) = StoreBuilder::new().search("a", "b c").links(links).build();
    assert_eq!(
        store.build_share_text("a"),
        "look: https://example.test/s?q=b%20c (https://example.test/s?q=b%20c)"
    );
}

// ---------------------------------------------------------------------------
// Durability
// ---------------------------------------------------------------------------

#[test]
fn json_file_sees_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searches.json");

    let mut store =
        TaggedSearchStore::load(JsonFileBackend::new(&path), LinkTemplates::default()).unwrap();
    store.add_or_update("birds", "red robin");
    store.add_or_update("cats", "tabby");
    store.add_or_update("Birds", "blue jay");
    store.delete("cats");

    let on_disk: BTreeMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk["birds"], "blue jay");

    let reloaded =
        TaggedSearchStore::load(JsonFileBackend::new(&path), LinkTemplates::default()).unwrap();
    assert_tags!(reloaded, ["birds"]);
}

#[test]
fn corrupt_file_is_reported_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searches.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = TaggedSearchStore::load(JsonFileBackend::new(&path), LinkTemplates::default())
        .unwrap_err();
    assert!(err.to_string().contains("searches.json"));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Save(String, String),
    Delete(String),
}

fn op() -> impl Strategy<Value = Op> {
    // A tiny alphabet with both cases so case collisions are common.
    let tag = "[aAbBcC]{1,3}";
    prop_oneof![
        3 => (tag, "[a-z ]{1,8}").prop_map(|(t, q)| Op::Save(t, q)),
        1 => tag.prop_map(Op::Delete),
    ]
}

proptest! {
    /// Property: after any sequence of saves and deletes the store matches a
    /// model keyed by lowercase tag, and its tags stay sorted and unique.
    #[test]
    fn prop_store_matches_case_folded_model(ops in proptest::collection::vec(op(), 0..40)) {
        let (mut store, backend) = StoreBuilder::new().build();
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for op in &ops {
            match op {
                Op::Save(tag, query) => {
                    store.add_or_update(tag, query);
                    model.insert(fold_tag(tag), query.clone());
                }
                Op::Delete(tag) => {
                    store.delete(tag);
                    model.remove(&fold_tag(tag));
                }
            }
        }

        assert_sorted_unique!(store);
        prop_assert_eq!(store.len(), model.len());
        prop_assert_eq!(backend.snapshot().len(), model.len());
        for (folded, query) in &model {
            prop_assert_eq!(store.lookup_query(folded), query.as_str());
        }
    }

    /// Property: re-saving an existing tag never changes the tag sequence.
    #[test]
    fn prop_update_never_reorders(
        tags in proptest::collection::btree_set("[a-zA-Z]{1,6}", 1..10),
        pick in any::<prop::sample::Index>(),
        query in "[a-z]{1,8}",
    ) {
        let (mut store, _) = StoreBuilder::new().build();
        for tag in &tags {
            store.add_or_update(tag, "q");
        }
        let before: Vec<String> = store.tags().map(str::to_string).collect();
        let generation = store.generation();

        let target = pick.get(&before).to_uppercase();
        store.add_or_update(&target, &query);

        let after: Vec<String> = store.tags().map(str::to_string).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(store.generation(), generation);
    }
}
