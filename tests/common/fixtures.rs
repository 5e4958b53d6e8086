//! Static tag / query corpora used across harnesses.

/// A handful of saved searches in deliberately unsorted, mixed-case order.
pub const SEARCHES: &[(&str, &str)] = &[
    ("Zebra", "zebra stripes savanna"),
    ("apple", "apple orchard autumn"),
    ("Mango", "mango tropical fruit"),
    ("birds", "red robin"),
    ("Cats", "tabby cat sleeping"),
];

/// The tags of [`SEARCHES`] in case-insensitive order.
pub const SEARCHES_SORTED: &[&str] = &["apple", "birds", "Cats", "Mango", "Zebra"];

/// Queries that exercise the URL encoder.
pub const AWKWARD_QUERIES: &[(&str, &str)] = &[
    ("red robin", "red%20robin"),
    ("rock & roll", "rock%20%26%20roll"),
    ("100% sunset", "100%25%20sunset"),
    ("tag:bw/street", "tag%3Abw%2Fstreet"),
    ("ñandú", "%C3%B1and%C3%BA"),
    ("don't (stop)!", "don't%20(stop)!"),
];
