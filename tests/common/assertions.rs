//! Domain-specific assertion macros for ggoolmoney harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show both the
//! query and the haystack involved.

/// Assert that `text` matches `query`.
///
/// ```rust
/// assert_matches_query!("식비", "ㅅㅂ");
/// ```
#[macro_export]
macro_rules! assert_matches_query {
    ($text:expr, $query:expr) => {{
        let text: &str = $text;
        let query: &str = $query;
        if !ggoolmoney_core::matches(text, query) {
            panic!(
                "assert_matches_query! failed:\n  text:  {:?}\n  query: {:?}\n  text chosung:  {:?}\n  query chosung: {:?}",
                text,
                query,
                ggoolmoney_core::chosung::chosung_string(text),
                ggoolmoney_core::chosung::chosung_string(query),
            );
        }
    }};
}

/// Assert that `text` does NOT match `query`.
#[macro_export]
macro_rules! assert_not_matches_query {
    ($text:expr, $query:expr) => {{
        let text: &str = $text;
        let query: &str = $query;
        if ggoolmoney_core::matches(text, query) {
            panic!(
                "assert_not_matches_query! failed: {:?} unexpectedly matched {:?}",
                text, query
            );
        }
    }};
}

/// Assert the ids of a filtered list, in order.
///
/// ```rust
/// assert_visible!(filter.apply(&ledger, &tabs), ["t3", "t1"]);
/// ```
#[macro_export]
macro_rules! assert_visible {
    ($list:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<String> = $list.iter().map(|t| t.id.clone()).collect();
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "visible transaction ids");
    }};
}
