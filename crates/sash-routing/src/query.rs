//! Query-string splitting and parsing.
//!
//! The query is never part of path matching: callers split it off first
//! and parse it into a flat key/value map.

use std::collections::HashMap;

/// Split a raw path into `(path, query)` at the first `?`.
/// The query part is empty when no `?` is present.
pub fn split_query(raw: &str) -> (&str, &str) {
    match raw.split_once('?') {
        Some((path, query)) => (path, query),
        None => (raw, ""),
    }
}

/// Parse a query string into a flat map using `&` and `=` delimiters.
/// Entries without exactly one `=` are dropped silently.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Some((key.to_string(), value.to_string())),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_first_question_mark() {
        assert_eq!(split_query("/a?x=1&y=2"), ("/a", "x=1&y=2"));
        assert_eq!(split_query("/a"), ("/a", ""));
        assert_eq!(split_query("/a?x=?y"), ("/a", "x=?y"));
    }

    #[test]
    fn parse_well_formed_pairs() {
        let query = parse_query("x=1&y=2");
        assert_eq!(query.get("x").map(String::as_str), Some("1"));
        assert_eq!(query.get("y").map(String::as_str), Some("2"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn malformed_pairs_dropped() {
        let query = parse_query("bad&x=1");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("x").map(String::as_str), Some("1"));
        assert!(!query.contains_key("bad"));
    }

    #[test]
    fn double_equals_dropped() {
        let query = parse_query("a=b=c&x=1");
        assert_eq!(query.len(), 1);
        assert!(query.contains_key("x"));
    }

    #[test]
    fn empty_value_kept() {
        let query = parse_query("x=");
        assert_eq!(query.get("x").map(String::as_str), Some(""));
    }

    #[test]
    fn empty_query_yields_empty_map() {
        assert!(parse_query("").is_empty());
    }
}
