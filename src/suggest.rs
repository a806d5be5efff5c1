//! Autosuggest Bookkeeping
//!
//! Timing constants, the session result cache, and the request
//! sequence that keeps suggestion state consistent under races: only
//! the most recently issued request may publish its results.

use std::collections::HashMap;

use crate::models::Suggestion;

/// Debounce window between keystroke and request
pub const DEBOUNCE_MS: u32 = 250;
/// Grace period before the dropdown closes on blur, so clicks land
pub const BLUR_CLOSE_MS: u32 = 120;
/// Rows requested per query
pub const LIMIT: u32 = 20;
/// Background query used to prefill suggestions for an empty field
pub const PREFILL_QUERY: &str = "aa";

/// The fetch query is the background prefill when it equals the
/// sentinel and the user has typed nothing
pub fn is_prefill(fetch_query: &str, typed: &str) -> bool {
    fetch_query == PREFILL_QUERY && typed.trim().is_empty()
}

/// Minimum query length before anything is sent; the sentinel prefill
/// only needs one character
pub fn min_query_len(prefill: bool) -> usize {
    if prefill {
        1
    } else {
        2
    }
}

/// Cache key: all-stores scope plus the normalized query
pub fn cache_key(query: &str) -> String {
    format!("ALL|{}", query.to_lowercase())
}

/// Sequence counter and per-session cache for suggestion requests
#[derive(Debug, Default)]
pub struct SuggestState {
    seq: u64,
    cache: HashMap<String, Vec<Suggestion>>,
}

impl SuggestState {
    /// Claim the next sequence number; every older in-flight request
    /// becomes stale from this point on
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Whether `seq` is still the newest issued request
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }

    pub fn cached(&self, query: &str) -> Option<Vec<Suggestion>> {
        self.cache.get(&cache_key(query)).cloned()
    }

    pub fn insert(&mut self, query: &str, rows: Vec<Suggestion>) {
        self.cache.insert(cache_key(query), rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Store;

    fn rows(label: &str) -> Vec<Suggestion> {
        vec![Suggestion {
            product_id: 1,
            label: label.to_string(),
            store: Store::Ah,
            image_url: None,
        }]
    }

    #[test]
    fn test_latest_request_wins() {
        let mut state = SuggestState::default();

        // R1 issued, then R2 issued before R1's response arrives.
        let r1 = state.begin();
        let r2 = state.begin();

        // R1's response lands late: stale, must be dropped.
        assert!(!state.is_current(r1));
        // R2's response is the only one allowed to publish.
        assert!(state.is_current(r2));
    }

    #[test]
    fn test_ordering_is_by_issue_not_arrival() {
        let mut state = SuggestState::default();
        let r1 = state.begin();
        assert!(state.is_current(r1));
        let r2 = state.begin();
        let r3 = state.begin();
        // Even if responses arrive as r3, r1, r2, only r3 passes.
        assert!(state.is_current(r3));
        assert!(!state.is_current(r1));
        assert!(!state.is_current(r2));
    }

    #[test]
    fn test_cache_is_normalized_by_query() {
        let mut state = SuggestState::default();
        state.insert("Melk", rows("Melk 1L"));
        assert!(state.cached("melk").is_some());
        assert!(state.cached("MELK").is_some());
        assert!(state.cached("kaas").is_none());
    }

    #[test]
    fn test_min_query_len_rules() {
        assert!(is_prefill(PREFILL_QUERY, "   "));
        assert!(!is_prefill(PREFILL_QUERY, "aa"));
        assert!(!is_prefill("me", ""));

        assert_eq!(min_query_len(true), 1);
        assert_eq!(min_query_len(false), 2);
        // The sentinel itself passes its own bar.
        assert!(PREFILL_QUERY.len() >= min_query_len(true));
    }
}
