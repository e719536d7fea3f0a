use super::index::SearchIndex;
use crate::model::SearchEntry;

/// Queries shorter than this (after trimming) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on the number of results shown.
pub const MAX_RESULTS: usize = 8;

/// Substring filter over a [`SearchIndex`].
///
/// Matching is existence-based: an entry is in or out, and matches keep the
/// index order. The same query against the same index always gives the same
/// result.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    index: SearchIndex,
    max_results: usize,
    min_query_chars: usize,
}

impl QueryMatcher {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            max_results: MAX_RESULTS,
            min_query_chars: MIN_QUERY_CHARS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    /// Whether `query` is long enough to be matched at all.
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_chars
    }

    pub fn find(&self, query: &str) -> Vec<SearchEntry> {
        if !self.accepts(query) {
            return Vec::new();
        }
        filter_entries(query, self.index.entries(), self.max_results)
    }
}

/// Match `query` against `entries` with the default floor and cap.
pub fn match_query(query: &str, entries: &[SearchEntry]) -> Vec<SearchEntry> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    filter_entries(query, entries, MAX_RESULTS)
}

// The query is folded as typed, not trimmed: "seo " only matches where a space follows.
fn filter_entries(query: &str, entries: &[SearchEntry], limit: usize) -> Vec<SearchEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.section_label.to_lowercase().contains(&needle)
        })
        .take(limit)
        .cloned()
        .collect()
}
