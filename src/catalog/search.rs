//! Ranked fuzzy search over country names.
//!
//! The index is built from one fetched dataset, queried once and dropped
//! with the request. Matching itself is delegated to `fuzzy-matcher`'s
//! skim algorithm.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::country::Country;

/// Search keys of one record: official and common name, lowercased.
struct Entry {
    keys: [String; 2],
}

pub struct SearchIndex {
    entries: Vec<Entry>,
    matcher: SkimMatcherV2,
}

impl SearchIndex {
    pub fn build(records: &[Country]) -> Self {
        let entries = records
            .iter()
            .map(|country| Entry {
                keys: [
                    country.name.official.to_lowercase(),
                    country.name.common.to_lowercase(),
                ],
            })
            .collect();

        Self {
            entries,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Positions of the matching records, best match first.
    ///
    /// Matching is subsequence based: characters of a token must appear in
    /// order, so a misspelling such as `zanbia` does not match `zambia`.
    /// Every whitespace-separated token of `query` has to match the same
    /// key; a record scores the best of its keys. Equal scores keep
    /// dataset order.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let _span = tracing::debug_span!(
            "search",
            records = self.entries.len(),
            query_len = query.len()
        )
        .entered();

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                entry
                    .keys
                    .iter()
                    .filter_map(|key| self.score_key(key, &tokens))
                    .max()
                    .map(|score| (position, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        tracing::debug!(matched = scored.len(), "search ranked");
        scored.into_iter().map(|(position, _)| position).collect()
    }

    fn score_key(&self, key: &str, tokens: &[String]) -> Option<i64> {
        tokens
            .iter()
            .map(|token| self.matcher.fuzzy_match(key, token))
            .sum()
    }
}
