//! Token frequency counting, ranking and percentile-based suppression of over-common terms.

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::tokenizer::tokenize;
use crate::types::document::Document;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// Occurrence counts per token, remembering the order tokens were first seen.
///
/// First-seen order is what breaks ties in [`FrequencyTable::top_k`], which makes ranked
/// output reproducible for a given document order.
///
/// A table produced by [`FrequencyTable::percentile_filter`] also carries the percentile
/// it was filtered at (see [`FrequencyTable::filtered_at`]). That percentile is part of
/// the table's identity: two tables are equal only when their counts, first-seen order
/// and filter percentile all match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    filtered_at: Option<OrderedFloat<f64>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts `tokens` in order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.into());
        }
        table
    }

    /// Records one more occurrence of `token`.
    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The percentile this table was produced at by [`FrequencyTable::percentile_filter`],
    /// or `None` for a table built from tokens.
    pub fn filtered_at(&self) -> Option<f64> {
        self.filtered_at.map(OrderedFloat::into_inner)
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// The `k` most frequent tokens, highest count first.
    ///
    /// Equal counts keep first-seen order (the sort is stable and has no secondary key).
    pub fn top_k(&self, k: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// Removes every token whose count exceeds the `percentile`-th percentile of this
    /// table's counts. Tokens exactly at the threshold are kept.
    ///
    /// The percentile uses linear interpolation between the closest ranks of the sorted
    /// counts; `percentile` is clamped to `0..=100`. An empty table stays empty.
    ///
    /// The threshold belongs to the distribution the filter was first applied to, so
    /// re-filtering an already filtered table at the same percentile leaves it unchanged.
    pub fn percentile_filter(&self, percentile: f64) -> FrequencyTable {
        let percentile = percentile.clamp(0.0, 100.0);
        if self.filtered_at == Some(OrderedFloat(percentile)) {
            return self.clone();
        }

        let mut filtered = match self.percentile_count(percentile) {
            Some(threshold) => Self::from_counts(
                self.entries
                    .iter()
                    .filter(|(_, count)| *count as f64 <= threshold)
                    .cloned(),
            ),
            None => Self::new(),
        };
        filtered.filtered_at = Some(OrderedFloat(percentile));
        filtered
    }

    /// The `percentile`-th percentile of the counts, or `None` for an empty table.
    pub fn percentile_count(&self, percentile: f64) -> Option<f64> {
        let mut counts: Vec<usize> = self.entries.iter().map(|(_, count)| *count).collect();
        counts.sort_unstable();
        percentile_linear(&counts, percentile)
    }

    fn from_counts(entries: impl Iterator<Item = (String, usize)>) -> Self {
        let entries: Vec<(String, usize)> = entries.collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, (token, _))| (token.clone(), position))
            .collect();
        Self {
            entries,
            index,
            filtered_at: None,
        }
    }
}

/// Linear-interpolation percentile over ascending `sorted` values.
fn percentile_linear(sorted: &[usize], percentile: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = percentile.clamp(0.0, 100.0) / 100.0 * last as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let (low, high) = (sorted[lower] as f64, sorted[upper] as f64);
    Some(low + (high - low) * (rank - lower as f64))
}

/// Tokenizes every document and counts the tokens, optionally dropping stopwords first.
///
/// Documents are visited in order, which fixes the first-seen order of the table.
pub fn count_tokens(
    documents: &[Document],
    stopwords: &StopwordSet,
    exclude_stopwords: bool,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for doc in documents {
        for token in tokenize(&doc.text) {
            if exclude_stopwords && stopwords.contains(&token) {
                continue;
            }
            table.add(token);
        }
    }
    table
}
