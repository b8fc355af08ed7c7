//! Token frequency tables.

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::config::ParallelConfig;
use crate::document::Document;

/// One row of a frequency table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub token: String,
    pub count: usize,
    /// `count` divided by the size of the counted population.
    pub frequency: f64,
}

/// Occurrence counts that remember the order in which keys were first seen.
///
/// Merging appends the keys new to `self` in the other table's order, so
/// folding per-document tables left to right in document order gives the
/// same table as counting all documents in one pass.
#[derive(Clone, Debug, Default)]
pub struct TermCounts {
    index: AHashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl TermCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every item of `keys`.
    pub fn from_keys<I: IntoIterator<Item = String>>(keys: I) -> Self {
        let mut counts = Self::new();
        for key in keys {
            counts.add(key, 1);
        }
        counts
    }

    /// Record `count` occurrences of `key`.
    pub fn add(&mut self, key: String, count: usize) {
        self.total += count;
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
            }
        }
    }

    /// Sum `other` into `self`.
    pub fn merge(mut self, other: TermCounts) -> TermCounts {
        for (key, count) in other.entries {
            self.add(key, count);
        }
        self
    }

    /// Number of occurrences counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Turn the counts into a table sorted by descending count.
    ///
    /// Equal counts keep first-seen order. Frequencies are relative to
    /// `denominator`, or zero when it is zero.
    pub fn into_frequencies(self, denominator: usize) -> Vec<TokenFrequency> {
        let mut table: Vec<TokenFrequency> = self
            .entries
            .into_iter()
            .map(|(token, count)| TokenFrequency {
                token,
                count,
                frequency: if denominator == 0 {
                    0.0
                } else {
                    count as f64 / denominator as f64
                },
            })
            .collect();
        table.sort_by(|a, b| b.count.cmp(&a.count));
        table
    }
}

/// Computes token frequency tables over a document set.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrequencyCounter {
    remove_stopwords: bool,
    parallel: ParallelConfig,
}

impl FrequencyCounter {
    pub fn new(remove_stopwords: bool) -> Self {
        FrequencyCounter {
            remove_stopwords,
            parallel: ParallelConfig::default(),
        }
    }

    /// Shard the scan across the rayon thread pool when the set is large
    /// enough. The result is identical to the sequential scan.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn removes_stopwords(&self) -> bool {
        self.remove_stopwords
    }

    fn uses_parallel(&self, docs: &[Document]) -> bool {
        self.parallel.enabled && docs.len() >= self.parallel.min_documents
    }

    fn count_document(&self, doc: &Document) -> TermCounts {
        TermCounts::from_keys(tokenize(doc.content(), self.remove_stopwords, doc.language()))
    }

    /// Count tokens across `docs`. Each document is tokenized with its own
    /// language.
    pub fn counts(&self, docs: &[Document]) -> TermCounts {
        if self.uses_parallel(docs) {
            log::debug!("counting {} documents in parallel", docs.len());
            docs.par_iter()
                .map(|doc| self.count_document(doc))
                .reduce(TermCounts::new, TermCounts::merge)
        } else {
            docs.iter()
                .map(|doc| self.count_document(doc))
                .fold(TermCounts::new(), TermCounts::merge)
        }
    }

    /// The frequency table of `docs`, sorted by descending count.
    pub fn count(&self, docs: &[Document]) -> Vec<TokenFrequency> {
        let counts = self.counts(docs);
        let total = counts.total();
        log::debug!(
            "counted {} tokens ({} types) in {} documents",
            total,
            counts.distinct(),
            docs.len()
        );
        counts.into_frequencies(total)
    }
}

/// The frequency table of `docs`, sorted by descending count.
///
/// Ties keep the order in which tokens first appear, reading documents in
/// order.
///
/// # Examples
///
/// ```
/// use corpuskit::analysis::Language;
/// use corpuskit::document::Document;
/// use corpuskit::stats::frequencies;
///
/// let docs = vec![Document::ingest("d", "The cat sat. The cat ran.", Language::English)];
/// let table = frequencies(&docs, false);
///
/// let tokens: Vec<_> = table.iter().map(|f| (f.token.as_str(), f.count)).collect();
/// assert_eq!(tokens, vec![("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
/// ```
pub fn frequencies(docs: &[Document], remove_stopwords: bool) -> Vec<TokenFrequency> {
    FrequencyCounter::new(remove_stopwords).count(docs)
}

/// At most the first `n` rows of `table`.
pub fn top(table: &[TokenFrequency], n: usize) -> &[TokenFrequency] {
    &table[..n.min(table.len())]
}
