//! Corpus summary figures.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::stats::frequency::{FrequencyCounter, TermCounts};

/// Size and lexical diversity of a document set.
///
/// # Examples
///
/// ```
/// use corpuskit::analysis::Language;
/// use corpuskit::document::Document;
/// use corpuskit::stats::CorpusStats;
///
/// let docs = vec![Document::ingest("d", "the cat saw the dog", Language::English)];
/// let stats = CorpusStats::compute(&docs);
///
/// assert_eq!(stats.documents, 1);
/// assert_eq!(stats.tokens, 5);
/// assert_eq!(stats.types, 4);
/// assert_eq!(stats.type_token_ratio, 0.8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of documents.
    pub documents: usize,
    /// Total tokens, without stop word removal.
    pub tokens: usize,
    /// Distinct tokens.
    pub types: usize,
    /// `types / tokens`, or zero for an empty set.
    pub type_token_ratio: f64,
}

impl CorpusStats {
    pub fn compute(docs: &[Document]) -> Self {
        Self::from_counts(docs.len(), &FrequencyCounter::new(false).counts(docs))
    }

    fn from_counts(documents: usize, counts: &TermCounts) -> Self {
        let tokens = counts.total();
        let types = counts.distinct();
        CorpusStats {
            documents,
            tokens,
            types,
            type_token_ratio: if tokens == 0 {
                0.0
            } else {
                types as f64 / tokens as f64
            },
        }
    }
}

/// Distinct tokens over total tokens across `docs`, with default
/// tokenization. An empty set, or one without tokens, gives `0.0`.
pub fn type_token_ratio(docs: &[Document]) -> f64 {
    CorpusStats::compute(docs).type_token_ratio
}
