//! Corpus statistics.
//!
//! Frequency tables, n-grams and summary figures computed on demand from a
//! document set. Nothing here keeps state between calls; the caller owns the
//! documents and passes them in every time.

pub mod corpus;
pub mod frequency;
pub mod ngram;

pub use corpus::{CorpusStats, type_token_ratio};
pub use frequency::{FrequencyCounter, TermCounts, TokenFrequency, frequencies, top};
pub use ngram::{corpus_ngrams, ngrams};
