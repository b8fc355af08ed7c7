//! # corpuskit
//!
//! A local text-analysis engine for corpus linguistics.
//!
//! ## Features
//!
//! - Text normalization that strips markdown and generation artifacts
//! - Language-aware tokenization with English and Spanish stop words
//! - Token frequency tables, type/token ratio and n-grams
//! - Keyword-in-context concordances with literal, whole-word matching
//! - Lexicon-based sentiment scoring
//! - Averaging of externally supplied part-of-speech breakdowns
//!
//! ## Example
//!
//! ```
//! use corpuskit::analysis::Language;
//! use corpuskit::concordance::kwic;
//! use corpuskit::document::Document;
//! use corpuskit::stats::frequencies;
//!
//! let docs = vec![Document::ingest("doc1", "I love good food", Language::English)];
//!
//! let table = frequencies(&docs, true);
//! assert_eq!(table[0].token, "love");
//!
//! let lines = kwic(&docs, "good", 10);
//! assert_eq!(lines[0].right, " food");
//! ```

pub mod analysis;
pub mod cli;
pub mod concordance;
pub mod config;
pub mod document;
pub mod error;
pub mod pos;
pub mod sentiment;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::{Language, normalize, tokenize};
    pub use crate::concordance::{Concordancer, KwicConfig, KwicResult, kwic};
    pub use crate::document::{Document, DocumentFilter, SourceType};
    pub use crate::error::{CorpusError, Result};
    pub use crate::pos::{PosBreakdown, aggregate};
    pub use crate::sentiment::{SentimentLabel, SentimentResult, sentiment};
    pub use crate::stats::{
        CorpusStats, TokenFrequency, corpus_ngrams, frequencies, ngrams, type_token_ratio,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
