//! Text analysis for corpuskit.
//!
//! This module provides the text processing pipeline: the normalizer that
//! cleans raw text before it becomes document content, and the char
//! filters, tokenizer and token filters that turn content into word tokens.

pub mod analyzer;
pub mod char_filter;
pub mod language;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, CorpusAnalyzer, PipelineAnalyzer};
pub use language::Language;
pub use normalizer::{TextNormalizer, normalize};
pub use token::{Token, TokenStream};

/// Split `text` into lowercase word tokens.
///
/// Punctuation is stripped, the text is split on runs of any Unicode
/// whitespace and empty strings are dropped. Tabs, newlines and
/// non-breaking spaces separate words just like spaces do, so
/// `"cat\ndog"` gives two tokens rather than one. When `remove_stopwords`
/// is set, stop words for `language` are filtered out (Spanish uses the
/// Spanish table, anything else the English one). Order follows the input and duplicates are kept.
///
/// # Examples
///
/// ```
/// use corpuskit::analysis::{Language, tokenize};
///
/// assert_eq!(tokenize("The cat, the hat!", false, Language::English),
///            vec!["the", "cat", "the", "hat"]);
/// assert_eq!(tokenize("The cat, the hat!", true, Language::English),
///            vec!["cat", "hat"]);
/// assert!(tokenize("   ", false, Language::Unknown).is_empty());
/// assert_eq!(tokenize("cat\ndog\tbird", false, Language::English),
///            vec!["cat", "dog", "bird"]);
/// ```
pub fn tokenize(text: &str, remove_stopwords: bool, language: Language) -> Vec<String> {
    CorpusAnalyzer::shared(language, remove_stopwords).words(text)
}
