//! Stop filter implementation.
//!
//! This module provides a filter that marks common function words (stop
//! words) that would otherwise dominate frequency lists. Marked tokens are
//! dropped by the remove empty filter that follows it in a pipeline. It carries the
//! English and Spanish stop word tables; the table is chosen by the
//! document's [`Language`], with anything other than Spanish using English.
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::language::Language;
//! use corpuskit::analysis::token_filter::Filter;
//! use corpuskit::analysis::token_filter::stop::StopFilter;
//! use corpuskit::analysis::token::Token;
//!
//! let filter = StopFilter::for_language(Language::English);
//! let tokens = vec![
//!     Token::new("the"),
//!     Token::new("quick"),
//!     Token::new("fox"),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert!(result[0].is_stopped());
//! assert!(!result[1].is_stopped());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// Default English stop words list.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Default Spanish stop words list.
const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "él", "ella", "ellas",
    "ellos", "en", "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "está",
    "estaba", "están", "estar", "este", "esto", "estos", "fue", "fueron", "ha", "había", "han",
    "hasta", "hay", "la", "las", "le", "les", "lo", "los", "más", "me", "mi", "mis", "mucho",
    "muy", "nada", "ni", "no", "nos", "nosotros", "o", "otra", "otro", "para", "pero", "poco",
    "por", "porque", "que", "qué", "quien", "se", "sea", "ser", "si", "sí", "sin", "sobre",
    "son", "su", "sus", "también", "tanto", "te", "tiene", "tienen", "todo", "todos", "tu",
    "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
];

/// English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| Arc::new(ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect()));

/// Spanish stop words as a HashSet.
pub static SPANISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| Arc::new(SPANISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect()));

/// The stop word set for a language. Unknown falls back to English.
pub fn stop_words_for(language: Language) -> &'static Arc<HashSet<String>> {
    if language.is_spanish() {
        &SPANISH_STOP_WORDS_SET
    } else {
        &ENGLISH_STOP_WORDS_SET
    }
}

/// A filter that marks stop words in the token stream.
///
/// Tokens are compared verbatim, so the filter belongs after the
/// lowercase filter and before the remove empty filter in a pipeline.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::for_language(Language::English)
    }

    /// Create a stop filter with the table for `language`.
    pub fn for_language(language: Language) -> Self {
        StopFilter {
            stop_words: Arc::clone(stop_words_for(language)),
        }
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let stop_words = Arc::clone(&self.stop_words);
        Box::new(tokens.map(move |token| {
            if stop_words.contains(&token.text) {
                token.stop()
            } else {
                token
            }
        }))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
