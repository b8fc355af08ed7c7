//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer. The corpus pipeline uses them to strip punctuation before
//! splitting, and the [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer)
//! is built entirely out of them.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::char_filter::CharFilter;
//! use corpuskit::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "#").unwrap();
//! assert_eq!(filter.filter("Year 2024"), "Year #");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Char filters are total: any input produces an output string.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;
