//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and rewrite, mark or
//! drop tokens. They are chained by an analyzer:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Remove Empty
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//! - [`stop::StopFilter`] - Marks stop words as stopped
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::token_filter::Filter;
//! use corpuskit::analysis::token_filter::lowercase::LowercaseFilter;
//! use corpuskit::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod remove_empty;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use stop::StopFilter;
