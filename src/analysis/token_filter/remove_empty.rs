//! Remove empty filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that removes empty tokens and stopped tokens from the stream.
///
/// Placed after char filters and lowercasing, it guarantees that no empty
/// string ever reaches the frequency tables.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_stopped() && !token.text.is_empty()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
