//! Analyzers: complete text processing pipelines.
//!
//! An analyzer turns raw text into a stream of tokens:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`CorpusAnalyzer`](corpus::CorpusAnalyzer) - The language-aware corpus tokenizer

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can serve the
/// per-document shards of a parallel scan.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod corpus;
pub mod pipeline;

pub use corpus::CorpusAnalyzer;
pub use pipeline::PipelineAnalyzer;
