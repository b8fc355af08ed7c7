//! Lexicon-based sentiment scoring.
//!
//! Texts are scored against fixed lists of positive and negative words,
//! one pair of lists per language:
//!
//! ```text
//! normalized = (positive hits - negative hits) / (positive hits + negative hits)
//! ```
//!
//! rounded to two decimals. A score above `0.1` is positive, below `-0.1`
//! negative, and anything in between neutral, so one stray word in a short
//! text does not decide the label on its own.

pub mod lexicon;
pub mod scorer;

pub use lexicon::Lexicon;
pub use scorer::{SentimentLabel, SentimentResult, SentimentScorer, sentiment};
