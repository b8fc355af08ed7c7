//! Keyword-in-context concordances.
//!
//! A concordance lists every whole-word occurrence of a keyword across a
//! document set, each with a fixed number of characters of context on either
//! side. Keywords are matched literally and case-insensitively; they are
//! never interpreted as patterns, so any user-supplied string is safe to
//! search for.

pub mod kwic;

pub use kwic::{Concordancer, KwicConfig, KwicResult, kwic};
