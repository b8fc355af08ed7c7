//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer produces them, token filters rewrite or mark them, and the
//! corpus statistics consume their text.
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::token::Token;
//!
//! let token = Token::new("world");
//! assert_eq!(token.text, "world");
//! assert!(!token.is_stopped());
//! assert!(token.stop().is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A word produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Set by the stop filter; stopped tokens are dropped by
    /// [`RemoveEmptyFilter`](crate::analysis::token_filter::RemoveEmptyFilter).
    pub stopped: bool,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            stopped: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text of this token, keeping its stop mark.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// Tokens flowing between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token() {
        let token = Token::new("gato");
        assert!(!token.is_stopped());
        assert!(!token.is_empty());
        assert!(Token::new("").is_empty());
    }

    #[test]
    fn test_with_text_keeps_stop_mark() {
        let token = Token::new("El").stop().with_text("el");
        assert_eq!(token.text, "el");
        assert!(token.is_stopped());
    }
}
