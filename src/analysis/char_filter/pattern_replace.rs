//! Regex replacement char filter.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;
use crate::error::{CorpusError, Result};

/// Punctuation removed by the corpus tokenizer before splitting.
///
/// Periods, commas, slashes, hashes, `!`, `%`, `&`, `;`, braces, `=`, `-`,
/// `_`, backticks, `~`, parentheses, straight and curly double quotes and
/// guillemets. Question marks, colons and apostrophes are kept.
const PUNCTUATION_PATTERN: &str = r#"[.,/#!%&;{}=\-_`~()"“”«»]"#;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PUNCTUATION_PATTERN).expect("punctuation pattern is valid"));

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    ///
    /// The replacement is inserted literally; `$` group references are not
    /// expanded.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CorpusError::invalid_argument(format!("invalid pattern: {e}")))?;
        Ok(Self::from_regex(pattern, replacement))
    }

    /// Create a filter from an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        }
    }

    /// The punctuation strip applied by the corpus tokenizer.
    pub fn punctuation() -> Self {
        Self::from_regex(PUNCTUATION.clone(), "").with_name("punctuation")
    }

    /// Set a custom name for this filter.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        match self
            .pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
        {
            Cow::Borrowed(unchanged) => unchanged.to_string(),
            Cow::Owned(replaced) => replaced,
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = PatternReplaceCharFilter::new(r"\d", "$1").unwrap();
        assert_eq!(filter.filter("a1"), "a$1");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new(r"(unclosed", "").is_err());
    }

    #[test]
    fn test_punctuation_strip() {
        let filter = PatternReplaceCharFilter::punctuation();
        assert_eq!(
            filter.filter("«Hola», dijo (well-known) “quote” 50% & co."),
            "Hola dijo wellknown quote 50  co"
        );
        assert_eq!(filter.filter("why? yes: it's"), "why? yes: it's");
        assert_eq!(filter.name(), "punctuation");
    }
}
