//! Cleanup of generated text before it enters the corpus.
//!
//! Text produced by transcription, translation or synthesis tends to carry
//! markdown and prompt residue. The normalizer removes:
//!
//! - bold delimiters (`**`)
//! - heading prefixes (one to six `#` followed by a space)
//! - solitary list bullets (`-` or `*` at line start)
//! - meta header lines (`Title:`, `Subject:`, `Video:`, `Assignment:`,
//!   `Student:`, `Date:`, `Instruction:`) and echoed instructions
//!   (`Write a…`, `Here is the…`, `Please generate…`)
//! - bracketed placeholders (`[Name]`)
//! - runs of underscores
//!
//! then collapses three or more consecutive newlines to two and trims the
//! result. Rules are applied until the text stops changing; every rule only
//! removes characters, so this terminates and makes the normalizer
//! idempotent.
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::normalizer::normalize;
//!
//! let raw = "Title: My essay\n\n## Intro\n**Dogs** are [Adjective] pets.";
//! assert_eq!(normalize(raw), "Intro\nDogs are  pets.");
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;

/// Rules in application order: (name, pattern, replacement).
const RULES: &[(&str, &str, &str)] = &[
    ("bold", r"\*\*", ""),
    ("heading", r"(?m)^[ \t]*#{1,6}[ \t]+", ""),
    ("bullet", r"(?m)^[ \t]*[-*][ \t]+", ""),
    (
        "meta_header",
        r"(?m)^[ \t]*(?:Title|Subject|Video|Assignment|Student|Date|Instruction):[^\n]*",
        "",
    ),
    (
        "instruction_echo",
        r"(?m)^[ \t]*(?:Write a|Here is the|Please generate)\b[^\n]*",
        "",
    ),
    ("placeholder", r"\[[^\[\]\n]*\]", ""),
    ("underscores", r"_{2,}", ""),
    ("blank_lines", r"\n(?:[ \t]*\n){2,}", "\n\n"),
];

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::new);

/// Normalize raw text with the default rule set.
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// A cleanup pass assembled from regex char filters.
#[derive(Clone)]
pub struct TextNormalizer {
    filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create a normalizer with the default rule set.
    pub fn new() -> Self {
        let filters = RULES
            .iter()
            .map(|&(name, pattern, replacement)| {
                let regex = Regex::new(pattern).expect("normalizer rules are valid patterns");
                Arc::new(PatternReplaceCharFilter::from_regex(regex, replacement).with_name(name))
                    as Arc<dyn CharFilter>
            })
            .collect();
        Self { filters }
    }

    /// Append an extra char filter that runs after the default rules.
    pub fn add_char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Names of the configured rules, in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Normalize `raw`. Never fails; the result may be empty.
    pub fn normalize(&self, raw: &str) -> String {
        let mut current = raw.trim().to_string();
        loop {
            let next = self.apply_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn apply_once(&self, text: &str) -> String {
        let mut out = text.to_string();
        for filter in &self.filters {
            out = filter.filter(&out);
        }
        out.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_headings() {
        assert_eq!(normalize("# Title\n**bold** text"), "Title\nbold text");
        assert_eq!(normalize("###### Deep"), "Deep");
        assert_eq!(normalize("####### Too deep"), "####### Too deep");
        assert_eq!(normalize("#hashtag stays"), "#hashtag stays");
    }

    #[test]
    fn test_meta_headers_removed() {
        let raw = "Subject: Biology\nStudent: Ana\nDate: 2024-01-01\nPlants grow.";
        assert_eq!(normalize(raw), "Plants grow.");
    }

    #[test]
    fn test_instruction_echo_removed() {
        let raw = "Here is the essay you asked for:\nThe sea is blue.\nPlease generate more.";
        assert_eq!(normalize(raw), "The sea is blue.");
        assert_eq!(normalize("Write about cats."), "Write about cats.");
    }

    #[test]
    fn test_placeholders_and_underscores() {
        assert_eq!(normalize("Dear [Name], sign here ____."), "Dear , sign here .");
        assert_eq!(normalize("snake_case"), "snake_case");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(normalize("- one\n* two\n-three"), "one\ntwo\n-three");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n \n\t\n b"), "a\n\n b");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_nested_residue_is_removed_in_one_call() {
        // The bullet hides a header, the placeholder hides a bold marker.
        assert_eq!(normalize("- Title: x\nbody *[a]*"), "body");
        assert_eq!(normalize("- # Heading"), "Heading");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "plain text",
            "## Heading\n\n\n\n- item\n**Title:** x\n[tag] ___ done",
            "Title: a\n\n\nHere is the thing\n\n\n\nreal content\n",
            "* * * ** #",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_rule_names() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.rule_names().first(), Some(&"bold"));
        assert_eq!(normalizer.rule_names().len(), RULES.len());
    }
}
