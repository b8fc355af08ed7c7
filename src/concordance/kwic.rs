//! The KWIC concordancer.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Characters that may precede a match.
const LEADING_BOUNDARIES: &[char] = &['.', ',', ';', ':', '¡', '!', '¿', '?', '(', '[', '"', '\''];

/// Characters that may follow a match.
const TRAILING_BOUNDARIES: &[char] = &['.', ',', ';', ':', '¡', '!', '¿', '?', ')', ']', '\'', '"'];

fn is_leading_boundary(c: char) -> bool {
    c.is_whitespace() || LEADING_BOUNDARIES.contains(&c)
}

fn is_trailing_boundary(c: char) -> bool {
    c.is_whitespace() || TRAILING_BOUNDARIES.contains(&c)
}

/// One concordance line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwicResult {
    /// Context before the match.
    pub left: String,
    /// The matched text, in its original case.
    pub node: String,
    /// Context after the match.
    pub right: String,
    /// Title of the document the match was found in.
    #[serde(rename = "docId")]
    pub doc_id: String,
}

/// Configuration for concordance searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KwicConfig {
    /// Context characters on each side of a match.
    pub window_radius: usize,
}

impl KwicConfig {
    pub const DEFAULT_WINDOW_RADIUS: usize = 60;

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window radius.
    pub fn window_radius(mut self, window_radius: usize) -> Self {
        self.window_radius = window_radius;
        self
    }
}

impl Default for KwicConfig {
    fn default() -> Self {
        KwicConfig {
            window_radius: Self::DEFAULT_WINDOW_RADIUS,
        }
    }
}

/// Finds keyword occurrences and cuts their context windows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Concordancer {
    config: KwicConfig,
}

impl Concordancer {
    pub fn new(config: KwicConfig) -> Self {
        Concordancer { config }
    }

    pub fn config(&self) -> &KwicConfig {
        &self.config
    }

    /// Search every document, in order.
    ///
    /// Empty and whitespace-only keywords give no results.
    pub fn search(&self, docs: &[Document], keyword: &str) -> Vec<KwicResult> {
        let Some(needle) = Needle::new(keyword) else {
            return Vec::new();
        };

        let results: Vec<KwicResult> = docs
            .iter()
            .flat_map(|doc| self.search_with(&needle, doc.content(), doc.title()))
            .collect();
        log::debug!(
            "found {} occurrences of {:?} in {} documents",
            results.len(),
            keyword,
            docs.len()
        );
        results
    }

    /// Search a single text, labelling results with `doc_id`.
    pub fn search_text(&self, text: &str, keyword: &str, doc_id: &str) -> Vec<KwicResult> {
        match Needle::new(keyword) {
            Some(needle) => self.search_with(&needle, text, doc_id),
            None => Vec::new(),
        }
    }

    fn search_with(&self, needle: &Needle, text: &str, doc_id: &str) -> Vec<KwicResult> {
        let chars: Vec<char> = text.chars().collect();
        let radius = self.config.window_radius;
        let mut results = Vec::new();

        let mut start = 0;
        while start < chars.len() {
            let Some(len) = needle.match_at(&chars, start) else {
                start += 1;
                continue;
            };

            let end = start + len;
            let before_ok = start == 0 || is_leading_boundary(chars[start - 1]);
            let after_ok = end == chars.len() || is_trailing_boundary(chars[end]);
            if before_ok && after_ok {
                results.push(KwicResult {
                    left: chars[start.saturating_sub(radius)..start].iter().collect(),
                    node: chars[start..end].iter().collect(),
                    right: chars[end..(end + radius).min(chars.len())].iter().collect(),
                    doc_id: doc_id.to_string(),
                });
            }
            start = end;
        }

        results
    }
}

/// A lowercased keyword, compared character by character.
struct Needle {
    chars: Vec<char>,
}

impl Needle {
    fn new(keyword: &str) -> Option<Self> {
        if keyword.trim().is_empty() {
            return None;
        }
        Some(Needle {
            chars: keyword.chars().flat_map(char::to_lowercase).collect(),
        })
    }

    /// Length in characters of the text matching at `start`, if any.
    fn match_at(&self, haystack: &[char], start: usize) -> Option<usize> {
        let mut matched = 0;
        let mut pos = start;
        while matched < self.chars.len() {
            let c = *haystack.get(pos)?;
            for lower in c.to_lowercase() {
                if self.chars.get(matched) != Some(&lower) {
                    return None;
                }
                matched += 1;
            }
            pos += 1;
        }
        Some(pos - start)
    }
}

/// Concordance of `keyword` over `docs` with `window_radius` characters of
/// context on each side.
///
/// # Examples
///
/// ```
/// use corpuskit::analysis::Language;
/// use corpuskit::concordance::kwic;
/// use corpuskit::document::Document;
///
/// let docs = vec![Document::ingest("doc1", "I love good food", Language::English)];
/// let lines = kwic(&docs, "good", 10);
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].left, "I love ");
/// assert_eq!(lines[0].node, "good");
/// assert_eq!(lines[0].right, " food");
/// assert_eq!(lines[0].doc_id, "doc1");
/// ```
pub fn kwic(docs: &[Document], keyword: &str, window_radius: usize) -> Vec<KwicResult> {
    Concordancer::new(KwicConfig::new().window_radius(window_radius)).search(docs, keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;

    fn doc(title: &str, text: &str) -> Document {
        Document::ingest(title, text, Language::English)
    }

    fn nodes(results: &[KwicResult]) -> Vec<&str> {
        results.iter().map(|r| r.node.as_str()).collect()
    }

    #[test]
    fn test_whole_word_only() {
        let results = kwic(&[doc("d", "concatenate the cat sat")], "cat", 60);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].left, "concatenate the ");
        assert_eq!(results[0].right, " sat");
    }

    #[test]
    fn test_case_insensitive_keeps_original_case() {
        let results = kwic(&[doc("d", "Cat and CAT and cat.")], "cAt", 60);
        assert_eq!(nodes(&results), vec!["Cat", "CAT", "cat"]);
    }

    #[test]
    fn test_window_clipping() {
        let results = kwic(&[doc("d", "cat in the middle then cat")], "cat", 60);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].left, "");
        assert_eq!(results[1].right, "");

        let results = kwic(&[doc("d", "abcdef cat ghijkl")], "cat", 3);
        assert_eq!(results[0].left, "ef ");
        assert_eq!(results[0].right, " gh");
    }

    #[test]
    fn test_windows_count_characters() {
        let results = kwic(&[doc("d", "añadió él más café")], "más", 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].left, "él ");
        assert_eq!(results[0].right, " ca");
    }

    #[test]
    fn test_asymmetric_boundaries() {
        let concordancer = Concordancer::default();
        // '(' may open a match but not close one, ')' the reverse.
        let results = concordancer.search_text("(cat) [cat] ¿cat? 'cat'", "cat", "d");
        assert_eq!(results.len(), 4);

        assert!(concordancer.search_text("cat(", "cat", "d").is_empty());
        assert!(concordancer.search_text(")cat", "cat", "d").is_empty());
        assert!(concordancer.search_text("]cat[", "cat", "d").is_empty());
        assert!(concordancer.search_text("cat-like", "cat", "d").is_empty());
    }

    #[test]
    fn test_scan_resumes_after_candidate() {
        let results = kwic(&[doc("d", "catcat cat")], "cat", 60);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].left, "catcat ");
    }

    #[test]
    fn test_keywords_are_literal() {
        let results = kwic(&[doc("d", "what is a.b? or (x) or a*b")], "a.b", 60);
        assert_eq!(nodes(&results), vec!["a.b"]);
        assert!(kwic(&[doc("d", "axb")], "a.b", 60).is_empty());
        assert_eq!(Concordancer::default().search_text("a [ b", "[", "d").len(), 1);
        assert!(kwic(&[doc("d", "text")], "(?i", 60).is_empty());
    }

    #[test]
    fn test_multi_word_keyword() {
        let results = kwic(&[doc("d", "I said good food, good food!")], "Good Food", 60);
        assert_eq!(nodes(&results), vec!["good food", "good food"]);
    }

    #[test]
    fn test_empty_keyword() {
        let docs = vec![doc("d", "some text here")];
        assert!(kwic(&docs, "", 60).is_empty());
        assert!(kwic(&docs, "   ", 60).is_empty());
        assert!(Concordancer::default().search_text("x", "\t", "d").is_empty());
    }

    #[test]
    fn test_results_follow_document_order() {
        let docs = vec![doc("first", "a cat"), doc("second", "cat and cat")];
        let ids: Vec<_> = kwic(&docs, "cat", 60).into_iter().map(|r| r.doc_id).collect();
        assert_eq!(ids, vec!["first", "second", "second"]);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(Concordancer::default().config().window_radius, 60);
        let config: KwicConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, KwicConfig::default());
    }

    #[test]
    fn test_serializes_doc_id_in_camel_case() {
        let result = KwicResult {
            left: String::new(),
            node: "x".to_string(),
            right: String::new(),
            doc_id: "doc1".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["docId"], "doc1");
    }
}
