//! Contiguous token sequences.

use crate::analysis::tokenize;
use crate::document::Document;
use crate::stats::frequency::{TermCounts, TokenFrequency};

/// Every window of `n` consecutive tokens, joined with single spaces.
fn windows<S: AsRef<str>>(tokens: &[S], n: usize) -> impl Iterator<Item = String> + '_ {
    tokens.windows(n).map(|window| {
        window
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<&str>>()
            .join(" ")
    })
}

/// Number of windows of width `n` over `len` tokens.
fn window_count(len: usize, n: usize) -> usize {
    if n < 2 || len < n { 0 } else { len - n + 1 }
}

/// Count the n-grams of `tokens`, sorted by descending count.
///
/// Frequencies are relative to the number of windows. Sizes below 2 and
/// sequences shorter than `n` give an empty table.
///
/// # Examples
///
/// ```
/// use corpuskit::stats::ngrams;
///
/// let table = ngrams(&["to", "be", "or", "not", "to", "be"], 2);
/// assert_eq!(table[0].token, "to be");
/// assert_eq!(table[0].count, 2);
/// assert_eq!(table[0].frequency, 0.4);
/// assert!(ngrams(&["alone"], 2).is_empty());
/// ```
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<TokenFrequency> {
    let total = window_count(tokens.len(), n);
    if total == 0 {
        return Vec::new();
    }
    TermCounts::from_keys(windows(tokens, n)).into_frequencies(total)
}

/// Count n-grams over a document set.
///
/// Each document is windowed on its own, so no n-gram spans two documents.
/// Counts are summed and frequencies are relative to the total number of
/// windows across the set.
pub fn corpus_ngrams(docs: &[Document], n: usize, remove_stopwords: bool) -> Vec<TokenFrequency> {
    if n < 2 {
        return Vec::new();
    }

    let mut counts = TermCounts::new();
    let mut total = 0;
    for doc in docs {
        let tokens = tokenize(doc.content(), remove_stopwords, doc.language());
        total += window_count(tokens.len(), n);
        counts = counts.merge(TermCounts::from_keys(windows(&tokens, n)));
    }
    log::debug!("counted {total} {n}-gram windows in {} documents", docs.len());

    counts.into_frequencies(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;

    #[test]
    fn test_bigrams() {
        let tokens = ["the", "cat", "the", "cat", "ran"];
        let table = ngrams(&tokens, 2);
        let rows: Vec<_> = table.iter().map(|f| (f.token.as_str(), f.count)).collect();
        assert_eq!(
            rows,
            vec![("the cat", 2), ("cat the", 1), ("cat ran", 1)]
        );
        assert_eq!(table[0].frequency, 0.5);
    }

    #[test]
    fn test_trigrams_generalize() {
        let tokens = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        let table = ngrams(&tokens, 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].token, "a b c");
        assert_eq!(table[1].token, "b c d");

        let four = ngrams(&tokens, 4);
        assert_eq!(four.len(), 1);
        assert_eq!(four[0].frequency, 1.0);
    }

    #[test]
    fn test_degenerate_sizes() {
        let tokens = ["a", "b"];
        assert!(ngrams(&tokens, 3).is_empty());
        assert!(ngrams(&tokens, 1).is_empty());
        assert!(ngrams(&tokens, 0).is_empty());
        assert!(ngrams::<&str>(&[], 2).is_empty());
    }

    #[test]
    fn test_corpus_ngrams_do_not_cross_documents() {
        let docs = vec![
            Document::ingest("a", "red fish", Language::English),
            Document::ingest("b", "blue fish red fish", Language::English),
        ];
        let table = corpus_ngrams(&docs, 2, false);
        let rows: Vec<_> = table.iter().map(|f| (f.token.as_str(), f.count)).collect();
        assert_eq!(rows, vec![("red fish", 2), ("blue fish", 1), ("fish red", 1)]);
        assert_eq!(table[0].frequency, 0.5);
        assert!(table.iter().all(|f| f.token != "fish blue"));
    }

    #[test]
    fn test_corpus_ngrams_respect_stop_words() {
        let docs = vec![Document::ingest("a", "the cat and the dog", Language::English)];
        let table = corpus_ngrams(&docs, 2, true);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].token, "cat dog");
    }
}
