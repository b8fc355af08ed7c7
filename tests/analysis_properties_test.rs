//! Properties that hold for every input of the analysis functions

use corpuskit::prelude::*;

const SAMPLES: &[&str] = &[
    "",
    "   \n\t ",
    "The cat sat. The cat ran.",
    "# Title\n\n\n\n**Bold** and [placeholder] text ____ here",
    "Title: x\nSubject: y\n- item one\n* item two\n\n\n\nend",
    "## \n#\n**\n__\n[]",
    "***nested** markers*** and ****four****",
    "Here is the thing\nWrite a poem\nPlease generate more\nreal content",
    "¿Dónde está la biblioteca? ¡Aquí!",
    "[[double]] brackets [a [b] c]",
    "   leading and trailing   \n\n\n\n\n",
    "line\n \n \t\n  \nnext",
];

#[test]
fn test_normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_normalize_never_leaves_outer_whitespace() {
    for sample in SAMPLES {
        let out = normalize(sample);
        assert_eq!(out.trim(), out, "untrimmed output for {sample:?}");
        assert!(!out.contains("\n\n\n"));
        assert!(!out.contains("**"));
    }
}

#[test]
fn test_tokenize_is_deterministic() {
    for sample in SAMPLES {
        for language in Language::ALL {
            for remove in [false, true] {
                assert_eq!(
                    tokenize(sample, remove, language),
                    tokenize(sample, remove, language)
                );
            }
        }
    }
}

#[test]
fn test_tokens_are_lowercase_and_non_empty() {
    for sample in SAMPLES {
        for token in tokenize(sample, false, Language::English) {
            assert!(!token.is_empty());
            assert_eq!(token, token.to_lowercase());
            assert!(!token.chars().any(char::is_whitespace));
        }
    }
}

fn corpus() -> Vec<Document> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let language = Language::ALL[i % Language::ALL.len()];
            Document::ingest(format!("doc{i}"), text, language)
        })
        .collect()
}

#[test]
fn test_frequency_conservation() {
    let docs = corpus();
    let counted: usize = frequencies(&docs, false).iter().map(|f| f.count).sum();
    let expected: usize = docs
        .iter()
        .map(|d| tokenize(d.content(), false, d.language()).len())
        .sum();
    assert_eq!(counted, expected);
}

#[test]
fn test_frequency_sort_order() {
    let docs = corpus();
    for remove in [false, true] {
        let table = frequencies(&docs, remove);
        assert!(table.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }
}

#[test]
fn test_token_count_matches_content() {
    for doc in corpus() {
        assert_eq!(
            doc.token_count(),
            tokenize(doc.content(), false, doc.language()).len()
        );
    }
}

#[test]
fn test_ngrams_shorter_than_window() {
    let tokens = tokenize("only three words", false, Language::English);
    assert!(ngrams(&tokens, 4).is_empty());
    assert!(ngrams(&tokens, 10).is_empty());
    assert_eq!(ngrams(&tokens, 3).len(), 1);
}

#[test]
fn test_kwic_word_boundaries() {
    let docs = vec![Document::ingest("d", "concatenate the cat sat", Language::English)];
    let lines = kwic(&docs, "cat", 60);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].left, "concatenate the ");
}

#[test]
fn test_kwic_window_clipping() {
    let docs = vec![Document::ingest("d", "cat and dog", Language::English)];
    assert_eq!(kwic(&docs, "cat", 60)[0].left, "");
    assert_eq!(kwic(&docs, "dog", 60)[0].right, "");
}

#[test]
fn test_kwic_tolerates_any_keyword() {
    let docs = corpus();
    for keyword in ["(", "[", "*", "\\", ".*", "a|b", "(?P<x>", "$", "^", "**", "🙂"] {
        for line in kwic(&docs, keyword, 5) {
            assert_eq!(line.node.to_lowercase(), keyword.to_lowercase());
        }
    }
}

#[test]
fn test_sentiment_without_lexicon_words() {
    for language in Language::ALL {
        let result = sentiment("the table stands near a window", language);
        assert_eq!(result, SentimentResult { score: 0.0, label: SentimentLabel::Neutral });
    }
}

#[test]
fn test_sentiment_symmetry() {
    for n in 1..5 {
        let positive = vec!["great"; n].join(" ");
        let negative = vec!["awful"; n].join(" ");
        assert_eq!(sentiment(&positive, Language::English).score, 1.0);
        assert_eq!(sentiment(&negative, Language::English).score, -1.0);
    }
    assert_eq!(sentiment("feliz alegre", Language::Spanish).score, 1.0);
    assert_eq!(sentiment("triste feo", Language::Spanish).score, -1.0);
}

#[test]
fn test_pos_aggregation_absence() {
    assert_eq!(aggregate(&[]), None);
    let doc = Document::ingest("d", "no pos data", Language::English);
    assert_eq!(aggregate(&[doc]), None);
}
