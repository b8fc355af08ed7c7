//! Polarity word lists.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::Language;

const ENGLISH_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "happy", "love", "like",
    "best", "beautiful", "nice", "brilliant", "awesome", "perfect", "enjoy", "pleasant",
    "success", "positive", "delightful", "glad", "superb",
];

const ENGLISH_NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "sad", "hate", "worst", "poor", "ugly", "angry",
    "disappointing", "boring", "fail", "failure", "negative", "annoying", "painful", "wrong",
    "dreadful", "unhappy", "problem", "disaster",
];

const SPANISH_POSITIVE: &[&str] = &[
    "bueno", "buena", "excelente", "increíble", "maravilloso", "maravillosa", "fantástico",
    "feliz", "amor", "encanta", "mejor", "hermoso", "hermosa", "bonito", "genial", "perfecto",
    "perfecta", "agradable", "éxito", "positivo", "alegre", "estupendo",
];

const SPANISH_NEGATIVE: &[&str] = &[
    "malo", "mala", "terrible", "horrible", "triste", "odio", "peor", "pobre", "feo", "fea",
    "enojado", "aburrido", "aburrida", "fracaso", "negativo", "molesto", "doloroso", "error",
    "problema", "desastre", "pésimo", "infeliz",
];

static ENGLISH: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::from_words(ENGLISH_POSITIVE, ENGLISH_NEGATIVE));
static SPANISH: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::from_words(SPANISH_POSITIVE, SPANISH_NEGATIVE));

/// Whether a word carries positive or negative sentiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A pair of positive and negative word sets.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// The built-in lexicon for `language`. Unknown falls back to English.
    pub fn for_language(language: Language) -> &'static Lexicon {
        if language.is_spanish() {
            &SPANISH
        } else {
            &ENGLISH
        }
    }

    /// Build a lexicon from word lists. Words are lowercased.
    pub fn from_words<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Lexicon {
            positive: positive
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The polarity of `word`, if it is in the lexicon.
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if self.positive.contains(word) {
            Some(Polarity::Positive)
        } else if self.negative.contains(word) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}
