//! The sentiment scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{Language, tokenize};
use crate::sentiment::lexicon::{Lexicon, Polarity};

/// Scores strictly above this are positive, strictly below its negation
/// negative.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Three-way sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// A score in `[-1, 1]` with its label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f64,
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// The result for text without any sentiment-bearing words.
    pub const NEUTRAL: SentimentResult = SentimentResult {
        score: 0.0,
        label: SentimentLabel::Neutral,
    };
}

/// Tally of lexicon matches in a token sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolarityCounts {
    pub positive: usize,
    pub negative: usize,
}

impl PolarityCounts {
    /// Tokens that matched either list.
    pub fn relevant(&self) -> usize {
        self.positive + self.negative
    }

    /// `(positive - negative) / relevant`, or `0.0` when nothing matched.
    pub fn normalized(&self) -> f64 {
        match self.relevant() {
            0 => 0.0,
            relevant => (self.positive as f64 - self.negative as f64) / relevant as f64,
        }
    }
}

/// Scores text against a lexicon.
#[derive(Clone, Copy, Debug)]
pub struct SentimentScorer<'a> {
    lexicon: &'a Lexicon,
}

impl SentimentScorer<'static> {
    /// A scorer using the built-in lexicon of `language`.
    pub fn for_language(language: Language) -> Self {
        SentimentScorer {
            lexicon: Lexicon::for_language(language),
        }
    }
}

impl<'a> SentimentScorer<'a> {
    /// A scorer using a custom lexicon.
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        SentimentScorer { lexicon }
    }

    /// Count positive and negative lexicon hits among `tokens`.
    pub fn count<S: AsRef<str>>(&self, tokens: &[S]) -> PolarityCounts {
        tokens
            .iter()
            .fold(PolarityCounts::default(), |mut counts, token| {
                match self.lexicon.polarity(token.as_ref()) {
                    Some(Polarity::Positive) => counts.positive += 1,
                    Some(Polarity::Negative) => counts.negative += 1,
                    None => {}
                }
                counts
            })
    }

    /// Score an already tokenized text.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> SentimentResult {
        if tokens.is_empty() {
            return SentimentResult::NEUTRAL;
        }

        let normalized = self.count(tokens).normalized();
        SentimentResult {
            score: round2(normalized),
            label: SentimentLabel::from_score(normalized),
        }
    }
}

/// Score `text` with the lexicon of `language`.
///
/// The text is tokenized without stop word removal. The label is derived
/// from the unrounded score; only the reported score is rounded to two
/// decimals.
///
/// # Examples
///
/// ```
/// use corpuskit::analysis::Language;
/// use corpuskit::sentiment::{SentimentLabel, sentiment};
///
/// let result = sentiment("good good bad", Language::English);
/// assert_eq!(result.score, 0.33);
/// assert_eq!(result.label, SentimentLabel::Positive);
/// ```
pub fn sentiment(text: &str, language: Language) -> SentimentResult {
    let tokens = tokenize(text, false, language);
    SentimentScorer::for_language(language).score_tokens(&tokens)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
