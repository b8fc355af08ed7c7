//! Part-of-speech breakdowns and their corpus-level aggregation.
//!
//! Breakdowns are computed outside this crate and attached to documents;
//! here they are only averaged.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Percentages of each grammatical category in a document.
///
/// Values are conventionally 0-100. They are not required to sum to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PosBreakdown {
    pub nouns: i64,
    pub verbs: i64,
    pub adjectives: i64,
    pub adverbs: i64,
    pub pronouns: i64,
    pub determiners: i64,
    pub conjunctions: i64,
    pub others: i64,
}

impl PosBreakdown {
    /// Category names, in field order.
    pub const CATEGORIES: [&'static str; 8] = [
        "nouns",
        "verbs",
        "adjectives",
        "adverbs",
        "pronouns",
        "determiners",
        "conjunctions",
        "others",
    ];

    /// The eight values, in the order of [`CATEGORIES`](Self::CATEGORIES).
    pub fn values(&self) -> [i64; 8] {
        [
            self.nouns,
            self.verbs,
            self.adjectives,
            self.adverbs,
            self.pronouns,
            self.determiners,
            self.conjunctions,
            self.others,
        ]
    }

    fn from_values(values: [i64; 8]) -> Self {
        let [nouns, verbs, adjectives, adverbs, pronouns, determiners, conjunctions, others] =
            values;
        PosBreakdown {
            nouns,
            verbs,
            adjectives,
            adverbs,
            pronouns,
            determiners,
            conjunctions,
            others,
        }
    }

    /// `(category, value)` pairs, for callers projecting the breakdown into
    /// rows or chart series.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i64)> {
        Self::CATEGORIES.into_iter().zip(self.values())
    }
}

/// Average the breakdowns of every document that carries one.
///
/// Returns `None` when no document has POS data. Each field is averaged and
/// rounded to the nearest integer on its own; the result is not rescaled to
/// sum to 100.
pub fn aggregate(docs: &[Document]) -> Option<PosBreakdown> {
    let breakdowns: Vec<&PosBreakdown> = docs.iter().filter_map(|d| d.pos_data()).collect();
    if breakdowns.is_empty() {
        return None;
    }

    let mut sums = [0i64; 8];
    for breakdown in &breakdowns {
        for (sum, value) in sums.iter_mut().zip(breakdown.values()) {
            *sum += value;
        }
    }

    let count = breakdowns.len() as f64;
    let averaged = sums.map(|sum| (sum as f64 / count).round() as i64);
    log::debug!("aggregated POS data of {} documents", breakdowns.len());

    Some(PosBreakdown::from_values(averaged))
}
