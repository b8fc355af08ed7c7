//! Document languages.
//!
//! The language of a document selects the stop word set used by the
//! tokenizer and the lexicon used by the sentiment scorer. Anything that is
//! not Spanish falls back to the English tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// The closed set of languages a document can be tagged with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    English,
    Spanish,
    #[default]
    Unknown,
}

impl Language {
    /// All languages, in declaration order.
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::Unknown];

    /// Whether the Spanish stop words and lexicon apply.
    pub fn is_spanish(self) -> bool {
        matches!(self, Language::Spanish)
    }

    /// The canonical upper-case tag, as used in serialized corpora.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::Spanish => "SPANISH",
            Language::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "es" | "spa" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            "" | "unknown" | "und" => Ok(Language::Unknown),
            other => Err(CorpusError::invalid_argument(format!(
                "unsupported language: {other}"
            ))),
        }
    }
}
