//! The corpus document.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{Language, normalize, tokenize};
use crate::error::CorpusError;
use crate::pos::PosBreakdown;
use crate::sentiment::{SentimentResult, sentiment};

/// How a document entered the corpus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Uploaded or pasted by the user.
    #[default]
    Upload,
    /// Scraped from a web page.
    Scraped,
    /// Synthesized by a text generation service.
    Generated,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceType::Upload => "upload",
            SourceType::Scraped => "scraped",
            SourceType::Generated => "generated",
        };
        f.write_str(name)
    }
}

impl FromStr for SourceType {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upload" => Ok(SourceType::Upload),
            "scraped" => Ok(SourceType::Scraped),
            "generated" => Ok(SourceType::Generated),
            other => Err(CorpusError::invalid_argument(format!(
                "unknown source type: {other}"
            ))),
        }
    }
}

/// A document in the corpus.
///
/// Content can only be set through [`Document::ingest`] and
/// [`Document::set_content`], both of which normalize it and refresh the
/// cached token count.
#[derive(Clone, Debug, Serialize)]
pub struct Document {
    id: Uuid,
    title: String,
    content: String,
    language: Language,
    source: SourceType,
    token_count: usize,
    sentiment: Option<SentimentResult>,
    pos_data: Option<PosBreakdown>,
    created_at: DateTime<Utc>,
}

impl Document {
    /// Normalize `raw` and create a new document from it.
    pub fn ingest<T: Into<String>>(title: T, raw: &str, language: Language) -> Self {
        let content = normalize(raw);
        let token_count = tokenize(&content, false, language).len();
        Document {
            id: Uuid::new_v4(),
            title: title.into(),
            content,
            language,
            source: SourceType::default(),
            token_count,
            sentiment: None,
            pos_data: None,
            created_at: Utc::now(),
        }
    }

    /// Set the source type.
    pub fn with_source(mut self, source: SourceType) -> Self {
        self.source = source;
        self
    }

    /// Attach an externally computed POS breakdown.
    pub fn with_pos_data(mut self, pos_data: PosBreakdown) -> Self {
        self.pos_data = Some(pos_data);
        self
    }

    /// Replace the content with the normalized form of `raw`.
    ///
    /// The token count is recomputed and any attached sentiment is dropped,
    /// since it described the old text.
    pub fn set_content(&mut self, raw: &str) {
        self.content = normalize(raw);
        self.token_count = tokenize(&self.content, false, self.language).len();
        self.sentiment = None;
    }

    /// Change the language tag. Attached sentiment is dropped because it was
    /// scored against the previous language's lexicon.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.sentiment = None;
        }
    }

    pub fn set_title<T: Into<String>>(&mut self, title: T) {
        self.title = title.into();
    }

    pub fn set_pos_data(&mut self, pos_data: Option<PosBreakdown>) {
        self.pos_data = pos_data;
    }

    /// Score the content and attach the result.
    pub fn score_sentiment(&mut self) -> SentimentResult {
        let result = sentiment(&self.content, self.language);
        self.sentiment = Some(result);
        result
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> SourceType {
        self.source
    }

    /// Number of tokens in the content, without stop word removal.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn sentiment(&self) -> Option<&SentimentResult> {
        self.sentiment.as_ref()
    }

    pub fn pos_data(&self) -> Option<&PosBreakdown> {
        self.pos_data.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// The serialized input form of a document, as found in JSON Lines corpora.
///
/// ```json
/// {"title": "review-1", "content": "I love it", "language": "ENGLISH", "source": "scraped"}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub source: Option<SourceType>,
    #[serde(default, alias = "posData")]
    pub pos_data: Option<PosBreakdown>,
}

impl DocumentRecord {
    /// Ingest the record, filling missing fields from the given defaults.
    pub fn into_document(self, default_title: &str, default_language: Language) -> Document {
        let title = self.title.unwrap_or_else(|| default_title.to_string());
        let language = self.language.unwrap_or(default_language);
        let mut doc = Document::ingest(title, &self.content, language)
            .with_source(self.source.unwrap_or_default());
        doc.set_pos_data(self.pos_data);
        doc
    }
}
