//! Caller-side document selection.

use serde::{Deserialize, Serialize};

use crate::analysis::Language;
use crate::document::document::{Document, SourceType};

/// Restricts a document set by language and/or source type.
///
/// Analyses never filter on their own; callers narrow the set first and
/// pass the result on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub language: Option<Language>,
    pub source: Option<SourceType>,
}

impl DocumentFilter {
    /// A filter that accepts every document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn source(mut self, source: SourceType) -> Self {
        self.source = Some(source);
        self
    }

    /// Whether `doc` passes every configured criterion.
    pub fn matches(&self, doc: &Document) -> bool {
        self.language.is_none_or(|language| doc.language() == language)
            && self.source.is_none_or(|source| doc.source() == source)
    }

    /// The matching documents, in their original order.
    pub fn apply(&self, docs: &[Document]) -> Vec<Document> {
        docs.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}
