//! The language-aware corpus analyzer.
//!
//! This is the tokenizer every corpus statistic is computed with:
//! punctuation is stripped, the text is split on whitespace and tokens are
//! lowercased. Stop words are optionally marked, using the table selected by
//! the document language, and marked or empty tokens are dropped last.

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, LazyLock};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

static PLAIN: LazyLock<CorpusAnalyzer> =
    LazyLock::new(|| CorpusAnalyzer::new(Language::Unknown, false));
static ENGLISH_STOPPED: LazyLock<CorpusAnalyzer> =
    LazyLock::new(|| CorpusAnalyzer::new(Language::English, true));
static SPANISH_STOPPED: LazyLock<CorpusAnalyzer> =
    LazyLock::new(|| CorpusAnalyzer::new(Language::Spanish, true));

/// Analyzer producing the word tokens used by the corpus statistics.
pub struct CorpusAnalyzer {
    inner: PipelineAnalyzer,
    language: Language,
    remove_stopwords: bool,
}

impl CorpusAnalyzer {
    /// Build an analyzer for `language`, optionally removing stop words.
    pub fn new(language: Language, remove_stopwords: bool) -> Self {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::punctuation()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        if remove_stopwords {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::for_language(language)));
        }
        let analyzer = analyzer.add_filter(Arc::new(RemoveEmptyFilter::new()));

        Self {
            inner: analyzer.with_name(format!("corpus_{}", language.as_str().to_lowercase())),
            language,
            remove_stopwords,
        }
    }

    /// A process-wide analyzer for the given settings.
    ///
    /// Without stop word removal the language does not influence the output,
    /// so all languages share one instance.
    pub fn shared(language: Language, remove_stopwords: bool) -> &'static CorpusAnalyzer {
        match (remove_stopwords, language.is_spanish()) {
            (false, _) => &PLAIN,
            (true, true) => &SPANISH_STOPPED,
            (true, false) => &ENGLISH_STOPPED,
        }
    }

    /// Analyze `text` and collect the token texts.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.inner.analyze(text).map(|token| token.text).collect()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn removes_stopwords(&self) -> bool {
        self.remove_stopwords
    }
}

impl Analyzer for CorpusAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "corpus"
    }
}

impl Debug for CorpusAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusAnalyzer")
            .field("language", &self.language)
            .field("remove_stopwords", &self.remove_stopwords)
            .field("inner", &self.inner)
            .finish()
    }
}
