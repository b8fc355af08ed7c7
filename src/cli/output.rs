//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::analysis::Language;
use crate::cli::args::{CorpusKitArgs, OutputFormat};
use crate::concordance::KwicResult;
use crate::error::Result;
use crate::pos::PosBreakdown;
use crate::sentiment::{SentimentLabel, SentimentResult};
use crate::stats::{CorpusStats, TokenFrequency};

/// Plain text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Result of the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedText {
    pub text: String,
}

/// A frequency or n-gram table.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub documents: usize,
    /// Distinct entries before truncation.
    pub distinct: usize,
    pub rows: Vec<TokenFrequency>,
}

/// Result of a concordance search.
#[derive(Debug, Serialize, Deserialize)]
pub struct KwicReport {
    pub keyword: String,
    pub window_radius: usize,
    pub lines: Vec<KwicResult>,
}

/// Sentiment of one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSentiment {
    pub title: String,
    pub language: Language,
    #[serde(flatten)]
    pub sentiment: SentimentResult,
}

/// Sentiment of every document, with label totals.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    pub documents: Vec<DocumentSentiment>,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentReport {
    pub fn push(&mut self, row: DocumentSentiment) {
        match row.sentiment.label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
        self.documents.push(row);
    }
}

/// Corpus statistics with the averaged POS breakdown, if any document has one.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: CorpusStats,
    pub pos: Option<PosBreakdown>,
}

impl HumanOutput for NormalizedText {
    fn render_human(&self) -> String {
        self.text.clone()
    }
}

impl HumanOutput for FrequencyReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let width = self
            .rows
            .iter()
            .map(|row| row.token.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        let _ = writeln!(out, "{:>4}  {:<width$}  {:>7}  {:>9}", "#", "Token", "Count", "Freq");
        for (rank, row) in self.rows.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}  {:<width$}  {:>7}  {:>9.4}",
                rank + 1,
                row.token,
                row.count,
                row.frequency
            );
        }
        let _ = write!(
            out,
            "{} of {} entries from {} documents",
            self.rows.len(),
            self.distinct,
            self.documents
        );
        out
    }
}

impl HumanOutput for KwicReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let left = line.left.replace('\n', " ");
            let right = line.right.replace('\n', " ");
            let _ = writeln!(
                out,
                "{:>width$} [{}] {:<width$}  ({})",
                left,
                line.node,
                right,
                line.doc_id,
                width = self.window_radius
            );
        }
        let _ = write!(out, "{} occurrences of \"{}\"", self.lines.len(), self.keyword);
        out
    }
}

impl HumanOutput for SentimentReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for row in &self.documents {
            let _ = writeln!(
                out,
                "{:>6.2}  {:<8}  {:<7}  {}",
                row.sentiment.score, row.sentiment.label, row.language, row.title
            );
        }
        let _ = write!(
            out,
            "Positive: {}  Negative: {}  Neutral: {}",
            self.positive, self.negative, self.neutral
        );
        out
    }
}

impl HumanOutput for StatsReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Documents:        {}", self.stats.documents);
        let _ = writeln!(out, "Tokens:           {}", self.stats.tokens);
        let _ = writeln!(out, "Types:            {}", self.stats.types);
        let _ = write!(out, "Type/token ratio: {:.4}", self.stats.type_token_ratio);

        match &self.pos {
            Some(pos) => {
                let _ = write!(out, "\nPart of speech (average %):");
                for (category, value) in pos.entries() {
                    let _ = write!(out, "\n  {category:<13} {value:>3}");
                }
            }
            None => {
                let _ = write!(out, "\nPart of speech:   not yet available");
            }
        }
        out
    }
}

/// Render a result in the requested format.
pub fn render<T: Serialize + HumanOutput>(result: &T, args: &CorpusKitArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &CorpusKitArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", render(result, args)?);
    Ok(())
}
