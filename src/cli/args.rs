//! Command line argument parsing for the corpuskit CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::Language;
use crate::document::{DocumentFilter, SourceType};

/// corpuskit - corpus linguistics from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "corpuskit")]
#[command(about = "Frequency lists, n-grams, concordances and sentiment for text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorpusKitArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CORPUSKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorpusKitArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the normalized form of a text file
    Normalize(NormalizeArgs),

    /// Token frequency table
    Frequency(FrequencyArgs),

    /// N-gram frequency table
    Ngrams(NgramArgs),

    /// Keyword-in-context concordance
    Kwic(KwicArgs),

    /// Score the sentiment of every document
    Sentiment(SentimentArgs),

    /// Corpus size, lexical diversity and averaged POS data
    Stats(StatsArgs),
}

/// Corpus selection shared by the analysis commands
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus files or directories (.jsonl or plain text)
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Language of plain text files and of records without one (en, es, unknown)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Remove stop words before counting
    #[arg(short = 's', long, overrides_with = "keep_stopwords")]
    pub remove_stopwords: bool,

    /// Keep stop words even if the configuration removes them
    #[arg(long, overrides_with = "remove_stopwords")]
    pub keep_stopwords: bool,

    /// Only analyse documents in this language
    #[arg(long, value_name = "LANGUAGE")]
    pub only_language: Option<Language>,

    /// Only analyse documents from this source (upload, scraped, generated)
    #[arg(long)]
    pub source: Option<SourceType>,
}

impl CorpusArgs {
    /// Stop word setting given on the command line, if any.
    pub fn stopword_override(&self) -> Option<bool> {
        match (self.remove_stopwords, self.keep_stopwords) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// The document filter selected on the command line.
    pub fn document_filter(&self) -> DocumentFilter {
        DocumentFilter {
            language: self.only_language,
            source: self.source,
        }
    }
}

/// Arguments for normalizing a file
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Raw text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the frequency table
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of rows to show (0 shows all)
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for the n-gram table
#[derive(Parser, Debug, Clone)]
pub struct NgramArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// N-gram size (2 or more)
    #[arg(short = 'n', long = "size")]
    pub size: Option<usize>,

    /// Number of rows to show (0 shows all)
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for a concordance search
#[derive(Parser, Debug, Clone)]
pub struct KwicArgs {
    /// Keyword or phrase, matched literally as a whole word
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Context characters on each side of a match
    #[arg(short, long)]
    pub window: Option<usize>,
}

/// Arguments for sentiment scoring
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
