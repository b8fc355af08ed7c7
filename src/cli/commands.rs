//! Command implementations for the corpuskit CLI.

use std::fs;

use crate::analysis::normalize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::concordance::{Concordancer, KwicConfig};
use crate::config::WorkbenchConfig;
use crate::document::{Document, DocumentFilter, load_paths};
use crate::error::{CorpusError, Result};
use crate::pos;
use crate::stats::{CorpusStats, FrequencyCounter, TokenFrequency, corpus_ngrams, top};

/// Execute a CLI command.
pub fn execute_command(args: CorpusKitArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Normalize(normalize_args) => normalize_file(normalize_args, &args),
        Command::Frequency(frequency_args) => frequency_table(frequency_args, &config, &args),
        Command::Ngrams(ngram_args) => ngram_table(ngram_args, &config, &args),
        Command::Kwic(kwic_args) => concordance(kwic_args, &config, &args),
        Command::Sentiment(sentiment_args) => score_sentiment(sentiment_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

fn load_config(args: &CorpusKitArgs) -> Result<WorkbenchConfig> {
    match &args.config {
        Some(path) => WorkbenchConfig::from_file(path),
        None => Ok(WorkbenchConfig::default()),
    }
}

/// Load the corpus named on the command line, narrowed by its document filter.
pub fn load_corpus(corpus: &CorpusArgs, config: &WorkbenchConfig) -> Result<Vec<Document>> {
    let language = corpus.language.unwrap_or(config.analysis.default_language);
    let loaded = load_paths(&corpus.paths, language)?;

    let filter = corpus.document_filter();
    if filter == DocumentFilter::default() {
        log::info!("loaded {} documents", loaded.len());
        return Ok(loaded);
    }

    let docs = filter.apply(&loaded);
    log::info!("loaded {} documents, {} match the filter", loaded.len(), docs.len());
    Ok(docs)
}

fn remove_stopwords(corpus: &CorpusArgs, config: &WorkbenchConfig) -> bool {
    corpus
        .stopword_override()
        .unwrap_or(config.analysis.remove_stopwords)
}

fn truncate(table: Vec<TokenFrequency>, limit: usize) -> Vec<TokenFrequency> {
    if limit == 0 {
        table
    } else {
        top(&table, limit).to_vec()
    }
}

/// Print the normalized form of a file.
fn normalize_file(args: &NormalizeArgs, cli_args: &CorpusKitArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)?;
    let result = NormalizedText {
        text: normalize(&raw),
    };
    output_result(
        &format!("Normalized {}", args.file.display()),
        &result,
        cli_args,
    )
}

/// Print the token frequency table.
fn frequency_table(
    args: &FrequencyArgs,
    config: &WorkbenchConfig,
    cli_args: &CorpusKitArgs,
) -> Result<()> {
    let docs = load_corpus(&args.corpus, config)?;
    let table = FrequencyCounter::new(remove_stopwords(&args.corpus, config))
        .with_parallel(config.parallel)
        .count(&docs);

    let report = FrequencyReport {
        documents: docs.len(),
        distinct: table.len(),
        rows: truncate(table, args.top.unwrap_or(config.top)),
    };
    output_result("Token frequencies", &report, cli_args)
}

/// Print the n-gram table.
fn ngram_table(args: &NgramArgs, config: &WorkbenchConfig, cli_args: &CorpusKitArgs) -> Result<()> {
    let size = args.size.unwrap_or(config.ngram_size);
    if size < 2 {
        return Err(CorpusError::invalid_argument(format!(
            "n-gram size must be at least 2, got {size}"
        )));
    }

    let docs = load_corpus(&args.corpus, config)?;
    let table = corpus_ngrams(&docs, size, remove_stopwords(&args.corpus, config));

    let report = FrequencyReport {
        documents: docs.len(),
        distinct: table.len(),
        rows: truncate(table, args.top.unwrap_or(config.top)),
    };
    output_result(&format!("{size}-gram frequencies"), &report, cli_args)
}

/// Print a keyword-in-context concordance.
fn concordance(args: &KwicArgs, config: &WorkbenchConfig, cli_args: &CorpusKitArgs) -> Result<()> {
    if args.keyword.trim().is_empty() {
        return Err(CorpusError::invalid_argument("keyword must not be empty"));
    }

    let docs = load_corpus(&args.corpus, config)?;
    let window_radius = args.window.unwrap_or(config.kwic.window_radius);
    let concordancer = Concordancer::new(KwicConfig::new().window_radius(window_radius));

    let report = KwicReport {
        keyword: args.keyword.clone(),
        window_radius,
        lines: concordancer.search(&docs, &args.keyword),
    };
    output_result("Concordance", &report, cli_args)
}

/// Score and print the sentiment of every document.
fn score_sentiment(
    args: &SentimentArgs,
    config: &WorkbenchConfig,
    cli_args: &CorpusKitArgs,
) -> Result<()> {
    let mut docs = load_corpus(&args.corpus, config)?;

    let mut report = SentimentReport::default();
    for doc in &mut docs {
        let sentiment = doc.score_sentiment();
        report.push(DocumentSentiment {
            title: doc.title().to_string(),
            language: doc.language(),
            sentiment,
        });
    }
    output_result("Sentiment", &report, cli_args)
}

/// Print corpus statistics.
fn show_stats(args: &StatsArgs, config: &WorkbenchConfig, cli_args: &CorpusKitArgs) -> Result<()> {
    let docs = load_corpus(&args.corpus, config)?;
    let report = StatsReport {
        stats: CorpusStats::compute(&docs),
        pos: pos::aggregate(&docs),
    };
    output_result("Corpus statistics", &report, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    use crate::analysis::Language;

    #[test]
    fn test_load_corpus_uses_cli_language_over_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hola mundo").unwrap();
        let path = path.to_string_lossy().into_owned();

        let mut config = WorkbenchConfig::default();
        config.analysis.default_language = Language::English;

        let args = CorpusKitArgs::try_parse_from(["corpuskit", "stats", &path]).unwrap();
        let Command::Stats(stats_args) = &args.command else {
            panic!("Expected Stats command");
        };
        let docs = load_corpus(&stats_args.corpus, &config).unwrap();
        assert_eq!(docs[0].language(), Language::English);

        let args =
            CorpusKitArgs::try_parse_from(["corpuskit", "stats", &path, "-l", "es"]).unwrap();
        let Command::Stats(stats_args) = &args.command else {
            panic!("Expected Stats command");
        };
        let docs = load_corpus(&stats_args.corpus, &config).unwrap();
        assert_eq!(docs[0].language(), Language::Spanish);
    }

    fn corpus_args(argv: &[&str]) -> CorpusArgs {
        let mut full = vec!["corpuskit", "frequency"];
        full.extend_from_slice(argv);
        match CorpusKitArgs::try_parse_from(full).unwrap().command {
            Command::Frequency(frequency_args) => frequency_args.corpus,
            _ => panic!("Expected Frequency command"),
        }
    }

    #[test]
    fn test_load_corpus_applies_document_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"title": "a", "content": "good", "language": "ENGLISH", "source": "upload"}"#,
                "\n",
                r#"{"title": "b", "content": "bueno", "language": "SPANISH", "source": "scraped"}"#,
                "\n",
                r#"{"title": "c", "content": "malo", "language": "SPANISH", "source": "generated"}"#,
                "\n"
            ),
        )
        .unwrap();
        let path = path.to_string_lossy().into_owned();
        let config = WorkbenchConfig::default();

        let all = load_corpus(&corpus_args(&[&path]), &config).unwrap();
        assert_eq!(all.len(), 3);

        let spanish = load_corpus(&corpus_args(&[&path, "--only-language", "es"]), &config).unwrap();
        let titles: Vec<_> = spanish.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["b", "c"]);

        let scraped = load_corpus(
            &corpus_args(&[&path, "--only-language", "es", "--source", "scraped"]),
            &config,
        )
        .unwrap();
        assert_eq!(scraped.len(), 1);
        assert_eq!(scraped[0].title(), "b");

        let none = load_corpus(
            &corpus_args(&[&path, "--source", "generated", "--only-language", "en"]),
            &config,
        )
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_cli_stopword_flags_override_config() {
        let mut config = WorkbenchConfig::default();
        config.analysis.remove_stopwords = true;

        assert!(remove_stopwords(&corpus_args(&["a.txt"]), &config));
        assert!(!remove_stopwords(&corpus_args(&["a.txt", "--keep-stopwords"]), &config));

        config.analysis.remove_stopwords = false;
        assert!(!remove_stopwords(&corpus_args(&["a.txt"]), &config));
        assert!(remove_stopwords(&corpus_args(&["a.txt", "-s"]), &config));
    }

    #[test]
    fn test_execute_rejects_bad_input() {
        let args =
            CorpusKitArgs::try_parse_from(["corpuskit", "ngrams", "a.txt", "-n", "1"]).unwrap();
        assert!(matches!(
            execute_command(args),
            Err(CorpusError::InvalidArgument(_))
        ));

        let args = CorpusKitArgs::try_parse_from(["corpuskit", "kwic", " ", "a.txt"]).unwrap();
        assert!(matches!(
            execute_command(args),
            Err(CorpusError::InvalidArgument(_))
        ));

        let args =
            CorpusKitArgs::try_parse_from(["corpuskit", "stats", "/no/such/corpus.jsonl"]).unwrap();
        assert!(matches!(execute_command(args), Err(CorpusError::Io(_))));
    }

    #[test]
    fn test_execute_commands_on_corpus() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("reviews.jsonl"),
            concat!(
                r#"{"title": "r1", "content": "good food and good service", "language": "ENGLISH"}"#,
                "\n",
                r#"{"title": "r2", "content": "comida mala", "language": "SPANISH"}"#,
                "\n"
            ),
        )
        .unwrap();
        let corpus = dir.path().to_string_lossy().into_owned();

        for command in ["frequency", "ngrams", "sentiment", "stats"] {
            let args =
                CorpusKitArgs::try_parse_from(["corpuskit", "-q", "-f", "json", command, &corpus])
                    .unwrap();
            assert!(execute_command(args).is_ok(), "{command} failed");
        }

        let args =
            CorpusKitArgs::try_parse_from(["corpuskit", "-q", "kwic", "good", &corpus]).unwrap();
        assert!(execute_command(args).is_ok());

        let raw = dir.path().join("raw.md");
        fs::write(&raw, "# Draft\n**bold** [name]").unwrap();
        let raw = raw.to_string_lossy().into_owned();
        let args = CorpusKitArgs::try_parse_from(["corpuskit", "-q", "normalize", &raw]).unwrap();
        assert!(execute_command(args).is_ok());
    }
}
