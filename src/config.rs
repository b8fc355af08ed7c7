//! Workbench configuration.
//!
//! Configuration is read from a JSON file. Every field is optional and
//! falls back to its default:
//!
//! ```json
//! {
//!   "analysis": { "remove_stopwords": true, "default_language": "SPANISH" },
//!   "kwic": { "window_radius": 40 },
//!   "ngram_size": 3,
//!   "parallel": { "enabled": true, "min_documents": 128 },
//!   "top": 50
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::Language;
use crate::concordance::KwicConfig;
use crate::error::{CorpusError, Result};

/// Tokenization settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Drop stop words from frequency and n-gram tables.
    pub remove_stopwords: bool,
    /// Language of plain text input and of JSONL records without one.
    pub default_language: Language,
}

/// When to shard corpus scans across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub enabled: bool,
    /// Smallest document set that is scanned in parallel.
    pub min_documents: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            enabled: true,
            min_documents: 256,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub analysis: AnalysisConfig,
    pub kwic: KwicConfig,
    /// Default n-gram size.
    pub ngram_size: usize,
    pub parallel: ParallelConfig,
    /// Rows shown in frequency and n-gram tables. Zero shows all rows.
    pub top: usize,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        WorkbenchConfig {
            analysis: AnalysisConfig::default(),
            kwic: KwicConfig::default(),
            ngram_size: 2,
            parallel: ParallelConfig::default(),
            top: 20,
        }
    }
}

impl WorkbenchConfig {
    /// Load and validate a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: WorkbenchConfig = serde_json::from_str(&text).map_err(|e| {
            CorpusError::config(format!("invalid config {}: {e}", path.display()))
        })?;
        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size < 2 {
            return Err(CorpusError::config(format!(
                "ngram_size must be at least 2, got {}",
                self.ngram_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = WorkbenchConfig::default();
        assert!(!config.analysis.remove_stopwords);
        assert_eq!(config.analysis.default_language, Language::Unknown);
        assert_eq!(config.kwic.window_radius, 60);
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.top, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorkbenchConfig =
            serde_json::from_str(r#"{"analysis": {"default_language": "SPANISH"}, "top": 5}"#)
                .unwrap();
        assert_eq!(config.analysis.default_language, Language::Spanish);
        assert!(!config.analysis.remove_stopwords);
        assert_eq!(config.top, 5);
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.parallel, ParallelConfig::default());
    }

    #[test]
    fn test_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"ngram_size": 3, "kwic": {"window_radius": 15}}"#).unwrap();

        let config = WorkbenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.kwic.window_radius, 15);
    }

    #[test]
    fn test_invalid_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"ngram_size": 1}"#).unwrap();
        assert!(matches!(
            WorkbenchConfig::from_file(file.path()),
            Err(CorpusError::Config(_))
        ));

        fs::write(file.path(), "not json").unwrap();
        assert!(matches!(
            WorkbenchConfig::from_file(file.path()),
            Err(CorpusError::Config(_))
        ));
    }
}
