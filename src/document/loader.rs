//! Loading documents from disk.
//!
//! Two formats are understood:
//!
//! - JSON Lines (`.jsonl`): one [`DocumentRecord`] per line. Blank lines are
//!   skipped.
//!   ```jsonl
//!   {"title": "review-1", "content": "I love it", "language": "ENGLISH"}
//!   {"title": "reseña-1", "content": "Me encanta", "language": "SPANISH"}
//!   ```
//! - Anything else is read as one plain text document titled after the
//!   file stem.
//!
//! A directory loads every regular file directly inside it, in file name
//! order. Every text goes through the normalizer on the way in.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::analysis::Language;
use crate::document::document::{Document, DocumentRecord};
use crate::error::{CorpusError, Result};

/// Load the documents stored at each of `paths`, in order.
pub fn load_paths<P: AsRef<Path>>(paths: &[P], default_language: Language) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for path in paths {
        documents.extend(load_path(path.as_ref(), default_language)?);
    }
    Ok(documents)
}

/// Load the documents stored at `path`.
///
/// `default_language` applies to plain text files and to JSONL records
/// without a `language` field.
pub fn load_path(path: &Path, default_language: Language) -> Result<Vec<Document>> {
    if path.is_dir() {
        return load_dir(path, default_language);
    }

    let documents = if is_jsonl(path) {
        load_jsonl(path, default_language)?
    } else {
        vec![load_text(path, default_language)?]
    };
    log::debug!("loaded {} document(s) from {}", documents.len(), path.display());
    Ok(documents)
}

fn load_dir(dir: &Path, default_language: Language) -> Result<Vec<Document>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    files.retain(|p| p.is_file());
    files.sort();

    if files.is_empty() {
        log::warn!("no files found in {}", dir.display());
    }
    load_paths(&files, default_language)
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_text(path: &Path, language: Language) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    Ok(Document::ingest(file_title(path), &raw, language))
}

fn load_jsonl(path: &Path, default_language: Language) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(path)?);
    let stem = file_title(path);
    let mut documents = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        let record: DocumentRecord = serde_json::from_str(&line)
            .map_err(|e| CorpusError::corpus(path, line_number, e.to_string()))?;
        let default_title = format!("{stem}-{line_number}");
        documents.push(record.into_document(&default_title, default_language));
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::TempDir;

    #[test]
    fn test_load_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("essay.txt");
        fs::write(&path, "# Heading\nThe cat sat.").unwrap();

        let docs = load_path(&path, Language::English).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title(), "essay");
        assert_eq!(docs[0].content(), "Heading\nThe cat sat.");
        assert_eq!(docs[0].language(), Language::English);
    }

    #[test]
    fn test_load_jsonl() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.jsonl");
        let mut file = File::create(&path).unwrap();
        writeln!(file, r#"{{"title": "a", "content": "I love it", "language": "ENGLISH"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"content": "Me encanta"}}"#).unwrap();

        let docs = load_path(&path, Language::Spanish).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title(), "a");
        assert_eq!(docs[0].language(), Language::English);
        assert_eq!(docs[1].title(), "corpus-3");
        assert_eq!(docs[1].language(), Language::Spanish);
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.jsonl");
        fs::write(&path, "{\"content\": \"ok\"}\n{not json}\n").unwrap();

        match load_path(&path, Language::English) {
            Err(CorpusError::Corpus { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_directory_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let docs = load_path(dir.path(), Language::English).unwrap();
        let titles: Vec<_> = docs.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_path(Path::new("/definitely/not/here.txt"), Language::English);
        assert!(matches!(result, Err(CorpusError::Io(_))));
    }
}
