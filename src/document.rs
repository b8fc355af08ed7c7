//! Documents and document sets.
//!
//! A [`Document`] is the unit of corpus membership. Its content is always the
//! normalized form of the ingested text and its cached token count is kept in
//! sync with that content. A document set is simply a slice of documents
//! owned by the caller; every analysis in this crate is a pure function of
//! such a slice.
//!
//! # Core Components
//!
//! - [`document::Document`] - Normalized text plus language, source and attached results
//! - [`filter::DocumentFilter`] - Caller-side selection by language and source
//! - [`loader`] - Building documents from plain text and JSON Lines files
//!
//! # Examples
//!
//! ```
//! use corpuskit::analysis::Language;
//! use corpuskit::document::Document;
//!
//! let doc = Document::ingest("essay", "## Intro\n**Cats** sleep.", Language::English);
//! assert_eq!(doc.content(), "Intro\nCats sleep.");
//! assert_eq!(doc.token_count(), 3);
//! ```

#[allow(clippy::module_inception)]
pub mod document;
pub mod filter;
pub mod loader;

pub use document::{Document, DocumentRecord, SourceType};
pub use filter::DocumentFilter;
pub use loader::{load_path, load_paths};
