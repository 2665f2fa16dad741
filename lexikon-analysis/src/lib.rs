//! # Lexikon Analysis
//!
//! Language-aware text analysis for the indexing pipeline. The pipeline shape
//! is: text → tokenizer → token stream → token filters → analyzed terms.
//!
//! This crate provides:
//!
//! - [`Token`], [`Tokenizer`], [`UnicodeTokenizer`] — tokenization
//! - [`TokenFilter`] with [`StopwordFilter`], [`DiacriticFoldingFilter`] and
//!   [`LightStemmerFilter`] — normalization steps
//! - [`Analyzer`] — one tokenizer composed with an ordered filter chain
//! - the language support table ([`is_supported`], [`SUPPORTED_LANGUAGES`])
//! - [`FieldRouting`] — the per-field analysis routing table built from a
//!   requested language set
//!
//! Analyzers and routing tables are immutable after construction and carry no
//! shared state, so independent rebuilds can build and use their own tables
//! concurrently.

pub mod analyzer;
pub mod filter;
pub mod language;
pub mod routing;
pub mod stem;
pub mod stopwords;
pub mod token;

pub use analyzer::Analyzer;
pub use filter::{DiacriticFoldingFilter, LightStemmerFilter, StopwordFilter, TokenFilter};
pub use language::{is_supported, SUPPORTED_LANGUAGES};
pub use routing::{FieldRouting, Strategy};
pub use token::{Token, Tokenizer, UnicodeTokenizer};

/// Version tag for the analysis behavior baked into an index generation.
///
/// Recorded in every generation manifest; bumped whenever tokenization,
/// folding, stopword lists or stemmer tables change, so readers can tell
/// whether query-time analysis matches what was written.
pub const ANALYZER_VERSION: &str = "light_multilang_v1";
