//! # Lexikon Index
//!
//! Index building for the Lexikon thesaurus. This crate provides:
//!
//! - The field mapping table: annotation kind → physical fields (`mapping`)
//! - The concept record builder with fan-out and transitive collection
//!   materialization (`builder`)
//! - The on-disk generation format: record segment, terms dictionary and
//!   manifest (`serialize`, `writer`, `reader`, `manifest`)
//! - The rebuild coordinator with per-document error isolation (`rebuild`)
//!
//! ## Design
//!
//! A rebuild is a single-threaded pull pipeline: the coordinator drains a
//! [`ConceptCursor`](lexikon_graph::ConceptCursor), builds one
//! [`IndexRecord`] per concept, and submits it to a [`RecordSink`]. The index
//! directory holds exactly one generation; every rebuild wipes the previous
//! one. Writing is routed through the analysis table built by
//! `lexikon-analysis`, so each field gets the exact-match or per-language
//! strategy the schema defines.

pub mod builder;
pub mod config;
pub mod error;
pub mod manifest;
pub mod mapping;
pub mod reader;
pub mod rebuild;
pub mod record;
pub mod serialize;
pub mod writer;

// Re-export main types
pub use builder::RecordBuilder;
pub use config::RebuildConfig;
pub use error::{IndexError, Result};
pub use manifest::IndexManifest;
pub use mapping::{fields_for, FieldTemplate};
pub use reader::IndexReader;
pub use rebuild::{IndexRebuilder, RebuildPhase, RebuildSummary};
pub use record::{IndexRecord, Indexing, RecordValue};
pub use serialize::{IndexDocument, Postings, MANIFEST_FILE, RECORDS_FILE, TERMS_FILE};
pub use writer::{IndexWriter, RecordSink};

/// On-disk format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;
