//! # Lexikon Graph
//!
//! The thesaurus data model and the read-only contract through which the
//! indexing pipeline consumes a graph backend. This crate provides:
//!
//! - [`Concept`], [`Annotation`] and [`AnnotationKind`] — the concept record
//!   handed over the cursor, with its multilingual annotations
//! - [`ConceptCursor`] — a forward-only, fallible pull cursor over concepts;
//!   releasing the cursor is `Drop`, so it is freed on every exit path
//! - [`CollectionResolver`] — lazy per-concept resolution of transitive
//!   collection membership (a collection nested inside another collection)
//! - [`MemoryGraph`] — an in-memory implementation of both contracts, used by
//!   tests and by embedders that hold the whole thesaurus in memory
//!
//! ## Design
//!
//! The graph backend proper (storage, SPARQL, updates) lives outside this
//! workspace. The indexing core only ever pulls: one concept at a time from
//! the cursor, and one concept's transitive memberships from the resolver.

pub mod concept;
pub mod cursor;
pub mod error;
pub mod memory;

pub use concept::{Annotation, AnnotationKind, Concept};
pub use cursor::{CollectionResolver, ConceptCursor};
pub use error::{GraphError, Result};
pub use memory::{MemoryCursor, MemoryGraph};
