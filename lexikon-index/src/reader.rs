//! Read-side view of one generation.

use std::path::Path;

use crate::error::{IndexError, Result};
use crate::manifest::IndexManifest;
use crate::serialize::{self, IndexDocument, Postings, RECORDS_FILE};

/// Opens a complete generation and exposes its logical content.
///
/// Deliberately small: enough to inspect what a rebuild wrote (stored values,
/// indexed terms, postings) without defining query-time ranking.
#[derive(Debug)]
pub struct IndexReader {
    manifest: IndexManifest,
    documents: Vec<IndexDocument>,
    postings: Postings,
}

impl IndexReader {
    /// Open the generation in `dir`.
    ///
    /// Fails when the directory holds no manifest (no complete generation
    /// exists), when a file header does not match the expected format, or
    /// when a frame's declared length overruns the segment.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let manifest = IndexManifest::load(dir)?;

        let data = std::fs::read(dir.join(RECORDS_FILE))
            .map_err(|e| IndexError::StorageRead(e.to_string()))?;
        let mut frames = data.as_slice();
        serialize::read_records_header(&mut frames)?;
        let mut documents = Vec::new();
        while let Some(document) = serialize::read_frame(&mut frames)? {
            documents.push(document);
        }

        let postings = serialize::read_terms_dict(dir)?;
        Ok(IndexReader {
            manifest,
            documents,
            postings,
        })
    }

    pub fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    /// All documents, in submit order.
    pub fn documents(&self) -> &[IndexDocument] {
        &self.documents
    }

    /// Record ordinals carrying `term` in `field`, ascending.
    pub fn postings(&self, field: &str, term: &str) -> &[u32] {
        self.postings
            .get(field)
            .and_then(|terms| terms.get(term))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The whole inverted dictionary.
    pub fn terms_dict(&self) -> &Postings {
        &self.postings
    }

    /// The document whose stored URI equals `uri`.
    pub fn document_by_uri(&self, uri: &str) -> Option<&IndexDocument> {
        self.documents
            .iter()
            .find(|doc| doc.first_stored(lexikon_vocab::fields::URI) == Some(uri))
    }
}
