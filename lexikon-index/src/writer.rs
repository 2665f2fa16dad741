//! Record sink contract and the on-disk segment writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lexikon_analysis::{FieldRouting, Strategy, ANALYZER_VERSION};

use crate::error::{IndexError, Result};
use crate::manifest::IndexManifest;
use crate::record::{IndexRecord, Indexing};
use crate::serialize::{self, IndexDocument, Postings, RECORDS_FILE};
use crate::FORMAT_VERSION;

/// Where index records go during a rebuild.
///
/// [`submit`](RecordSink::submit) failures are absorbed by the coordinator
/// (counted and logged, next record continues); [`close`](RecordSink::close)
/// finalizes the generation and its failure aborts the rebuild.
pub trait RecordSink {
    fn submit(&mut self, record: &IndexRecord) -> Result<()>;
    fn close(self) -> Result<()>;
}

/// Writes one generation into an index directory.
///
/// Record frames stream to `records.seg` as they are submitted. The inverted
/// postings accumulate in memory and land in `terms.dict` at close, followed
/// by the manifest; the manifest comes last so an interrupted rebuild leaves
/// no readable generation. A frame write that fails mid-stream marks the
/// writer torn: later submits are rejected and `close` refuses to finalize,
/// so a manifest is never published over a corrupt segment.
#[derive(Debug)]
pub struct IndexWriter<W: Write = BufWriter<File>> {
    dir: PathBuf,
    routing: FieldRouting,
    generation: u64,
    frames: W,
    postings: Postings,
    records: u32,
    /// Set when a frame write failed after bytes may have reached the stream.
    torn: bool,
}

impl IndexWriter {
    /// Open a writer for a fresh generation in a prepared directory.
    pub fn create(dir: &Path, generation: u64, routing: FieldRouting) -> Result<Self> {
        let file = File::create(dir.join(RECORDS_FILE))
            .map_err(|e| IndexError::StorageWrite(e.to_string()))?;
        let mut frames = BufWriter::new(file);
        serialize::write_records_header(&mut frames)?;
        Ok(IndexWriter {
            dir: dir.to_path_buf(),
            routing,
            generation,
            frames,
            postings: Postings::new(),
            records: 0,
            torn: false,
        })
    }
}

impl<W: Write> IndexWriter<W> {
    /// Records submitted so far.
    pub fn records(&self) -> u32 {
        self.records
    }

    /// The generation number this writer produces.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Terms one record value contributes, per its indexing mode and the
    /// routing table's strategy for the field.
    fn terms_for(&self, field: &str, value: &str, indexing: Indexing) -> Vec<String> {
        match indexing {
            Indexing::Exact => vec![value.to_string()],
            Indexing::Analyzed => match self.routing.strategy_for(field) {
                Strategy::Exact => vec![value.to_string()],
                Strategy::Analyzed(analyzer) => analyzer.analyze_to_strings(value),
            },
        }
    }
}

impl<W: Write> RecordSink for IndexWriter<W> {
    fn submit(&mut self, record: &IndexRecord) -> Result<()> {
        if self.torn {
            return Err(IndexError::StorageWrite(
                "record segment is torn by an earlier failed write".to_string(),
            ));
        }

        let ordinal = self.records;
        let mut document = IndexDocument::default();
        let mut indexed: Vec<(String, Vec<String>)> = Vec::new();

        for value in record.values() {
            if value.stored {
                document.push_stored(&value.field, &value.value);
            }
            let terms = self.terms_for(&value.field, &value.value, value.indexing);
            if terms.is_empty() {
                continue;
            }
            document.push_terms(&value.field, terms.clone());
            indexed.push((value.field.clone(), terms));
        }

        // Encoding failures leave the stream untouched; a failed write does
        // not, and from that point frame boundaries can no longer be trusted.
        let frame = serialize::encode_frame(&document)?;
        if let Err(e) = self.frames.write_all(&frame) {
            self.torn = true;
            return Err(IndexError::StorageWrite(e.to_string()));
        }

        // Postings only reflect frames that actually landed.
        for (field, terms) in indexed {
            let by_term = self.postings.entry(field).or_default();
            for term in terms {
                let ids = by_term.entry(term).or_default();
                if ids.last().copied() != Some(ordinal) {
                    ids.push(ordinal);
                }
            }
        }
        self.records += 1;
        Ok(())
    }

    fn close(self) -> Result<()> {
        let IndexWriter {
            dir,
            routing,
            generation,
            mut frames,
            postings,
            records,
            torn,
        } = self;

        if torn {
            return Err(IndexError::StorageWrite(
                "record segment is torn; generation not finalized".to_string(),
            ));
        }

        frames
            .flush()
            .map_err(|e| IndexError::StorageWrite(e.to_string()))?;
        drop(frames);

        serialize::write_terms_dict(&dir, &postings)?;

        let manifest = IndexManifest {
            format_version: FORMAT_VERSION,
            generation,
            records: records as u64,
            languages: routing.covered_languages().to_vec(),
            analyzer_version: ANALYZER_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        manifest.save(&dir)
    }
}
