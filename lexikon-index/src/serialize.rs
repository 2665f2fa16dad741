//! On-disk generation format.
//!
//! One generation is three files inside the index directory:
//!
//! - `records.seg` — header followed by length-prefixed postcard frames, one
//!   [`IndexDocument`] per submitted record
//! - `terms.dict` — header followed by a zstd-compressed postcard payload
//!   holding the inverted [`Postings`] aggregated at close
//! - `manifest.json` — generation metadata, written last so that its presence
//!   marks a complete generation
//!
//! Both binary files open with four magic bytes and a one-byte format version;
//! mismatches are rejected before any payload is decoded. Frame lengths are
//! validated against the bytes actually remaining in the segment before any
//! payload is touched, so a corrupt length prefix cannot drive an oversized
//! read.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

/// File holding the record frames of a generation.
pub const RECORDS_FILE: &str = "records.seg";

/// File holding the aggregated terms dictionary.
pub const TERMS_FILE: &str = "terms.dict";

/// File naming the generation. Written last during close.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Magic bytes for the record segment file
const RECORDS_MAGIC: &[u8; 4] = b"LXSG";

/// Magic bytes for the terms dictionary file
const TERMS_MAGIC: &[u8; 4] = b"LXTD";

/// Binary format version written by this crate
const SEGMENT_VERSION: u8 = 1;

/// zstd level for the terms dictionary payload
const ZSTD_LEVEL: i32 = 3;

/// Inverted postings: field → term → ascending record ordinals.
///
/// BTreeMaps keep the serialized payload deterministic for identical input.
pub type Postings = BTreeMap<String, BTreeMap<String, Vec<u32>>>;

/// One persisted record: the stored values plus the terms actually indexed
/// per field — exact values verbatim, analyzed values post-analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    stored: Vec<(String, String)>,
    terms: BTreeMap<String, Vec<String>>,
}

impl IndexDocument {
    pub(crate) fn push_stored(&mut self, field: &str, value: &str) {
        self.stored.push((field.to_string(), value.to_string()));
    }

    pub(crate) fn push_terms(&mut self, field: &str, terms: Vec<String>) {
        self.terms.entry(field.to_string()).or_default().extend(terms);
    }

    /// Stored values of one field, in write order.
    pub fn stored_values(&self, field: &str) -> Vec<&str> {
        self.stored
            .iter()
            .filter(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First stored value of one field.
    pub fn first_stored(&self, field: &str) -> Option<&str> {
        self.stored
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Indexed terms of one field; empty when the field carries none.
    pub fn terms(&self, field: &str) -> &[String] {
        self.terms.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every field name this document uses, stored or indexed.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.stored
            .iter()
            .map(|(f, _)| f.as_str())
            .chain(self.terms.keys().map(String::as_str))
            .collect()
    }
}

fn write_err(e: std::io::Error) -> IndexError {
    IndexError::StorageWrite(e.to_string())
}

fn read_err(e: std::io::Error) -> IndexError {
    IndexError::StorageRead(e.to_string())
}

/// Write the record segment header.
pub(crate) fn write_records_header<W: Write>(writer: &mut W) -> Result<()> {
    writer.write_all(RECORDS_MAGIC).map_err(write_err)?;
    writer.write_all(&[SEGMENT_VERSION]).map_err(write_err)?;
    Ok(())
}

/// Check a file header against the expected magic and version.
fn read_header<R: Read>(reader: &mut R, magic: &[u8; 4], file: &str) -> Result<()> {
    let mut header = [0u8; 5];
    reader
        .read_exact(&mut header)
        .map_err(|_| IndexError::InvalidFormat(format!("{file}: missing header")))?;
    if &header[0..4] != magic {
        return Err(IndexError::InvalidFormat(format!(
            "{file}: invalid magic bytes"
        )));
    }
    if header[4] != SEGMENT_VERSION {
        return Err(IndexError::InvalidFormat(format!(
            "{file}: unsupported version {} (expected {})",
            header[4], SEGMENT_VERSION
        )));
    }
    Ok(())
}

/// Check the record segment header.
pub(crate) fn read_records_header<R: Read>(reader: &mut R) -> Result<()> {
    read_header(reader, RECORDS_MAGIC, RECORDS_FILE)
}

/// Encode one document as a length-prefixed frame.
pub(crate) fn encode_frame(document: &IndexDocument) -> Result<Vec<u8>> {
    let bytes =
        postcard::to_allocvec(document).map_err(|e| IndexError::Serialization(e.to_string()))?;
    let mut frame = Vec::with_capacity(4 + bytes.len());
    frame.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    frame.extend_from_slice(&bytes);
    Ok(frame)
}

/// Read the next document frame off `data`; `None` at a clean end of stream.
///
/// The declared length is bounds-checked against the remaining bytes before
/// the payload is read. A partial length prefix and an over-declared frame are
/// both truncation, rejected as [`IndexError::InvalidFormat`].
pub(crate) fn read_frame(data: &mut &[u8]) -> Result<Option<IndexDocument>> {
    if data.is_empty() {
        return Ok(None);
    }
    if data.len() < 4 {
        return Err(IndexError::InvalidFormat(format!(
            "{RECORDS_FILE}: truncated frame length prefix"
        )));
    }
    let (prefix, rest) = data.split_at(4);
    let mut len_buf = [0u8; 4];
    len_buf.copy_from_slice(prefix);
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > rest.len() {
        return Err(IndexError::InvalidFormat(format!(
            "{RECORDS_FILE}: frame declares {len} bytes, {} remain",
            rest.len()
        )));
    }
    let (payload, rest) = rest.split_at(len);
    let document =
        postcard::from_bytes(payload).map_err(|e| IndexError::Serialization(e.to_string()))?;
    *data = rest;
    Ok(Some(document))
}

/// Write the terms dictionary: postcard + zstd behind a header.
pub(crate) fn write_terms_dict(dir: &Path, postings: &Postings) -> Result<()> {
    let payload =
        postcard::to_allocvec(postings).map_err(|e| IndexError::Serialization(e.to_string()))?;
    let compressed = zstd::encode_all(payload.as_slice(), ZSTD_LEVEL).map_err(write_err)?;

    let mut data = Vec::with_capacity(5 + compressed.len());
    data.extend_from_slice(TERMS_MAGIC);
    data.push(SEGMENT_VERSION);
    data.extend_from_slice(&compressed);
    std::fs::write(dir.join(TERMS_FILE), data).map_err(write_err)
}

/// Read the terms dictionary of a generation.
pub(crate) fn read_terms_dict(dir: &Path) -> Result<Postings> {
    let data = std::fs::read(dir.join(TERMS_FILE)).map_err(read_err)?;
    let mut reader = data.as_slice();
    read_header(&mut reader, TERMS_MAGIC, TERMS_FILE)?;
    let payload = zstd::decode_all(reader).map_err(read_err)?;
    postcard::from_bytes(&payload).map_err(|e| IndexError::Serialization(e.to_string()))
}
