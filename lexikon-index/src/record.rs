//! The in-memory index record handed from the builder to the writer.

use std::collections::BTreeSet;

/// How one record value is turned into index terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// The whole value becomes a single verbatim term, case preserved.
    Exact,
    /// The value runs through the analysis strategy routed for its field.
    Analyzed,
}

/// One value of a record: field name, text, and its write discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValue {
    /// Physical field name, already localized where applicable.
    pub field: String,
    /// The value text.
    pub value: String,
    /// Whether the value is kept retrievable in the index.
    pub stored: bool,
    /// How the value is indexed.
    pub indexing: Indexing,
}

/// A multi-valued structured document for one concept.
///
/// Records are ephemeral: built one at a time during a rebuild and handed
/// straight to the writer, never retained or updated individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRecord {
    values: Vec<RecordValue>,
}

impl IndexRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value.
    pub fn push(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
        stored: bool,
        indexing: Indexing,
    ) {
        self.values.push(RecordValue {
            field: field.into(),
            value: value.into(),
            stored,
            indexing,
        });
    }

    /// All values in emission order.
    pub fn values(&self) -> &[RecordValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The distinct field names used by this record.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.values.iter().map(|v| v.field.as_str()).collect()
    }

    /// The value texts carried by one field, in emission order.
    pub fn values_for(&self, field: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.value.as_str())
            .collect()
    }

    /// The record's URI value, when present.
    pub fn uri(&self) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.field == lexikon_vocab::fields::URI)
            .map(|v| v.value.as_str())
    }
}
