//! Concept data model.
//!
//! A [`Concept`] is the unit the indexing pipeline consumes: a URI, a local
//! name, scheme and collection memberships, and language-tagged annotations
//! for each of the four [`AnnotationKind`]s. Concepts are plain data — the
//! graph backend materializes them, the pipeline only reads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// Annotation kinds
// ============================================================================

/// The four annotation kinds a concept can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// skos:prefLabel — the preferred display label
    PrefLabel,
    /// skos:altLabel — synonyms and alternate forms
    AltLabel,
    /// skos:hiddenLabel — searchable but never displayed (misspellings etc.)
    HiddenLabel,
    /// skos:definition — prose definition, search-only
    Definition,
}

impl AnnotationKind {
    /// All kinds, in the order the document builder walks them.
    pub const ALL: [AnnotationKind; 4] = [
        AnnotationKind::PrefLabel,
        AnnotationKind::AltLabel,
        AnnotationKind::HiddenLabel,
        AnnotationKind::Definition,
    ];

    /// Short name used in logs and manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::PrefLabel => "prefLabel",
            AnnotationKind::AltLabel => "altLabel",
            AnnotationKind::HiddenLabel => "hiddenLabel",
            AnnotationKind::Definition => "definition",
        }
    }

    /// The SKOS property this kind corresponds to.
    pub fn property_iri(&self) -> &'static str {
        match self {
            AnnotationKind::PrefLabel => lexikon_vocab::skos::PREF_LABEL,
            AnnotationKind::AltLabel => lexikon_vocab::skos::ALT_LABEL,
            AnnotationKind::HiddenLabel => lexikon_vocab::skos::HIDDEN_LABEL,
            AnnotationKind::Definition => lexikon_vocab::skos::DEFINITION,
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Annotations
// ============================================================================

/// One language-tagged text value.
///
/// The language code is optional; `None` means "no language". Codes are
/// lowercased by [`Annotation::new`] so that field naming and analyzer
/// routing agree regardless of how the source graph cased its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation text.
    pub text: String,
    /// Lowercased language code, or `None` when untagged.
    pub language: Option<String>,
}

impl Annotation {
    /// Create an annotation, normalizing the language tag.
    ///
    /// An empty language code is treated as absent.
    pub fn new(text: impl Into<String>, language: Option<&str>) -> Self {
        let language = match language {
            Some(code) if !code.is_empty() => Some(code.to_ascii_lowercase()),
            _ => None,
        };
        Annotation {
            text: text.into(),
            language,
        }
    }

    /// The language code as a borrowed str, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

// ============================================================================
// Concept
// ============================================================================

/// A single addressable thesaurus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    uri: Arc<str>,
    name: Arc<str>,
    schemes: Vec<Arc<str>>,
    collections: Vec<Arc<str>>,
    pref_labels: Vec<Annotation>,
    alt_labels: Vec<Annotation>,
    hidden_labels: Vec<Annotation>,
    definitions: Vec<Annotation>,
}

impl Concept {
    /// Create a concept with a URI, deriving the local name from it.
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        let uri: Arc<str> = uri.into();
        let name: Arc<str> = Arc::from(lexikon_vocab::local_name(&uri));
        Concept {
            uri,
            name,
            schemes: Vec::new(),
            collections: Vec::new(),
            pref_labels: Vec::new(),
            alt_labels: Vec::new(),
            hidden_labels: Vec::new(),
            definitions: Vec::new(),
        }
    }

    /// Create a concept with an explicit local name.
    pub fn with_name(uri: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        let mut concept = Concept::new(uri);
        concept.name = name.into();
        concept
    }

    /// Add a scheme membership.
    pub fn with_scheme(mut self, scheme: impl Into<Arc<str>>) -> Self {
        self.schemes.push(scheme.into());
        self
    }

    /// Add a direct collection membership.
    pub fn with_collection(mut self, collection: impl Into<Arc<str>>) -> Self {
        self.collections.push(collection.into());
        self
    }

    /// Add an annotation of the given kind.
    pub fn with_annotation(
        mut self,
        kind: AnnotationKind,
        text: impl Into<String>,
        language: Option<&str>,
    ) -> Self {
        let annotation = Annotation::new(text, language);
        match kind {
            AnnotationKind::PrefLabel => self.pref_labels.push(annotation),
            AnnotationKind::AltLabel => self.alt_labels.push(annotation),
            AnnotationKind::HiddenLabel => self.hidden_labels.push(annotation),
            AnnotationKind::Definition => self.definitions.push(annotation),
        }
        self
    }

    /// Add a preferred label.
    pub fn with_pref_label(self, text: impl Into<String>, language: Option<&str>) -> Self {
        self.with_annotation(AnnotationKind::PrefLabel, text, language)
    }

    /// Add an alternate label.
    pub fn with_alt_label(self, text: impl Into<String>, language: Option<&str>) -> Self {
        self.with_annotation(AnnotationKind::AltLabel, text, language)
    }

    /// Add a hidden label.
    pub fn with_hidden_label(self, text: impl Into<String>, language: Option<&str>) -> Self {
        self.with_annotation(AnnotationKind::HiddenLabel, text, language)
    }

    /// Add a definition.
    pub fn with_definition(self, text: impl Into<String>, language: Option<&str>) -> Self {
        self.with_annotation(AnnotationKind::Definition, text, language)
    }

    /// The concept URI.
    pub fn uri(&self) -> &Arc<str> {
        &self.uri
    }

    /// The concept's local name.
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// Scheme memberships, in insertion order.
    pub fn schemes(&self) -> &[Arc<str>] {
        &self.schemes
    }

    /// Direct collection memberships, in insertion order.
    pub fn collections(&self) -> &[Arc<str>] {
        &self.collections
    }

    /// Annotations of one kind, in insertion order.
    pub fn annotations(&self, kind: AnnotationKind) -> &[Annotation] {
        match kind {
            AnnotationKind::PrefLabel => &self.pref_labels,
            AnnotationKind::AltLabel => &self.alt_labels,
            AnnotationKind::HiddenLabel => &self.hidden_labels,
            AnnotationKind::Definition => &self.definitions,
        }
    }

    /// Total annotation count across all kinds.
    pub fn annotation_count(&self) -> usize {
        self.pref_labels.len()
            + self.alt_labels.len()
            + self.hidden_labels.len()
            + self.definitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_derives_local_name() {
        let concept = Concept::new("http://example.org/onto#Water");
        assert_eq!(concept.name().as_ref(), "Water");
        assert_eq!(concept.uri().as_ref(), "http://example.org/onto#Water");
    }

    #[test]
    fn test_concept_explicit_name() {
        let concept = Concept::with_name("http://example.org/c/1", "water");
        assert_eq!(concept.name().as_ref(), "water");
    }

    #[test]
    fn test_annotation_language_lowercased() {
        let annotation = Annotation::new("Wasser", Some("DE"));
        assert_eq!(annotation.language(), Some("de"));
    }

    #[test]
    fn test_annotation_empty_language_is_none() {
        let annotation = Annotation::new("water", Some(""));
        assert_eq!(annotation.language(), None);
    }

    #[test]
    fn test_annotations_routed_by_kind() {
        let concept = Concept::new("http://example.org/c#1")
            .with_pref_label("water", Some("en"))
            .with_alt_label("H2O", Some("en"))
            .with_hidden_label("watter", Some("en"))
            .with_definition("a transparent liquid", Some("en"));

        for kind in AnnotationKind::ALL {
            assert_eq!(concept.annotations(kind).len(), 1, "kind {}", kind);
        }
        assert_eq!(concept.annotation_count(), 4);
        assert_eq!(
            concept.annotations(AnnotationKind::AltLabel)[0].text,
            "H2O"
        );
    }

    #[test]
    fn test_kind_property_iris() {
        assert_eq!(
            AnnotationKind::PrefLabel.property_iri(),
            lexikon_vocab::skos::PREF_LABEL
        );
        assert_eq!(
            AnnotationKind::Definition.property_iri(),
            lexikon_vocab::skos::DEFINITION
        );
    }

    #[test]
    fn test_concept_serde_round_trip() {
        let concept = Concept::new("http://example.org/c#1")
            .with_scheme("http://example.org/scheme#main")
            .with_pref_label("water", Some("en"));
        let json = serde_json::to_string(&concept).unwrap();
        let back: Concept = serde_json::from_str(&json).unwrap();
        assert_eq!(back, concept);
    }
}
