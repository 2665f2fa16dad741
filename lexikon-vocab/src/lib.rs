//! Vocabulary Constants and Index Field Names for Lexikon
//!
//! This crate provides a centralized location for the SKOS vocabulary IRIs the
//! thesaurus model is built on, and for the physical index field names shared
//! by the field mapping table, the analyzer routing table and the index
//! reader. Keeping both here guarantees that every component spells a field
//! the same way.
//!
//! # Organization
//!
//! - `skos` - SKOS vocabulary (http://www.w3.org/2004/02/skos/core#)
//! - `fields` - Physical index field names and per-language constructors

/// SKOS vocabulary constants
pub mod skos {
    /// SKOS namespace IRI
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:Concept IRI
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    /// skos:ConceptScheme IRI
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";

    /// skos:Collection IRI
    pub const COLLECTION: &str = "http://www.w3.org/2004/02/skos/core#Collection";

    /// skos:prefLabel IRI
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

    /// skos:altLabel IRI
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";

    /// skos:hiddenLabel IRI
    pub const HIDDEN_LABEL: &str = "http://www.w3.org/2004/02/skos/core#hiddenLabel";

    /// skos:definition IRI
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

    /// skos:inScheme IRI
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";

    /// skos:member IRI
    pub const MEMBER: &str = "http://www.w3.org/2004/02/skos/core#member";

    /// skos:broader IRI
    pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";

    /// skos:narrower IRI
    pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";

    /// skos:related IRI
    pub const RELATED: &str = "http://www.w3.org/2004/02/skos/core#related";

    /// skos:notation IRI
    pub const NOTATION: &str = "http://www.w3.org/2004/02/skos/core#notation";
}

/// Physical index field names.
///
/// Structural fields (`uri`, `name`, `scheme`, `collection`, `collection_all`)
/// are fixed names. Annotation-derived fields come in a language-agnostic base
/// form and a per-language form produced by [`fields::localized`]; the two
/// agree so that a rebuild requesting languages and a reader inspecting the
/// result construct identical names.
pub mod fields {
    /// Concept URI field (stored, exact match)
    pub const URI: &str = "uri";

    /// Concept local-name field (stored, exact match)
    pub const NAME: &str = "name";

    /// Scheme-membership filter field (stored, exact match, multi-valued)
    pub const SCHEME: &str = "scheme";

    /// Direct collection-membership filter field (stored, exact match, multi-valued)
    pub const COLLECTION: &str = "collection";

    /// Transitive collection-membership filter field, only written when
    /// transitive indexing is enabled (stored, exact match, multi-valued)
    pub const COLLECTION_ALL: &str = "collection_all";

    /// Preferred-label facet field base (stored, exact match)
    pub const PREF_LABEL: &str = "pref_label";

    /// Alternate-label facet field base (not stored, exact match)
    pub const ALT_LABEL: &str = "alt_label";

    /// Hidden-label facet field base (not stored, exact match)
    pub const HIDDEN_LABEL: &str = "hidden_label";

    /// Pooled "any label" facet field base (not stored, exact match)
    pub const LABEL: &str = "label";

    /// Normalized preferred-label field base (not stored, analyzed)
    pub const PREF_LABEL_NORM: &str = "pref_label_norm";

    /// Normalized alternate-label field base (not stored, analyzed)
    pub const ALT_LABEL_NORM: &str = "alt_label_norm";

    /// Normalized hidden-label field base (not stored, analyzed)
    pub const HIDDEN_LABEL_NORM: &str = "hidden_label_norm";

    /// Normalized pooled "any label" field base (not stored, analyzed)
    pub const LABEL_NORM: &str = "label_norm";

    /// Definition field base (not stored, analyzed)
    pub const DEFINITION: &str = "definition";

    /// Construct the per-language variant of a field base.
    ///
    /// An annotation that carries a language code lands in `{base}_{code}`;
    /// one without a code lands in the bare base field. Construction is total:
    /// every (base, language) pair maps to a name, so no annotation can be
    /// dropped for lack of a field.
    pub fn localized(base: &str, language: Option<&str>) -> String {
        match language {
            Some(code) if !code.is_empty() => format!("{}_{}", base, code),
            _ => base.to_string(),
        }
    }
}

/// Extract the local name of an IRI.
///
/// The local name is the segment after the last `#`, or after the last `/`
/// when no fragment is present. An IRI with neither separator is its own
/// local name.
#[inline]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind('#') {
        Some(idx) => &iri[idx + 1..],
        None => match iri.rfind('/') {
            Some(idx) => &iri[idx + 1..],
            None => iri,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skos_iris_share_namespace() {
        for iri in [
            skos::CONCEPT,
            skos::CONCEPT_SCHEME,
            skos::COLLECTION,
            skos::PREF_LABEL,
            skos::ALT_LABEL,
            skos::HIDDEN_LABEL,
            skos::DEFINITION,
            skos::IN_SCHEME,
            skos::MEMBER,
        ] {
            assert!(iri.starts_with(skos::NS), "{} outside skos namespace", iri);
        }
    }

    #[test]
    fn test_localized_with_language() {
        assert_eq!(fields::localized(fields::PREF_LABEL, Some("en")), "pref_label_en");
        assert_eq!(fields::localized(fields::LABEL_NORM, Some("pt-br")), "label_norm_pt-br");
    }

    #[test]
    fn test_localized_without_language() {
        assert_eq!(fields::localized(fields::DEFINITION, None), "definition");
        assert_eq!(fields::localized(fields::LABEL, Some("")), "label");
    }

    #[test]
    fn test_local_name_fragment() {
        assert_eq!(local_name("http://example.org/onto#Water"), "Water");
    }

    #[test]
    fn test_local_name_path() {
        assert_eq!(local_name("http://example.org/concepts/water"), "water");
    }

    #[test]
    fn test_local_name_bare() {
        assert_eq!(local_name("water"), "water");
    }

    #[test]
    fn test_local_name_prefers_fragment_over_path() {
        assert_eq!(local_name("http://example.org/a/b#c"), "c");
    }
}
