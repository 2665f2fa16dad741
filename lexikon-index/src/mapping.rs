//! Field mapping: annotation kind → physical index fields.
//!
//! Each annotation kind fans out to a fixed, ordered list of output fields.
//! Label kinds feed a stored kind-specific exact facet, a pooled unstored
//! "any label" exact facet, and two unstored normalized variants (kind-specific
//! and pooled). Definitions are search-only and never stored. Every base name
//! is localized with the annotation's language code at build time.

use lexikon_graph::AnnotationKind;
use lexikon_vocab::fields;

use crate::record::Indexing;

/// One output field of an annotation kind's fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTemplate {
    /// Base field name, localized with the annotation's language code.
    pub base: &'static str,
    /// Whether the value is kept retrievable in the index.
    pub stored: bool,
    /// How the value is indexed.
    pub indexing: Indexing,
}

const fn template(base: &'static str, stored: bool, indexing: Indexing) -> FieldTemplate {
    FieldTemplate {
        base,
        stored,
        indexing,
    }
}

const PREF_LABEL_FIELDS: [FieldTemplate; 4] = [
    template(fields::PREF_LABEL, true, Indexing::Exact),
    template(fields::LABEL, false, Indexing::Exact),
    template(fields::PREF_LABEL_NORM, false, Indexing::Analyzed),
    template(fields::LABEL_NORM, false, Indexing::Analyzed),
];

const ALT_LABEL_FIELDS: [FieldTemplate; 4] = [
    template(fields::ALT_LABEL, true, Indexing::Exact),
    template(fields::LABEL, false, Indexing::Exact),
    template(fields::ALT_LABEL_NORM, false, Indexing::Analyzed),
    template(fields::LABEL_NORM, false, Indexing::Analyzed),
];

const HIDDEN_LABEL_FIELDS: [FieldTemplate; 4] = [
    template(fields::HIDDEN_LABEL, true, Indexing::Exact),
    template(fields::LABEL, false, Indexing::Exact),
    template(fields::HIDDEN_LABEL_NORM, false, Indexing::Analyzed),
    template(fields::LABEL_NORM, false, Indexing::Analyzed),
];

const DEFINITION_FIELDS: [FieldTemplate; 1] =
    [template(fields::DEFINITION, false, Indexing::Analyzed)];

/// The fan-out templates for one annotation kind, in emission order.
pub fn fields_for(kind: AnnotationKind) -> &'static [FieldTemplate] {
    match kind {
        AnnotationKind::PrefLabel => &PREF_LABEL_FIELDS,
        AnnotationKind::AltLabel => &ALT_LABEL_FIELDS,
        AnnotationKind::HiddenLabel => &HIDDEN_LABEL_FIELDS,
        AnnotationKind::Definition => &DEFINITION_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds_fan_out_to_four_fields() {
        for kind in [
            AnnotationKind::PrefLabel,
            AnnotationKind::AltLabel,
            AnnotationKind::HiddenLabel,
        ] {
            assert_eq!(fields_for(kind).len(), 4, "{kind} must fan out to 4 fields");
        }
        assert_eq!(fields_for(AnnotationKind::Definition).len(), 1);
    }

    #[test]
    fn test_only_kind_specific_label_field_is_stored() {
        for kind in [
            AnnotationKind::PrefLabel,
            AnnotationKind::AltLabel,
            AnnotationKind::HiddenLabel,
        ] {
            let templates = fields_for(kind);
            assert!(templates[0].stored);
            for t in &templates[1..] {
                assert!(!t.stored, "{} must not be stored", t.base);
            }
        }
    }

    #[test]
    fn test_definition_is_unstored_and_analyzed() {
        let templates = fields_for(AnnotationKind::Definition);
        assert_eq!(templates[0].base, fields::DEFINITION);
        assert!(!templates[0].stored);
        assert_eq!(templates[0].indexing, Indexing::Analyzed);
    }

    #[test]
    fn test_label_kinds_share_pooled_fields() {
        for kind in [
            AnnotationKind::PrefLabel,
            AnnotationKind::AltLabel,
            AnnotationKind::HiddenLabel,
        ] {
            let templates = fields_for(kind);
            assert_eq!(templates[1].base, fields::LABEL);
            assert_eq!(templates[3].base, fields::LABEL_NORM);
        }
    }

    #[test]
    fn test_exact_fields_precede_normalized_fields() {
        let templates = fields_for(AnnotationKind::PrefLabel);
        assert_eq!(templates[0].indexing, Indexing::Exact);
        assert_eq!(templates[1].indexing, Indexing::Exact);
        assert_eq!(templates[2].indexing, Indexing::Analyzed);
        assert_eq!(templates[3].indexing, Indexing::Analyzed);
    }
}
