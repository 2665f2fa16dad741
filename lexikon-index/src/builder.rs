//! Concept record builder: one concept in, one index record out.

use lexikon_graph::{AnnotationKind, CollectionResolver, Concept};
use lexikon_vocab::fields;

use crate::mapping;
use crate::record::{IndexRecord, Indexing};

/// Builds the structured index record for one concept.
///
/// Building never fails: missing information simply yields fewer fields, and
/// a bare concept still produces a minimal record carrying its URI and name.
/// The builder holds no state beyond the transitive-indexing flag; transitive
/// membership is resolved per concept through the injected resolver.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder {
    transitive: bool,
}

impl RecordBuilder {
    pub fn new(transitive: bool) -> Self {
        RecordBuilder { transitive }
    }

    /// Whether transitive collection membership is materialized.
    pub fn transitive(&self) -> bool {
        self.transitive
    }

    /// Convert one concept into its index record.
    pub fn build<R>(&self, concept: &Concept, resolver: &R) -> IndexRecord
    where
        R: CollectionResolver + ?Sized,
    {
        let mut record = IndexRecord::new();

        // ---- identity ----
        record.push(fields::URI, concept.uri().as_ref(), true, Indexing::Exact);
        record.push(fields::NAME, concept.name().as_ref(), true, Indexing::Exact);

        // ---- scheme membership ----
        for scheme in concept.schemes() {
            record.push(fields::SCHEME, scheme.as_ref(), true, Indexing::Exact);
        }

        // ---- collection membership, direct then transitive ----
        for collection in concept.collections() {
            record.push(fields::COLLECTION, collection.as_ref(), true, Indexing::Exact);
        }
        if self.transitive {
            // The two collection facets are independent: a collection that is
            // both a direct and a transitive membership appears in both.
            for collection in resolver.transitive_collections(concept) {
                record.push(
                    fields::COLLECTION_ALL,
                    collection.as_ref(),
                    true,
                    Indexing::Exact,
                );
            }
        }

        // ---- annotation fan-out ----
        for kind in AnnotationKind::ALL {
            for annotation in concept.annotations(kind) {
                let text = annotation.text.trim();
                if text.is_empty() {
                    continue;
                }
                for template in mapping::fields_for(kind) {
                    let field = fields::localized(template.base, annotation.language());
                    record.push(field, text, template.stored, template.indexing);
                }
            }
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexikon_graph::MemoryGraph;

    fn concept_uri(local: &str) -> String {
        format!("http://example.org/thesaurus/{local}")
    }

    #[test]
    fn test_bare_concept_builds_minimal_record() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("empty"));
        let record = RecordBuilder::new(true).build(&concept, &graph);

        let names = record.field_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("uri"));
        assert!(names.contains("name"));
        assert_eq!(record.uri(), Some(concept_uri("empty").as_str()));
        assert_eq!(record.values_for("name"), ["empty"]);
    }

    #[test]
    fn test_label_fans_out_to_four_localized_fields() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water")).with_pref_label("Water", Some("en"));
        let record = RecordBuilder::new(true).build(&concept, &graph);

        for field in ["pref_label_en", "label_en", "pref_label_norm_en", "label_norm_en"] {
            assert_eq!(record.values_for(field), ["Water"], "missing fan-out field {field}");
        }
        // uri + name + 4 fan-out values
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_annotation_without_language_uses_bare_fields() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water")).with_alt_label("Aqua", None);
        let record = RecordBuilder::new(true).build(&concept, &graph);

        assert_eq!(record.values_for("alt_label"), ["Aqua"]);
        assert_eq!(record.values_for("label"), ["Aqua"]);
        assert_eq!(record.values_for("alt_label_norm"), ["Aqua"]);
        assert_eq!(record.values_for("label_norm"), ["Aqua"]);
    }

    #[test]
    fn test_definition_fans_out_to_single_unstored_field() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water"))
            .with_definition("A transparent liquid.", Some("en"));
        let record = RecordBuilder::new(true).build(&concept, &graph);

        assert_eq!(record.values_for("definition_en"), ["A transparent liquid."]);
        let value = record
            .values()
            .iter()
            .find(|v| v.field == "definition_en")
            .unwrap();
        assert!(!value.stored);
        assert_eq!(value.indexing, Indexing::Analyzed);
    }

    #[test]
    fn test_blank_annotation_text_is_skipped() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water")).with_pref_label("   ", Some("en"));
        let record = RecordBuilder::new(true).build(&concept, &graph);
        assert_eq!(record.field_names().len(), 2);
    }

    #[test]
    fn test_annotation_text_is_trimmed() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water")).with_pref_label(" Water ", Some("en"));
        let record = RecordBuilder::new(true).build(&concept, &graph);
        assert_eq!(record.values_for("pref_label_en"), ["Water"]);
    }

    #[test]
    fn test_schemes_and_direct_collections() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water"))
            .with_scheme("http://example.org/scheme/hydrology")
            .with_collection("http://example.org/collection/liquids");
        let record = RecordBuilder::new(false).build(&concept, &graph);

        assert_eq!(
            record.values_for("scheme"),
            ["http://example.org/scheme/hydrology"]
        );
        assert_eq!(
            record.values_for("collection"),
            ["http://example.org/collection/liquids"]
        );
        assert!(record.values_for("collection_all").is_empty());
    }

    #[test]
    fn test_transitive_collections_emitted_alongside_direct() {
        let mut graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water"))
            .with_collection("http://example.org/collection/liquids");
        graph.insert_concept(concept.clone());
        graph.nest_collection(
            "http://example.org/collection/liquids",
            "http://example.org/collection/substances",
        );

        let record = RecordBuilder::new(true).build(&concept, &graph);
        assert_eq!(
            record.values_for("collection"),
            ["http://example.org/collection/liquids"]
        );
        assert_eq!(
            record.values_for("collection_all"),
            [
                "http://example.org/collection/liquids",
                "http://example.org/collection/substances"
            ]
        );
    }

    #[test]
    fn test_transitive_disabled_emits_no_transitive_field() {
        let mut graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water"))
            .with_collection("http://example.org/collection/liquids");
        graph.insert_concept(concept.clone());
        graph.nest_collection(
            "http://example.org/collection/liquids",
            "http://example.org/collection/substances",
        );

        let record = RecordBuilder::new(false).build(&concept, &graph);
        assert!(!record.field_names().contains("collection_all"));
    }

    #[test]
    fn test_multiple_annotations_of_one_kind_all_survive() {
        let graph = MemoryGraph::new();
        let concept = Concept::new(concept_uri("water"))
            .with_alt_label("Aqua", Some("en"))
            .with_alt_label("H2O", Some("en"));
        let record = RecordBuilder::new(true).build(&concept, &graph);

        assert_eq!(record.values_for("alt_label_en"), ["Aqua", "H2O"]);
        assert_eq!(record.values_for("label_en"), ["Aqua", "H2O"]);
    }
}
