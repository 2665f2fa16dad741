//! Field routing: which analysis strategy each index field receives.

use std::collections::{BTreeMap, BTreeSet};

use lexikon_vocab::fields;

use crate::analyzer::Analyzer;
use crate::language::{is_supported, SUPPORTED_LANGUAGES};

/// Normalized field bases that carry a per-language suffix when routed.
const LANGUAGE_FIELD_BASES: &[&str] = &[
    fields::PREF_LABEL_NORM,
    fields::ALT_LABEL_NORM,
    fields::HIDDEN_LABEL_NORM,
    fields::LABEL_NORM,
    fields::DEFINITION,
];

/// How one field's text reaches the index.
#[derive(Debug)]
pub enum Strategy<'a> {
    /// The value is indexed as a single verbatim term.
    Exact,
    /// The value runs through an analysis pipeline.
    Analyzed(&'a Analyzer),
}

/// Routing table for one rebuild: field name in, analysis strategy out.
///
/// Built once from the requested language set and never mutated afterwards.
/// The same request always produces the same table, so concurrent rebuilds
/// can each hold their own without coordination.
#[derive(Debug)]
pub struct FieldRouting {
    /// Localized field name to the language code that owns it.
    language_fields: BTreeMap<String, String>,
    /// Language code to its dedicated pipeline.
    analyzers: BTreeMap<String, Analyzer>,
    default_analyzer: Analyzer,
    covered: Vec<String>,
}

impl FieldRouting {
    /// Build the routing table for a requested language set.
    ///
    /// An empty request covers every supported language. Unsupported codes
    /// are dropped without error, duplicates collapse, and matching is
    /// case-insensitive. A supported code only lands in the table when its
    /// dedicated pipeline can actually be built.
    pub fn for_languages(requested: &[String]) -> Self {
        let candidates: BTreeSet<String> = if requested.is_empty() {
            SUPPORTED_LANGUAGES.iter().map(|code| code.to_string()).collect()
        } else {
            requested
                .iter()
                .map(|code| code.to_ascii_lowercase())
                .filter(|code| is_supported(code))
                .collect()
        };

        let mut language_fields = BTreeMap::new();
        let mut analyzers = BTreeMap::new();
        let mut covered = Vec::new();
        for code in candidates {
            if let Some(analyzer) = Analyzer::for_language(&code) {
                for base in LANGUAGE_FIELD_BASES {
                    language_fields.insert(fields::localized(base, Some(&code)), code.clone());
                }
                analyzers.insert(code.clone(), analyzer);
                covered.push(code);
            }
        }

        FieldRouting {
            language_fields,
            analyzers,
            default_analyzer: Analyzer::generic_default(),
            covered,
        }
    }

    /// Resolve one field name to its strategy.
    ///
    /// `uri` and `name` are always exact. Localized fields of a covered
    /// language get that language's pipeline. Everything else falls through
    /// to the generic default.
    pub fn strategy_for(&self, field: &str) -> Strategy<'_> {
        if field == fields::URI || field == fields::NAME {
            return Strategy::Exact;
        }
        if let Some(code) = self.language_fields.get(field) {
            if let Some(analyzer) = self.analyzers.get(code) {
                return Strategy::Analyzed(analyzer);
            }
        }
        Strategy::Analyzed(&self.default_analyzer)
    }

    /// The language code a field is routed to, if any.
    pub fn routed_language(&self, field: &str) -> Option<&str> {
        self.language_fields.get(field).map(String::as_str)
    }

    /// Languages with dedicated routing, sorted by code.
    pub fn covered_languages(&self) -> &[String] {
        &self.covered
    }

    /// The fallback pipeline for unrouted fields.
    pub fn default_analyzer(&self) -> &Analyzer {
        &self.default_analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_empty_request_covers_all_supported() {
        let routing = FieldRouting::for_languages(&[]);
        assert_eq!(routing.covered_languages(), SUPPORTED_LANGUAGES);
    }

    #[test]
    fn test_unknown_codes_dropped_silently() {
        let routing = FieldRouting::for_languages(&codes(&["en", "zz", "xx"]));
        assert_eq!(routing.covered_languages(), ["en"]);
        assert!(routing.routed_language("pref_label_norm_zz").is_none());
    }

    #[test]
    fn test_duplicate_and_mixed_case_requests_collapse() {
        let routing = FieldRouting::for_languages(&codes(&["EN", "en", "De"]));
        assert_eq!(routing.covered_languages(), ["de", "en"]);
    }

    #[test]
    fn test_uri_and_name_are_exact() {
        let routing = FieldRouting::for_languages(&codes(&["en"]));
        assert!(matches!(routing.strategy_for("uri"), Strategy::Exact));
        assert!(matches!(routing.strategy_for("name"), Strategy::Exact));
    }

    #[test]
    fn test_localized_fields_route_to_their_language() {
        let routing = FieldRouting::for_languages(&codes(&["en", "fr"]));
        for field in [
            "pref_label_norm_en",
            "alt_label_norm_en",
            "hidden_label_norm_en",
            "label_norm_en",
            "definition_en",
            "definition_fr",
        ] {
            assert!(
                matches!(routing.strategy_for(field), Strategy::Analyzed(_)),
                "{field} should be analyzed"
            );
        }
        assert_eq!(routing.routed_language("definition_fr"), Some("fr"));
        assert_eq!(routing.routed_language("label_norm_en"), Some("en"));
    }

    #[test]
    fn test_unrouted_fields_fall_to_default() {
        let routing = FieldRouting::for_languages(&codes(&["en"]));
        // German was not requested, so its localized fields are unrouted.
        assert!(routing.routed_language("definition_de").is_none());
        let strategy = routing.strategy_for("definition_de");
        match strategy {
            Strategy::Analyzed(analyzer) => {
                assert!(std::ptr::eq(analyzer, routing.default_analyzer()));
            }
            Strategy::Exact => panic!("unrouted field must not be exact"),
        }
    }

    #[test]
    fn test_routed_field_uses_language_pipeline() {
        let routing = FieldRouting::for_languages(&codes(&["en"]));
        match routing.strategy_for("definition_en") {
            Strategy::Analyzed(analyzer) => {
                // English pipeline drops stopwords; the default keeps them.
                assert_eq!(analyzer.analyze_to_strings("the rivers"), vec!["river"]);
            }
            Strategy::Exact => panic!("definition_en must be analyzed"),
        }
    }

    #[test]
    fn test_same_request_builds_identical_routing() {
        let a = FieldRouting::for_languages(&codes(&["fr", "en"]));
        let b = FieldRouting::for_languages(&codes(&["en", "fr"]));
        assert_eq!(a.covered_languages(), b.covered_languages());
        assert_eq!(
            a.routed_language("pref_label_norm_fr"),
            b.routed_language("pref_label_norm_fr")
        );
    }
}
