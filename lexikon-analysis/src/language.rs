//! Language support table.
//!
//! A pure lookup: which language codes have a dedicated analysis strategy
//! (stopword list + stemmer tables). Codes outside this table are not errors
//! anywhere in the pipeline — annotations in unsupported languages are
//! analyzed with the generic default strategy.

/// Language codes with a dedicated analyzer, sorted.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "da", "de", "en", "es", "fi", "fr", "it", "nl", "no", "pt", "sv",
];

/// Whether a language code has a dedicated analyzer. Case-insensitive.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes() {
        assert!(is_supported("en"));
        assert!(is_supported("de"));
        assert!(is_supported("sv"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_supported("EN"));
        assert!(is_supported("De"));
    }

    #[test]
    fn test_unknown_codes() {
        assert!(!is_supported("zz"));
        assert!(!is_supported(""));
        assert!(!is_supported("en-us"));
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let mut sorted = SUPPORTED_LANGUAGES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, SUPPORTED_LANGUAGES);
    }
}
