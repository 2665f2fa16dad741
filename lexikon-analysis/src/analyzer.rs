//! Analyzer: a tokenizer composed with an ordered filter chain.

use std::collections::HashMap;

use crate::filter::{DiacriticFoldingFilter, LightStemmerFilter, StopwordFilter, TokenFilter};
use crate::token::{Token, Tokenizer, UnicodeTokenizer};

/// A complete analysis pipeline.
///
/// Immutable after construction; the same analyzer can serve any number of
/// fields and rebuilds.
#[derive(Debug)]
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    /// Compose an analyzer from parts.
    pub fn new(tokenizer: Box<dyn Tokenizer>, filters: Vec<Box<dyn TokenFilter>>) -> Self {
        Analyzer { tokenizer, filters }
    }

    /// The generic default strategy: tokenize, lowercase, fold diacritics.
    ///
    /// No stopword removal or stemming — this is the language-agnostic
    /// fallback every unrouted field gets.
    pub fn generic_default() -> Self {
        Analyzer {
            tokenizer: Box::new(UnicodeTokenizer),
            filters: vec![Box::new(DiacriticFoldingFilter)],
        }
    }

    /// The dedicated strategy for a supported language: tokenize, drop the
    /// language's stopwords, fold diacritics, then light-stem. Returns `None`
    /// for codes outside the language support table.
    pub fn for_language(language: &str) -> Option<Self> {
        let code = language.to_ascii_lowercase();
        let stopwords = StopwordFilter::for_language(&code)?;
        let stemmer = LightStemmerFilter::for_language(&code)?;
        Some(Analyzer {
            tokenizer: Box::new(UnicodeTokenizer),
            filters: vec![
                Box::new(stopwords),
                Box::new(DiacriticFoldingFilter),
                Box::new(stemmer),
            ],
        })
    }

    /// Run the full pipeline over one text.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in &self.filters {
            tokens = filter.apply(tokens);
        }
        tokens
    }

    /// Analyzed terms only, in stream order.
    pub fn analyze_to_strings(&self, text: &str) -> Vec<String> {
        self.analyze(text).into_iter().map(|t| t.text).collect()
    }

    /// Analyzed terms with their occurrence counts.
    pub fn analyze_to_term_freqs(&self, text: &str) -> HashMap<String, u32> {
        let mut freqs = HashMap::new();
        for token in self.analyze(text) {
            *freqs.entry(token.text).or_insert(0) += 1;
        }
        freqs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_default_folds_but_keeps_stopwords() {
        let analyzer = Analyzer::generic_default();
        let terms = analyzer.analyze_to_strings("the Rivières");
        assert_eq!(terms, vec!["the", "rivieres"]);
    }

    #[test]
    fn test_language_pipeline_full_chain() {
        let analyzer = Analyzer::for_language("en").unwrap();
        let terms = analyzer.analyze_to_strings("The flooded rivers");
        assert_eq!(terms, vec!["flood", "river"]);
    }

    #[test]
    fn test_french_pipeline_folds_before_stemming() {
        let analyzer = Analyzer::for_language("fr").unwrap();
        // "côtières" → fold "cotieres" → stem "cotier"
        let terms = analyzer.analyze_to_strings("les zones côtières");
        assert_eq!(terms, vec!["zon", "cotier"]);
    }

    #[test]
    fn test_unknown_language_has_no_analyzer() {
        assert!(Analyzer::for_language("zz").is_none());
    }

    #[test]
    fn test_term_freqs_count_occurrences() {
        let analyzer = Analyzer::for_language("en").unwrap();
        let freqs = analyzer.analyze_to_term_freqs("water, waters, and more water");
        assert_eq!(freqs.get("water"), Some(&3));
        assert_eq!(freqs.get("more"), Some(&1));
        assert!(!freqs.contains_key("and"));
    }

    #[test]
    fn test_analyze_empty_text() {
        let analyzer = Analyzer::generic_default();
        assert!(analyzer.analyze("").is_empty());
    }
}
