//! Token filters.
//!
//! Filters transform a token stream in place-order: stopword removal runs on
//! natural-orthography lowercase tokens, diacritic folding flattens them to
//! ASCII, and the light stemmer strips inflection suffixes from the folded
//! form. [`crate::Analyzer`] fixes that order.

use std::collections::HashSet;
use std::fmt;

use crate::stem::{self, StemTable};
use crate::stopwords;
use crate::token::Token;

/// Transforms a token stream.
pub trait TokenFilter: Send + Sync + fmt::Debug {
    /// Apply the filter, consuming the stream.
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token>;
}

// ============================================================================
// Diacritic folding
// ============================================================================

/// Fold one string to its ASCII skeleton.
///
/// Covers the Latin-1 supplement and the common Latin Extended-A letters a
/// thesaurus in the supported languages uses; characters outside the table
/// pass through unchanged. Input is expected lowercase.
pub fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => folded.push('a'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => folded.push('e'),
            'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => folded.push('i'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => folded.push('o'),
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => folded.push('u'),
            'ç' | 'ć' | 'ĉ' | 'č' => folded.push('c'),
            'ñ' | 'ń' | 'ņ' | 'ň' => folded.push('n'),
            'ý' | 'ÿ' => folded.push('y'),
            'š' | 'ś' | 'ş' => folded.push('s'),
            'ž' | 'ź' | 'ż' => folded.push('z'),
            'ł' => folded.push('l'),
            'đ' | 'ð' => folded.push('d'),
            'ţ' | 'ť' => folded.push('t'),
            'ř' => folded.push('r'),
            'ğ' => folded.push('g'),
            'æ' => folded.push_str("ae"),
            'œ' => folded.push_str("oe"),
            'ß' => folded.push_str("ss"),
            'þ' => folded.push_str("th"),
            _ => folded.push(ch),
        }
    }
    folded
}

/// Replaces each token's text with its ASCII-folded form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticFoldingFilter;

impl TokenFilter for DiacriticFoldingFilter {
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.text = fold_diacritics(&token.text);
                token
            })
            .collect()
    }
}

// ============================================================================
// Stopword removal
// ============================================================================

/// Drops tokens found in a language's stopword set.
///
/// Positions of surviving tokens are left as assigned by the tokenizer, so
/// term distances still reflect the original text.
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter {
    words: &'static HashSet<&'static str>,
}

impl StopwordFilter {
    /// The filter for a language code, if the language has a stopword list.
    pub fn for_language(language: &str) -> Option<Self> {
        stopwords::stopwords_for(language).map(|words| StopwordFilter { words })
    }
}

impl TokenFilter for StopwordFilter {
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.words.contains(token.text.as_str()))
            .collect()
    }
}

// ============================================================================
// Light stemming
// ============================================================================

/// Applies a language's light stem table to each token.
#[derive(Debug, Clone, Copy)]
pub struct LightStemmerFilter {
    table: StemTable,
}

impl LightStemmerFilter {
    /// The stemmer for a language code, if the language has a stem table.
    pub fn for_language(language: &str) -> Option<Self> {
        stem::table_for(language).map(|table| LightStemmerFilter { table })
    }
}

impl TokenFilter for LightStemmerFilter {
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.text = stem::stem(&self.table, &token.text);
                token
            })
            .collect()
    }
}
