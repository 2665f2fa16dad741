//! Per-language stopword tables.
//!
//! Lists cover the high-frequency function words of each supported language.
//! Entries are lowercase, in natural orthography — the stopword filter runs
//! before diacritic folding, so "für" and "été" match as written.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

const DANISH: &[&str] = &[
    "af", "alle", "at", "de", "den", "denne", "der", "det", "dette", "du", "efter", "eller", "en",
    "er", "et", "for", "fra", "han", "har", "hun", "i", "ikke", "jeg", "kan", "med", "men", "og",
    "om", "op", "på", "som", "til", "var", "vi", "være",
];

const GERMAN: &[&str] = &[
    "aber", "als", "auch", "auf", "aus", "bei", "bis", "das", "dass", "dem", "den", "der", "des",
    "die", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es", "für", "im",
    "in", "ist", "mit", "nach", "nicht", "noch", "oder", "sich", "sie", "sind", "über", "und",
    "von", "vor", "war", "wie", "zu", "zum", "zur",
];

const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const SPANISH: &[&str] = &[
    "a", "al", "como", "con", "de", "del", "el", "ella", "en", "entre", "es", "esta", "este",
    "ha", "la", "las", "lo", "los", "más", "no", "o", "para", "pero", "por", "que", "se", "sin",
    "sobre", "su", "sus", "un", "una", "y",
];

const FINNISH: &[&str] = &[
    "ei", "että", "he", "hän", "ja", "jo", "joka", "jos", "kanssa", "kun", "me", "mikä", "mutta",
    "myös", "ne", "niin", "nyt", "ole", "on", "oli", "ovat", "se", "sekä", "sen", "siitä", "tai",
    "tämä", "vain",
];

const FRENCH: &[&str] = &[
    "à", "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "est", "et",
    "il", "ils", "la", "le", "les", "leur", "mais", "ne", "on", "ou", "où", "par", "pas", "pour",
    "qui", "que", "sa", "se", "ses", "son", "sur", "un", "une",
];

const ITALIAN: &[&str] = &[
    "a", "ad", "al", "alla", "che", "chi", "ci", "come", "con", "da", "degli", "dei", "del",
    "della", "di", "e", "è", "ed", "gli", "i", "il", "in", "la", "le", "lo", "ma", "nel", "non",
    "o", "per", "più", "se", "si", "su", "un", "una", "uno",
];

const DUTCH: &[&str] = &[
    "aan", "als", "bij", "dat", "de", "den", "der", "die", "dit", "door", "een", "en", "er",
    "het", "hij", "in", "is", "maar", "met", "naar", "niet", "of", "om", "onder", "op", "te",
    "tot", "uit", "van", "voor", "was", "zijn",
];

const NORWEGIAN: &[&str] = &[
    "at", "av", "de", "den", "denne", "der", "det", "dette", "du", "eller", "en", "er", "et",
    "etter", "for", "fra", "han", "har", "hun", "i", "ikke", "jeg", "kan", "med", "men", "og",
    "om", "på", "som", "til", "var", "vi", "være",
];

const PORTUGUESE: &[&str] = &[
    "a", "ao", "aos", "as", "com", "como", "da", "das", "de", "do", "dos", "e", "em", "entre",
    "essa", "este", "foi", "mais", "mas", "na", "nas", "no", "nos", "não", "o", "os", "ou",
    "para", "pela", "pelo", "por", "que", "se", "sem", "um", "uma",
];

const SWEDISH: &[&str] = &[
    "att", "av", "de", "den", "denna", "det", "detta", "du", "efter", "eller", "en", "ett",
    "från", "för", "han", "har", "hon", "i", "inte", "jag", "kan", "med", "men", "och", "om",
    "på", "som", "till", "under", "var", "vi", "är",
];

static STOPWORDS_BY_LANGUAGE: Lazy<HashMap<&'static str, HashSet<&'static str>>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert("da", DANISH.iter().copied().collect());
        map.insert("de", GERMAN.iter().copied().collect());
        map.insert("en", ENGLISH.iter().copied().collect());
        map.insert("es", SPANISH.iter().copied().collect());
        map.insert("fi", FINNISH.iter().copied().collect());
        map.insert("fr", FRENCH.iter().copied().collect());
        map.insert("it", ITALIAN.iter().copied().collect());
        map.insert("nl", DUTCH.iter().copied().collect());
        map.insert("no", NORWEGIAN.iter().copied().collect());
        map.insert("pt", PORTUGUESE.iter().copied().collect());
        map.insert("sv", SWEDISH.iter().copied().collect());
        map
    });

/// The stopword set for a language code, if one is defined.
pub fn stopwords_for(language: &str) -> Option<&'static HashSet<&'static str>> {
    STOPWORDS_BY_LANGUAGE.get(language)
}
