//! Light suffix-stripping stemmers.
//!
//! Table-driven stemming in the "light stemmer" tradition: each language maps
//! to an ordered list of (suffix, replacement) rules; the first matching rule
//! is applied, and only when the resulting stem keeps a minimum character
//! length. Identity rules (suffix == replacement) act as guards that stop a
//! shorter rule from firing — e.g. English keeps "ss" intact so "glass" is
//! not stripped to "glas".
//!
//! Tables assume the token stream was diacritic-folded first, so rules are
//! plain ASCII even for languages written with diacritics.

/// Suffix rules and the minimum stem length for one language.
#[derive(Debug, Clone, Copy)]
pub struct StemTable {
    /// (suffix, replacement) rules, checked in order; first match wins.
    pub rules: &'static [(&'static str, &'static str)],
    /// Minimum number of characters a stem keeps after replacement.
    pub min_stem: usize,
}

const DANISH: StemTable = StemTable {
    rules: &[
        ("erne", ""),
        ("ene", ""),
        ("erer", "er"),
        ("er", ""),
        ("en", ""),
        ("et", ""),
        ("e", ""),
    ],
    min_stem: 3,
};

const GERMAN: StemTable = StemTable {
    rules: &[
        ("ern", ""),
        ("em", ""),
        ("en", ""),
        ("er", ""),
        ("es", ""),
        ("e", ""),
        ("s", ""),
    ],
    min_stem: 4,
};

const ENGLISH: StemTable = StemTable {
    rules: &[
        ("sses", "ss"),
        ("ies", "i"),
        ("ss", "ss"),
        ("s", ""),
        ("ing", ""),
        ("ed", ""),
    ],
    min_stem: 3,
};

const SPANISH: StemTable = StemTable {
    rules: &[
        ("aciones", "acion"),
        ("ciones", "cion"),
        ("es", ""),
        ("os", ""),
        ("as", ""),
        ("a", ""),
        ("o", ""),
        ("e", ""),
    ],
    min_stem: 3,
};

const FINNISH: StemTable = StemTable {
    rules: &[
        ("issa", ""),
        ("ista", ""),
        ("iin", ""),
        ("lla", ""),
        ("lta", ""),
        ("lle", ""),
        ("ssa", ""),
        ("sta", ""),
        ("t", ""),
        ("n", ""),
    ],
    min_stem: 3,
};

const FRENCH: StemTable = StemTable {
    rules: &[
        ("eaux", "eau"),
        ("aux", "al"),
        ("es", ""),
        ("e", ""),
        ("s", ""),
        ("x", ""),
    ],
    min_stem: 3,
};

const ITALIAN: StemTable = StemTable {
    rules: &[
        ("io", "i"),
        ("i", ""),
        ("e", ""),
        ("o", ""),
        ("a", ""),
    ],
    min_stem: 3,
};

const DUTCH: StemTable = StemTable {
    rules: &[
        ("heden", "heid"),
        ("en", ""),
        ("se", ""),
        ("s", ""),
        ("e", ""),
    ],
    min_stem: 4,
};

const NORWEGIAN: StemTable = StemTable {
    rules: &[
        ("ene", ""),
        ("ane", ""),
        ("er", ""),
        ("en", ""),
        ("et", ""),
        ("a", ""),
        ("e", ""),
    ],
    min_stem: 3,
};

const PORTUGUESE: StemTable = StemTable {
    rules: &[
        ("coes", "cao"),
        ("oes", "ao"),
        ("es", ""),
        ("s", ""),
        ("a", ""),
        ("o", ""),
        ("e", ""),
    ],
    min_stem: 3,
};

const SWEDISH: StemTable = StemTable {
    rules: &[
        ("arna", ""),
        ("erna", ""),
        ("orna", ""),
        ("ar", ""),
        ("er", ""),
        ("or", ""),
        ("en", ""),
        ("et", ""),
        ("a", ""),
        ("e", ""),
        ("n", ""),
    ],
    min_stem: 3,
};

/// The stem table for a language code, if one is defined.
pub fn table_for(language: &str) -> Option<StemTable> {
    match language {
        "da" => Some(DANISH),
        "de" => Some(GERMAN),
        "en" => Some(ENGLISH),
        "es" => Some(SPANISH),
        "fi" => Some(FINNISH),
        "fr" => Some(FRENCH),
        "it" => Some(ITALIAN),
        "nl" => Some(DUTCH),
        "no" => Some(NORWEGIAN),
        "pt" => Some(PORTUGUESE),
        "sv" => Some(SWEDISH),
        _ => None,
    }
}

/// Apply a stem table to one term.
///
/// Returns the input unchanged when no rule matches or the stem would fall
/// below the table's minimum length.
pub fn stem(table: &StemTable, term: &str) -> String {
    for (suffix, replacement) in table.rules {
        if let Some(base) = term.strip_suffix(suffix) {
            let stem_chars = base.chars().count() + replacement.chars().count();
            if stem_chars >= table.min_stem {
                let mut stemmed = String::with_capacity(base.len() + replacement.len());
                stemmed.push_str(base);
                stemmed.push_str(replacement);
                return stemmed;
            }
            // Matched but too short: stop, shorter rules would also truncate.
            return term.to_string();
        }
    }
    term.to_string()
}
