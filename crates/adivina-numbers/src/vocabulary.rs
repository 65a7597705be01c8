//! Spanish number words, from "cero" to "cien".
//!
//! Resolution works on a single word and tries three rules in order:
//!
//! 1. **Exact match** against [`WORDS`] (after [`fold`]ing).
//! 2. **"veinti-" compound**: "veintiuno" = 20 + "uno".
//! 3. **"X y Y" compound inside one word**: "treintaycinco" = 30 + 5.
//!    Recognizers normally emit "treinta y cinco" as three words; that
//!    form is handled by the parser, which looks at adjacent tokens.

/// The largest value expressible as a word. There is no "ciento uno".
pub const MAX_WORD_VALUE: i32 = 100;

/// Every base word, in folded form (lowercase, no accents).
///
/// Twenty-one to twenty-nine are not listed: they come from the
/// "veinti-" rule.
const WORDS: &[(&str, i32)] = &[
    ("cero", 0),
    ("uno", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
    ("dieciseis", 16),
    ("diecisiete", 17),
    ("dieciocho", 18),
    ("diecinueve", 19),
    ("veinte", 20),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
    ("cien", MAX_WORD_VALUE),
];

/// Written spellings of the "veinti-" compounds, as a recognizer would
/// produce them. Only used by [`vocabulary`]; resolution goes through
/// the prefix rule.
const VEINTI_SPELLINGS: &[(&str, i32)] = &[
    ("veintiuno", 21),
    ("veintidós", 22),
    ("veintitrés", 23),
    ("veinticuatro", 24),
    ("veinticinco", 25),
    ("veintiséis", 26),
    ("veintisiete", 27),
    ("veintiocho", 28),
    ("veintinueve", 29),
];

const VEINTI: &str = "veinti";

/// Normalizes a word for lookup: trims it, lowercases it and strips
/// Spanish diacritics, so "Dieciséis", "dieciséis" and "dieciseis" all
/// become "dieciseis".
pub fn fold(word: &str) -> String {
    word.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Resolves a single Spanish number word to its value.
///
/// Case- and accent-insensitive. Returns `None` if the word is not a
/// number.
pub fn word_value(word: &str) -> Option<i32> {
    let folded = fold(word);
    if folded.is_empty() {
        return None;
    }

    if let Some(value) = lookup(&folded) {
        return Some(value);
    }

    if let Some(rest) = folded.strip_prefix(VEINTI) {
        if let Some(unit) = unit_value(rest) {
            return Some(20 + unit);
        }
    }

    split_compound(&folded)
}

/// Returns the full vocabulary as `(spelling, value)` pairs, with accents
/// where Spanish spelling requires them.
pub fn vocabulary() -> impl Iterator<Item = (&'static str, i32)> {
    WORDS
        .iter()
        .copied()
        .map(|(word, value)| match word {
            "dieciseis" => ("dieciséis", value),
            _ => (word, value),
        })
        .chain(VEINTI_SPELLINGS.iter().copied())
}

/// Looks up an already-folded word in the base table.
fn lookup(folded: &str) -> Option<i32> {
    WORDS
        .iter()
        .find(|(word, _)| *word == folded)
        .map(|(_, value)| *value)
}

/// A unit word: "uno" to "nueve".
pub(crate) fn unit_value(folded: &str) -> Option<i32> {
    lookup(folded).filter(|value| (1..=9).contains(value))
}

/// A tens word that can start an "X y Y" compound: "treinta" to "noventa".
///
/// "veinte y uno" is accepted too, even though "veintiuno" is the
/// correct spelling; recognizers do produce it.
pub(crate) fn tens_value(folded: &str) -> Option<i32> {
    lookup(folded).filter(|value| (20..=90).contains(value) && value % 10 == 0)
}

/// Handles "treintaycinco" (no spaces): exactly one "y", tens before,
/// unit after.
fn split_compound(folded: &str) -> Option<i32> {
    let (tens, unit) = folded.split_once('y')?;
    if unit.contains('y') {
        return None;
    }
    Some(tens_value(tens.trim())? + unit_value(unit.trim())?)
}
