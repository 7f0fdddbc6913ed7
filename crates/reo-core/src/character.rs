// Character classification for the Māori alphabet.
//
// The alphabet is closed: ten consonants (two of them written as digraphs and
// folded to single internal symbols) and five vowels, each with a long
// (macronised) form. Everything else is foreign to the orthography.

// ---------------------------------------------------------------------------
// Alphabet constants
// ---------------------------------------------------------------------------

/// Internal symbol for the `wh` digraph (lowercase).
pub const WH: char = '\u{0192}'; // ƒ

/// Internal symbol for the `wh` digraph (uppercase).
pub const WH_UPPER: char = '\u{0191}'; // Ƒ

/// Internal symbol for the `ng` digraph (lowercase).
pub const NG: char = '\u{014B}'; // ŋ

/// Internal symbol for the `ng` digraph (uppercase).
pub const NG_UPPER: char = '\u{014A}'; // Ŋ

/// Consonants (lowercase), including the folded digraph symbols.
pub const CONSONANTS: &[char] = &['h', 'k', 'm', 'n', 'p', 'r', 't', 'w', WH, NG];

/// Short vowels (lowercase).
pub const SHORT_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Long vowels (lowercase), index-aligned with [`SHORT_VOWELS`].
pub const LONG_VOWELS: &[char] = &['\u{0101}', '\u{0113}', '\u{012B}', '\u{014D}', '\u{016B}'];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Broad character type, independent of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    /// Whitespace, punctuation and symbols.
    Other,
}

/// Returns the character type for a given character.
///
/// Any Unicode alphabetic character is a letter, so letters from other
/// orthographies (and modifier letters such as the ʻokina) classify as
/// `Letter` and can be rejected by alphabet membership afterwards.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        CharType::Letter
    } else if c.is_numeric() {
        CharType::Digit
    } else {
        CharType::Other
    }
}

// ---------------------------------------------------------------------------
// Alphabet membership
// ---------------------------------------------------------------------------

/// Check whether a character is a vowel, short or long (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    SHORT_VOWELS.contains(&lower) || LONG_VOWELS.contains(&lower)
}

/// Check whether a character is a short vowel (case-insensitive).
pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a long (macronised) vowel (case-insensitive).
pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a consonant (case-insensitive).
///
/// Only the folded digraph symbols count for `wh` and `ng`; a bare `g` is
/// not part of the alphabet.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&simple_lower(c))
}

/// Check whether a character belongs to the alphabet at all.
pub fn is_alphabet(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

/// Check whether a character is one of the internal digraph symbols.
pub fn is_digraph_symbol(c: char) -> bool {
    matches!(c, WH | WH_UPPER | NG | NG_UPPER)
}

/// Return the short vowel with the same quality as `c`, preserving case.
///
/// `ā` and `a` both map to `a`; `Ā` maps to `A`. Returns `None` for
/// anything that is not a vowel.
pub fn vowel_quality(c: char) -> Option<char> {
    let lower = simple_lower(c);
    let short = if SHORT_VOWELS.contains(&lower) {
        lower
    } else {
        let idx = LONG_VOWELS.iter().position(|&v| v == lower)?;
        SHORT_VOWELS[idx]
    };
    Some(if is_upper(c) { simple_upper(short) } else { short })
}

/// Return the long vowel with the same quality as a short vowel, preserving case.
pub fn lengthen(c: char) -> Option<char> {
    let idx = SHORT_VOWELS.iter().position(|&v| v == simple_lower(c))?;
    let long = LONG_VOWELS[idx];
    Some(if is_upper(c) { simple_upper(long) } else { long })
}

// ---------------------------------------------------------------------------
// Glottal marks
// ---------------------------------------------------------------------------

/// Check whether a character is an apostrophe-like glottal mark.
///
/// Related Polynesian orthographies write the glottal stop with an
/// apostrophe, a right single quotation mark, a backtick or the ʻokina.
pub fn is_glottal_mark(c: char) -> bool {
    matches!(c, '\'' | '`' | '\u{2019}' | '\u{02BB}' | '\u{02BC}')
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}
