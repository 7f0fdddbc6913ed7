// Encoding schemes: a closed set of encode/decode pairs selected by name.

pub mod diphthong;
pub mod syllable;
pub mod table;
pub mod vowel_length;
pub mod words;

use std::fmt;
use std::str::FromStr;

use reo_core::ReoError;

use crate::normalizer;

pub use diphthong::DiphthongScheme;
pub use syllable::{SyllableScheme, VowelType};
pub use table::SubstitutionTable;
pub use vowel_length::VowelLengthScheme;

/// A pure, deterministic text transformation and its inverse.
///
/// Characters a scheme has no mapping for pass through unchanged.
pub trait Encoder {
    fn encode(&self, text: &str) -> String;
    fn decode(&self, text: &str) -> String;
}

/// Names of the available schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Identity,
    Base,
    VowelLength,
    Diphthong,
    Syllable,
    TableVowel,
    TableSyllable,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 7] = [
        SchemeKind::Identity,
        SchemeKind::Base,
        SchemeKind::VowelLength,
        SchemeKind::Diphthong,
        SchemeKind::Syllable,
        SchemeKind::TableVowel,
        SchemeKind::TableSyllable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Identity => "identity",
            SchemeKind::Base => "base",
            SchemeKind::VowelLength => "vowel_length",
            SchemeKind::Diphthong => "diphthong",
            SchemeKind::Syllable => "syllable",
            SchemeKind::TableVowel => "table_vowel",
            SchemeKind::TableSyllable => "table_syllable",
        }
    }

    /// Whether `decode(encode(x)) == x` holds for every text over the
    /// alphabet (either case), space and hyphen.
    ///
    /// `VowelLength` only round-trips text without doubled short vowels, and
    /// `Syllable` only lowercase text, so neither is declared reversible.
    pub fn is_reversible(self) -> bool {
        !matches!(self, SchemeKind::VowelLength | SchemeKind::Syllable)
    }

    /// Comma-separated list of every scheme name.
    pub fn valid_names() -> String {
        SchemeKind::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = ReoError;

    fn from_str(name: &str) -> Result<Self, ReoError> {
        SchemeKind::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ReoError::InvalidScheme {
                name: name.to_string(),
                valid: SchemeKind::valid_names(),
            })
    }
}

/// Digraph folding only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseScheme;

impl Encoder for BaseScheme {
    fn encode(&self, text: &str) -> String {
        normalizer::fold(text)
    }

    fn decode(&self, text: &str) -> String {
        normalizer::unfold(text)
    }
}

/// A ready-to-use scheme, borrowing whatever resources it needs.
///
/// Built by [`crate::ReoHandle::scheme`]; cheap to construct per call.
pub enum Scheme<'a> {
    Identity,
    Base(BaseScheme),
    VowelLength(VowelLengthScheme),
    Diphthong(DiphthongScheme),
    Syllable(SyllableScheme<'a>),
    Table(SchemeKind, &'a SubstitutionTable),
}

impl Scheme<'_> {
    pub fn kind(&self) -> SchemeKind {
        match self {
            Scheme::Identity => SchemeKind::Identity,
            Scheme::Base(_) => SchemeKind::Base,
            Scheme::VowelLength(_) => SchemeKind::VowelLength,
            Scheme::Diphthong(_) => SchemeKind::Diphthong,
            Scheme::Syllable(_) => SchemeKind::Syllable,
            Scheme::Table(kind, _) => *kind,
        }
    }
}

impl Encoder for Scheme<'_> {
    fn encode(&self, text: &str) -> String {
        match self {
            Scheme::Identity => text.to_string(),
            Scheme::Base(s) => s.encode(text),
            Scheme::VowelLength(s) => s.encode(text),
            Scheme::Diphthong(s) => s.encode(text),
            Scheme::Syllable(s) => s.encode(text),
            Scheme::Table(_, t) => t.encode(text),
        }
    }

    fn decode(&self, text: &str) -> String {
        match self {
            Scheme::Identity => text.to_string(),
            Scheme::Base(s) => s.decode(text),
            Scheme::VowelLength(s) => s.decode(text),
            Scheme::Diphthong(s) => s.decode(text),
            Scheme::Syllable(s) => s.decode(text),
            Scheme::Table(_, t) => t.decode(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.name().parse::<SchemeKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_lists_valid_names() {
        let err = "rot13".parse::<SchemeKind>().unwrap_err();
        match err {
            ReoError::InvalidScheme { name, valid } => {
                assert_eq!(name, "rot13");
                assert_eq!(
                    valid,
                    "identity, base, vowel_length, diphthong, syllable, table_vowel, table_syllable"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Base".parse::<SchemeKind>().is_err());
        assert!("".parse::<SchemeKind>().is_err());
    }

    #[test]
    fn base_scheme() {
        let encoded = BaseScheme.encode("Whiti mai te ra");
        assert_eq!(encoded, "Ƒiti mai te ra");
        assert_eq!(BaseScheme.decode(&encoded), "Whiti mai te ra");
    }

    #[test]
    fn identity_is_a_no_op() {
        let s = Scheme::Identity;
        assert_eq!(s.encode("whānau"), "whānau");
        assert_eq!(s.decode("ƒ"), "ƒ");
        assert_eq!(s.kind(), SchemeKind::Identity);
    }
}
