// Syllable packing: each onset + nucleus pair becomes one precomposed
// Hangul syllable, composed algebraically from a leading-consonant index
// and a vowel index.

use reo_core::ReoError;
use reo_core::character::{NG, WH};
use reo_core::token::Token;

use super::words::{self, PieceKind};
use super::{Encoder, VowelLengthScheme};
use crate::classifier::Classifier;
use crate::normalizer;
use crate::tokenizer::tokenize;

const S_BASE: u32 = 0xAC00;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = 19 * N_COUNT;

/// Leading-consonant index of the null onset.
const NULL_ONSET: u32 = 11;

/// Onset → leading-consonant index.
const ONSETS: &[(char, u32)] = &[
    ('h', 18),
    ('k', 15),
    ('m', 6),
    ('n', 2),
    ('p', 17),
    ('r', 5),
    ('t', 16),
    ('w', 7),
    (NG, 9),
    (WH, 12),
];

/// Vowel → vowel index.
const VOWELS: &[(char, u32)] = &[
    ('a', 0),
    ('\u{0101}', 2),
    ('e', 5),
    ('\u{0113}', 7),
    ('i', 4),
    ('\u{012B}', 6),
    ('o', 8),
    ('\u{014D}', 12),
    ('u', 13),
    ('\u{016B}', 17),
];

/// Whether long vowels keep their own nucleus or are doubled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VowelType {
    #[default]
    Long,
    /// Apply vowel-length folding before packing.
    Short,
}

/// Compose one syllable. `None` onset is the null onset.
pub fn compose(onset: Option<char>, vowel: char) -> Result<char, ReoError> {
    let unmappable = || {
        let mut grapheme = String::new();
        grapheme.extend(onset);
        grapheme.push(vowel);
        ReoError::UnmappableGrapheme {
            scheme: "syllable",
            grapheme,
        }
    };
    let l = match onset {
        None => NULL_ONSET,
        Some(c) => ONSETS
            .iter()
            .find(|&&(o, _)| o == c)
            .map(|&(_, l)| l)
            .ok_or_else(unmappable)?,
    };
    let v = VOWELS
        .iter()
        .find(|&&(x, _)| x == vowel)
        .map(|&(_, v)| v)
        .ok_or_else(unmappable)?;
    char::from_u32(S_BASE + (l * V_COUNT + v) * T_COUNT).ok_or_else(unmappable)
}

/// Split a precomposed syllable back into onset and vowel. Syllables with a
/// trailing consonant, or whose indices this scheme never produces, are not
/// ours and yield `None`.
pub fn decompose(c: char) -> Option<(Option<char>, char)> {
    let index = (c as u32).checked_sub(S_BASE)?;
    if index >= S_COUNT || index % T_COUNT != 0 {
        return None;
    }
    let l = index / N_COUNT;
    let v = (index % N_COUNT) / T_COUNT;
    let vowel = VOWELS.iter().find(|&&(_, x)| x == v)?.0;
    if l == NULL_ONSET {
        return Some((None, vowel));
    }
    let onset = ONSETS.iter().find(|&&(_, x)| x == l)?.0;
    Some((Some(onset), vowel))
}

/// Packs every word the classifier accepts into syllable blocks; all other
/// words pass through verbatim, so mixed-language text is safe to encode.
///
/// Packed words come back lowercase, and every line is re-spaced with the
/// detokenizer, so only single-spaced text with lowercase target words
/// round-trips exactly.
///
/// Decoding unpacks any open Hangul syllable built from the onsets and
/// vowels above. Korean text in the input is therefore only preserved when
/// its syllables fall outside that set (`가` survives, `서` does not).
pub struct SyllableScheme<'a> {
    classifier: Classifier<'a>,
    vowel_type: VowelType,
}

impl<'a> SyllableScheme<'a> {
    pub fn new(classifier: Classifier<'a>, vowel_type: VowelType) -> Self {
        Self {
            classifier,
            vowel_type,
        }
    }

    /// Lowercase and fold one accepted word for packing.
    fn prepare(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match self.vowel_type {
            VowelType::Long => normalizer::fold(&lower),
            VowelType::Short => VowelLengthScheme.encode(&lower),
        }
    }

    fn encode_line(&self, line: &str) -> String {
        let mut pieces = words::split(line);
        for piece in &mut pieces {
            if piece.kind == PieceKind::Word && self.classifier.is_valid(&piece.text, true) {
                piece.text = pack_word(&self.prepare(&piece.text));
            }
        }
        words::detokenize(&pieces)
    }
}

fn push_syllable(out: &mut String, onset: Option<char>, vowel: char) {
    match compose(onset, vowel) {
        Ok(syllable) => out.push(syllable),
        Err(err) => {
            log::error!("{err}; writing the syllable unpacked");
            out.extend(onset);
            out.push(vowel);
        }
    }
}

/// Pack one folded, lowercase word.
fn pack_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut onset: Option<char> = None;
    for token in tokenize(word) {
        match token {
            Token::Consonant(c) => {
                if let Some(dangling) = onset.replace(c) {
                    out.push(dangling);
                }
            }
            Token::Vowel(v, _) => push_syllable(&mut out, onset.take(), v),
            Token::Diphthong(a, b) => {
                push_syllable(&mut out, onset.take(), a);
                push_syllable(&mut out, None, b);
            }
            Token::Separator(c) | Token::Foreign(c) => {
                out.extend(onset.take());
                out.push(c);
            }
        }
    }
    out.extend(onset);
    out
}

impl Encoder for SyllableScheme<'_> {
    fn encode(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.encode_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn decode(&self, text: &str) -> String {
        let mut unpacked = Vec::with_capacity(text.len());
        for c in text.chars() {
            match decompose(c) {
                Some((onset, vowel)) => {
                    unpacked.extend(onset);
                    unpacked.push(vowel);
                }
                None => unpacked.push(c),
            }
        }
        let mut out = String::with_capacity(text.len());
        normalizer::unfold_into(&unpacked, &mut out);
        out
    }
}
