// Per-word orthography rules, applied in order, stopping at the first failure.
//
// A word reaching these rules contains no whitespace or hyphen and is not
// camelCase; splitting is the caller's job.

use std::fmt;

use reo_automata::WordlistAutomaton;
use reo_core::character::{
    CharType, get_char_type, is_alphabet, is_consonant, is_glottal_mark, is_long_vowel, is_vowel,
    vowel_quality,
};

use crate::normalizer;
use crate::resources::TermList;

/// Same-quality morae allowed in a row; one more fails the word.
const MAX_MORAE: u32 = 2;

/// Why a text was judged not to be valid orthography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Nothing left after trimming.
    Empty,
    /// A hyphen with nothing on one side.
    EmptyPiece,
    /// Letters that are not part of the alphabet, in order of appearance.
    ForeignLetters(Vec<char>),
    /// The word is an entry in one of the curated lists.
    ListedTerm { term: String, list: TermList },
    /// A one-letter word that is not a vowel.
    LoneConsonant(char),
    /// Too many morae of one vowel quality in a row.
    VowelRun { vowel: char, morae: u32 },
    /// A consonant followed by something other than a vowel.
    ConsonantCluster(char, char),
    FinalConsonant(char),
    GlottalBetweenVowels(char),
    /// Digits and letters in the same alphanumeric run.
    MixedAlphanumeric(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Empty => write!(f, "text is empty"),
            Failure::EmptyPiece => write!(f, "empty piece next to a hyphen"),
            Failure::ForeignLetters(letters) => {
                let list: Vec<String> = letters.iter().map(char::to_string).collect();
                write!(f, "contains letters outside the alphabet: {}", list.join(", "))
            }
            Failure::ListedTerm { term, list } => {
                write!(f, "`{}` is in the {} word list", normalizer::unfold(term), list.name())
            }
            Failure::LoneConsonant(c) => write!(f, "single letter `{c}` is not a vowel"),
            Failure::VowelRun { vowel, morae } => {
                write!(f, "vowel `{vowel}` held for {morae} morae in a row")
            }
            Failure::ConsonantCluster(c, next) => {
                write!(f, "consonant `{c}` is followed by `{next}` instead of a vowel")
            }
            Failure::FinalConsonant(c) => write!(f, "ends on the consonant `{c}`"),
            Failure::GlottalBetweenVowels(mark) => {
                write!(f, "glottal mark `{mark}` between two vowels")
            }
            Failure::MixedAlphanumeric(run) => write!(f, "digits and letters mixed in `{run}`"),
        }
    }
}

/// Run every per-word rule against one word.
pub fn check_word(word: &str, strict: bool, wordlists: &WordlistAutomaton) -> Result<(), Failure> {
    let lowered: Vec<char> = word.to_lowercase().chars().collect();
    let chars = normalizer::fold_chars(&lowered);

    check_alphabet(&chars)?;

    // every letter left is in the alphabet, so no alphabet letters means
    // pure punctuation or digits
    let letters: String = chars.iter().copied().filter(|&c| is_alphabet(c)).collect();
    if letters.is_empty() {
        return Ok(());
    }

    if !strict {
        check_wordlists(&letters, wordlists)?;
    }
    check_lone_letter(&letters)?;
    check_vowel_runs(&chars)?;
    check_consonant_followers(&chars)?;
    check_final_letter(&chars)?;
    check_glottal_marks(&chars)?;
    check_alphanumeric_runs(&chars)
}

fn check_alphabet(chars: &[char]) -> Result<(), Failure> {
    let mut foreign: Vec<char> = Vec::new();
    for &c in chars {
        // modifier-letter glottal marks are alphabetic too, and rejected here
        if get_char_type(c) == CharType::Letter && !is_alphabet(c) && !foreign.contains(&c) {
            foreign.push(c);
        }
    }
    if foreign.is_empty() {
        Ok(())
    } else {
        Err(Failure::ForeignLetters(foreign))
    }
}

fn check_wordlists(letters: &str, wordlists: &WordlistAutomaton) -> Result<(), Failure> {
    match wordlists.is_term(letters) {
        Some(term) => Err(Failure::ListedTerm {
            term: term.text.clone(),
            list: TermList::from_tag(term.tag),
        }),
        None => Ok(()),
    }
}

fn check_lone_letter(letters: &str) -> Result<(), Failure> {
    let mut it = letters.chars();
    match (it.next(), it.next()) {
        (Some(c), None) if !is_vowel(c) => Err(Failure::LoneConsonant(c)),
        _ => Ok(()),
    }
}

fn check_vowel_runs(chars: &[char]) -> Result<(), Failure> {
    let mut current: Option<char> = None;
    let mut morae = 0;
    for &c in chars {
        let Some(quality) = vowel_quality(c) else {
            current = None;
            continue;
        };
        let weight = if is_long_vowel(c) { 2 } else { 1 };
        if current == Some(quality) {
            morae += weight;
        } else {
            current = Some(quality);
            morae = weight;
        }
        if morae > MAX_MORAE {
            return Err(Failure::VowelRun {
                vowel: quality,
                morae,
            });
        }
    }
    Ok(())
}

fn check_consonant_followers(chars: &[char]) -> Result<(), Failure> {
    for w in chars.windows(2) {
        if is_consonant(w[0]) && !is_vowel(w[1]) {
            return Err(Failure::ConsonantCluster(w[0], w[1]));
        }
    }
    Ok(())
}

fn check_final_letter(chars: &[char]) -> Result<(), Failure> {
    match chars.last() {
        Some(&c) if is_consonant(c) => Err(Failure::FinalConsonant(c)),
        _ => Ok(()),
    }
}

fn check_glottal_marks(chars: &[char]) -> Result<(), Failure> {
    for w in chars.windows(3) {
        if is_vowel(w[0]) && is_glottal_mark(w[1]) && is_vowel(w[2]) {
            return Err(Failure::GlottalBetweenVowels(w[1]));
        }
    }
    Ok(())
}

fn check_alphanumeric_runs(chars: &[char]) -> Result<(), Failure> {
    let kind = |c: &char| get_char_type(*c);
    for run in chars.split(|c| !matches!(kind(c), CharType::Letter | CharType::Digit)) {
        let has_digit = run.iter().any(|c| kind(c) == CharType::Digit);
        let has_letter = run.iter().any(|c| kind(c) == CharType::Letter);
        if has_digit && has_letter {
            return Err(Failure::MixedAlphanumeric(run.iter().collect()));
        }
    }
    Ok(())
}
