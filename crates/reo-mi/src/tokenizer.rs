// Phoneme tokenizer: single left-to-right scan, one character of lookahead.
//
// Input is expected to be digraph-folded already, so every consonant is a
// single character.

use std::iter::Peekable;
use std::str::Chars;

use reo_core::character::{is_consonant, is_vowel, simple_lower};
use reo_core::token::{Token, VowelLength};

/// Registered two-vowel nuclei (lowercase). Matched case-insensitively.
pub const NUCLEI: &[(char, char)] = &[
    ('a', 'e'),
    ('a', 'i'),
    ('a', 'o'),
    ('a', 'u'),
    ('e', 'i'),
    ('o', 'i'),
    ('o', 'e'),
    ('o', 'u'),
    ('\u{0101}', 'e'), // āe
    ('\u{0101}', 'i'), // āi
    ('\u{0101}', 'o'), // āo
    ('\u{0101}', 'u'), // āu
    ('\u{0113}', 'i'), // ēi
    ('\u{014D}', 'i'), // ōi
    ('\u{014D}', 'e'), // ōe
    ('\u{014D}', 'u'), // ōu
];

/// Whether `first` followed by `second` forms a registered nucleus.
pub fn is_nucleus_pair(first: char, second: char) -> bool {
    let pair = (simple_lower(first), simple_lower(second));
    NUCLEI.contains(&pair)
}

/// Lazy token stream over folded text. See [`tokenize`].
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        if c == ' ' || c == '-' {
            return Some(Token::Separator(c));
        }
        if is_consonant(c) {
            return Some(Token::Consonant(c));
        }
        if is_vowel(c) {
            if let Some(&next) = self.chars.peek() {
                if is_nucleus_pair(c, next) {
                    self.chars.next();
                    return Some(Token::Diphthong(c, next));
                }
            }
            return Some(Token::Vowel(c, VowelLength::of(c)));
        }
        Some(Token::Foreign(c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.chars.size_hint();
        (lo.div_ceil(2), hi)
    }
}

/// Segment folded text into phoneme tokens.
///
/// Consonants come out alone; pairing an onset with its nucleus is left to
/// the consumer. Concatenating the tokens' text reproduces the input.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars().peekable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<Token> {
        tokenize(text).collect()
    }

    #[test]
    fn consonant_vowel_sequence() {
        use Token::*;
        assert_eq!(
            collect("kia ora"),
            vec![
                Consonant('k'),
                Vowel('i', VowelLength::Short),
                Vowel('a', VowelLength::Short),
                Separator(' '),
                Vowel('o', VowelLength::Short),
                Consonant('r'),
                Vowel('a', VowelLength::Short),
            ]
        );
    }

    #[test]
    fn unregistered_pair_splits() {
        use Token::*;
        // "ia" is not a registered nucleus
        assert_eq!(
            collect("kia"),
            vec![
                Consonant('k'),
                Vowel('i', VowelLength::Short),
                Vowel('a', VowelLength::Short)
            ]
        );
    }

    #[test]
    fn registered_nuclei() {
        use Token::*;
        assert_eq!(collect("tae"), vec![Consonant('t'), Diphthong('a', 'e')]);
        assert_eq!(collect("MAI"), vec![Consonant('M'), Diphthong('A', 'I')]);
        // unfolded "ng": 'g' is outside the alphabet
        assert_eq!(
            collect("kāinga"),
            vec![
                Consonant('k'),
                Diphthong('\u{0101}', 'i'),
                Consonant('n'),
                Foreign('g'),
                Vowel('a', VowelLength::Short)
            ]
        );
        assert_eq!(
            collect("kāiŋa"),
            vec![
                Consonant('k'),
                Diphthong('\u{0101}', 'i'),
                Consonant('ŋ'),
                Vowel('a', VowelLength::Short)
            ]
        );
    }

    #[test]
    fn maximal_munch_takes_first_pair() {
        use Token::*;
        // "aoe": "ao" wins, the trailing "e" stands alone
        assert_eq!(
            collect("aoe"),
            vec![Diphthong('a', 'o'), Vowel('e', VowelLength::Short)]
        );
    }

    #[test]
    fn long_vowels_and_symbols() {
        use Token::*;
        assert_eq!(
            collect("ƒā"),
            vec![Consonant('ƒ'), Vowel('\u{0101}', VowelLength::Long)]
        );
        assert_eq!(collect("ŋ"), vec![Consonant('ŋ')]);
    }

    #[test]
    fn separators_and_foreign() {
        use Token::*;
        assert_eq!(
            collect("a-b?"),
            vec![
                Vowel('a', VowelLength::Short),
                Separator('-'),
                Foreign('b'),
                Foreign('?')
            ]
        );
        assert_eq!(collect("\t"), vec![Foreign('\t')]);
    }

    #[test]
    fn tokens_reproduce_input() {
        for s in ["Kei te pēhea koe?", "ƒakaŋaro", "hello world 42", ""] {
            let mut out = String::new();
            for t in tokenize(s) {
                t.write_to(&mut out);
            }
            assert_eq!(out, s);
        }
    }
}
