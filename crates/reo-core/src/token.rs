// Phoneme tokens

use crate::character::is_long_vowel;

/// Length of a single vowel character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelLength {
    Short,
    /// Written with a macron.
    Long,
}

impl VowelLength {
    /// Length of the given vowel character.
    pub fn of(c: char) -> Self {
        if is_long_vowel(c) {
            VowelLength::Long
        } else {
            VowelLength::Short
        }
    }
}

/// A phoneme token produced by the tokenizer.
///
/// Every token keeps the exact characters it was scanned from, so writing a
/// token stream back out reproduces the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single vowel nucleus.
    Vowel(char, VowelLength),
    /// A registered two-vowel nucleus.
    Diphthong(char, char),
    /// A consonant; its following nucleus is a separate token.
    Consonant(char),
    /// A word separator: space or hyphen.
    Separator(char),
    /// Any character outside the alphabet.
    Foreign(char),
}

impl Token {
    /// Append the token's source characters to `out`.
    pub fn write_to(&self, out: &mut String) {
        match *self {
            Token::Vowel(c, _) | Token::Consonant(c) | Token::Separator(c) | Token::Foreign(c) => {
                out.push(c)
            }
            Token::Diphthong(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }

    /// The token's source characters as an owned string.
    pub fn text(&self) -> String {
        let mut s = String::with_capacity(4);
        self.write_to(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_length_of() {
        assert_eq!(VowelLength::of('a'), VowelLength::Short);
        assert_eq!(VowelLength::of('\u{0101}'), VowelLength::Long);
        assert_eq!(VowelLength::of('\u{0100}'), VowelLength::Long);
    }

    #[test]
    fn token_text() {
        assert_eq!(Token::Diphthong('a', 'i').text(), "ai");
        assert_eq!(Token::Consonant('k').text(), "k");
        assert_eq!(Token::Foreign('?').text(), "?");
    }

    #[test]
    fn write_to_appends() {
        let mut out = String::from("k");
        Token::Diphthong('a', 'i').write_to(&mut out);
        Token::Separator(' ').write_to(&mut out);
        assert_eq!(out, "kai ");
    }
}
