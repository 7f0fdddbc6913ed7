// camelCase detection and splitting

use reo_core::character::{is_lower, is_upper};

fn upper_to_lower_transitions(word: &[char]) -> usize {
    word.windows(2)
        .filter(|w| is_upper(w[0]) && is_lower(w[1]))
        .count()
}

/// Whether a word is written in camelCase: more than one
/// uppercase-to-lowercase transition ("KeiTePai", but not "Whānau",
/// "WHĀNAU" or "KIAora"). Two transitions always mean mixed case.
pub fn is_camel_case(word: &[char]) -> bool {
    upper_to_lower_transitions(word) > 1
}

/// Split a camelCase word at its case boundaries and lowercase each part.
///
/// A boundary falls before an uppercase letter that follows a lowercase one,
/// and before the last letter of an uppercase run that is followed by a
/// lowercase letter ("TeREOMaori" → te, reo, maori).
pub fn split_camel_case(word: &[char]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..word.len() {
        let c = word[i];
        if !is_upper(c) {
            continue;
        }
        let after_lower = is_lower(word[i - 1]);
        let run_end = is_upper(word[i - 1]) && word.get(i + 1).copied().is_some_and(is_lower);
        if after_lower || run_end {
            parts.push(word[start..i].iter().collect::<String>().to_lowercase());
            start = i;
        }
    }
    parts.push(word[start..].iter().collect::<String>().to_lowercase());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn detects_camel_case() {
        assert!(is_camel_case(&chars("KeiTePai")));
        assert!(is_camel_case(&chars("kiaOraKoutou")));
        assert!(is_camel_case(&chars("WhakaTūWhare")));
        assert!(!is_camel_case(&chars("Whānau")));
        assert!(!is_camel_case(&chars("WHĀNAU")));
        assert!(!is_camel_case(&chars("kiaOra")));
        assert!(!is_camel_case(&chars("kia")));
        assert!(!is_camel_case(&chars("KIAora")));
        assert!(is_camel_case(&chars("MeToo")));
        assert!(!is_camel_case(&chars("2024")));
    }

    #[test]
    fn splits_at_boundaries() {
        assert_eq!(split_camel_case(&chars("KeiTePai")), ["kei", "te", "pai"]);
        assert_eq!(
            split_camel_case(&chars("WhakaTūWhare")),
            ["whaka", "tū", "whare"]
        );
        assert_eq!(split_camel_case(&chars("TeREOMaori")), ["te", "reo", "maori"]);
        assert_eq!(split_camel_case(&chars("MeToo")), ["me", "too"]);
    }

    #[test]
    fn boundary_needs_a_lowercase_letter_before() {
        assert_eq!(split_camel_case(&chars("Kia2Ora")), ["kia2ora"]);
        assert_eq!(split_camel_case(&chars("KiaOra2Koe")), ["kia", "ora2koe"]);
    }
}
