// Digraph folding: `wh`/`ng` to single internal symbols and back.
//
// Capitalised digraphs are folded only in the contexts `unfold` can
// reproduce: `WH`/`NG` before an uppercase letter, `Wh`/`Ng` elsewhere.
// Anything else (`wH`, `WH` at the end of a word) is left as written, which
// keeps `unfold(fold(x)) == x` for every spelling.

use reo_core::character::{NG, NG_UPPER, WH, WH_UPPER, is_digraph_symbol, is_upper};

fn fold_pair(first: char, second: char, next: Option<char>) -> Option<char> {
    let next_upper = next.is_some_and(is_upper);
    match (first, second) {
        ('w', 'h') => Some(WH),
        ('n', 'g') => Some(NG),
        ('W', 'H') if next_upper => Some(WH_UPPER),
        ('N', 'G') if next_upper => Some(NG_UPPER),
        ('W', 'h') if !next_upper => Some(WH_UPPER),
        ('N', 'g') if !next_upper => Some(NG_UPPER),
        _ => None,
    }
}

/// Fold digraphs in a character slice.
pub fn fold_chars(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            if let Some(symbol) = fold_pair(chars[i], chars[i + 1], chars.get(i + 2).copied()) {
                out.push(symbol);
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Replace digraph spellings with their internal symbols.
///
/// ```
/// use reo_mi::normalizer::fold;
/// assert_eq!(fold("whanga"), "ƒaŋa");
/// assert_eq!(fold("WHANGA"), "ƑAŊA");
/// ```
pub fn fold(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    fold_chars(&chars).into_iter().collect()
}

/// Expand internal symbols in a character slice, appending to `out`.
pub fn unfold_into(chars: &[char], out: &mut String) {
    for (i, &c) in chars.iter().enumerate() {
        let next_upper = chars.get(i + 1).copied().is_some_and(is_upper);
        match c {
            WH => out.push_str("wh"),
            NG => out.push_str("ng"),
            WH_UPPER if next_upper => out.push_str("WH"),
            NG_UPPER if next_upper => out.push_str("NG"),
            WH_UPPER => out.push_str("Wh"),
            NG_UPPER => out.push_str("Ng"),
            _ => out.push(c),
        }
    }
}

/// Replace internal symbols with their digraph spellings.
pub fn unfold(text: &str) -> String {
    if !text.chars().any(is_digraph_symbol) {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    unfold_into(&chars, &mut out);
    out
}
