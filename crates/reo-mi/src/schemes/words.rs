// Treebank-style word splitting and the matching detokenizer.
//
// Only leading opening marks and trailing closing marks are split off a
// whitespace-delimited chunk, so hyphenated compounds and intra-word
// apostrophes stay inside their word.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Word,
    /// Opening bracket or quote: no space after it.
    Opening,
    /// Closing punctuation: no space before it.
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub kind: PieceKind,
}

impl Piece {
    fn new(text: impl Into<String>, kind: PieceKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

fn is_opening(c: char) -> bool {
    matches!(
        c,
        '(' | '[' | '{' | '"' | '\'' | '\u{201C}' | '\u{2018}' | '\u{00AB}'
    )
}

fn is_closing(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '?'
            | '!'
            | ')'
            | ']'
            | '}'
            | '"'
            | '\''
            | '\u{201D}'
            | '\u{2019}'
            | '\u{00BB}'
            | '\u{2026}'
    )
}

/// Split text into words and detached punctuation.
pub fn split(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    for chunk in text.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        while start < chars.len() && is_opening(chars[start]) {
            pieces.push(Piece::new(chars[start], PieceKind::Opening));
            start += 1;
        }
        let mut end = chars.len();
        while end > start && is_closing(chars[end - 1]) {
            end -= 1;
        }
        if end > start {
            pieces.push(Piece::new(
                chars[start..end].iter().collect::<String>(),
                PieceKind::Word,
            ));
        }
        for &c in &chars[end..] {
            pieces.push(Piece::new(c, PieceKind::Closing));
        }
    }
    pieces
}

/// Join pieces with single spaces, dropping the space before closing
/// punctuation and after opening punctuation.
pub fn detokenize<'a, I>(pieces: I) -> String
where
    I: IntoIterator<Item = &'a Piece>,
{
    let mut out = String::new();
    let mut after_opening = false;
    for piece in pieces {
        if !out.is_empty() && piece.kind != PieceKind::Closing && !after_opening {
            out.push(' ');
        }
        out.push_str(&piece.text);
        after_opening = piece.kind == PieceKind::Opening;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pieces: &[Piece]) -> Vec<&str> {
        pieces.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn terminal_punctuation_detached() {
        let pieces = split("Kei te pēhea koe?");
        assert_eq!(texts(&pieces), ["Kei", "te", "pēhea", "koe", "?"]);
        assert_eq!(pieces[4].kind, PieceKind::Closing);
    }

    #[test]
    fn compounds_and_apostrophes_kept() {
        assert_eq!(texts(&split("kei-te-pai don't")), ["kei-te-pai", "don't"]);
    }

    #[test]
    fn brackets_and_quotes() {
        let pieces = split("(\"kia ora\")");
        assert_eq!(texts(&pieces), ["(", "\"", "kia", "ora", "\"", ")"]);
        assert_eq!(detokenize(&pieces), "(\"kia ora\")");
    }

    #[test]
    fn ellipsis_and_commas() {
        let pieces = split("Āe, kāore...");
        assert_eq!(texts(&pieces), ["Āe", ",", "kāore", ".", ".", "."]);
        assert_eq!(detokenize(&pieces), "Āe, kāore...");
    }

    #[test]
    fn detokenize_collapses_spacing() {
        let pieces = split("  kia   ora  , e hoa ! ");
        assert_eq!(detokenize(&pieces), "kia ora, e hoa!");
    }

    #[test]
    fn punctuation_only_chunk() {
        assert_eq!(texts(&split("?!")), ["?", "!"]);
        assert!(split("   ").is_empty());
        assert_eq!(detokenize(&Vec::<Piece>::new()), "");
    }
}
