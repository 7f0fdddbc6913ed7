// Static resources: the two curated word lists and the two substitution
// tables, parsed once and handed to the classifier and encoders.

use reo_automata::{AutomatonBuilder, WordlistAutomaton};
use reo_core::ReoError;

use crate::normalizer;
use crate::schemes::SubstitutionTable;

/// File names of the resources, as found in a data directory.
pub const AMBIGUOUS_TERMS_FILE: &str = "ambiguous_terms.txt";
pub const NON_MAORI_TERMS_FILE: &str = "non_maori_terms.txt";
pub const TABLE_VOWEL_FILE: &str = "table_vowel.tsv";
pub const TABLE_SYLLABLE_FILE: &str = "table_syllable.tsv";

const AMBIGUOUS_TERMS: &str = include_str!("../data/ambiguous_terms.txt");
const NON_MAORI_TERMS: &str = include_str!("../data/non_maori_terms.txt");
const TABLE_VOWEL: &str = include_str!("../data/table_vowel.tsv");
const TABLE_SYLLABLE: &str = include_str!("../data/table_syllable.tsv");

/// Which curated list a term came from. Stored as the automaton term tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermList {
    /// Valid Māori that is too common in other languages to be evidence.
    Ambiguous,
    /// Foreign words that happen to satisfy the phonotactic rules.
    Foreign,
}

impl TermList {
    pub fn tag(self) -> u16 {
        match self {
            TermList::Ambiguous => 0,
            TermList::Foreign => 1,
        }
    }

    /// Unknown tags (from a foreign image) count as ambiguous.
    pub fn from_tag(tag: u16) -> Self {
        match tag {
            1 => TermList::Foreign,
            _ => TermList::Ambiguous,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TermList::Ambiguous => "ambiguous",
            TermList::Foreign => "non-Māori",
        }
    }
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse a word list: one term per line, `#` comments and blank lines
/// ignored.
pub fn parse_wordlist(resource: &str, text: &str) -> Result<Vec<String>, ReoError> {
    let mut terms = Vec::new();
    for (line_no, line) in content_lines(text) {
        if line.chars().any(char::is_whitespace) {
            return Err(ReoError::malformed(
                resource,
                line_no,
                "expected a single term per line",
            ));
        }
        terms.push(line.to_string());
    }
    Ok(terms)
}

/// Parse a substitution table: `grapheme<TAB>glyph` per line. Graphemes may
/// be written with `wh`/`ng`; they are folded on load.
pub fn parse_table(resource: &str, text: &str) -> Result<SubstitutionTable, ReoError> {
    let mut entries = Vec::new();
    let mut lines = Vec::new();
    for (line_no, line) in content_lines(text) {
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [grapheme, glyph] = fields[..] else {
            return Err(ReoError::malformed(
                resource,
                line_no,
                format!("expected `grapheme<TAB>glyph`, found {} field(s)", fields.len()),
            ));
        };
        let mut glyph_chars = glyph.chars();
        let (Some(glyph), None) = (glyph_chars.next(), glyph_chars.next()) else {
            return Err(ReoError::malformed(
                resource,
                line_no,
                format!("glyph `{glyph}` is not a single character"),
            ));
        };
        entries.push((normalizer::fold(grapheme), glyph));
        lines.push(line_no);
    }
    SubstitutionTable::with_lines(resource, entries, &lines)
}

/// Build the word-list automaton. Terms are lowercased and digraph-folded
/// so they match the classifier's view of a word; a term present in both
/// lists keeps its first (ambiguous) tag.
pub fn build_wordlists(ambiguous: &[String], foreign: &[String]) -> WordlistAutomaton {
    let mut builder = AutomatonBuilder::new();
    let lists = [(ambiguous, TermList::Ambiguous), (foreign, TermList::Foreign)];
    for (terms, list) in lists {
        for term in terms {
            builder.add(&normalizer::fold(&term.to_lowercase()), list.tag());
        }
    }
    log::debug!("built word-list automaton with {} terms", builder.len());
    builder.build()
}

/// Raw text of every resource, before parsing.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSources<'a> {
    pub ambiguous_terms: &'a str,
    pub non_maori_terms: &'a str,
    pub table_vowel: &'a str,
    pub table_syllable: &'a str,
}

impl ResourceSources<'static> {
    /// The resources compiled into this crate.
    pub fn embedded() -> Self {
        Self {
            ambiguous_terms: AMBIGUOUS_TERMS,
            non_maori_terms: NON_MAORI_TERMS,
            table_vowel: TABLE_VOWEL,
            table_syllable: TABLE_SYLLABLE,
        }
    }
}

/// Parsed, immutable resources shared by the classifier and the encoders.
#[derive(Debug)]
pub struct Resources {
    wordlists: WordlistAutomaton,
    table_vowel: SubstitutionTable,
    table_syllable: SubstitutionTable,
}

impl Resources {
    pub fn embedded() -> Result<Self, ReoError> {
        Self::from_sources(&ResourceSources::embedded())
    }

    pub fn from_sources(sources: &ResourceSources<'_>) -> Result<Self, ReoError> {
        let ambiguous = parse_wordlist(AMBIGUOUS_TERMS_FILE, sources.ambiguous_terms)?;
        let foreign = parse_wordlist(NON_MAORI_TERMS_FILE, sources.non_maori_terms)?;
        Ok(Self {
            wordlists: build_wordlists(&ambiguous, &foreign),
            table_vowel: parse_table(TABLE_VOWEL_FILE, sources.table_vowel)?,
            table_syllable: parse_table(TABLE_SYLLABLE_FILE, sources.table_syllable)?,
        })
    }

    pub fn from_parts(
        wordlists: WordlistAutomaton,
        table_vowel: SubstitutionTable,
        table_syllable: SubstitutionTable,
    ) -> Self {
        Self {
            wordlists,
            table_vowel,
            table_syllable,
        }
    }

    /// Replace the word lists, e.g. with a precompiled automaton image.
    pub fn with_wordlists(self, wordlists: WordlistAutomaton) -> Self {
        Self { wordlists, ..self }
    }

    pub fn wordlists(&self) -> &WordlistAutomaton {
        &self.wordlists
    }

    pub fn table_vowel(&self) -> &SubstitutionTable {
        &self.table_vowel
    }

    pub fn table_syllable(&self) -> &SubstitutionTable {
        &self.table_syllable
    }
}
