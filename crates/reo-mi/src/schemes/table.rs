// Generic table-driven substitution.

use hashbrown::{HashMap, HashSet};
use reo_core::ReoError;

use super::Encoder;
use crate::normalizer;

/// An ordered grapheme → glyph table.
///
/// Entries are applied longest grapheme first regardless of the order they
/// were supplied in; equally long entries keep their relative order.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    name: String,
    entries: Vec<(String, char)>,
    inverse: HashMap<char, String>,
}

impl SubstitutionTable {
    /// Build a table, rejecting empty graphemes and duplicate graphemes or
    /// glyphs (either would make decoding ambiguous). Errors name the
    /// 1-based entry.
    pub fn new(name: &str, entries: Vec<(String, char)>) -> Result<Self, ReoError> {
        let lines: Vec<usize> = (1..=entries.len()).collect();
        Self::with_lines(name, entries, &lines)
    }

    /// Like [`SubstitutionTable::new`], with errors reported at `lines[i]`
    /// for entry `i`.
    pub(crate) fn with_lines(
        name: &str,
        mut entries: Vec<(String, char)>,
        lines: &[usize],
    ) -> Result<Self, ReoError> {
        let mut inverse = HashMap::with_capacity(entries.len());
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for (i, (grapheme, glyph)) in entries.iter().enumerate() {
                let line = lines.get(i).copied().unwrap_or(i + 1);
                if grapheme.is_empty() {
                    return Err(ReoError::malformed(name, line, "empty grapheme"));
                }
                if !seen.insert(grapheme.as_str()) {
                    return Err(ReoError::malformed(
                        name,
                        line,
                        format!("duplicate grapheme `{}`", normalizer::unfold(grapheme)),
                    ));
                }
                if inverse.insert(*glyph, grapheme.clone()).is_some() {
                    return Err(ReoError::malformed(
                        name,
                        line,
                        format!("duplicate glyph U+{:04X}", *glyph as u32),
                    ));
                }
            }
        }
        entries.sort_by_key(|(g, _)| std::cmp::Reverse(g.chars().count()));
        Ok(Self {
            name: name.to_string(),
            entries,
            inverse,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[(String, char)] {
        &self.entries
    }

    pub fn glyph(&self, grapheme: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(g, _)| g == grapheme)
            .map(|&(_, c)| c)
    }
}

impl Encoder for SubstitutionTable {
    fn encode(&self, text: &str) -> String {
        let mut text = normalizer::fold(text);
        let mut buf = [0u8; 4];
        for (grapheme, glyph) in &self.entries {
            if text.contains(grapheme.as_str()) {
                text = text.replace(grapheme.as_str(), glyph.encode_utf8(&mut buf));
            }
        }
        text
    }

    fn decode(&self, text: &str) -> String {
        let mut expanded = Vec::with_capacity(text.len());
        for c in text.chars() {
            match self.inverse.get(&c) {
                Some(grapheme) => expanded.extend(grapheme.chars()),
                None => expanded.push(c),
            }
        }
        let mut out = String::with_capacity(text.len());
        normalizer::unfold_into(&expanded, &mut out);
        out
    }
}
