// Built automaton and its queries.

use std::str::Chars;

use crate::builder::AutomatonBuilder;
use crate::transition::{ROOT, StateRecord, Transition, find_transition};

/// A term stored in the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    /// Caller-defined tag, e.g. the word list the term came from.
    pub tag: u16,
    pub char_len: u32,
}

/// One occurrence of a term. Offsets are in characters, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub term: u32,
    pub start: usize,
    pub end: usize,
}

/// Immutable multi-pattern matcher over a set of terms.
///
/// Reports all occurrences, overlapping ones included, in a single left to
/// right pass. Holds no interior state and is safe to share across threads.
pub struct WordlistAutomaton {
    pub(crate) states: Vec<StateRecord>,
    pub(crate) transitions: Vec<Transition>,
    pub(crate) outputs: Vec<u32>,
    pub(crate) terms: Vec<Term>,
}

impl std::fmt::Debug for WordlistAutomaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordlistAutomaton")
            .field("states", &self.states.len())
            .field("transitions", &self.transitions.len())
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl Default for WordlistAutomaton {
    fn default() -> Self {
        AutomatonBuilder::new().build()
    }
}

impl WordlistAutomaton {
    pub(crate) fn from_parts(
        states: Vec<StateRecord>,
        transitions: Vec<Transition>,
        outputs: Vec<u32>,
        terms: Vec<Term>,
    ) -> Self {
        Self {
            states,
            transitions,
            outputs,
            terms,
        }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, id: u32) -> Option<&Term> {
        self.terms.get(id as usize)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Advance from `state` on `c`, following failure links as needed.
    #[inline]
    fn step(&self, mut state: u32, c: char) -> u32 {
        loop {
            let record = &self.states[state as usize];
            if let Some(next) = find_transition(&self.transitions, record, c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = record.fail;
        }
    }

    #[inline]
    fn outputs_of(&self, state: u32) -> &[u32] {
        &self.outputs[self.states[state as usize].output_range()]
    }

    /// Iterate over every occurrence of every term in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> Matches<'a> {
        Matches {
            automaton: self,
            chars: text.chars(),
            state: ROOT,
            pos: 0,
            pending: &[],
        }
    }

    /// Whether any term occurs anywhere in `text`.
    pub fn contains(&self, text: &str) -> bool {
        let mut state = ROOT;
        for c in text.chars() {
            state = self.step(state, c);
            if !self.outputs_of(state).is_empty() {
                return true;
            }
        }
        false
    }

    /// The term equal to the whole of `text`, if there is one.
    ///
    /// After consuming a text that is itself a term the automaton sits on that
    /// term's trie node, so a single pass suffices.
    pub fn is_term(&self, text: &str) -> Option<&Term> {
        let mut state = ROOT;
        let mut len = 0u32;
        for c in text.chars() {
            state = self.step(state, c);
            len += 1;
        }
        self.outputs_of(state)
            .iter()
            .map(|&id| &self.terms[id as usize])
            .find(|t| t.char_len == len)
    }
}

/// Iterator returned by [`WordlistAutomaton::find_iter`].
pub struct Matches<'a> {
    automaton: &'a WordlistAutomaton,
    chars: Chars<'a>,
    state: u32,
    pos: usize,
    pending: &'a [u32],
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some((&id, rest)) = self.pending.split_first() {
                self.pending = rest;
                let len = self.automaton.terms[id as usize].char_len as usize;
                return Some(Match {
                    term: id,
                    start: self.pos - len,
                    end: self.pos,
                });
            }
            let c = self.chars.next()?;
            self.state = self.automaton.step(self.state, c);
            self.pos += 1;
            self.pending = self.automaton.outputs_of(self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automaton(terms: &[(&str, u16)]) -> WordlistAutomaton {
        let mut b = AutomatonBuilder::new();
        for &(t, tag) in terms {
            b.add(t, tag);
        }
        b.build()
    }

    #[test]
    fn finds_overlapping_matches() {
        let a = automaton(&[("he", 0), ("she", 0), ("his", 0), ("hers", 0)]);
        let mut spans: Vec<(usize, usize, String)> = a
            .find_iter("ushers")
            .map(|m| (m.start, m.end, a.term(m.term).map(|t| t.text.clone()).unwrap_or_default()))
            .collect();
        spans.sort();
        assert_eq!(
            spans,
            vec![
                (1, 4, "she".to_string()),
                (2, 4, "he".to_string()),
                (2, 6, "hers".to_string()),
            ]
        );
    }

    #[test]
    fn offsets_are_in_chars() {
        let a = automaton(&[("whā", 0)]);
        let m: Vec<Match> = a.find_iter("tō whā").collect();
        assert_eq!(m.len(), 1);
        assert_eq!((m[0].start, m[0].end), (3, 6));
    }

    #[test]
    fn contains_any() {
        let a = automaton(&[("tongue", 1)]);
        assert!(a.contains("mytongue"));
        assert!(!a.contains("tonga"));
        assert!(!a.contains(""));
    }

    #[test]
    fn is_term_requires_full_span() {
        let a = automaton(&[("he", 1), ("here", 2), ("one", 2)]);
        assert_eq!(a.is_term("he").map(|t| t.tag), Some(1));
        assert_eq!(a.is_term("here").map(|t| t.tag), Some(2));
        // contains "he" and "one" but is neither
        assert!(a.is_term("hone").is_none());
        assert!(a.is_term("her").is_none());
        assert!(a.is_term("").is_none());
    }

    #[test]
    fn is_term_after_failure_transitions() {
        // Reaching "ab" requires failing out of the "aa" branch.
        let a = automaton(&[("aab", 0), ("ab", 1)]);
        assert_eq!(a.is_term("ab").map(|t| t.tag), Some(1));
        assert!(a.is_term("aab").is_some());
        assert!(a.is_term("aaab").is_none());
    }

    #[test]
    fn default_is_empty() {
        let a = WordlistAutomaton::default();
        assert_eq!(a.term_count(), 0);
        assert_eq!(a.find_iter("kia ora").count(), 0);
    }
}
