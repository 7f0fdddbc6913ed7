// Trie construction and failure links.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::matcher::{Term, WordlistAutomaton};
use crate::transition::{ROOT, StateRecord, Transition};

struct TrieNode {
    children: HashMap<char, u32>,
    /// Term ids ending here, failure chain merged in after `build`.
    outputs: Vec<u32>,
    fail: u32,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            outputs: Vec::new(),
            fail: ROOT,
        }
    }
}

/// Incremental builder for a [`WordlistAutomaton`].
///
/// Terms are added one at a time with a small tag (e.g. which word list they
/// came from); `build` computes failure links breadth-first and flattens the
/// trie into sorted transition tables.
pub struct AutomatonBuilder {
    nodes: Vec<TrieNode>,
    terms: Vec<Term>,
    index: HashMap<String, u32>,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            terms: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a term. Empty terms and terms already present are ignored and
    /// return `false`; the first tag given for a term wins.
    pub fn add(&mut self, term: &str, tag: u16) -> bool {
        if term.is_empty() || self.index.contains_key(term) {
            return false;
        }
        let id = self.terms.len() as u32;
        let mut state = ROOT;
        for c in term.chars() {
            state = match self.nodes[state as usize].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::new());
                    self.nodes[state as usize].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[state as usize].outputs.push(id);
        self.terms.push(Term {
            text: term.to_string(),
            tag,
            char_len: term.chars().count() as u32,
        });
        self.index.insert(term.to_string(), id);
        true
    }

    /// Number of distinct terms added so far.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute failure links and flatten into an immutable automaton.
    pub fn build(mut self) -> WordlistAutomaton {
        self.link_failures();

        let mut states = Vec::with_capacity(self.nodes.len());
        let mut transitions = Vec::new();
        let mut outputs = Vec::new();

        for node in &self.nodes {
            let first_transition = transitions.len() as u32;
            let mut edges: Vec<Transition> = node
                .children
                .iter()
                .map(|(&c, &target)| Transition {
                    symbol: c as u32,
                    target,
                })
                .collect();
            edges.sort_unstable_by_key(|t| t.symbol);
            let transition_count = edges.len() as u32;
            transitions.extend(edges);

            let first_output = outputs.len() as u32;
            outputs.extend_from_slice(&node.outputs);

            states.push(StateRecord {
                first_transition,
                transition_count,
                fail: node.fail,
                first_output,
                output_count: node.outputs.len() as u32,
                _reserved: 0,
            });
        }

        WordlistAutomaton::from_parts(states, transitions, outputs, self.terms)
    }

    // Breadth-first, so a node's failure target (always shallower) already
    // carries its merged outputs when the node is visited.
    fn link_failures(&mut self) {
        let mut queue: VecDeque<u32> = self.nodes[ROOT as usize].children.values().copied().collect();

        while let Some(state) = queue.pop_front() {
            let children: Vec<(char, u32)> = self.nodes[state as usize]
                .children
                .iter()
                .map(|(&c, &s)| (c, s))
                .collect();

            for (c, child) in children {
                queue.push_back(child);

                let mut f = self.nodes[state as usize].fail;
                let target = loop {
                    if let Some(&next) = self.nodes[f as usize].children.get(&c) {
                        break next;
                    }
                    if f == ROOT {
                        break ROOT;
                    }
                    f = self.nodes[f as usize].fail;
                };

                self.nodes[child as usize].fail = target;
                let inherited = self.nodes[target as usize].outputs.clone();
                self.nodes[child as usize].outputs.extend(inherited);
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AutomatonBuilder {
    /// Collect untagged terms (tag 0).
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = AutomatonBuilder::new();
        for term in iter {
            builder.add(term.as_ref(), 0);
        }
        builder
    }
}
