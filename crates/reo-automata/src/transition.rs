// Flat state and transition records.
//
// Both records are plain `u32` fields so a whole table can be reinterpreted
// as bytes for the compiled image.

use bytemuck::{Pod, Zeroable};

/// Index of the root state.
pub const ROOT: u32 = 0;

/// One goto edge (8 bytes).
///
/// The edges of a state are stored contiguously and sorted by `symbol`, so
/// lookup is a binary search over that state's slice.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Transition {
    /// Input character as a Unicode scalar value.
    pub symbol: u32,
    /// Target state index.
    pub target: u32,
}

/// One automaton state (24 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct StateRecord {
    /// Index of the first edge in the transition table.
    pub first_transition: u32,
    /// Number of edges leaving this state.
    pub transition_count: u32,
    /// Failure link.
    pub fail: u32,
    /// Index of the first term id in the output table.
    pub first_output: u32,
    /// Number of terms ending in this state, failure chain included.
    pub output_count: u32,
    pub _reserved: u32,
}

impl StateRecord {
    /// Range of this state's edges in the transition table.
    #[inline]
    pub fn transition_range(&self) -> std::ops::Range<usize> {
        let start = self.first_transition as usize;
        start..start + self.transition_count as usize
    }

    /// Range of this state's term ids in the output table.
    #[inline]
    pub fn output_range(&self) -> std::ops::Range<usize> {
        let start = self.first_output as usize;
        start..start + self.output_count as usize
    }
}

/// Find the goto target of `state` on `symbol`, if it has one.
#[inline]
pub fn find_transition(transitions: &[Transition], state: &StateRecord, symbol: char) -> Option<u32> {
    let edges = &transitions[state.transition_range()];
    edges
        .binary_search_by_key(&(symbol as u32), |t| t.symbol)
        .ok()
        .map(|i| edges[i].target)
}
