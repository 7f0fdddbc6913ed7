//! Multi-pattern wordlist automaton.
//!
//! A classic Aho–Corasick construction (trie, failure links, merged output
//! sets) over `char` symbols, flattened into a sorted transition table so a
//! built automaton is immutable and can be shared freely between threads.
//!
//! # Architecture
//!
//! - [`builder`] -- trie construction and failure-link computation
//! - [`transition`] -- flat state and transition records
//! - [`matcher`] -- the built automaton and its queries
//! - [`format`] -- binary image of a built automaton

pub mod builder;
pub mod format;
pub mod matcher;
pub mod transition;

pub use builder::AutomatonBuilder;
pub use matcher::{Match, Matches, Term, WordlistAutomaton};

use reo_core::ReoError;

/// Error type for decoding a compiled automaton image.
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    #[error("invalid magic number in automaton header")]
    InvalidMagic,
    #[error("unsupported automaton format version {0}")]
    UnsupportedVersion(u32),
    #[error("image too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("corrupt automaton image: {0}")]
    Corrupt(String),
}

impl From<AutomatonError> for ReoError {
    fn from(err: AutomatonError) -> Self {
        ReoError::malformed("wordlist image", 0, err.to_string())
    }
}
