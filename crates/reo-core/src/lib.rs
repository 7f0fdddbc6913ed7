//! Shared types for the reo workspace.
//!
//! - [`character`] -- the Māori alphabet, digraph symbols and character classes
//! - [`token`] -- phoneme tokens produced by the tokenizer
//! - [`error`] -- the error type shared by every crate

pub mod character;
pub mod error;
pub mod token;

pub use error::ReoError;
