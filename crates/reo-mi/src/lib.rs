//! Te reo Māori text encoding schemes and orthography classifier.
//!
//! Everything hangs off a [`ReoHandle`], which owns the parsed word lists
//! and substitution tables. Encoders and classifiers are borrowed from the
//! handle per call.
//!
//! # Architecture
//!
//! - [`normalizer`] -- `wh`/`ng` digraph folding and its inverse
//! - [`tokenizer`] -- phoneme tokens over folded text
//! - [`schemes`] -- the named encode/decode schemes
//! - [`classifier`] -- rule-based orthography checks and the verdict cache
//! - [`resources`] -- word lists and substitution tables
//! - [`numbers`] -- spelling out numbers (feature `numbers`)
//! - [`handle`] -- the top-level handle
//!
//! ```
//! let handle = reo_mi::ReoHandle::embedded().unwrap();
//! assert_eq!(handle.encode("vowel_length", "Tēnā koe").unwrap(), "Teenaa koe");
//! assert!(handle.is_maori("Kia ora", true, false));
//! ```

pub mod classifier;
pub mod handle;
pub mod normalizer;
#[cfg(feature = "numbers")]
pub mod numbers;
pub mod resources;
pub mod schemes;
pub mod tokenizer;

use std::sync::OnceLock;

pub use classifier::{Classification, Classifier, ClassifyOptions};
pub use handle::ReoHandle;
pub use reo_core::ReoError;
pub use resources::Resources;
pub use schemes::{Encoder, Scheme, SchemeKind};

static DEFAULT_HANDLE: OnceLock<Result<ReoHandle, ReoError>> = OnceLock::new();

/// A process-wide handle over the embedded resources, built on first use.
pub fn default_handle() -> Result<&'static ReoHandle, ReoError> {
    DEFAULT_HANDLE
        .get_or_init(ReoHandle::embedded)
        .as_ref()
        .map_err(Clone::clone)
}

/// Whether `text` is valid Māori orthography, using [`default_handle`].
///
/// # Panics
///
/// Panics if the embedded resources fail to parse, which only happens when
/// the crate was built with corrupt data files.
pub fn is_maori(text: &str, strict: bool, verbose: bool) -> bool {
    match default_handle() {
        Ok(handle) => handle.is_maori(text, strict, verbose),
        Err(err) => panic!("embedded resources are malformed: {err}"),
    }
}
