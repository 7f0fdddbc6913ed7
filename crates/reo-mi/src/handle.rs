// ReoHandle: top-level integration point.
//
// Owns the parsed resources and an optional verdict cache. Classifiers and
// schemes borrow from the handle and are built on the fly in each call,
// which keeps the handle free of self-referential lifetimes.
//
// The cache sits behind a Mutex so a single handle can serve any number of
// threads; everything else in the handle is immutable after construction.

use std::sync::{Mutex, PoisonError};

use reo_core::ReoError;
use reo_core::token::Token;

use crate::classifier::{Classification, Classifier, ClassifierCache, ClassifyOptions};
use crate::normalizer;
use crate::resources::Resources;
use crate::schemes::{
    BaseScheme, DiphthongScheme, Encoder, Scheme, SchemeKind, SyllableScheme, VowelLengthScheme,
    VowelType,
};
use crate::tokenizer::tokenize;

/// Cache size parameter used by [`ReoHandle::new`] (1024 slots).
pub const DEFAULT_CACHE_SIZE: usize = 2;

/// Owns every resource the encoders and the classifier need.
pub struct ReoHandle {
    resources: Resources,
    cache: Option<Mutex<ClassifierCache>>,
}

impl std::fmt::Debug for ReoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReoHandle")
            .field("resources", &self.resources)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl ReoHandle {
    /// Create a handle with the default cache.
    pub fn new(resources: Resources) -> Self {
        Self {
            resources,
            cache: Some(Mutex::new(ClassifierCache::new(DEFAULT_CACHE_SIZE))),
        }
    }

    /// Create a handle from the resources compiled into the crate.
    pub fn embedded() -> Result<Self, ReoError> {
        Ok(Self::new(Resources::embedded()?))
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self.resources.wordlists())
    }

    /// Look up a scheme by name.
    pub fn scheme(&self, name: &str) -> Result<Scheme<'_>, ReoError> {
        Ok(self.scheme_of_kind(name.parse()?))
    }

    pub fn scheme_of_kind(&self, kind: SchemeKind) -> Scheme<'_> {
        match kind {
            SchemeKind::Identity => Scheme::Identity,
            SchemeKind::Base => Scheme::Base(BaseScheme),
            SchemeKind::VowelLength => Scheme::VowelLength(VowelLengthScheme),
            SchemeKind::Diphthong => Scheme::Diphthong(DiphthongScheme),
            SchemeKind::Syllable => Scheme::Syllable(self.syllable_scheme(VowelType::Long)),
            SchemeKind::TableVowel => Scheme::Table(kind, self.resources.table_vowel()),
            SchemeKind::TableSyllable => Scheme::Table(kind, self.resources.table_syllable()),
        }
    }

    /// The syllable scheme with an explicit vowel type.
    pub fn syllable_scheme(&self, vowel_type: VowelType) -> SyllableScheme<'_> {
        SyllableScheme::new(self.classifier(), vowel_type)
    }

    pub fn encode(&self, scheme: &str, text: &str) -> Result<String, ReoError> {
        Ok(self.scheme(scheme)?.encode(text))
    }

    pub fn decode(&self, scheme: &str, text: &str) -> Result<String, ReoError> {
        Ok(self.scheme(scheme)?.decode(text))
    }

    /// Whether `text` is valid Māori orthography.
    ///
    /// `strict` judges by phonotactics alone; `false` additionally rejects
    /// words found in the curated lists. `verbose` logs the rule trace at
    /// debug level and never changes the verdict.
    pub fn is_maori(&self, text: &str, strict: bool, verbose: bool) -> bool {
        if verbose {
            return self.classify(text, ClassifyOptions { strict, verbose }).valid;
        }
        let Some(cache) = &self.cache else {
            return self.classifier().is_valid(text, strict);
        };
        // the lock is held for the lookup and the store only, never while
        // classifying
        let cached = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .lookup(text, strict);
        if let Some(valid) = cached {
            return valid;
        }
        let valid = self.classifier().is_valid(text, strict);
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .store(text, strict, valid);
        valid
    }

    /// Classify with a full result. Never cached.
    pub fn classify(&self, text: &str, options: ClassifyOptions) -> Classification {
        self.classifier().classify(text, options)
    }

    /// Phoneme tokens of `text`, after digraph folding.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenize(&normalizer::fold(text)).collect()
    }

    /// Resize the verdict cache, or disable it with `None`. Existing entries
    /// are dropped.
    pub fn set_cache_size(&mut self, size_param: Option<usize>) {
        self.cache = size_param.map(|p| Mutex::new(ClassifierCache::new(p)));
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }
}
