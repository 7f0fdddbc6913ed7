// Orthography classifier.
//
// Input is NFC-normalised and trimmed, then split into words with an
// explicit worklist (whitespace, then hyphens, then camelCase boundaries).
// Every word must pass the per-word rules in `rules`.

pub mod cache;
pub mod camel;
pub mod rules;

use reo_automata::WordlistAutomaton;
use unicode_normalization::UnicodeNormalization;

pub use cache::ClassifierCache;
pub use rules::Failure;

/// Options for a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Judge by phonotactic rules alone. When `false`, words that also
    /// appear in the ambiguous or non-Māori word lists are rejected, which
    /// accepts fewer texts.
    pub strict: bool,
    /// Collect a rule trace. Never changes the verdict.
    pub verbose: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            strict: true,
            verbose: false,
        }
    }
}

/// Verdict plus, in verbose mode, the trace that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub valid: bool,
    pub trace: Vec<String>,
}

struct Tracer {
    enabled: bool,
    lines: Vec<String>,
}

impl Tracer {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            lines: Vec::new(),
        }
    }

    fn note(&mut self, line: impl FnOnce() -> String) {
        if self.enabled {
            let line = line();
            log::debug!("{line}");
            self.lines.push(line);
        }
    }

    fn fail(&mut self, item: &str, failure: &Failure) {
        self.note(|| {
            if item.is_empty() {
                failure.to_string()
            } else {
                format!("{item}: {failure}")
            }
        });
    }
}

/// Decides whether text is well-formed Māori orthography.
///
/// Borrows the word lists; it is `Copy` and cheap to build per call.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    wordlists: &'a WordlistAutomaton,
}

impl<'a> Classifier<'a> {
    pub fn new(wordlists: &'a WordlistAutomaton) -> Self {
        Self { wordlists }
    }

    /// The verdict alone, without collecting a trace.
    pub fn is_valid(&self, text: &str, strict: bool) -> bool {
        self.run(text, strict, &mut Tracer::new(false))
    }

    pub fn classify(&self, text: &str, options: ClassifyOptions) -> Classification {
        let mut tracer = Tracer::new(options.verbose);
        let valid = self.run(text, options.strict, &mut tracer);
        Classification {
            valid,
            trace: tracer.lines,
        }
    }

    fn run(&self, text: &str, strict: bool, tracer: &mut Tracer) -> bool {
        let text: String = text.nfc().collect();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracer.fail("", &Failure::Empty);
            return false;
        }

        // reversed so pieces are checked left to right
        let mut pending: Vec<String> = trimmed.split_whitespace().rev().map(str::to_string).collect();

        while let Some(item) = pending.pop() {
            if item.contains('-') {
                let pieces: Vec<&str> = item.split('-').collect();
                if pieces.iter().any(|p| p.is_empty()) {
                    tracer.fail(&item, &Failure::EmptyPiece);
                    return false;
                }
                pending.extend(pieces.into_iter().rev().map(str::to_string));
                continue;
            }

            let chars: Vec<char> = item.chars().collect();
            if camel::is_camel_case(&chars) {
                let parts = camel::split_camel_case(&chars);
                tracer.note(|| format!("{item}: camelCase, checking {}", parts.join(", ")));
                pending.extend(parts.into_iter().rev());
                continue;
            }

            if let Err(failure) = rules::check_word(&item, strict, self.wordlists) {
                tracer.fail(&item, &failure);
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::TermList;
    use reo_automata::AutomatonBuilder;

    const PLACE_NAME: &str =
        "Taumatawhakatangihangakoauauotamateaturipukakapikimaungahoronukupokaiwhenuakitanatahu";

    fn lists() -> WordlistAutomaton {
        let mut b = AutomatonBuilder::new();
        b.add("ŋa", TermList::Ambiguous.tag());
        b.add("here", TermList::Foreign.tag());
        b.build()
    }

    #[test]
    fn long_place_name_is_valid() {
        assert_eq!(PLACE_NAME.chars().count(), 85);
        let l = lists();
        assert!(Classifier::new(&l).is_valid(PLACE_NAME, true));
    }

    #[test]
    fn literal_cases() {
        let l = lists();
        let c = Classifier::new(&l);
        assert!(!c.is_valid("James Cook", true));
        assert!(!c.is_valid("teee", true));
        assert!(c.is_valid("KeiTePai", true));
        assert!(c.is_valid("Tēnā koe", true));
        assert!(c.is_valid("Kia ora, e hoa!", true));
    }

    #[test]
    fn empty_and_blank_are_invalid() {
        let l = lists();
        let c = Classifier::new(&l);
        assert!(!c.is_valid("", true));
        assert!(!c.is_valid("  \t\n", true));
    }

    #[test]
    fn hyphen_pieces() {
        let l = lists();
        let c = Classifier::new(&l);
        assert!(c.is_valid("kei-te-pai", true));
        assert!(!c.is_valid("kei--te", true));
        assert!(!c.is_valid("-kei", true));
        assert!(!c.is_valid("kei-tom", true));
    }

    #[test]
    fn strict_accepts_more_than_lenient() {
        let l = lists();
        let c = Classifier::new(&l);
        assert!(c.is_valid("here", true));
        assert!(!c.is_valid("here", false));
        assert!(c.is_valid("Ngā", true));
        assert!(!c.is_valid("nga", false));
    }

    #[test]
    fn combining_macron_normalised() {
        let l = lists();
        let c = Classifier::new(&l);
        // "tēnā" with U+0304 combining macrons
        assert!(c.is_valid("te\u{0304}na\u{0304}", true));
    }

    #[test]
    fn verbose_trace_does_not_change_verdict() {
        let l = lists();
        let c = Classifier::new(&l);
        for text in ["James Cook", "KeiTePai", "teee", "kia ora", "kei--te", ""] {
            let quiet = c.classify(text, ClassifyOptions::default());
            let loud = c.classify(
                text,
                ClassifyOptions {
                    verbose: true,
                    ..Default::default()
                },
            );
            assert_eq!(quiet.valid, loud.valid, "{text}");
            assert!(quiet.trace.is_empty());
        }
    }

    #[test]
    fn trace_names_the_failing_word() {
        let l = lists();
        let c = Classifier::new(&l);
        let result = c.classify(
            "kia ora James",
            ClassifyOptions {
                strict: true,
                verbose: true,
            },
        );
        assert!(!result.valid);
        assert_eq!(
            result.trace.last().map(String::as_str),
            Some("James: contains letters outside the alphabet: j, s")
        );

        let camel = c.classify(
            "KeiTePai",
            ClassifyOptions {
                strict: true,
                verbose: true,
            },
        );
        assert_eq!(camel.trace, ["KeiTePai: camelCase, checking kei, te, pai"]);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let l = lists();
        let c = Classifier::new(&l);
        let text = vec!["ka"; 50_000].join("-");
        assert!(c.is_valid(&text, true));
    }
}
