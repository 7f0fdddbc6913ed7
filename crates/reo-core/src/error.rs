// Error type shared across the workspace

/// Errors raised by the encoders, the classifier and resource loading.
///
/// A text failing classification is not an error; it is an ordinary
/// `false` verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReoError {
    /// An unknown encoding scheme name was requested.
    #[error("unknown scheme `{name}` (valid schemes: {valid})")]
    InvalidScheme { name: String, valid: String },

    /// A grapheme has no entry in a table or no composed form.
    #[error("no {scheme} mapping for grapheme `{grapheme}`")]
    UnmappableGrapheme { scheme: &'static str, grapheme: String },

    /// A word list, substitution table or compiled image failed to parse.
    #[error("malformed resource {resource} (line {line}): {reason}")]
    MalformedResource {
        resource: String,
        line: usize,
        reason: String,
    },
}

impl ReoError {
    /// Shorthand for a [`ReoError::MalformedResource`].
    pub fn malformed(resource: &str, line: usize, reason: impl Into<String>) -> Self {
        ReoError::MalformedResource {
            resource: resource.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scheme_lists_valid_names() {
        let err = ReoError::InvalidScheme {
            name: "morse".to_string(),
            valid: "identity, base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("morse"));
        assert!(msg.contains("identity, base"));
    }

    #[test]
    fn malformed_shorthand() {
        let err = ReoError::malformed("table_vowel", 3, "expected two fields");
        assert_eq!(
            err.to_string(),
            "malformed resource table_vowel (line 3): expected two fields"
        );
    }

    #[test]
    fn unmappable_message() {
        let err = ReoError::UnmappableGrapheme {
            scheme: "syllable",
            grapheme: "xa".to_string(),
        };
        assert_eq!(err.to_string(), "no syllable mapping for grapheme `xa`");
    }
}
