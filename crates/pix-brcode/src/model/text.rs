//! Free-text sanitization for name and city fields.
//!
//! The payload alphabet is restricted to `A-Z`, `0-9` and space.

use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Text restricted to upper-case ASCII letters, digits and spaces.
///
/// Never has leading or trailing spaces. Only constructed by
/// [`sanitize_text`], so a second sanitization pass is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SanitizedText(String);

impl SanitizedText {
    /// Returns the sanitized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in characters (equal to bytes, the text is ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing survived sanitization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes human-entered text into the payload alphabet.
///
/// ```text
/// NFD -> drop combining marks -> keep [A-Za-z0-9 ] -> upper-case
///     -> trim -> cut to max_len chars -> trim end
/// ```
///
/// The cut is a hard character cut and may land mid-word. Spaces exposed at
/// the end by the cut are trimmed so the result is stable under a second pass.
/// Inner runs of spaces are kept as-is.
pub fn sanitize_text(input: &str, max_len: usize) -> SanitizedText {
    let cleaned: String = input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let truncated: String = cleaned.trim().chars().take(max_len).collect();
    SanitizedText(truncated.trim_end().to_string())
}

/// Sanitizes a payload text field, substituting `default` for blank input.
///
/// Only blank input (empty or whitespace) is replaced. Input that is present
/// but sanitizes to nothing, e.g. only punctuation, yields empty text.
pub fn sanitize_field(input: &str, max_len: usize, default: &str) -> SanitizedText {
    if !input.trim().is_empty() {
        return sanitize_text(input, max_len);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(default, "blank text field, using default");

    sanitize_text(default, max_len)
}
