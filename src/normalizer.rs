// 🧹 Text Normalizer
// Cleans review text before scoring
//
// Lowercase, drop every character outside the word/whitespace classes,
// collapse whitespace runs and trim. Punctuation is stripped blindly.

use regex::Regex;

use crate::error::NormalizeError;

// ============================================================================
// NORMALIZER TRAIT
// ============================================================================

/// Capability to clean review text before it reaches the scorer.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> Result<String, NormalizeError>;

    /// Normalize, handing back the input unchanged when cleaning fails
    fn normalize_or_passthrough(&self, text: &str) -> String {
        self.normalize(text).unwrap_or_else(|e| {
            tracing::error!("{}", e);
            text.to_string()
        })
    }
}

// ============================================================================
// REGEX NORMALIZER
// ============================================================================

/// Regex-based normalizer
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    non_word_regex: Regex,
    whitespace_regex: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self, NormalizeError> {
        Ok(Self {
            non_word_regex: Regex::new(r"[^\w\s]").map_err(|e| NormalizeError(e.to_string()))?,
            whitespace_regex: Regex::new(r"\s+").map_err(|e| NormalizeError(e.to_string()))?,
        })
    }
}

impl Normalizer for TextNormalizer {
    fn normalize(&self, text: &str) -> Result<String, NormalizeError> {
        let lowered = text.to_lowercase();
        let stripped = self.non_word_regex.replace_all(&lowered, "");
        let collapsed = self.whitespace_regex.replace_all(stripped.trim(), " ");
        Ok(collapsed.into_owned())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    struct Broken;

    impl Normalizer for Broken {
        fn normalize(&self, _text: &str) -> Result<String, NormalizeError> {
            Err(NormalizeError("boom".to_string()))
        }
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let n = normalizer();
        assert_eq!(n.normalize("Wow... Loved this place.").unwrap(), "wow loved this place");
        assert_eq!(n.normalize("Crust is NOT good!!!").unwrap(), "crust is not good");
    }

    #[test]
    fn test_apostrophes_are_removed() {
        let n = normalizer();
        assert_eq!(n.normalize("Didn't like it").unwrap(), "didnt like it");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        let n = normalizer();
        assert_eq!(n.normalize("  too \t many\n\nspaces  ").unwrap(), "too many spaces");
    }

    #[test]
    fn test_punctuation_between_spaces_leaves_single_space() {
        let n = normalizer();
        assert_eq!(n.normalize("good - cheap").unwrap(), "good cheap");
    }

    #[test]
    fn test_keeps_digits_underscores_and_unicode_letters() {
        let n = normalizer();
        assert_eq!(n.normalize("Café_2 Ünique!").unwrap(), "café_2 ünique");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let n = normalizer();
        assert_eq!(n.normalize("").unwrap(), "");
        assert_eq!(n.normalize("?!...").unwrap(), "");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let samples = [
            "Wow... Loved this place.",
            "  The selection on the menu was great and so were the prices. ",
            "Honeslty it didn't taste THAT fresh.)",
            "A+++ — 10/10 would eat again 🍕",
            "",
        ];
        for s in samples {
            let once = n.normalize(s).unwrap();
            let twice = n.normalize(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_failure_passes_text_through() {
        let text = "Some Text, Untouched!";
        assert_eq!(Broken.normalize_or_passthrough(text), text);
    }

    #[test]
    fn test_success_does_not_pass_through() {
        assert_eq!(normalizer().normalize_or_passthrough("Hi!"), "hi");
    }
}
