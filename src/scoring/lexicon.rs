// 📖 Restaurant Lexicon
// Word-polarity scorer tuned for restaurant reviews
//
// Every lexicon word found contributes its polarity. An intensifier directly
// before a sentiment word scales it; a negator within the negation window
// flips it and halves it. The score is the mean contribution, clamped to
// [-1.0, 1.0], and 0.0 when no lexicon word occurs.

use std::collections::{HashMap, HashSet};

use super::PolarityScorer;
use crate::error::ScoringError;

// ============================================================================
// WORD TABLES
// ============================================================================

/// Negated polarity is multiplied by this factor
const NEGATION_FACTOR: f64 = -0.5;

const POLARITY: &[(&str, f64)] = &[
    // Strong positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("delicious", 1.0),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("incredible", 0.9),
    ("outstanding", 0.5),
    ("perfect", 1.0),
    ("perfection", 1.0),
    ("phenomenal", 1.0),
    ("superb", 1.0),
    ("wonderful", 1.0),
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("favorite", 0.5),
    ("impressed", 1.0),
    ("impressive", 1.0),
    // Moderate positive
    ("attentive", 0.5),
    ("beautiful", 0.85),
    ("cheap", 0.4),
    ("clean", 0.37),
    ("cozy", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.375),
    ("fun", 0.3),
    ("generous", 0.4),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("hot", 0.25),
    ("like", 0.2),
    ("liked", 0.6),
    ("nice", 0.6),
    ("pleasant", 0.73),
    ("polite", 0.3),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("reasonable", 0.2),
    ("satisfied", 0.5),
    ("sweet", 0.35),
    ("tasty", 0.5),
    ("tender", 0.5),
    ("warm", 0.6),
    ("welcoming", 0.5),
    ("worth", 0.3),
    ("yummy", 0.8),
    // Moderate negative
    ("average", -0.15),
    ("bland", -0.5),
    ("cold", -0.6),
    ("dirty", -0.6),
    ("dry", -0.07),
    ("expensive", -0.5),
    ("hard", -0.3),
    ("late", -0.3),
    ("mediocre", -0.5),
    ("overpriced", -0.5),
    ("poor", -0.4),
    ("rude", -0.3),
    ("salty", -0.3),
    ("slow", -0.3),
    ("small", -0.25),
    ("soggy", -0.5),
    ("stale", -0.5),
    ("tasteless", -0.5),
    ("unfortunately", -0.5),
    ("wait", -0.2),
    ("waited", -0.2),
    ("wrong", -0.5),
    // Strong negative
    ("awful", -1.0),
    ("bad", -0.7),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("gross", -0.8),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("inedible", -0.8),
    ("nasty", -1.0),
    ("sick", -0.71),
    ("terrible", -1.0),
    ("unacceptable", -0.8),
    ("worse", -0.4),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("super", 1.4),
    ("totally", 1.3),
    ("very", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
    ("barely", 0.5),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "hardly", "dont", "didnt", "doesnt",
    "isnt", "wasnt", "werent", "arent", "cant", "cannot", "couldnt", "wont", "wouldnt",
    "shouldnt", "havent", "hasnt", "hadnt",
];

// ============================================================================
// LEXICON
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl Lexicon {
    /// Built-in restaurant review lexicon
    pub fn restaurant() -> Self {
        let mut lexicon = Lexicon::default();
        for (word, score) in POLARITY {
            lexicon.add_word(word, *score);
        }
        for (word, factor) in INTENSIFIERS {
            lexicon.intensifiers.insert(word.to_string(), *factor);
        }
        lexicon.negators = NEGATORS.iter().map(|w| w.to_string()).collect();
        lexicon
    }

    /// Lexicon holding only the given polarity words, no modifiers
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut lexicon = Lexicon::default();
        for (word, score) in entries {
            lexicon.add_word(word, score);
        }
        lexicon
    }

    /// Add or replace a polarity word; score is clamped to `[-1, 1]`
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.polarity
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

// ============================================================================
// SCORER
// ============================================================================

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    /// How many tokens after a negator it still applies
    negation_window: usize,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: 3,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::restaurant())
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64, ScoringError> {
        if self.lexicon.is_empty() {
            return Err(ScoringError::EmptyLexicon);
        }

        let mut contributions = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negation_distance: Option<usize> = None;

        for token in text.split_whitespace() {
            let token = token.to_lowercase();

            if self.lexicon.is_negator(&token) {
                negation_distance = Some(0);
                modifier = None;
                continue;
            }

            if let Some(factor) = self.lexicon.intensifier(&token) {
                modifier = Some(factor);
                continue;
            }

            if let Some(base) = self.lexicon.polarity(&token) {
                let mut value = (base * modifier.unwrap_or(1.0)).clamp(-1.0, 1.0);
                if negation_distance.is_some_and(|d| d < self.negation_window) {
                    value *= NEGATION_FACTOR;
                    negation_distance = None;
                }
                contributions.push(value);
            }

            // Intensifiers only reach the very next token
            modifier = None;
            negation_distance = match negation_distance {
                Some(d) if d + 1 < self.negation_window => Some(d + 1),
                _ => None,
            };
        }

        if contributions.is_empty() {
            return Ok(0.0);
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        if !mean.is_finite() {
            return Err(ScoringError::NonFinite(text.to_string()));
        }
        Ok(mean.clamp(-1.0, 1.0))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_single_positive_word() {
        assert_close(scorer().score("i loved the food").unwrap(), 0.7);
    }

    #[test]
    fn test_single_negative_word() {
        assert_close(scorer().score("terrible service").unwrap(), -1.0);
    }

    #[test]
    fn test_no_lexicon_words_scores_zero() {
        assert_close(scorer().score("it was fine").unwrap(), 0.0);
        assert_close(scorer().score("").unwrap(), 0.0);
    }

    #[test]
    fn test_mean_of_contributions() {
        // good 0.7, bad -0.7
        assert_close(scorer().score("good food bad service").unwrap(), 0.0);
        // great 0.8, slow -0.3
        assert_close(scorer().score("great food slow service").unwrap(), 0.25);
    }

    #[test]
    fn test_intensifier_scales_next_word_and_clamps() {
        assert_close(scorer().score("very nice").unwrap(), 0.78);
        assert_close(scorer().score("extremely delicious").unwrap(), 1.0);
    }

    #[test]
    fn test_intensifier_does_not_skip_tokens() {
        assert_close(scorer().score("very much nice").unwrap(), 0.6);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        assert_close(scorer().score("crust is not good").unwrap(), -0.35);
        assert_close(scorer().score("not bad at all").unwrap(), 0.35);
    }

    #[test]
    fn test_negation_within_window() {
        // "never" reaches "good" two tokens later
        assert_close(scorer().score("never that good").unwrap(), -0.35);
    }

    #[test]
    fn test_negation_expires_outside_window() {
        let scorer = scorer().with_negation_window(1);
        assert_close(scorer.score("not that good").unwrap(), 0.7);
    }

    #[test]
    fn test_negation_applies_to_one_sentiment_word() {
        // not good -> -0.35, great -> 0.8
        assert_close(scorer().score("not good great").unwrap(), 0.225);
    }

    #[test]
    fn test_scorer_lowercases_tokens() {
        assert_close(scorer().score("Terrible").unwrap(), -1.0);
    }

    #[test]
    fn test_empty_lexicon_is_error() {
        let scorer = LexiconScorer::new(Lexicon::from_entries(Vec::new()));
        assert!(matches!(
            scorer.score("anything"),
            Err(ScoringError::EmptyLexicon)
        ));
    }

    #[test]
    fn test_custom_entries_clamped() {
        let lexicon = Lexicon::from_entries(vec![("Stellar", 3.0)]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.polarity("stellar"), Some(1.0));
    }

    #[test]
    fn test_builtin_lexicon_in_range() {
        let lexicon = Lexicon::restaurant();
        for (word, _) in POLARITY {
            let p = lexicon.polarity(word).unwrap();
            assert!((-1.0..=1.0).contains(&p), "{} out of range", word);
        }
        assert!(lexicon.is_negator("not"));
        assert!(lexicon.intensifier("very").is_some());
    }
}
