// 🏷️ Sentiment Classifier
// Greeting short-circuit, then normalize → score → threshold into three buckets

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::ScoringError;
use crate::normalizer::{Normalizer, TextNormalizer};
use crate::scoring::{LexiconScorer, PolarityScorer};

/// Reply given instead of a prediction when a greeting is recognised
pub const ASSIST_RESPONSE: &str = "Hello! How can I assist you?";

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Fixed reporting order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Position in [`Sentiment::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Strict bounds: a score must exceed `positive` or fall below `negative`
/// to leave the Neutral band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl Thresholds {
    pub fn categorize(&self, score: f64) -> Sentiment {
        if score > self.positive {
            Sentiment::Positive
        } else if score < self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

#[derive(Debug)]
pub struct Verdict {
    pub sentiment: Sentiment,
    pub polarity: f64,
    /// Set when the scorer failed and the neutral default was substituted
    pub scoring_error: Option<ScoringError>,
}

impl Verdict {
    pub fn is_fallback(&self) -> bool {
        self.scoring_error.is_some()
    }
}

#[derive(Debug)]
pub enum Classification {
    /// Whole text matched a greeting; nothing was scored
    Greeting,
    Scored(Verdict),
}

// ============================================================================
// CLASSIFIER
// ============================================================================

pub struct Classifier<S = LexiconScorer, N = TextNormalizer> {
    scorer: S,
    normalizer: N,
    thresholds: Thresholds,
    greetings: HashSet<String>,
}

impl<S: PolarityScorer, N: Normalizer> Classifier<S, N> {
    pub fn new(scorer: S, normalizer: N) -> Self {
        Classifier {
            scorer,
            normalizer,
            thresholds: Thresholds::default(),
            greetings: crate::config::DEFAULT_GREETINGS
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_greetings<I, T>(mut self, greetings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        // stored lowercased so the match in `is_greeting` is case-insensitive
        self.greetings = greetings
            .into_iter()
            .map(|g| g.into().to_lowercase())
            .collect();
        self
    }

    /// Exact whole-text match after lowercasing; no trimming, no substring search
    pub fn is_greeting(&self, raw_text: &str) -> bool {
        self.greetings.contains(&raw_text.to_lowercase())
    }

    /// Normalize then score, surfacing scorer failures
    pub fn polarity(&self, raw_text: &str) -> Result<f64, ScoringError> {
        let cleaned = self.normalizer.normalize_or_passthrough(raw_text);
        self.scorer.score(&cleaned)
    }

    /// Classify one review. Scorer failures become `(Neutral, 0.0)`.
    pub fn classify(&self, raw_text: &str) -> Classification {
        if self.is_greeting(raw_text) {
            return Classification::Greeting;
        }

        let verdict = match self.polarity(raw_text) {
            Ok(polarity) => Verdict {
                sentiment: self.thresholds.categorize(polarity),
                polarity,
                scoring_error: None,
            },
            Err(e) => Verdict {
                sentiment: Sentiment::Neutral,
                polarity: 0.0,
                scoring_error: Some(e),
            },
        };

        Classification::Scored(verdict)
    }
}

impl Classifier {
    /// Built-in lexicon scorer with the regex normalizer
    pub fn with_defaults() -> Result<Self, crate::error::NormalizeError> {
        Ok(Classifier::new(LexiconScorer::default(), TextNormalizer::new()?))
    }
}

// ============================================================================
// TESTS
// ============================================================================
