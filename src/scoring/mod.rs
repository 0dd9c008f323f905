// 🎯 Polarity Scoring
// The scorer seam: the pipeline sees only `PolarityScorer`, the lexicon sits behind it

pub mod lexicon;

pub use lexicon::{Lexicon, LexiconScorer};

use crate::error::ScoringError;

// ============================================================================
// SCORER TRAIT
// ============================================================================

/// Capability: turn text into a polarity in `[-1.0, 1.0]`
pub trait PolarityScorer {
    fn score(&self, text: &str) -> Result<f64, ScoringError>;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score(&self, text: &str) -> Result<f64, ScoringError> {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn score(&self, text: &str) -> Result<f64, ScoringError> {
        (**self).score(text)
    }
}
