// 📊 Aggregator
// Category tally, score series and the per-review result table for one run

use serde::Serialize;

use crate::classifier::Sentiment;

// ============================================================================
// SCORED RECORD
// ============================================================================

/// One exported row: header is `review,sentiment,polarity`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    #[serde(rename = "review")]
    pub text: String,

    #[serde(rename = "sentiment")]
    pub sentiment: Sentiment,

    #[serde(rename = "polarity")]
    pub polarity: f64,
}

impl ScoredReview {
    pub fn new(text: impl Into<String>, sentiment: Sentiment, polarity: f64) -> Self {
        ScoredReview {
            text: text.into(),
            sentiment,
            polarity,
        }
    }
}

// ============================================================================
// SUMMARY TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub sentiment: Sentiment,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    /// Always in `Sentiment::ALL` order
    pub categories: Vec<CategoryShare>,
}

impl Summary {
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.categories[sentiment.index()].count
    }

    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        self.categories[sentiment.index()].percentage
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "Sentiment Analysis Summary:".to_string(),
            format!("Total Reviews: {}", self.total),
        ];
        for share in &self.categories {
            lines.push(format!(
                "{}: {} reviews ({:.1}%)",
                share.sentiment, share.count, share.percentage
            ));
        }
        lines
    }
}

/// Population statistics over the score series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

impl PolarityStats {
    /// `None` for an empty series
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Some(PolarityStats {
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            String::new(),
            "Polarity Statistics:".to_string(),
            format!("Average Polarity: {:.3}", self.mean),
            format!("Min Polarity: {:.3}", self.min),
            format!("Max Polarity: {:.3}", self.max),
            format!("Std Dev: {:.3}", self.std_dev),
        ]
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

#[derive(Debug, Default)]
pub struct ReviewAggregator {
    counts: [usize; 3],
    scores: Vec<f64>,
    records: Vec<ScoredReview>,
    greetings: usize,
    skipped: usize,
}

impl ReviewAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the record, append its score, keep the row for export
    pub fn record(&mut self, review: ScoredReview) {
        self.counts[review.sentiment.index()] += 1;
        self.scores.push(review.polarity);
        self.records.push(review);
    }

    /// Greeting short-circuits are counted apart from the tally
    pub fn record_greeting(&mut self) {
        self.greetings += 1;
    }

    /// Rows that could not be processed at all
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn records(&self) -> &[ScoredReview] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ScoredReview> {
        self.records
    }

    pub fn greetings(&self) -> usize {
        self.greetings
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn summarize(&self) -> Summary {
        let total = self.total();
        let categories = Sentiment::ALL
            .iter()
            .map(|&sentiment| {
                let count = self.counts[sentiment.index()];
                let percentage = if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                CategoryShare {
                    sentiment,
                    count,
                    percentage,
                }
            })
            .collect();

        Summary { total, categories }
    }

    pub fn statistics(&self) -> Option<PolarityStats> {
        PolarityStats::from_scores(&self.scores)
    }
}

// ============================================================================
// TESTS
// ============================================================================
