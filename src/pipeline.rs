// 🍽️ Review Pipeline
// Loader → Normalizer → Classifier → Aggregator/Reporter, one pass, input order

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::aggregator::{PolarityStats, ReviewAggregator, ScoredReview, Summary};
use crate::chart::PieChart;
use crate::classifier::{Classification, Classifier, ASSIST_RESPONSE};
use crate::config::PipelineConfig;
use crate::error::{NormalizeError, PipelineError};
use crate::export::export_results;
use crate::loader::ReviewLoader;
use crate::normalizer::{Normalizer, TextNormalizer};
use crate::reporter::Reporter;
use crate::scoring::{LexiconScorer, PolarityScorer};

pub const PERSONA: &str = "Restaurant Owner";

/// Characters of review text kept in the per-review log line
const LOG_PREVIEW_CHARS: usize = 50;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: Summary,
    pub statistics: Option<PolarityStats>,
    pub records: Vec<ScoredReview>,
    pub greetings: usize,
    pub skipped: usize,
    /// `None` when the export failed
    pub results_path: Option<PathBuf>,
    /// `None` when rendering failed
    pub chart_path: Option<PathBuf>,
}

pub struct SentimentPipeline<S = LexiconScorer, N = TextNormalizer> {
    config: PipelineConfig,
    loader: ReviewLoader,
    classifier: Classifier<S, N>,
    chart: PieChart,
}

impl SentimentPipeline {
    /// Built-in lexicon scorer and regex normalizer
    pub fn with_defaults(config: PipelineConfig) -> Result<Self, NormalizeError> {
        Ok(SentimentPipeline::new(
            config,
            LexiconScorer::default(),
            TextNormalizer::new()?,
        ))
    }
}

impl<S: PolarityScorer, N: Normalizer> SentimentPipeline<S, N> {
    pub fn new(config: PipelineConfig, scorer: S, normalizer: N) -> Self {
        let loader = ReviewLoader::new(config.text_column.clone(), config.delimiter);
        let classifier = Classifier::new(scorer, normalizer)
            .with_thresholds(config.thresholds)
            .with_greetings(config.greetings.iter().cloned());

        SentimentPipeline {
            config,
            loader,
            classifier,
            chart: PieChart::default(),
        }
    }

    /// Run the whole pipeline.
    ///
    /// Only configuration and load failures are returned as errors; per-review
    /// and artifact failures are reported and the run carries on.
    pub fn run(&self, reporter: &dyn Reporter) -> Result<RunReport, PipelineError> {
        self.config.validate()?;

        reporter.info(&format!("{}: Hi! I am {}. How can I help you?", PERSONA, PERSONA));

        let reviews = self.loader.load(&self.config.data_path)?;
        reporter.detail(&format!(
            "Loaded {} reviews from {}",
            reviews.len(),
            self.config.data_path.display()
        ));
        if reviews.is_empty() {
            reporter.warn(&format!(
                "No reviews found in {}",
                self.config.data_path.display()
            ));
        }

        let mut aggregator = ReviewAggregator::new();
        let progress = self.progress_bar(reviews.len() as u64);

        for review in &reviews {
            progress.inc(1);
            reporter.detail(&format!("Customer: {}", review.text));

            if review.is_missing() {
                progress.suspend(|| {
                    reporter.error(&format!(
                        "Error processing review: line {} has no review text",
                        review.line_number
                    ))
                });
                aggregator.record_skipped();
                continue;
            }

            let verdict = match self.classifier.classify(&review.text) {
                Classification::Greeting => {
                    progress.suspend(|| reporter.info(&format!("{}: {}", PERSONA, ASSIST_RESPONSE)));
                    aggregator.record_greeting();
                    continue;
                }
                Classification::Scored(verdict) => verdict,
            };

            if let Some(e) = &verdict.scoring_error {
                progress.suspend(|| reporter.error(&format!("Error in sentiment analysis: {}", e)));
            }

            progress.suspend(|| {
                reporter.info(&format!(
                    "Prediction: {} (Polarity: {:.3})",
                    verdict.sentiment, verdict.polarity
                ))
            });
            reporter.detail(&format!(
                "Review: {}... | Sentiment: {} | Polarity: {:.3}",
                preview(&review.text),
                verdict.sentiment,
                verdict.polarity
            ));

            aggregator.record(ScoredReview::new(
                review.text.clone(),
                verdict.sentiment,
                verdict.polarity,
            ));
        }

        progress.finish_and_clear();
        reporter.info(&format!("{}: Goodbye!", PERSONA));
        if aggregator.skipped() > 0 {
            reporter.warn(&format!(
                "Skipped {} rows without review text",
                aggregator.skipped()
            ));
        }

        let results_path = match export_results(
            aggregator.records(),
            &self.config.output_dir,
            &self.config.export_prefix,
            Local::now(),
        ) {
            Ok(path) => {
                reporter.info(&format!("Results saved to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                reporter.error(&e.to_string());
                None
            }
        };

        let chart_path = self.config.chart_path();
        let chart_path = match self.chart.save(&aggregator.counts(), &chart_path) {
            Ok(()) => {
                reporter.detail(&format!(
                    "Sentiment pie chart saved as {}",
                    chart_path.display()
                ));
                Some(chart_path)
            }
            Err(e) => {
                reporter.error(&e.to_string());
                None
            }
        };

        let summary = aggregator.summarize();
        let statistics = aggregator.statistics();

        for line in summary.lines() {
            reporter.info(&line);
        }
        if let Some(stats) = &statistics {
            for line in stats.lines() {
                reporter.info(&line);
            }
        }
        if aggregator.greetings() > 0 || aggregator.skipped() > 0 {
            reporter.detail(&format!(
                "Greetings answered: {} | Rows skipped: {}",
                aggregator.greetings(),
                aggregator.skipped()
            ));
        }
        reporter.detail("Summary statistics generated");

        Ok(RunReport {
            summary,
            statistics,
            greetings: aggregator.greetings(),
            skipped: aggregator.skipped(),
            records: aggregator.into_records(),
            results_path,
            chart_path,
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}<{eta}]")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Processing reviews");
        pb
    }
}

/// First characters of a review for the log, on a char boundary
fn preview(text: &str) -> &str {
    match text.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ============================================================================
// TESTS
// ============================================================================
