// Review Sentiment - Core Library
// Exposes the pipeline stages for the CLI and tests

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod normalizer;
pub mod pipeline;
pub mod reporter;
pub mod scoring;

// Re-export commonly used types
pub use aggregator::{CategoryShare, PolarityStats, ReviewAggregator, ScoredReview, Summary};
pub use chart::{ChartConfig, PieChart};
pub use classifier::{Classification, Classifier, Sentiment, Thresholds, Verdict, ASSIST_RESPONSE};
pub use config::{PipelineConfig, DEFAULT_GREETINGS};
pub use error::{LoadError, NormalizeError, PipelineError, ReportError, ScoringError};
pub use export::export_results;
pub use loader::{RawReview, ReviewLoader};
pub use normalizer::{Normalizer, TextNormalizer};
pub use pipeline::{RunReport, SentimentPipeline};
pub use reporter::{ConsoleReporter, MemoryReporter, Reporter};
pub use scoring::{Lexicon, LexiconScorer, PolarityScorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
