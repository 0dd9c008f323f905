// ⚙️ Pipeline Config
// Data source, column, greetings, thresholds and output locations for one run

use std::path::PathBuf;

use crate::classifier::Thresholds;
use crate::error::PipelineError;

// ============================================================================
// DEFAULTS
// ============================================================================

/// Phrases that short-circuit to the assist response instead of being scored.
pub const DEFAULT_GREETINGS: [&str; 6] = ["hello", "hi", "hey", "greetings", "sup", "what's up"];

// ============================================================================
// CONFIG
// ============================================================================

/// Main configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the delimited review dataset
    pub data_path: PathBuf,

    /// Header of the column holding review text
    pub text_column: String,

    /// Field delimiter of the dataset (tab for `.tsv`)
    pub delimiter: u8,

    /// Exact, case-insensitive whole-text greetings
    pub greetings: Vec<String>,

    /// Category thresholds
    pub thresholds: Thresholds,

    /// Directory receiving the results table and the chart
    pub output_dir: PathBuf,

    /// Prefix of the timestamped results table
    pub export_prefix: String,

    /// Chart file name, overwritten each run
    pub chart_file: String,

    /// Draw a progress bar while classifying
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            data_path: PathBuf::from("Restaurant_Reviews.tsv"),
            text_column: "Review".to_string(),
            delimiter: b'\t',
            greetings: DEFAULT_GREETINGS.iter().map(|g| g.to_string()).collect(),
            thresholds: Thresholds::default(),
            output_dir: PathBuf::from("."),
            export_prefix: "sentiment_results".to_string(),
            chart_file: "sentiment_pie_chart.png".to_string(),
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Default configuration reading from `data_path`
    pub fn for_data(data_path: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            data_path: data_path.into(),
            ..Default::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Full path of the chart artifact
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.text_column.trim().is_empty() {
            return Err(PipelineError::Config("text column name must not be empty".into()));
        }
        if self.delimiter == b'"' || self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(PipelineError::Config(format!(
                "delimiter {:?} collides with quoting or line endings",
                self.delimiter as char
            )));
        }
        if self.chart_file.trim().is_empty() || self.export_prefix.trim().is_empty() {
            return Err(PipelineError::Config("output file names must not be empty".into()));
        }
        if self.thresholds.negative > self.thresholds.positive {
            return Err(PipelineError::Config(format!(
                "negative threshold {} is above positive threshold {}",
                self.thresholds.negative, self.thresholds.positive
            )));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text_column, "Review");
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.greetings.len(), 6);
    }

    #[test]
    fn test_chart_path_joins_output_dir() {
        let config = PipelineConfig::for_data("reviews.tsv").with_output_dir("/tmp/out");
        assert_eq!(config.chart_path(), PathBuf::from("/tmp/out/sentiment_pie_chart.png"));
    }

    #[test]
    fn test_rejects_empty_column() {
        let config = PipelineConfig {
            text_column: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = PipelineConfig {
            thresholds: Thresholds {
                positive: -0.2,
                negative: 0.2,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
