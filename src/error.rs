// ⚠️ Error Taxonomy
// Fatal load errors propagate to main; everything else is recovered locally

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// FATAL (load time)
// ============================================================================

/// Errors raised while loading the review dataset. Both variants end the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Data file not found: {}", .path.display())]
    DataNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading data from {}: {message}", .path.display())]
    SchemaError {
        path: PathBuf,
        column: String,
        message: String,
    },
}

impl LoadError {
    /// What the user should do about it, printed before exit
    pub fn remediation(&self) -> String {
        match self {
            LoadError::DataNotFound { .. } => {
                "Pass an existing file with --data <PATH>".to_string()
            }
            LoadError::SchemaError { column, .. } => format!(
                "The input must be delimited text with a header row containing a '{}' column",
                column
            ),
        }
    }
}

/// Top-level failure of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PipelineError {
    pub fn remediation(&self) -> String {
        match self {
            PipelineError::Load(e) => e.remediation(),
            PipelineError::Config(_) => "Check the pipeline configuration values".to_string(),
        }
    }
}

// ============================================================================
// RECOVERABLE (per review, per artifact)
// ============================================================================

#[derive(Debug, Error)]
#[error("Error cleaning text: {0}")]
pub struct NormalizeError(pub String);

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("lexicon has no entries")]
    EmptyLexicon,

    #[error("scorer produced a non-finite polarity for {0:?}")]
    NonFinite(String),

    #[error("{0}")]
    Other(String),
}

/// Failure while producing an output artifact. Logged, never fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Error saving results: {0}")]
    Export(String),

    #[error("Error plotting sentiment chart: {0}")]
    Render(String),
}

impl From<csv::Error> for ReportError {
    fn from(e: csv::Error) -> Self {
        ReportError::Export(e.to_string())
    }
}

impl From<image::ImageError> for ReportError {
    fn from(e: image::ImageError) -> Self {
        ReportError::Render(e.to_string())
    }
}
