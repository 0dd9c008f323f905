use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use review_sentiment::reporter::init_run_log;
use review_sentiment::{
    ConsoleReporter, PipelineConfig, PipelineError, Reporter, SentimentPipeline, VERSION,
};

/// Run log, appended in the working directory
const LOG_FILE: &str = "Restaurant_Reviews.log";

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Restaurant Review Sentiment Analysis", long_about = None)]
struct Cli {
    /// Path to the TSV file containing restaurant reviews
    #[arg(long, default_value = "Restaurant_Reviews.tsv")]
    data: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = ConsoleReporter;

    match run(&cli, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PipelineError>() {
                Some(pipeline_error) => {
                    reporter.error(&format!("Error: {:#}", e));
                    reporter.error(&format!("    - {}", pipeline_error.remediation()));
                }
                None => reporter.error(&format!("Fatal error in main execution: {:#}", e)),
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    init_run_log(Path::new(LOG_FILE))
        .with_context(|| format!("Failed to open run log {}", LOG_FILE))?;

    reporter.info(&format!("Running review-sentiment [ {} ]", VERSION));

    let config = PipelineConfig::for_data(&cli.data);
    let pipeline = SentimentPipeline::with_defaults(config)
        .context("Failed to build text normalizer")?;

    pipeline.run(reporter)?;

    Ok(())
}
