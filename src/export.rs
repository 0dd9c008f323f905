// 💾 Results Export
// Writes every scored review to a timestamped CSV, in the order produced

use chrono::{DateTime, Local};
use csv::WriterBuilder;
use std::path::{Path, PathBuf};

use crate::aggregator::ScoredReview;
use crate::error::ReportError;

pub const EXPORT_HEADER: [&str; 3] = ["review", "sentiment", "polarity"];

/// `<prefix>_<YYYYmmdd_HHMMSS>.csv`
pub fn export_file_name(prefix: &str, generated_at: DateTime<Local>) -> String {
    format!("{}_{}.csv", prefix, generated_at.format("%Y%m%d_%H%M%S"))
}

/// Write the results table into `dir`, returning the file written.
///
/// The header row is written even when there are no records. An existing file
/// with the same name is overwritten.
pub fn export_results(
    records: &[ScoredReview],
    dir: &Path,
    prefix: &str,
    generated_at: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(export_file_name(prefix, generated_at));

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;

    writer.write_record(EXPORT_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .map_err(|e| ReportError::Export(format!("{}: {}", path.display(), e)))?;

    Ok(path)
}
