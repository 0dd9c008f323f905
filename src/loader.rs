// 📂 Review Loader
// Reads the delimited dataset and pulls the review column, failing fast on schema problems

use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::LoadError;

// ============================================================================
// CORE TYPES
// ============================================================================

/// RawReview - one row of the source table, as read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReview {
    /// Line in the original file (1-indexed, header is line 1)
    pub line_number: usize,
    /// Review cell exactly as stored
    pub text: String,
}

impl RawReview {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        RawReview {
            line_number,
            text: text.into(),
        }
    }

    /// An empty cell carries no review text
    pub fn is_missing(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// ReviewLoader - pulls one named column out of a delimited file
#[derive(Debug, Clone)]
pub struct ReviewLoader {
    column: String,
    delimiter: u8,
}

impl ReviewLoader {
    pub fn new(column: impl Into<String>, delimiter: u8) -> Self {
        ReviewLoader {
            column: column.into(),
            delimiter,
        }
    }

    /// Tab-separated loader for the `Review` column
    pub fn tsv() -> Self {
        ReviewLoader::new("Review", b'\t')
    }

    /// Load every review in file order
    ///
    /// # Errors
    /// * `DataNotFound` - path is missing, unreadable or not a regular file
    /// * `SchemaError` - no matching header, a row fails to parse, or a row
    ///   has more fields than the header
    ///
    /// Rows shorter than the header are kept; a review cell they do not
    /// reach loads as missing text.
    pub fn load(&self, file_path: &Path) -> Result<Vec<RawReview>, LoadError> {
        let not_found = |source: io::Error| LoadError::DataNotFound {
            path: file_path.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(file_path).map_err(not_found)?;
        if !metadata.is_file() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file = File::open(file_path).map_err(not_found)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| self.schema_error(file_path, format!("unreadable header row: {}", e)))?;

        let header_len = headers.len();
        let column_idx = headers
            .iter()
            .position(|h| h == self.column)
            .ok_or_else(|| {
                self.schema_error(
                    file_path,
                    format!("Input file must contain '{}' column", self.column),
                )
            })?;

        let mut reviews = Vec::new();

        for (row_num, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                self.schema_error(
                    file_path,
                    format!("failed to parse line {}: {}", row_num + 2, e),
                )
            })?;

            if record.len() > header_len {
                return Err(self.schema_error(
                    file_path,
                    format!(
                        "line {} has {} fields, header has {}",
                        row_num + 2,
                        record.len(),
                        header_len
                    ),
                ));
            }

            // +2 because: 1-indexed + header row
            let text = record.get(column_idx).unwrap_or("");
            reviews.push(RawReview::new(row_num + 2, text));
        }

        Ok(reviews)
    }

    fn schema_error(&self, file_path: &Path, message: String) -> LoadError {
        LoadError::SchemaError {
            path: file_path.to_path_buf(),
            column: self.column.clone(),
            message,
        }
    }
}

impl Default for ReviewLoader {
    fn default() -> Self {
        Self::tsv()
    }
}

// ============================================================================
// TESTS
// ============================================================================
