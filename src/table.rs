use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Column holding the per-category accuracy value
pub const ACCURACY_COLUMN: &str = "accuracy";

/// One row of an accuracy CSV. Only the accuracy cell is kept, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccuracyRecord {
    pub accuracy: String,
}

/// Accuracy values of one backbone/fusion combination, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccuracyTable {
    pub records: Vec<AccuracyRecord>,
}

impl AccuracyTable {
    /// Load a CSV whose first line names the columns
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

        let headers = reader.headers().map_err(|e| csv_error(path, e))?;
        if headers.is_empty() {
            return Err(ReportError::Csv {
                path: path.to_path_buf(),
                message: "no header row".to_string(),
            });
        }
        let column = headers.iter().position(|name| name == ACCURACY_COLUMN);

        // The column is only required once there is a row to read it from
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(path, e))?;
            let column = column.ok_or_else(|| ReportError::MissingColumn {
                path: path.to_path_buf(),
                column: ACCURACY_COLUMN.to_string(),
            })?;
            let accuracy = record.get(column).unwrap_or_default();
            records.push(AccuracyRecord {
                accuracy: accuracy.to_string(),
            });
        }

        log::debug!("Loaded {} accuracy rows from {}", records.len(), path.display());
        Ok(AccuracyTable { records })
    }

    /// Build a table from accuracy values already in memory
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AccuracyTable {
            records: values
                .into_iter()
                .map(|value| AccuracyRecord { accuracy: value.into() })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn csv_error(path: &Path, e: csv::Error) -> ReportError {
    ReportError::Csv {
        path: PathBuf::from(path),
        message: e.to_string(),
    }
}
