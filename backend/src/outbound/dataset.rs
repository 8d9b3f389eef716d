//! Record store loading from the dataset document.
//!
//! The dataset is read once at startup and converted to an immutable
//! [`UserRecords`] snapshot. Only the fields the evaluator consumes are kept.

use std::path::Path;

use thiserror::Error;
use tracing::info;
use user_dataset::{Dataset, DatasetError, DatasetRow};

use crate::domain::{Gender, UserRecord, UserRecords, UserValidationError};

/// Errors raised while building the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordLoadError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("row {id}: {source}")]
    InvalidRow {
        id: i64,
        #[source]
        source: UserValidationError,
    },
}

/// Load and convert the dataset at `path`.
///
/// # Errors
/// Returns [`RecordLoadError`] when the file cannot be parsed or a row
/// carries an unknown gender tag.
pub fn load_user_records(path: &Path) -> Result<UserRecords, RecordLoadError> {
    let dataset = Dataset::from_file(path)?;
    let records = records_from_dataset(dataset)?;
    info!(path = %path.display(), records = records.len(), "record store loaded");
    Ok(records)
}

/// Convert parsed dataset rows into records, keeping document order.
///
/// # Errors
/// Returns [`RecordLoadError::InvalidRow`] for the first row whose gender
/// tag is not recognised.
pub fn records_from_dataset(dataset: Dataset) -> Result<UserRecords, RecordLoadError> {
    dataset
        .into_rows()
        .into_iter()
        .map(record_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map(UserRecords::new)
}

fn record_from_row(row: DatasetRow) -> Result<UserRecord, RecordLoadError> {
    let gender: Gender = row
        .gender
        .parse()
        .map_err(|source| RecordLoadError::InvalidRow { id: row.id, source })?;
    Ok(UserRecord::new(
        row.id,
        row.first_name,
        row.last_name,
        row.age,
        row.about,
        gender,
    ))
}
