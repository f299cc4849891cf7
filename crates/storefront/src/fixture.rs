//! JSON fixture files backing the in-memory gateways.
//!
//! Fixtures are read once at startup. Unlike persisted cart and wishlist
//! data, a malformed fixture is a deployment error and is reported, not
//! skipped.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not a JSON array of records.
    #[error("invalid fixture data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record does not decode into the expected type.
    #[error("invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a JSON array, running `prepare` over each raw record first.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if `raw` is not a JSON array, or
/// [`FixtureError::InvalidRecord`] naming the first element that fails to
/// decode.
pub fn decode_records<T: DeserializeOwned>(
    raw: &str,
    mut prepare: impl FnMut(&mut Value),
) -> Result<Vec<T>, FixtureError> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            prepare(&mut record);
            serde_json::from_value(record)
                .map_err(|source| FixtureError::InvalidRecord { index, source })
        })
        .collect()
}

/// Read a fixture file to a string.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be read.
pub async fn read_fixture(path: &Path) -> Result<String, FixtureError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })
}
