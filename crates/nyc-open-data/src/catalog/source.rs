//! Sources of raw catalog records.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{NycError, Result};

/// Something that can produce the raw catalog records.
///
/// Implementations only fetch; shaping records into [`Dataset`](crate::Dataset)
/// values is done by [`parse_records`](super::parse_records).
pub trait CatalogSource {
    /// Fetch every record in the catalog.
    fn fetch_records(&self) -> Result<Vec<Value>>;

    /// Human-readable description of where records come from.
    fn describe(&self) -> String;
}

/// A previously fetched copy of the catalog on disk.
///
/// The file holds either a JSON array of records or a catalog API response
/// object with a `results` array.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    /// Create a snapshot source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// SHA-256 of the snapshot contents, formatted as `sha256:<hex>`.
    pub fn content_hash(&self) -> Result<String> {
        Ok(hash_bytes(&self.read()?))
    }

    /// Read the snapshot file. A missing file means the source is unavailable.
    fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NycError::SourceUnavailable(format!(
                "snapshot not found: {}",
                self.path.display()
            )),
            _ => NycError::io(&self.path, e),
        })
    }
}

impl CatalogSource for SnapshotSource {
    fn fetch_records(&self) -> Result<Vec<Value>> {
        let contents = self.read()?;
        let value: Value = serde_json::from_slice(&contents)?;
        let records = records_from_value(value)?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded catalog snapshot"
        );

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}

/// Records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Value>,
}

impl StaticSource {
    /// Wrap a list of raw records.
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

impl CatalogSource for StaticSource {
    fn fetch_records(&self) -> Result<Vec<Value>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}

/// Extract the record list from a snapshot or API response body.
pub(crate) fn records_from_value(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(NycError::Validation(
                "expected an array of records or an object with a 'results' array".to_string(),
            )),
        },
        _ => Err(NycError::Validation(
            "expected an array of records or an object with a 'results' array".to_string(),
        )),
    }
}

pub(crate) fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}
