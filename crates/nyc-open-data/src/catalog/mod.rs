//! Fetching and parsing the dataset catalog.
//!
//! Records come from a [`CatalogSource`]: the live catalog API
//! ([`SocrataClient`]) or a local snapshot ([`SnapshotSource`]). Both produce
//! the same raw record shape, which [`parse_records`] turns into validated
//! [`Dataset`] values.
//!
//! # Example
//!
//! ```no_run
//! use nyc_open_data::{Catalog, SnapshotSource};
//!
//! let catalog = Catalog::new(SnapshotSource::new("datasets.json"));
//! for dataset in catalog.datasets().unwrap() {
//!     println!("{} {}", dataset.id(), dataset.name());
//! }
//! ```

mod client;
mod source;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use once_cell::unsync::OnceCell;
use serde_json::Value;
use tracing::info;

use crate::error::{NycError, Result};
use crate::schema::Dataset;

pub use client::{APP_TOKEN_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_DOMAIN, SocrataClient};
pub use source::{CatalogSource, SnapshotSource, StaticSource};

/// Parse raw records into datasets.
///
/// All or nothing: the first record that fails validation aborts the whole
/// parse.
pub fn parse_records(records: &[Value]) -> Result<Vec<Dataset>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Dataset::from_value(record.clone()).map_err(|e| match e {
                NycError::Validation(message) => {
                    NycError::Validation(format!("record {}: {}", index, message))
                }
                other => other,
            })
        })
        .collect()
}

struct Fetched {
    records: Vec<Value>,
    datasets: Vec<Dataset>,
}

/// Caller-owned handle over a catalog source.
///
/// The first call to [`Catalog::datasets`] or [`Catalog::records`] fetches
/// and parses the catalog; later calls reuse the result for as long as the
/// handle lives.
pub struct Catalog<S> {
    source: S,
    fetched: OnceCell<Fetched>,
}

impl<S: CatalogSource> Catalog<S> {
    /// Wrap a source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            fetched: OnceCell::new(),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn fetched(&self) -> Result<&Fetched> {
        self.fetched.get_or_try_init(|| {
            info!(source = %self.source.describe(), "fetching catalog");
            let records = self.source.fetch_records()?;
            let datasets = parse_records(&records)?;
            info!(datasets = datasets.len(), "catalog parsed");
            Ok(Fetched { records, datasets })
        })
    }

    /// All datasets in the catalog, in source order.
    pub fn datasets(&self) -> Result<&[Dataset]> {
        Ok(&self.fetched()?.datasets)
    }

    /// The raw records behind [`Catalog::datasets`].
    pub fn records(&self) -> Result<&[Value]> {
        Ok(&self.fetched()?.records)
    }

    /// Look a dataset up by resource id.
    pub fn find(&self, id: &str) -> Result<Option<&Dataset>> {
        Ok(self.datasets()?.iter().find(|d| d.id() == id))
    }

    /// Write the raw records to a snapshot file.
    ///
    /// The records are validated first, so a snapshot is only written when
    /// every record parses.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let records = self.records()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| NycError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| NycError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)?;

        info!(path = %path.display(), records = records.len(), "saved catalog snapshot");
        Ok(())
    }
}
