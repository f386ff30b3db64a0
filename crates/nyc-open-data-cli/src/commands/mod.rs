//! CLI command implementations.

pub mod fetch;
pub mod generate;
pub mod list;

use nyc_open_data::{CatalogSource, ClientConfig, SnapshotSource, SocrataClient};

use crate::cli::SourceArgs;

/// Catalog source selected on the command line.
pub enum Source {
    Snapshot(SnapshotSource),
    Remote(SocrataClient),
}

impl Source {
    /// Build the source from CLI arguments.
    pub fn from_args(args: &SourceArgs) -> nyc_open_data::Result<Self> {
        if args.remote {
            let config = ClientConfig::from_env().with_domain(args.domain.clone());
            Ok(Source::Remote(SocrataClient::with_config(config)?))
        } else {
            Ok(Source::Snapshot(SnapshotSource::new(&args.snapshot)))
        }
    }
}

impl CatalogSource for Source {
    fn fetch_records(&self) -> nyc_open_data::Result<Vec<serde_json::Value>> {
        match self {
            Source::Snapshot(source) => source.fetch_records(),
            Source::Remote(source) => source.fetch_records(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Snapshot(source) => source.describe(),
            Source::Remote(source) => source.describe(),
        }
    }
}
