//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// nyc-codegen: generate pydantic models for NYC Open Data datasets
#[derive(Parser)]
#[command(name = "nyc-codegen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Where to read the catalog from.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Catalog snapshot file
    #[arg(long, default_value = "datasets.json", conflicts_with = "remote")]
    pub snapshot: PathBuf,

    /// Query the live catalog API instead of a snapshot
    #[arg(long)]
    pub remote: bool,

    /// Portal domain to list datasets for (remote only)
    #[arg(long, default_value = "data.cityofnewyork.us")]
    pub domain: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the dataset model module
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the generated module
        #[arg(short, long, default_value = "nyc_open_data/models.py")]
        output: PathBuf,

        /// Only render the first N datasets
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also write the render context as JSON
        #[arg(long, value_name = "FILE")]
        context_json: Option<PathBuf>,
    },

    /// Download the catalog and save it as a snapshot
    Fetch {
        /// Snapshot file to write
        #[arg(short, long, default_value = "datasets.json")]
        output: PathBuf,

        /// Portal domain to list datasets for
        #[arg(long, default_value = "data.cityofnewyork.us")]
        domain: String,
    },

    /// List datasets with their generated class names
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Only list the first N datasets
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
