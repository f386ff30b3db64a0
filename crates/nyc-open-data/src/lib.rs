//! NYC Open Data: typed catalog models and pydantic code generation.
//!
//! The catalog API describes every dataset on the portal: its name, columns,
//! column types and assorted metadata. This crate parses those descriptions
//! into typed values and renders them as a Python module with one pydantic
//! model per dataset.
//!
//! # Core Principles
//!
//! - **All or nothing**: one bad record or unsanitizable name fails the run
//! - **Atomic output**: the generated module is replaced only on success
//! - **Reversible names**: generated fields keep an alias to the API name
//!
//! # Example
//!
//! ```no_run
//! use nyc_open_data::{Catalog, Generator, SnapshotSource};
//!
//! let catalog = Catalog::new(SnapshotSource::new("datasets.json"));
//! let datasets = catalog.datasets().unwrap();
//!
//! let summary = Generator::new().write(datasets, "nyc_open_data/models.py").unwrap();
//! println!("Wrote {} models", summary.datasets);
//! ```

pub mod catalog;
pub mod codegen;
pub mod error;
pub mod ident;
pub mod schema;

#[cfg(test)]
mod test_utils;

pub use catalog::{
    Catalog, CatalogSource, ClientConfig, SnapshotSource, SocrataClient, StaticSource,
    parse_records,
};
pub use codegen::{GenerationSummary, Generator, GeneratorConfig, RenderContext, render};
pub use error::{NycError, Result};
pub use ident::sanitize_identifier;
pub use schema::{
    Classification, Column, ColumnDataType, ColumnFormat, Dataset, KeyValue, Metadata, PageViews,
    Resource, TypeAnnotation, User,
};
