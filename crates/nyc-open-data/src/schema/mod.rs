//! Typed catalog records.

mod column;
mod dataset;
mod resource;
mod types;

pub use column::{Column, ColumnFormat};
pub use dataset::{Classification, Dataset, KeyValue, Metadata, User};
pub use resource::{PageViews, Resource};
pub use types::{ColumnDataType, TypeAnnotation};
