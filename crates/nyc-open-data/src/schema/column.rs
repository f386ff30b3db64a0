//! Column definitions and display formatting hints.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ident::sanitize_identifier;

use super::types::{ColumnDataType, TypeAnnotation};

/// Display formatting hints attached to a column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(rename = "noCommas", default, skip_serializing_if = "Option::is_none")]
    pub no_commas: Option<bool>,
    #[serde(rename = "precisionStyle", default, skip_serializing_if = "Option::is_none")]
    pub precision_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

/// A single column of a catalog resource.
///
/// Columns are not stored on the wire; they are rebuilt from the parallel
/// `columns_*` sequences of a [`Resource`](super::Resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// API field name (e.g. `created_date`).
    pub name: String,
    /// Human-readable column name (e.g. `Created Date`).
    pub display_name: String,
    /// Catalog data type.
    pub datatype: ColumnDataType,
    /// Free-text description.
    pub description: String,
    /// Display formatting hints.
    pub format: ColumnFormat,
}

impl Column {
    /// Sanitized identifier for this column's generated field.
    pub fn identifier(&self) -> Result<String> {
        sanitize_identifier(&self.name)
    }

    /// Whether the generated field needs an alias back to the API name.
    pub fn needs_alias(&self) -> Result<bool> {
        Ok(self.identifier()? != self.name)
    }

    /// Type annotation for the generated field.
    pub fn type_annotation(&self) -> TypeAnnotation {
        self.datatype.type_annotation()
    }
}
