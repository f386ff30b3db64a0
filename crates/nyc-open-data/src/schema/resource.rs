//! Resource metadata for a single catalog dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NycError, Result};
use crate::ident::sanitize_identifier;

use super::column::{Column, ColumnFormat};
use super::types::ColumnDataType;

/// Page view statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageViews {
    pub page_views_last_week: u64,
    pub page_views_last_month: u64,
    pub page_views_total: u64,
    pub page_views_last_week_log: f64,
    pub page_views_last_month_log: f64,
    pub page_views_total_log: f64,
}

/// Metadata and column description of one tabular dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Human-readable dataset name.
    pub name: String,
    /// Stable four-by-four id (e.g. `erm2-nwe9`).
    pub id: String,
    /// Ids of the parent views this resource derives from.
    pub parent_fxf: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub attribution_link: Option<Url>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub metadata_updated_at: DateTime<Utc>,
    #[serde(default)]
    pub data_updated_at: Option<DateTime<Utc>>,
    pub page_views: PageViews,
    /// Display names of the columns.
    pub columns_name: Vec<String>,
    /// API field names of the columns.
    pub columns_field_name: Vec<String>,
    pub columns_datatype: Vec<ColumnDataType>,
    pub columns_description: Vec<String>,
    pub columns_format: Vec<ColumnFormat>,
    pub download_count: u64,
    pub provenance: String,
    pub lens_view_type: String,
    pub lens_display_type: String,
    /// Untyped in the catalog; usually null or a MIME type string.
    #[serde(default)]
    pub blob_mime_type: Option<serde_json::Value>,
    pub hide_from_data_json: bool,
    pub publication_date: DateTime<Utc>,
}

impl Resource {
    /// Number of columns described by this resource.
    pub fn column_count(&self) -> usize {
        self.columns_field_name.len()
    }

    /// Rebuild the column list from the parallel `columns_*` sequences.
    ///
    /// Element `i` of every sequence describes column `i`. Call
    /// [`Resource::validate`] first; misaligned sequences are cut to the
    /// shortest one.
    pub fn columns(&self) -> Vec<Column> {
        self.columns_field_name
            .iter()
            .zip(&self.columns_name)
            .zip(&self.columns_datatype)
            .zip(&self.columns_description)
            .zip(&self.columns_format)
            .map(
                |((((field_name, display_name), datatype), description), format)| Column {
                    name: field_name.clone(),
                    display_name: display_name.clone(),
                    datatype: *datatype,
                    description: description.clone(),
                    format: format.clone(),
                },
            )
            .collect()
    }

    /// Sanitized identifier for the generated model class.
    pub fn identifier(&self) -> Result<String> {
        sanitize_identifier(&self.name)
    }

    /// Validate the resource invariants.
    ///
    /// The `columns_*` sequences must have equal length and the name must
    /// sanitize into an identifier.
    pub fn validate(&self) -> Result<()> {
        let expected = self.columns_field_name.len();
        let lengths = [
            ("columns_name", self.columns_name.len()),
            ("columns_datatype", self.columns_datatype.len()),
            ("columns_description", self.columns_description.len()),
            ("columns_format", self.columns_format.len()),
        ];

        for (field, len) in lengths {
            if len != expected {
                return Err(NycError::Validation(format!(
                    "resource '{}': {} has {} entries but columns_field_name has {}",
                    self.id, field, len, expected
                )));
            }
        }

        self.identifier()?;
        Ok(())
    }
}
