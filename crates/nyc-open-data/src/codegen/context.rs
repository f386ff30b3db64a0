//! Render context computed from catalog datasets.
//!
//! Every value the template needs is resolved here up front, so the
//! template itself only formats data.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{NycError, Result};
use crate::schema::{Column, Dataset, TypeAnnotation};

/// One generated model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldContext {
    /// Sanitized field identifier.
    pub identifier: String,
    /// API field name the identifier was derived from.
    pub original_name: String,
    /// Human-readable column name.
    pub display_name: String,
    /// Resolved type annotation.
    pub annotation: TypeAnnotation,
    /// Column description.
    pub description: String,
    /// Alias back to the API field name, when sanitizing changed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl FieldContext {
    fn from_column(column: &Column) -> Result<Self> {
        let identifier = column.identifier()?;
        let alias = (identifier != column.name).then(|| column.name.clone());

        Ok(Self {
            identifier,
            original_name: column.name.clone(),
            display_name: column.display_name.clone(),
            annotation: column.type_annotation(),
            description: column.description.clone(),
            alias,
        })
    }
}

/// One generated model class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetContext {
    /// Sanitized class identifier.
    pub class_name: String,
    /// Resource id (four-by-four).
    pub resource_id: String,
    /// Resource name.
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    pub permalink: String,
    pub domain: String,
    pub updated_at: DateTime<Utc>,
    pub fields: Vec<FieldContext>,
}

impl DatasetContext {
    /// Resolve the context for a single dataset.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let resource = &dataset.resource;
        let fields = resource
            .columns()
            .iter()
            .map(FieldContext::from_column)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            class_name: resource.identifier()?,
            resource_id: resource.id.clone(),
            name: resource.name.clone(),
            description: resource.description.clone(),
            attribution: resource.attribution.clone(),
            permalink: dataset.permalink.to_string(),
            domain: dataset.metadata.domain.clone(),
            updated_at: resource.updated_at,
            fields,
        })
    }

    /// Field identifiers used by more than one column, in first-seen order.
    ///
    /// The later field shadows the earlier one, and with it the earlier
    /// column's alias.
    pub fn colliding_fields(&self) -> Vec<&str> {
        duplicates(self.fields.iter().map(|f| f.identifier.as_str()))
    }
}

/// Everything the model template renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Where the datasets came from (shown in the generated header).
    pub source: String,
    /// Hash of the source data, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Datasets in fetch order.
    pub datasets: Vec<DatasetContext>,
}

impl RenderContext {
    /// Build the context for the given datasets.
    ///
    /// Fails on the first dataset or column whose name cannot be sanitized.
    pub fn build(datasets: &[Dataset]) -> Result<Self> {
        let datasets = datasets
            .iter()
            .map(DatasetContext::from_dataset)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: String::new(),
            source_hash: None,
            datasets,
        })
    }

    /// Set the source description.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the source hash.
    pub fn with_source_hash(mut self, hash: impl Into<String>) -> Self {
        self.source_hash = Some(hash.into());
        self
    }

    /// Class identifiers used by more than one dataset, in first-seen order.
    ///
    /// Colliding classes are all rendered; the later definition shadows the
    /// earlier one in the generated module.
    pub fn colliding_identifiers(&self) -> Vec<&str> {
        duplicates(self.datasets.iter().map(|d| d.class_name.as_str()))
    }

    /// `(class, field)` pairs where a class defines a field identifier twice.
    pub fn colliding_fields(&self) -> Vec<(&str, &str)> {
        self.datasets
            .iter()
            .flat_map(|d| {
                d.colliding_fields()
                    .into_iter()
                    .map(move |field| (d.class_name.as_str(), field))
            })
            .collect()
    }

    /// Whether any field uses the given annotation.
    pub fn uses_annotation(&self, annotation: TypeAnnotation) -> bool {
        self.datasets
            .iter()
            .flat_map(|d| &d.fields)
            .any(|f| f.annotation == annotation)
    }

    /// Write the context as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| NycError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Names occurring more than once, in first-seen order.
fn duplicates<'a>(names: impl Iterator<Item = &'a str> + Clone) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names.clone() {
        *counts.entry(name).or_default() += 1;
    }

    let mut seen = Vec::new();
    for name in names {
        if counts[name] > 1 && !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
