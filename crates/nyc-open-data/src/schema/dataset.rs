//! Top-level catalog dataset record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NycError, Result};

use super::resource::Resource;

/// A free-form metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Categorization of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub domain_category: Option<String>,
    pub domain_tags: Vec<String>,
    pub domain_metadata: Vec<KeyValue>,
}

impl Classification {
    /// Domain metadata as an ordered map.
    ///
    /// Later entries win when a key repeats.
    pub fn domain_metadata_map(&self) -> IndexMap<&str, &str> {
        self.domain_metadata
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
            .collect()
    }
}

/// Catalog metadata about a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub domain: String,
}

/// Owner or creator of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_type: String,
    pub display_name: String,
}

/// A dataset available from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub resource: Resource,
    pub classification: Classification,
    pub metadata: Metadata,
    pub permalink: Url,
    pub link: Url,
    pub owner: User,
    pub creator: User,
}

impl Dataset {
    /// Parse and validate a raw catalog record.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_value(value).map_err(|e| NycError::Validation(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the dataset invariants.
    pub fn validate(&self) -> Result<()> {
        self.resource.validate()
    }

    /// Resource id of this dataset.
    pub fn id(&self) -> &str {
        &self.resource.id
    }

    /// Resource name of this dataset.
    pub fn name(&self) -> &str {
        &self.resource.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDataType;
    use crate::test_utils::{dataset_record, record_with_columns};

    #[test]
    fn test_from_value() {
        let record = record_with_columns(
            "abcd-1234",
            "Street Trees",
            &[("tree_id", "Tree ID", "Number"), ("spc_common", "Species", "Text")],
        );
        let dataset = Dataset::from_value(record).unwrap();

        assert_eq!(dataset.id(), "abcd-1234");
        assert_eq!(dataset.name(), "Street Trees");
        assert_eq!(dataset.metadata.domain, "data.cityofnewyork.us");
        assert_eq!(dataset.resource.column_count(), 2);
        assert_eq!(dataset.resource.identifier().unwrap(), "StreetTrees");
    }

    #[test]
    fn test_columns_preserve_index_alignment() {
        let record = record_with_columns(
            "abcd-1234",
            "Street Trees",
            &[
                ("tree_id", "Tree ID", "Number"),
                ("created_at", "Created At", "Date"),
                ("curb_loc", "Curb Location", "Checkbox"),
            ],
        );
        let dataset = Dataset::from_value(record).unwrap();
        let columns = dataset.resource.columns();

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].name, "created_at");
        assert_eq!(columns[1].display_name, "Created At");
        assert_eq!(columns[1].datatype, ColumnDataType::Date);
        assert_eq!(columns[1].description, "Description of created_at");
        assert_eq!(columns[2].datatype, ColumnDataType::Checkbox);
    }

    #[test]
    fn test_misaligned_columns_fail() {
        let extra = [
            ("columns_name", serde_json::json!(["A", "B"])),
            ("columns_datatype", serde_json::json!(["Text", "Number"])),
            ("columns_description", serde_json::json!(["one", "two"])),
            ("columns_format", serde_json::json!([{}, {}])),
        ];

        for (field, value) in extra {
            let mut record = record_with_columns("abcd-1234", "Trees", &[("a", "A", "Text")]);
            record["resource"][field] = value;

            let err = Dataset::from_value(record).unwrap_err();
            assert!(
                matches!(err, NycError::Validation(ref m) if m.contains(field)),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_short_field_names_fail() {
        let mut record = record_with_columns(
            "abcd-1234",
            "Trees",
            &[("a", "A", "Text"), ("b", "B", "Text")],
        );
        record["resource"]["columns_field_name"] = serde_json::json!(["a"]);

        let err = Dataset::from_value(record).unwrap_err();
        assert!(matches!(err, NycError::Validation(ref m) if m.contains("columns_field_name")));
    }

    #[test]
    fn test_missing_field_fails() {
        for field in ["updatedAt", "parent_fxf", "columns_format"] {
            let mut record = dataset_record("abcd-1234", "Trees");
            record["resource"].as_object_mut().unwrap().remove(field);

            let err = Dataset::from_value(record).unwrap_err();
            assert!(
                matches!(err, NycError::Validation(ref m) if m.contains(field)),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_blob_mime_type_accepts_any_value() {
        let mut record = dataset_record("abcd-1234", "Trees");
        record["resource"]["blob_mime_type"] = serde_json::json!({"kind": "image/png"});

        let dataset = Dataset::from_value(record).unwrap();
        assert_eq!(
            dataset.resource.blob_mime_type,
            Some(serde_json::json!({"kind": "image/png"}))
        );
    }

    #[test]
    fn test_unsanitizable_name_fails() {
        let record = dataset_record("abcd-1234", "²");
        let err = Dataset::from_value(record).unwrap_err();
        assert!(matches!(err, NycError::Sanitization { .. }));
    }

    #[test]
    fn test_optional_fields_may_be_null() {
        let mut record = dataset_record("abcd-1234", "Trees");
        record["resource"]["attribution"] = serde_json::Value::Null;
        record["resource"]["data_updated_at"] = serde_json::Value::Null;
        record["classification"]["domain_category"] = serde_json::Value::Null;

        let dataset = Dataset::from_value(record).unwrap();
        assert!(dataset.resource.attribution.is_none());
        assert!(dataset.resource.data_updated_at.is_none());
        assert!(dataset.classification.domain_category.is_none());
    }

    #[test]
    fn test_domain_metadata_map() {
        let classification = Classification {
            domain_metadata: vec![
                KeyValue {
                    key: "Update_Update-Frequency".to_string(),
                    value: "Daily".to_string(),
                },
                KeyValue {
                    key: "Dataset-Information_Agency".to_string(),
                    value: "311".to_string(),
                },
            ],
            ..Classification::default()
        };

        let map = classification.domain_metadata_map();
        assert_eq!(map.get("Update_Update-Frequency"), Some(&"Daily"));
        assert_eq!(
            map.keys().copied().collect::<Vec<_>>(),
            vec!["Update_Update-Frequency", "Dataset-Information_Agency"]
        );
    }
}
