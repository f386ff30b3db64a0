//! Shared fixtures for unit tests.

use serde_json::{Value, json};

/// A catalog record with no columns.
pub fn dataset_record(id: &str, name: &str) -> Value {
    record_with_columns(id, name, &[])
}

/// A catalog record with the given `(field_name, display_name, datatype)` columns.
pub fn record_with_columns(id: &str, name: &str, columns: &[(&str, &str, &str)]) -> Value {
    let field_names: Vec<&str> = columns.iter().map(|c| c.0).collect();
    let display_names: Vec<&str> = columns.iter().map(|c| c.1).collect();
    let datatypes: Vec<&str> = columns.iter().map(|c| c.2).collect();
    let descriptions: Vec<String> = columns
        .iter()
        .map(|c| format!("Description of {}", c.0))
        .collect();
    let formats: Vec<Value> = columns.iter().map(|_| json!({})).collect();

    json!({
        "resource": {
            "name": name,
            "id": id,
            "parent_fxf": [],
            "description": format!("All about {}", name),
            "attribution": "Department of Testing",
            "attribution_link": "https://example.nyc.gov/",
            "contact_email": null,
            "type": "dataset",
            "updatedAt": "2024-01-15T10:30:00.000Z",
            "createdAt": "2019-06-01T00:00:00.000Z",
            "metadata_updated_at": "2024-01-15T10:30:00.000Z",
            "data_updated_at": "2024-01-14T08:00:00.000Z",
            "page_views": {
                "page_views_last_week": 10,
                "page_views_last_month": 42,
                "page_views_total": 1000,
                "page_views_last_week_log": 3.459,
                "page_views_last_month_log": 5.426,
                "page_views_total_log": 9.967
            },
            "columns_name": display_names,
            "columns_field_name": field_names,
            "columns_datatype": datatypes,
            "columns_description": descriptions,
            "columns_format": formats,
            "download_count": 7,
            "provenance": "official",
            "lens_view_type": "tabular",
            "lens_display_type": "table",
            "blob_mime_type": null,
            "hide_from_data_json": false,
            "publication_date": "2019-06-01T00:00:00.000Z"
        },
        "classification": {
            "categories": ["city government"],
            "tags": [],
            "domain_category": "City Government",
            "domain_tags": ["testing"],
            "domain_metadata": [
                {"key": "Update_Update-Frequency", "value": "Daily"}
            ]
        },
        "metadata": {"domain": "data.cityofnewyork.us"},
        "permalink": format!("https://data.cityofnewyork.us/d/{}", id),
        "link": format!("https://data.cityofnewyork.us/City-Government/x/{}", id),
        "owner": {"id": "abcd-0001", "user_type": "interactive", "display_name": "NYC OpenData"},
        "creator": {"id": "abcd-0002", "user_type": "interactive", "display_name": "NYC OpenData"}
    })
}
