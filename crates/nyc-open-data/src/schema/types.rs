//! Column data types and their generated type annotations.

use serde::{Deserialize, Serialize};

/// Column data type as reported by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnDataType {
    #[serde(rename = "Calendar date")]
    CalendarDate,
    Checkbox,
    Date,
    MultiLine,
    MultiPoint,
    MultiPolygon,
    Number,
    Point,
    Polygon,
    Text,
    #[serde(rename = "URL")]
    Url,
}

impl ColumnDataType {
    /// Every data type the catalog reports.
    pub const ALL: [ColumnDataType; 11] = [
        ColumnDataType::CalendarDate,
        ColumnDataType::Checkbox,
        ColumnDataType::Date,
        ColumnDataType::MultiLine,
        ColumnDataType::MultiPoint,
        ColumnDataType::MultiPolygon,
        ColumnDataType::Number,
        ColumnDataType::Point,
        ColumnDataType::Polygon,
        ColumnDataType::Text,
        ColumnDataType::Url,
    ];

    /// The type annotation used for this column in generated models.
    pub fn type_annotation(&self) -> TypeAnnotation {
        match self {
            ColumnDataType::Date => TypeAnnotation::DateTime,
            ColumnDataType::Number => TypeAnnotation::Float,
            ColumnDataType::Checkbox => TypeAnnotation::Bool,
            ColumnDataType::CalendarDate
            | ColumnDataType::MultiLine
            | ColumnDataType::MultiPoint
            | ColumnDataType::MultiPolygon
            | ColumnDataType::Point
            | ColumnDataType::Polygon
            | ColumnDataType::Text
            | ColumnDataType::Url => TypeAnnotation::Str,
        }
    }

    /// The name the catalog API uses for this type.
    pub fn api_name(&self) -> &'static str {
        match self {
            ColumnDataType::CalendarDate => "Calendar date",
            ColumnDataType::Checkbox => "Checkbox",
            ColumnDataType::Date => "Date",
            ColumnDataType::MultiLine => "MultiLine",
            ColumnDataType::MultiPoint => "MultiPoint",
            ColumnDataType::MultiPolygon => "MultiPolygon",
            ColumnDataType::Number => "Number",
            ColumnDataType::Point => "Point",
            ColumnDataType::Polygon => "Polygon",
            ColumnDataType::Text => "Text",
            ColumnDataType::Url => "URL",
        }
    }
}

impl std::fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Python type annotation for a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeAnnotation {
    /// `datetime.datetime`
    DateTime,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `str`
    Str,
}

impl TypeAnnotation {
    /// The annotation as written in Python source.
    pub fn as_python(&self) -> &'static str {
        match self {
            TypeAnnotation::DateTime => "datetime",
            TypeAnnotation::Float => "float",
            TypeAnnotation::Bool => "bool",
            TypeAnnotation::Str => "str",
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_python())
    }
}
