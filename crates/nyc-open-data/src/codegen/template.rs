//! Python model template.
//!
//! [`render`] walks a [`RenderContext`] and yields the generated module as a
//! sequence of text chunks: the module header, one class per dataset, then
//! the dataset registry.

use std::fmt::Write;

use crate::schema::TypeAnnotation;

use super::context::{DatasetContext, FieldContext, RenderContext};

/// Render the model module for a context.
///
/// Each call returns a fresh iterator over the whole module.
pub fn render(context: &RenderContext) -> Chunks<'_> {
    Chunks {
        context,
        stage: Stage::Header,
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Header,
    Dataset(usize),
    Registry,
    Done,
}

/// Finite iterator over the chunks of a rendered module.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    context: &'a RenderContext,
    stage: Stage,
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let datasets = &self.context.datasets;
        let (chunk, next) = match self.stage {
            Stage::Header => {
                let next = if datasets.is_empty() {
                    Stage::Registry
                } else {
                    Stage::Dataset(0)
                };
                (render_header(self.context), next)
            }
            Stage::Dataset(i) => {
                let next = if i + 1 < datasets.len() {
                    Stage::Dataset(i + 1)
                } else {
                    Stage::Registry
                };
                (render_dataset(&datasets[i]), next)
            }
            Stage::Registry => (render_registry(self.context), Stage::Done),
            Stage::Done => return None,
        };

        self.stage = next;
        Some(chunk)
    }
}

fn render_header(context: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str("\"\"\"\nDataset models for the NYC Open Data catalog.\n\n");
    out.push_str("Generated by nyc-codegen. Do not edit by hand.\n");
    if !context.source.is_empty() {
        let _ = writeln!(out, "\nSource: {}", docstring(&context.source));
    }
    if let Some(ref hash) = context.source_hash {
        let _ = writeln!(out, "Source hash: {}", hash);
    }
    out.push_str("\"\"\"\n");

    if context.uses_annotation(TypeAnnotation::DateTime) {
        out.push_str("from datetime import datetime\n");
    }
    out.push_str("from typing import Dict, List, Optional, Type\n\n");
    out.push_str("from pydantic import BaseModel, Field\n");
    out
}

fn render_dataset(dataset: &DatasetContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\nclass {}(BaseModel):", dataset.class_name);

    out.push_str("    \"\"\"\n");
    let _ = writeln!(out, "    {}", docstring(&dataset.name));
    if !dataset.description.trim().is_empty() {
        out.push('\n');
        for line in dataset.description.trim().lines() {
            push_doc_line(&mut out, "    ", line);
        }
    }
    out.push('\n');
    if let Some(ref attribution) = dataset.attribution {
        let _ = writeln!(out, "    Attribution: {}", docstring(attribution));
    }
    let _ = writeln!(out, "    Permalink: {}", docstring(&dataset.permalink));
    let _ = writeln!(out, "    Updated: {}", dataset.updated_at.to_rfc3339());
    out.push_str("    \"\"\"\n\n");

    let _ = writeln!(
        out,
        "    __dataset_id__ = {}",
        string_literal(&dataset.resource_id)
    );
    let _ = writeln!(
        out,
        "    __domain__ = {}",
        string_literal(&dataset.domain)
    );

    for field in &dataset.fields {
        render_field(&mut out, field);
    }
    out
}

fn render_field(out: &mut String, field: &FieldContext) {
    out.push('\n');
    match field.alias {
        Some(ref alias) => {
            let _ = writeln!(
                out,
                "    {}: Optional[{}] = Field(None, alias={})",
                field.identifier,
                field.annotation,
                string_literal(alias)
            );
        }
        None => {
            let _ = writeln!(
                out,
                "    {}: Optional[{}] = None",
                field.identifier, field.annotation
            );
        }
    }

    let description = field.description.trim();
    let doc = if description.is_empty() {
        field.display_name.as_str()
    } else {
        description
    };
    if !doc.is_empty() {
        let _ = writeln!(out, "    \"\"\"{}\"\"\"", docstring(&single_line(doc)));
    }
}

fn render_registry(context: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str("\n\nDATASETS: Dict[str, Type[BaseModel]] = {\n");
    for dataset in &context.datasets {
        let _ = writeln!(
            out,
            "    {}: {},",
            string_literal(&dataset.resource_id),
            dataset.class_name
        );
    }
    out.push_str("}\n");
    out.push_str(
        "\n\ndef get(client, dataset_id: str) -> List[BaseModel]:\n\
         \x20   \"\"\"\n\
         \x20   Fetch the rows of a dataset and parse them into its model.\n\
         \x20   \"\"\"\n\
         \x20   model = DATASETS[dataset_id]\n\
         \x20   return [model(**row) for row in client.get(dataset_id)]\n",
    );
    out
}

fn push_doc_line(out: &mut String, indent: &str, line: &str) {
    let line = line.trim_end();
    if line.is_empty() {
        out.push('\n');
    } else {
        let _ = writeln!(out, "{}{}", indent, docstring(line));
    }
}

/// Python string literal for arbitrary text.
///
/// JSON string escapes are a subset of Python's.
pub(crate) fn string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Escape text for use inside a triple-quoted docstring.
pub(crate) fn docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
