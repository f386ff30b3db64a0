//! Generation driver: context building, rendering and atomic output.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{NycError, Result};
use crate::schema::Dataset;

use super::context::RenderContext;
use super::template::render;

/// Configuration for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Maximum number of datasets to render (None = all).
    pub limit: Option<usize>,
    /// Description of the data source for the generated header.
    pub source: Option<String>,
    /// Hash of the source data for the generated header.
    pub source_hash: Option<String>,
}

impl GeneratorConfig {
    /// Limit the number of rendered datasets.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the source description.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the source hash.
    pub fn with_source_hash(mut self, hash: impl Into<String>) -> Self {
        self.source_hash = Some(hash.into());
        self
    }
}

/// Outcome of writing a generated module.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Path the module was written to.
    pub path: PathBuf,
    /// Number of model classes written.
    pub datasets: usize,
    /// Number of model fields written.
    pub fields: usize,
    /// Class identifiers defined more than once.
    pub collisions: Vec<String>,
    /// `(class, field)` identifiers defined more than once within a class.
    pub field_collisions: Vec<(String, String)>,
}

/// Renders dataset models into a Python module.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build the render context for the datasets, honouring the limit.
    pub fn context(&self, datasets: &[Dataset]) -> Result<RenderContext> {
        let selected = match self.config.limit {
            Some(limit) => &datasets[..limit.min(datasets.len())],
            None => datasets,
        };

        let mut context = RenderContext::build(selected)?;
        if let Some(ref source) = self.config.source {
            context = context.with_source(source.clone());
        }
        if let Some(ref hash) = self.config.source_hash {
            context = context.with_source_hash(hash.clone());
        }

        debug!(
            datasets = context.datasets.len(),
            total = datasets.len(),
            "built render context"
        );
        Ok(context)
    }

    /// Render the module into a string.
    pub fn generate(&self, datasets: &[Dataset]) -> Result<String> {
        let context = self.context(datasets)?;
        Ok(render(&context).collect())
    }

    /// Render the module and write it to `path`.
    ///
    /// The module is rendered into a temporary file next to `path` and only
    /// moved into place once every chunk has been written. On error `path`
    /// is left untouched.
    pub fn write(&self, datasets: &[Dataset], path: impl AsRef<Path>) -> Result<GenerationSummary> {
        let context = self.context(datasets)?;
        self.write_context(&context, path)
    }

    /// Write an already built context to `path`.
    pub fn write_context(
        &self,
        context: &RenderContext,
        path: impl AsRef<Path>,
    ) -> Result<GenerationSummary> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| NycError::io(dir, e))?;
        }

        let collisions: Vec<String> = context
            .colliding_identifiers()
            .into_iter()
            .map(String::from)
            .collect();
        for name in &collisions {
            warn!(class = %name, "class name generated for more than one dataset; last definition wins");
        }

        let field_collisions: Vec<(String, String)> = context
            .colliding_fields()
            .into_iter()
            .map(|(class, field)| (class.to_string(), field.to_string()))
            .collect();
        for (class, field) in &field_collisions {
            warn!(
                class = %class,
                field = %field,
                "field name generated for more than one column; last definition wins"
            );
        }

        let temp = NamedTempFile::new_in(dir).map_err(|e| NycError::io(dir, e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            for chunk in render(context) {
                writer
                    .write_all(chunk.as_bytes())
                    .map_err(|e| NycError::io(temp.path(), e))?;
            }
            writer.flush().map_err(|e| NycError::io(temp.path(), e))?;
        }

        temp.persist(path)
            .map_err(|e| NycError::io(path, e.error))?;

        let summary = GenerationSummary {
            path: path.to_path_buf(),
            datasets: context.datasets.len(),
            fields: context.datasets.iter().map(|d| d.fields.len()).sum(),
            collisions,
            field_collisions,
        };

        info!(
            path = %path.display(),
            datasets = summary.datasets,
            fields = summary.fields,
            "wrote generated models"
        );
        Ok(summary)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_records;
    use crate::test_utils::{dataset_record, record_with_columns};

    fn datasets() -> Vec<Dataset> {
        parse_records(&[
            record_with_columns("aaaa-0001", "Street Trees", &[("tree_id", "Tree ID", "Number")]),
            dataset_record("aaaa-0002", "Parks"),
            dataset_record("aaaa-0003", "Libraries"),
        ])
        .unwrap()
    }

    #[test]
    fn test_limit() {
        let generator = Generator::with_config(GeneratorConfig::default().with_limit(2));
        let context = generator.context(&datasets()).unwrap();
        assert_eq!(context.datasets.len(), 2);
        assert_eq!(context.datasets[1].class_name, "Parks");

        let generator = Generator::with_config(GeneratorConfig::default().with_limit(10));
        assert_eq!(generator.context(&datasets()).unwrap().datasets.len(), 3);
    }

    #[test]
    fn test_header_carries_source() {
        let generator = Generator::with_config(
            GeneratorConfig::default()
                .with_source("snapshot datasets.json")
                .with_source_hash("sha256:abc"),
        );
        let output = generator.generate(&datasets()).unwrap();
        assert!(output.contains("Source: snapshot datasets.json\n"));
        assert!(output.contains("Source hash: sha256:abc\n"));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pkg").join("models.py");

        let summary = Generator::new().write(&datasets(), &path).unwrap();

        assert_eq!(summary.datasets, 3);
        assert_eq!(summary.fields, 1);
        assert!(summary.collisions.is_empty());
        assert!(summary.field_collisions.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, Generator::new().generate(&datasets()).unwrap());
    }

    #[test]
    fn test_failed_write_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.py");
        fs::write(&path, "# previous output\n").unwrap();

        let mut bad = datasets();
        bad[1].resource.name = "²".to_string();

        let err = Generator::new().write(&bad, &path).unwrap_err();
        assert!(matches!(err, NycError::Sanitization { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# previous output\n");
        // no stray temporary files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
