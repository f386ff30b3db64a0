//! Generate command - render dataset models into a Python module.

use std::path::PathBuf;

use colored::Colorize;
use nyc_open_data::{Catalog, CatalogSource, Generator, GeneratorConfig};

use super::Source;
use crate::cli::SourceArgs;

pub fn run(
    source_args: SourceArgs,
    output: PathBuf,
    limit: Option<usize>,
    context_json: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::from_args(&source_args)?;

    if let Source::Snapshot(ref snapshot) = source {
        if !snapshot.path().exists() {
            return Err(format!(
                "Snapshot not found: {} (run 'nyc-codegen fetch' or pass --remote)",
                snapshot.path().display()
            )
            .into());
        }
    }

    let mut config = GeneratorConfig::default().with_source(source.describe());
    if let Source::Snapshot(ref snapshot) = source {
        config = config.with_source_hash(snapshot.content_hash()?);
    }
    if let Some(limit) = limit {
        config = config.with_limit(limit);
    }

    eprintln!(
        "{} {}",
        "Fetching".cyan().bold(),
        source.describe().white()
    );
    let catalog = Catalog::new(source);
    let datasets = catalog.datasets()?;
    eprintln!(
        "Found {} datasets",
        datasets.len().to_string().white().bold()
    );

    eprintln!("{}", "Rendering models...".cyan().bold());
    let generator = Generator::with_config(config);
    let context = generator.context(datasets)?;

    if let Some(ref path) = context_json {
        context.save(path)?;
        eprintln!(
            "{} {}",
            "Saved context to".green().bold(),
            path.display().to_string().white()
        );
    }

    let summary = generator.write_context(&context, &output)?;

    eprintln!(
        "{} {} models ({} fields) to {}",
        "Wrote".green().bold(),
        summary.datasets.to_string().white().bold(),
        summary.fields,
        summary.path.display().to_string().white()
    );

    Ok(())
}
