//! List command - show datasets and their generated class names.

use colored::Colorize;
use nyc_open_data::Catalog;

use super::Source;
use crate::cli::SourceArgs;

pub fn run(
    source_args: SourceArgs,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(Source::from_args(&source_args)?);
    let datasets = catalog.datasets()?;
    let shown = limit.unwrap_or(datasets.len()).min(datasets.len());

    for dataset in &datasets[..shown] {
        let class_name = dataset.resource.identifier()?;
        println!(
            "{}  {}  {:>4} columns  {}",
            dataset.id().cyan(),
            format!("{:50}", class_name).white().bold(),
            dataset.resource.column_count(),
            dataset.name().dimmed()
        );
    }

    eprintln!(
        "Listed {} of {} datasets",
        shown.to_string().white().bold(),
        datasets.len()
    );

    Ok(())
}
