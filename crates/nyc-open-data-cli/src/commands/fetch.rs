//! Fetch command - download the catalog into a local snapshot.

use std::path::PathBuf;

use colored::Colorize;
use nyc_open_data::{Catalog, CatalogSource, ClientConfig, SocrataClient};

pub fn run(output: PathBuf, domain: String) -> Result<(), Box<dyn std::error::Error>> {
    let client = SocrataClient::with_config(ClientConfig::from_env().with_domain(domain))?;

    eprintln!(
        "{} {}",
        "Fetching".cyan().bold(),
        client.describe().white()
    );

    let catalog = Catalog::new(client);
    let count = catalog.datasets()?.len();
    catalog.save_snapshot(&output)?;

    eprintln!(
        "{} {} datasets to {}",
        "Saved".green().bold(),
        count.to_string().white().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
