//! nyc-codegen CLI - generate pydantic models for NYC Open Data datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    let result = match cli.command {
        Commands::Generate {
            source,
            output,
            limit,
            context_json,
        } => commands::generate::run(source, output, limit, context_json),

        Commands::Fetch { output, domain } => commands::fetch::run(output, domain),

        Commands::List { source, limit } => commands::list::run(source, limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,nyc_open_data=info".to_string(),
            2 => "info,nyc_open_data=debug".to_string(),
            _ => "debug,nyc_open_data=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(verbose >= 2)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
