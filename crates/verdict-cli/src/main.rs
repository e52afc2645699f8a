//! Verdict CLI - aggregate, filter and export dataset-validation reports.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins unless -v asks for debug output.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Overview { inputs, json } => commands::overview::run(&inputs, config, json),

        Commands::Filter {
            report,
            inputs,
            selection,
            output,
            options,
        } => commands::filter::run(report, &inputs, config, &selection, output, options),

        Commands::Summary {
            inputs,
            bins,
            bottom,
            json,
        } => commands::summary::run(&inputs, config, bins, bottom, json),

        Commands::Export {
            inputs,
            output,
            date,
        } => commands::export::run(&inputs, config, output, date),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
