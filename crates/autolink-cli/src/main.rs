//! Autolink CLI - turn URLs and email addresses into HTML links.
//!
//! Provides commands for:
//! - `convert`: Link URLs and emails in a file or stdin
//! - `link`: Format a single URL or email address
//! - `shorten-url`: Shorten a URL for display
//! - `schemes`: Print the effective scheme list

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, LinkArgs, SchemesArgs, ShortenUrlArgs};
use output::Output;

/// Autolink - turn URLs and email addresses into HTML links.
#[derive(Parser)]
#[command(name = "autolink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link URLs and email addresses in text.
    Convert(ConvertArgs),
    /// Format a single URL or email address as a link.
    Link(LinkArgs),
    /// Shorten a URL for display.
    ShortenUrl(ShortenUrlArgs),
    /// Print the schemes that get linked.
    Schemes(SchemesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Convert(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Link(args) => args.execute(),
        Commands::ShortenUrl(args) => args.execute(),
        Commands::Schemes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
