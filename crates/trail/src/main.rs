//! Trail CLI - Breadcrumb trail renderer.
//!
//! Provides commands for:
//! - `render`: Render the breadcrumb trail for a crumb as HTML
//! - `links`: Print the display-ready links as JSON
//! - `parent`: Print the parent breadcrumb
//! - `styles`: List registered styles

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LinksArgs, ParentArgs, RenderArgs, StylesArgs};
use output::Output;

/// Trail - Breadcrumb trail renderer.
#[derive(Parser)]
#[command(name = "trail", version, about)]
struct Cli {
    /// Enable verbose output (debug logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the breadcrumb trail as HTML.
    Render(RenderArgs),
    /// Print the display-ready links as JSON.
    Links(LinksArgs),
    /// Print the parent breadcrumb.
    Parent(ParentArgs),
    /// List registered styles.
    Styles(StylesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Links(args) => args.execute(&output),
        Commands::Parent(args) => args.execute(&output),
        Commands::Styles(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
