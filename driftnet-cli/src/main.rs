//! Driftnet CLI - Command-line interface
//!
//! Searches Hacker News and Reddit for a keyword string and prints both
//! result sections to the terminal.

mod commands;
mod progress;
mod render;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

#[derive(Parser)]
#[command(name = "driftnet")]
#[command(about = "Search Hacker News and Reddit for keywords")]
#[command(version)]
struct Cli {
    /// The keywords to search for
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    keywords: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::search(&cli.keywords).await
}
