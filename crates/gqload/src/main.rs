mod commands;
mod config;
mod output;
mod sources;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gqload — bulk-load CSV/JSON data into a GraphQL endpoint
#[derive(Debug, Parser)]
#[command(name = "gqload", version, about)]
struct Cli {
    /// Path to the project config file.
    #[arg(long, global = true, default_value = ".graphqlconfig")]
    config: PathBuf,

    /// Output format. Auto-detected if not specified (human for terminal, json for pipe).
    #[arg(long, global = true)]
    format: Option<output::Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a CSV or JSON file into one batch mutation and send it.
    Load(commands::load::LoadCmd),
    /// List the mutations the configured schema offers.
    Mutations,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = output::resolve_format(cli.format);

    let result = match cli.command {
        Command::Load(cmd) => commands::load::run(cmd, &cli.config, format).await,
        Command::Mutations => commands::mutations::run(&cli.config, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
