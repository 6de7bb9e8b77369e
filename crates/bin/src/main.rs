use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dataops=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.writer.options();
    let format = cli.format;

    match &cli.command {
        Commands::Get(args) => commands::get::run(args, format),
        Commands::Set(args) => commands::set::run(args, &options, format),
        Commands::Remove(args) => commands::remove::run(args, &options, format),
        Commands::Keys(args) => commands::keys::run(args, format),
        Commands::Inspect(args) => commands::inspect::run(args, format),
    }
}
