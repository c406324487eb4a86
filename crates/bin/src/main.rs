use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("genery=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    genery::timing::timed("command", || run(&cli.command, format))
}

fn run(command: &Commands, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Flatten(args) => commands::record::flatten(args, format),
        Commands::Lookup(args) => commands::record::lookup(args, format),
        Commands::Merge(args) => commands::record::merge(args, format),
        Commands::NormalizeKeys(args) => commands::record::normalize(args, format),
        Commands::Downcode(args) => commands::text::run_downcode(args, format),
        Commands::Urls(args) => commands::text::urls(args, format),
        Commands::HumanTime(args) => commands::time::human_time(args, format),
    }
}
