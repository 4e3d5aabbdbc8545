use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    delphes::{self, DelphesArgs},
    ids::{self, IdsArgs},
    name::{self, NameArgs},
    settings::{self, SettingsArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "svj-sim", about = "Hidden-valley model settings CLI")]
struct Cli {
    /// Log at debug level regardless of `SVJ_LOG`.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the simulator settings of a model.
    Settings(SettingsArgs),
    /// Fill a detector card template with the model's filter lists.
    Delphes(DelphesArgs),
    /// Print the canonical model name.
    Name(NameArgs),
    /// Print the model's id lists and settings hash as JSON.
    Ids(IdsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SVJ_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Settings(args) => settings::run(&args),
        Command::Delphes(args) => delphes::run(&args),
        Command::Name(args) => name::run(&args),
        Command::Ids(args) => ids::run(&args),
    }
}
