//! runcpu command-line disassembler.
//!
//! Reads an `address:word` instruction listing and prints the disassembly as
//! a JSON array on stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use runcpu_core::config::Config;
use runcpu_core::sim::listing;

#[derive(Parser, Debug)]
#[command(
    name = "runcpu",
    author,
    version,
    about = "runcpu instruction set tools",
    long_about = "Disassemble runcpu instruction listings.\n\nExamples:\n  runcpu disasm program.lst\n  runcpu disasm --addresses program.lst\n  runcpu disasm --config runcpu.json program.lst"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble an `address:word` listing into a JSON report.
    Disasm {
        /// Listing file, one `address:hexword` pair per line.
        file: PathBuf,

        /// Include each instruction's address and opcode bytes.
        #[arg(short, long)]
        addresses: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(message) => fail(&message),
    };

    match cli.command {
        Commands::Disasm { file, addresses } => {
            let with_addresses = addresses || config.disasm.addresses;
            match cmd_disasm(&file, with_addresses) {
                Ok(json) => println!("{json}"),
                Err(message) => fail(&message),
            }
        }
    }
}

/// Reports `message` and exits with a failure status.
fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("runcpu: {message}");
    process::exit(1);
}

/// Loads the JSON configuration at `path`.
fn load_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config '{}': {e}", path.display()))
}

/// Disassembles the listing at `path` and returns the JSON report.
fn cmd_disasm(path: &Path, with_addresses: bool) -> Result<String, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {e}", path.display()))?;
    let entries = listing::parse_listing(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    debug!(
        entries = entries.len(),
        with_addresses, "disassembling listing"
    );
    let lines = listing::report(&entries, with_addresses);
    listing::to_json(&lines).map_err(|e| format!("could not encode report: {e}"))
}
