//! fskit CLI
//!
//! Command-line front end for the fskit file I/O layer.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use fskit_io::{ConfigStore, DefaultFileIo, IoConfig};

use cli::Cli;
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration");
            ConfigStore::new().load::<IoConfig>(path)?
        }
        None => IoConfig::default(),
    };
    let io = DefaultFileIo::from_config(&config);

    match cli.command {
        Some(cmd) => {
            let ctx = Context {
                io: &io,
                config: &config,
            };
            let stdout = std::io::stdout();
            let stdin = std::io::stdin();
            commands::execute(cmd, &ctx, &mut stdout.lock(), &mut stdin.lock())
        }
        None => {
            println!("{} Cross-platform file operations", "fskit".green().bold());
            println!();
            println!("Run {} for available commands.", "fskit --help".cyan());
            Ok(())
        }
    }
}
