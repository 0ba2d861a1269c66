//! Sealbox CLI - passphrase-based AES-256-GCM encryption for files and streams
//!
//! Hosts the core codec: resolves configuration, acquires the passphrase,
//! moves bytes between files/stdio and the codec, and sets up logging.

mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod io;
mod output;
mod passphrase;

use clap::Parser;
use sealbox_core::Codec;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::constants::LOG_ENV;
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    debug!(iterations = config.kdf.iterations, "loaded kdf parameters");
    let codec = Codec::new(config.kdf);

    match &cli.command {
        Commands::Encrypt(args) => commands::encrypt(&codec, args, cli.quiet),
        Commands::Decrypt(args) => commands::decrypt(&codec, args, cli.quiet),
        Commands::Inspect(args) => commands::inspect(args),
    }
}
