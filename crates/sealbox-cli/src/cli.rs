use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sealbox_core::VERSION;

/// Sealbox - passphrase-based AES-256-GCM encryption for files and streams
#[derive(Parser)]
#[command(name = "sealbox")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "SEALBOX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file or stdin into a sealbox container
    Encrypt(TransformArgs),

    /// Decrypt a sealbox container
    Decrypt(TransformArgs),

    /// Show the container header without decrypting
    Inspect(InspectArgs),
}

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args)]
pub struct TransformArgs {
    /// Input file ("-" or omitted for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file ("-" or omitted for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Input file ("-" or omitted for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt_paths() {
        let cli = Cli::try_parse_from(["sealbox", "encrypt", "-i", "in.txt", "-o", "out.sbx"])
            .unwrap();
        match cli.command {
            Commands::Encrypt(args) => {
                assert_eq!(args.input, Some(PathBuf::from("in.txt")));
                assert_eq!(args.output, Some(PathBuf::from("out.sbx")));
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_parse_inspect_json_with_global_quiet() {
        let cli = Cli::try_parse_from(["sealbox", "inspect", "--json", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Inspect(InspectArgs { json: true, .. })));
    }
}
