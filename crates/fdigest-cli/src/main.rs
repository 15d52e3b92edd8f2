//! # fdigest CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fdigest_cli::args::{run_args, ArgsArgs};
use fdigest_cli::config::DigestConfig;
use fdigest_cli::hash::{run_hash, HashArgs};
use fdigest_cli::path::{run_path, PathArgs};

/// fdigest — streaming SHA-256 file digests.
///
/// Reads a file in fixed-size blocks and prints its SHA-256 digest.
/// Also provides argument and path inspection helpers.
#[derive(Parser, Debug)]
#[command(name = "fdigest", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the SHA-256 digest of a file.
    Hash(HashArgs),

    /// Print the arguments this process received.
    Args(ArgsArgs),

    /// Absolute path, dirname, basename, split, and join.
    Path(PathArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("fdigest v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Hash(args) => DigestConfig::load_optional(cli.config.as_deref())
            .and_then(|config| run_hash(&args, &config)),
        Commands::Args(args) => {
            let program = std::env::args().next().unwrap_or_else(|| "fdigest".to_string());
            run_args(&args, &program)
        }
        Commands::Path(args) => run_path(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
