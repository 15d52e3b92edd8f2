//! # Hash Subcommand
//!
//! Computes the streaming SHA-256 digest of one file and prints
//! `file <path> sha256: <hex>`, or the full report as JSON.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use fdigest_core::ContentDigest;
use fdigest_crypto::{DigestReport, FileDigester};

use crate::config::{DigestConfig, OutputFormat};

/// Arguments for the `fdigest hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// File to digest.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Read size in bytes (default 8192).
    #[arg(long, value_name = "BYTES")]
    pub block_size: Option<usize>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expected SHA-256 hex digest. Exit status 1 on mismatch.
    #[arg(long, value_name = "HEX")]
    pub expect: Option<String>,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, config: &DigestConfig) -> Result<u8> {
    let settings = config.resolve(args.block_size, args.format);

    let expected = args
        .expect
        .as_deref()
        .map(parse_digest_hex)
        .transpose()?;

    let digester = FileDigester::new().with_block_size(settings.block_size)?;
    let report = digester.digest_file(&args.file)?;

    if let Some(expected) = expected {
        if expected != report.digest {
            println!(
                "FAIL: digest mismatch for {}: expected {} got {}",
                report.path.display(),
                expected.to_hex(),
                report.hex()
            );
            return Ok(1);
        }
        tracing::info!(path = %report.path.display(), "digest matches expected value");
    }

    println!("{}", render(&report, settings.format)?);
    Ok(0)
}

/// Render a report in the requested format.
pub fn render(report: &DigestReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "file {} sha256: {}",
            report.path.display(),
            report.hex()
        )),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

/// Parse a hex digest string into a ContentDigest.
fn parse_digest_hex(hex: &str) -> Result<ContentDigest> {
    ContentDigest::from_hex(hex).map_err(|e| anyhow!("invalid --expect value: {e}"))
}
