//! # Args Subcommand
//!
//! Prints the arguments the process received: total count (program name
//! included), the program name, then each value with its ordinal.

use anyhow::Result;
use clap::Args;

/// Ordinal positions the dump expects to be filled.
const EXPECTED_VALUES: usize = 2;

/// Arguments for the `fdigest args` subcommand.
#[derive(Args, Debug)]
pub struct ArgsArgs {
    /// Values to echo back.
    #[arg(value_name = "VALUES", trailing_var_arg = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Execute the args subcommand.
pub fn run_args(args: &ArgsArgs, program: &str) -> Result<u8> {
    for line in describe(program, &args.values) {
        println!("{line}");
    }
    for missing in args.values.len() + 1..=EXPECTED_VALUES {
        tracing::warn!(position = missing, "argument {missing} not supplied");
    }
    Ok(0)
}

/// Lines printed for `program` invoked with `values`.
pub fn describe(program: &str, values: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(values.len() + 2);
    lines.push(format!("total arguments: {}", values.len() + 1));
    lines.push(format!("program: {program}"));
    lines.extend(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("argument {}: {v}", i + 1)),
    );
    lines
}
