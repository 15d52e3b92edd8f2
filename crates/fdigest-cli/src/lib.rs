//! # fdigest-cli — Command-Line Interface for fdigest
//!
//! Thin wrapper over `fdigest-crypto`. Argument parsing lives here; digest
//! computation does not.
//!
//! ## Subcommands
//!
//! - `fdigest hash <FILE>` — streaming SHA-256 digest of one file.
//! - `fdigest args [VALUES]...` — dump the arguments the process received.
//! - `fdigest path <OP>` — absolute path, dirname, basename, split, join.
//!
//! ```bash
//! fdigest hash ./image.iso
//! fdigest hash ./image.iso --format json --block-size 65536
//! fdigest --config fdigest.yaml hash ./image.iso --expect e3b0c442...
//! ```
//!
//! ## Exit Status
//!
//! Handlers return `Result<u8>`. `Ok(0)` is success, `Ok(1)` a reported
//! failure such as a digest mismatch, and `Err` an error that `main` logs
//! before exiting with status 1.

pub mod args;
pub mod config;
pub mod hash;
pub mod path;
