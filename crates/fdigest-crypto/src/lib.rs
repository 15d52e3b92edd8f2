//! # fdigest-crypto — Streaming File Digests
//!
//! Computes the SHA-256 digest of a file by reading it in fixed-size blocks
//! and folding each block into a [`Sha256Accumulator`](fdigest_core::Sha256Accumulator).
//! Memory use is bounded by one block buffer regardless of file size.
//!
//! - [`FileDigester`] — the digest computer. Configurable block size and
//!   optional cancellation.
//! - [`CancellationToken`] — cooperative cancellation checked between blocks.
//! - [`DigestReport`] — serializable result of one computation.
//!
//! ## Crate Policy
//!
//! - Depends only on `fdigest-core` internally.
//! - No retries. An open or read failure aborts the computation and the
//!   partial accumulator is dropped.
//! - Tests hash real files through `tempfile`; nothing is mocked except
//!   readers used to inject I/O failures.

pub mod cancel;
pub mod file;

// Re-export primary types.
pub use cancel::CancellationToken;
pub use file::{sha256_file_hex, DigestReport, FileDigester};
