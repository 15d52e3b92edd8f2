//! # fdigest-core — Foundational Types for fdigest
//!
//! Leaf crate of the workspace. Defines the value types that every other
//! crate builds on and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`ContentDigest` is the only digest representation.** A fixed
//!    32-byte SHA-256 value, rendered as 64 lowercase hex characters.
//!    No bare `String` digests cross crate boundaries.
//!
//! 2. **`Sha256Accumulator` is consumed by `finalize()`.** Reusing an
//!    accumulator after finalization is a compile error, not a runtime bug.
//!
//! 3. **One error taxonomy.** `DigestError` distinguishes open failures
//!    from mid-read failures so callers can decide how to surface them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fdigest-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use digest::{
    sha256_bytes, ContentDigest, DigestPhase, Sha256Accumulator, DEFAULT_BLOCK_SIZE,
    DIGEST_HEX_LEN, DIGEST_LEN, MAX_BLOCK_SIZE,
};
pub use error::DigestError;
