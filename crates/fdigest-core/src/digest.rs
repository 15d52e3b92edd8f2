//! # Content Digest — SHA-256 Values and Incremental Accumulation
//!
//! Defines `ContentDigest`, the immutable 32-byte result of hashing a byte
//! stream, and `Sha256Accumulator`, the incremental state that produces it.
//!
//! ## Invariants
//!
//! - The digest of a byte sequence does not depend on how the sequence was
//!   split into `update()` calls. Block size is a performance detail only.
//! - `Sha256Accumulator::finalize()` takes `self`; an accumulator cannot be
//!   updated or finalized twice.
//! - `ContentDigest::to_hex()` is always 64 lowercase hex characters.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::DigestError;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Block size used when the caller does not choose one.
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// Largest accepted block size (16 MiB). Keeps the read buffer bounded.
pub const MAX_BLOCK_SIZE: usize = 16 * 1024 * 1024;

/// A SHA-256 content digest.
///
/// Serializes as its lowercase hex string so that JSON reports carry the
/// same text a user would compare against `sha256sum` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContentDigest {
    bytes: [u8; DIGEST_LEN],
}

impl ContentDigest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a 64-character hex string. Upper and lower case are accepted.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim();
        if hex.len() != DIGEST_HEX_LEN {
            return Err(DigestError::InvalidHex(format!(
                "expected {DIGEST_HEX_LEN} hex chars, got {}",
                hex.len()
            )));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(
                "digest contains non-hex characters".to_string(),
            ));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // All-ASCII was checked above, so byte offsets are char offsets.
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| DigestError::InvalidHex(e.to_string()))?;
        }
        Ok(Self { bytes })
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl From<ContentDigest> for String {
    fn from(digest: ContentDigest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for ContentDigest {
    type Error = DigestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl std::str::FromStr for ContentDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Incremental SHA-256 state.
///
/// Created fresh for each computation, fed with `update()` in the exact
/// order bytes were read, then consumed by `finalize()`.
#[derive(Debug, Clone, Default)]
pub struct Sha256Accumulator {
    hasher: Sha256,
    bytes_fed: u64,
}

impl Sha256Accumulator {
    /// Start from the standard SHA-256 initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a block into the running state.
    pub fn update(&mut self, block: &[u8]) {
        self.hasher.update(block);
        self.bytes_fed += block.len() as u64;
    }

    /// Total number of bytes folded in so far.
    pub fn bytes_fed(&self) -> u64 {
        self.bytes_fed
    }

    /// Consume the accumulator and produce the digest.
    pub fn finalize(self) -> ContentDigest {
        ContentDigest::new(self.hasher.finalize().into())
    }

    /// Consume the accumulator and produce the lowercase hex digest.
    pub fn finalize_hex(self) -> String {
        self.finalize().to_hex()
    }
}

/// One-shot SHA-256 over an in-memory byte slice.
pub fn sha256_bytes(data: &[u8]) -> ContentDigest {
    ContentDigest::new(Sha256::digest(data).into())
}

/// Lifecycle of a single digest computation.
///
/// ```text
/// Unopened ──open──▶ Reading ──EOF──▶ Finalized
///     │                  │
///     └──open error──▶ Failed ◀──read error / cancel
/// ```
///
/// `Finalized` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestPhase {
    /// No handle acquired yet.
    Unopened,
    /// Handle open, blocks being folded into the accumulator.
    Reading,
    /// Digest produced.
    Finalized,
    /// Computation aborted; no digest produced.
    Failed,
}

impl DigestPhase {
    /// Returns the phase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unopened => "unopened",
            Self::Reading => "reading",
            Self::Finalized => "finalized",
            Self::Failed => "failed",
        }
    }

    /// Whether no transition leaves this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized | Self::Failed)
    }

    /// Whether `self -> next` is a legal transition.
    pub fn can_transition_to(&self, next: DigestPhase) -> bool {
        matches!(
            (self, next),
            (Self::Unopened, Self::Reading)
                | (Self::Unopened, Self::Failed)
                | (Self::Reading, Self::Finalized)
                | (Self::Reading, Self::Failed)
        )
    }
}

impl std::fmt::Display for DigestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
