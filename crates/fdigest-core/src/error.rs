//! # Error Types — Digest Failure Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - `Open` and `Read` carry the path and the underlying `io::Error`.
//! - No variant carries a partial digest. A failed computation produces
//!   nothing the caller could mistake for a result.

use std::path::PathBuf;

use thiserror::Error;

use crate::digest::DigestPhase;

/// Error raised while computing or parsing a digest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The path could not be opened for reading (missing, permission
    /// denied, or not a regular readable file). No bytes were read.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// The path that was requested.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred after the file was opened and before EOF.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The path being read.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The computation was cancelled between block reads.
    #[error("digest of {} cancelled after {bytes_read} bytes", .path.display())]
    Cancelled {
        /// The path being read.
        path: PathBuf,
        /// Bytes folded into the (discarded) accumulator before cancellation.
        bytes_read: u64,
    },

    /// Block size outside `1..=MAX_BLOCK_SIZE`.
    #[error("invalid block size {0}: must be between 1 and {max}", max = crate::digest::MAX_BLOCK_SIZE)]
    InvalidBlockSize(usize),

    /// A hex digest string could not be parsed.
    #[error("invalid digest: {0}")]
    InvalidHex(String),
}

impl DigestError {
    /// The phase in which the computation failed, if the error came from a
    /// computation at all.
    pub fn phase(&self) -> Option<DigestPhase> {
        match self {
            Self::Open { .. } => Some(DigestPhase::Unopened),
            Self::Read { .. } | Self::Cancelled { .. } => Some(DigestPhase::Reading),
            Self::InvalidBlockSize(_) | Self::InvalidHex(_) => None,
        }
    }

    /// Whether this is an open failure.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_display_includes_path() {
        let err = DigestError::Open {
            path: PathBuf::from("/no/such/file"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/file"), "got: {msg}");
        assert!(msg.starts_with("failed to open"));
        assert!(err.is_open_failure());
        assert_eq!(err.phase(), Some(DigestPhase::Unopened));
    }

    #[test]
    fn test_read_error_phase() {
        let err = DigestError::Read {
            path: PathBuf::from("f"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert!(!err.is_open_failure());
        assert_eq!(err.phase(), Some(DigestPhase::Reading));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_block_size_display() {
        let msg = DigestError::InvalidBlockSize(0).to_string();
        assert!(msg.contains("invalid block size 0"), "got: {msg}");
        assert_eq!(DigestError::InvalidBlockSize(0).phase(), None);
    }
}
