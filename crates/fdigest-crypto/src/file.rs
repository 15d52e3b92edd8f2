//! # File Digest Computer
//!
//! Opens a file read-only, reads it in blocks of at most `block_size` bytes,
//! folds each block into a fresh [`Sha256Accumulator`] in read order, and
//! finalizes once the reader reports EOF.
//!
//! ## Invariants
//!
//! - The file handle is owned by one call and dropped on every exit path.
//! - One buffer of `block_size` bytes is allocated per call; nothing else
//!   grows with file size.
//! - On any error the accumulator is dropped unfinalized. No partial digest
//!   ever reaches the caller.
//! - A read interrupted by a signal (`ErrorKind::Interrupted`) is re-issued.
//!   Every other error aborts.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fdigest_core::{
    ContentDigest, DigestError, DigestPhase, Sha256Accumulator, DEFAULT_BLOCK_SIZE,
    MAX_BLOCK_SIZE,
};
use serde::{Deserialize, Serialize};

use crate::cancel::CancellationToken;

/// Result of one successful digest computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestReport {
    /// Path (or label) of the digested input.
    pub path: PathBuf,
    /// Hash algorithm identifier. Always `"sha256"`.
    pub algorithm: String,
    /// The digest, serialized as lowercase hex.
    pub digest: ContentDigest,
    /// Total bytes folded into the accumulator.
    pub bytes_read: u64,
    /// Number of non-empty blocks read.
    pub blocks: u64,
}

impl DigestReport {
    /// The digest as 64 lowercase hex characters.
    pub fn hex(&self) -> String {
        self.digest.to_hex()
    }
}

/// Streaming SHA-256 digest computer.
///
/// Holds configuration only. Every call to [`digest_file`](Self::digest_file)
/// owns its own handle, buffer, and accumulator, so one `FileDigester` can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct FileDigester {
    block_size: usize,
    cancel: Option<CancellationToken>,
}

impl Default for FileDigester {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            cancel: None,
        }
    }
}

impl FileDigester {
    /// Digester with 8192-byte blocks and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `block_size`-byte reads. Rejects `0` and anything above
    /// [`MAX_BLOCK_SIZE`].
    pub fn with_block_size(mut self, block_size: usize) -> Result<Self, DigestError> {
        if block_size == 0 || block_size > MAX_BLOCK_SIZE {
            return Err(DigestError::InvalidBlockSize(block_size));
        }
        self.block_size = block_size;
        Ok(self)
    }

    /// Poll `token` before every block read.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Configured block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Compute the SHA-256 digest of the file at `path`.
    ///
    /// Fails with [`DigestError::Open`] if the path cannot be opened or is a
    /// directory, [`DigestError::Read`] if a read fails before EOF, and
    /// [`DigestError::Cancelled`] if the token fires mid-stream.
    pub fn digest_file(&self, path: impl AsRef<Path>) -> Result<DigestReport, DigestError> {
        let path = path.as_ref();
        let file = open_regular(path).map_err(|source| {
            transition(path, DigestPhase::Unopened, DigestPhase::Failed);
            DigestError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), block_size = self.block_size, "opened file for digest");

        // `file` moves into the loop and is dropped when it returns.
        self.digest_opened(file, path)
    }

    /// Run the block loop over any reader. `label` names the input in the
    /// report and in errors.
    pub fn digest_reader<R: Read>(
        &self,
        reader: R,
        label: impl AsRef<Path>,
    ) -> Result<DigestReport, DigestError> {
        self.digest_opened(reader, label.as_ref())
    }

    fn digest_opened<R: Read>(&self, mut reader: R, path: &Path) -> Result<DigestReport, DigestError> {
        transition(path, DigestPhase::Unopened, DigestPhase::Reading);

        let mut acc = Sha256Accumulator::new();
        let mut buf = vec![0u8; self.block_size];
        let mut blocks: u64 = 0;

        loop {
            if self.is_cancelled() {
                transition(path, DigestPhase::Reading, DigestPhase::Failed);
                return Err(DigestError::Cancelled {
                    path: path.to_path_buf(),
                    bytes_read: acc.bytes_fed(),
                });
            }

            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    transition(path, DigestPhase::Reading, DigestPhase::Failed);
                    return Err(DigestError::Read {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };

            acc.update(&buf[..n]);
            blocks += 1;
            tracing::trace!(block = blocks, len = n, total = acc.bytes_fed(), "folded block");
        }

        let bytes_read = acc.bytes_fed();
        let digest = acc.finalize();
        transition(path, DigestPhase::Reading, DigestPhase::Finalized);
        tracing::debug!(
            path = %path.display(),
            bytes_read,
            blocks,
            digest = %digest.to_hex(),
            "digest finalized"
        );

        Ok(DigestReport {
            path: path.to_path_buf(),
            algorithm: "sha256".to_string(),
            digest,
            bytes_read,
            blocks,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

/// Compute the lowercase hex SHA-256 digest of the file at `path` using
/// 8192-byte blocks.
pub fn sha256_file_hex(path: impl AsRef<Path>) -> Result<String, DigestError> {
    FileDigester::new().digest_file(path).map(|report| report.hex())
}

/// Open `path` read-only, rejecting directories before any read happens.
fn open_regular(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::Other, "is a directory"));
    }
    Ok(file)
}

fn transition(path: &Path, from: DigestPhase, to: DigestPhase) {
    debug_assert!(from.can_transition_to(to), "illegal phase transition {from} -> {to}");
    tracing::trace!(path = %path.display(), %from, %to, "digest phase");
}
