//! # File Digest Vectors
//!
//! Hashes real files on disk and compares against the canonical SHA-256
//! test vectors and against one-shot hashing of the same bytes.

use std::io::Write;

use fdigest_core::{sha256_bytes, DigestError};
use fdigest_crypto::{sha256_file_hex, FileDigester};
use proptest::prelude::*;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Deterministic pseudo-random bytes (xorshift) so failures reproduce.
fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn empty_file_matches_known_vector() {
    let file = write_temp(b"");
    assert_eq!(sha256_file_hex(file.path()).unwrap(), EMPTY_SHA256);
}

#[test]
fn abc_file_matches_known_vector() {
    let file = write_temp(b"abc");
    let hex = sha256_file_hex(file.path()).unwrap();
    assert_eq!(hex, ABC_SHA256);
    assert_eq!(hex.len(), 64);
}

#[test]
fn digest_is_idempotent_on_unchanged_file() {
    let file = write_temp(&pseudo_random(100_000, 7));
    let first = sha256_file_hex(file.path()).unwrap();
    let second = sha256_file_hex(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_mebibyte_file_multi_block_matches_one_pass() {
    let data = pseudo_random(1024 * 1024, 42);
    let file = write_temp(&data);

    let default_blocks = FileDigester::new().digest_file(file.path()).unwrap();
    assert_eq!(default_blocks.blocks, 128);
    assert_eq!(default_blocks.bytes_read, data.len() as u64);

    let one_pass = FileDigester::new()
        .with_block_size(data.len())
        .unwrap()
        .digest_file(file.path())
        .unwrap();
    assert_eq!(one_pass.blocks, 1);

    let tiny_blocks = FileDigester::new()
        .with_block_size(97)
        .unwrap()
        .digest_file(file.path())
        .unwrap();

    assert_eq!(default_blocks.digest, one_pass.digest);
    assert_eq!(default_blocks.digest, tiny_blocks.digest);
    assert_eq!(default_blocks.digest, sha256_bytes(&data));
}

#[test]
fn missing_path_is_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.bin");
    let err = sha256_file_hex(&missing).unwrap_err();
    assert!(err.is_open_failure(), "expected open failure, got {err:?}");
    match err {
        DigestError::Open { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Open, got {other:?}"),
    }
}

#[test]
fn directory_path_is_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileDigester::new().digest_file(dir.path()).unwrap_err();
    assert!(err.is_open_failure(), "expected open failure, got {err:?}");
}

#[test]
fn report_records_requested_path() {
    let file = write_temp(b"abc");
    let report = FileDigester::new().digest_file(file.path()).unwrap();
    assert_eq!(report.path, file.path());
    assert_eq!(report.hex(), ABC_SHA256);
}

#[test]
fn digester_is_shareable_across_threads() {
    let digester = FileDigester::new().with_block_size(512).unwrap();
    let files: Vec<_> = (0..4u64)
        .map(|seed| write_temp(&pseudo_random(10_000, seed + 1)))
        .collect();

    let expected: Vec<_> = files
        .iter()
        .map(|f| sha256_bytes(&std::fs::read(f.path()).unwrap()))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|f| {
                let digester = &digester;
                scope.spawn(move || digester.digest_file(f.path()).unwrap().digest)
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), want);
        }
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Block size never changes the digest of a file.
    #[test]
    fn block_size_is_not_semantic(
        data in prop::collection::vec(any::<u8>(), 0..40_000),
        block_size in 1usize..20_000,
    ) {
        let file = write_temp(&data);
        let report = FileDigester::new()
            .with_block_size(block_size)
            .unwrap()
            .digest_file(file.path())
            .unwrap();
        prop_assert_eq!(report.digest, sha256_bytes(&data));
        prop_assert_eq!(report.bytes_read, data.len() as u64);
    }
}
