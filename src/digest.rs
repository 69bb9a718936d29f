//! Streaming SHA-1 over published artifacts.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};

const CHUNK_SIZE: usize = 4096;

/// Hash a file in fixed-size chunks and return the lowercase hex digest.
///
/// The file is never loaded whole into memory; the loop stops on a
/// zero-length read. Any read error aborts the run.
pub fn sha1_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("opening '{}' for hashing", path.display()))?;
    let mut hasher = Sha1::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("reading '{}'", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn matches_known_vector() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hello.bin");
        fs::write(&path, b"hello").unwrap();
        assert_eq!(
            sha1_file(&path).unwrap(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn empty_file_hashes_to_sha1_of_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.bin");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            sha1_file(&path).unwrap(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn is_deterministic_and_spans_chunk_boundaries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.bin");
        let bytes: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &bytes).unwrap();

        let streamed = sha1_file(&path).unwrap();
        assert_eq!(streamed, sha1_file(&path).unwrap());

        let mut hasher = Sha1::new();
        hasher.update(&bytes);
        assert_eq!(streamed, format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn single_byte_change_changes_digest() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.bin");
        let b = tmp.path().join("b.bin");
        fs::write(&a, b"release payload").unwrap();
        fs::write(&b, b"release payloae").unwrap();
        assert_ne!(sha1_file(&a).unwrap(), sha1_file(&b).unwrap());
    }

    #[test]
    fn missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(sha1_file(&tmp.path().join("nope.zip")).is_err());
    }
}
