use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::DigestError;
use crate::hasher::{Accumulator, DigestResult};
use crate::HashAlgorithm;

/// Read buffer used when the caller does not pick one.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Smallest read buffer the CLI accepts.
pub const MIN_CHUNK_SIZE: usize = 4 * 1024;
/// Largest read buffer ever allocated; bigger requests are clamped to it.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Hash an in-memory buffer in one call.
pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> DigestResult {
    let mut acc = Accumulator::new(algorithm);
    acc.update(data);
    acc.finalize()
}

/// Stream `reader` through `algorithm`, `chunk_size` bytes at a time.
///
/// A zero `chunk_size` falls back to [`DEFAULT_CHUNK_SIZE`]; anything above
/// [`MAX_CHUNK_SIZE`] is clamped. Read errors carry no path.
pub fn digest_reader<R: Read>(
    reader: R,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> Result<DigestResult, DigestError> {
    let mut accs = [Accumulator::new(algorithm)];
    pump(reader, &mut accs, chunk_size).map_err(DigestError::reader_failure)?;
    let [acc] = accs;
    Ok(acc.finalize())
}

/// Digest the file at `path` with the default chunk size.
pub fn digest_file(path: &Path, algorithm: HashAlgorithm) -> Result<DigestResult, DigestError> {
    digest_file_chunked(path, algorithm, DEFAULT_CHUNK_SIZE)
}

pub fn digest_file_chunked(
    path: &Path,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> Result<DigestResult, DigestError> {
    let mut accs = [Accumulator::new(algorithm)];
    digest_path(path, &mut accs, chunk_size)?;
    let [acc] = accs;
    Ok(acc.finalize())
}

/// Digest one file under several algorithms in a single read pass.
///
/// Results come back in the order of `algorithms`. Nothing is returned if any
/// read fails.
pub fn digest_file_multi(
    path: &Path,
    algorithms: &[HashAlgorithm],
    chunk_size: usize,
) -> Result<Vec<DigestResult>, DigestError> {
    let mut accs: Vec<Accumulator> = algorithms.iter().map(|a| Accumulator::new(*a)).collect();
    digest_path(path, &mut accs, chunk_size)?;
    Ok(accs.into_iter().map(Accumulator::finalize).collect())
}

fn digest_path(
    path: &Path,
    accs: &mut [Accumulator],
    chunk_size: usize,
) -> Result<(), DigestError> {
    let file = open_source(path)?;
    debug!(
        path = %path.display(),
        algorithms = ?accs.iter().map(Accumulator::algorithm).collect::<Vec<_>>(),
        chunk_size,
        "digest started"
    );

    let total = pump(file, accs, chunk_size).map_err(|e| DigestError::read_failure(path, e))?;

    debug!(path = %path.display(), bytes = total, "digest finished");
    Ok(())
}

fn open_source(path: &Path) -> Result<File, DigestError> {
    let file = File::open(path).map_err(|e| DigestError::not_found(path, e))?;
    let meta = file
        .metadata()
        .map_err(|e| DigestError::read_failure(path, e))?;
    if meta.is_dir() {
        return Err(DigestError::read_failure(
            path,
            io::Error::other("is a directory"),
        ));
    }
    Ok(file)
}

// Feeds every chunk to each accumulator; returns the number of bytes read.
fn pump<R: Read>(mut reader: R, accs: &mut [Accumulator], chunk_size: usize) -> io::Result<u64> {
    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size.min(MAX_CHUNK_SIZE)
    };
    let mut buffer = vec![0u8; chunk_size];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        for acc in accs.iter_mut() {
            acc.update(&buffer[..n]);
        }
        total += n as u64;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out at most `step` bytes per call and fails after `fail_after` bytes.
    struct Flaky {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        fail_after: Option<usize>,
        interrupted_once: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted_once {
                self.interrupted_once = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            if let Some(limit) = self.fail_after {
                if self.pos >= limit {
                    return Err(io::Error::other("device went away"));
                }
            }
            let end = (self.pos + self.step.min(buf.len())).min(self.data.len());
            let n = end - self.pos;
            buf[..n].copy_from_slice(&self.data[self.pos..end]);
            self.pos = end;
            Ok(n)
        }
    }

    #[test]
    fn short_and_interrupted_reads_are_handled() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let reader = Flaky {
            data: data.clone(),
            pos: 0,
            step: 7,
            fail_after: None,
            interrupted_once: false,
        };
        let streamed = digest_reader(reader, HashAlgorithm::Sha1, 64).unwrap();
        assert_eq!(streamed, digest_bytes(&data, HashAlgorithm::Sha1));
    }

    #[test]
    fn mid_stream_error_yields_no_digest() {
        let reader = Flaky {
            data: vec![1u8; 4096],
            pos: 0,
            step: 512,
            fail_after: Some(1024),
            interrupted_once: true,
        };
        let err = digest_reader(reader, HashAlgorithm::Sha256, 256).unwrap_err();
        match err {
            DigestError::ReadFailure { path: None, ref source } => {
                assert_eq!(source.to_string(), "device went away");
            }
            ref other => panic!("expected a pathless ReadFailure, got {other:?}"),
        }
        assert_eq!(err.to_string(), "read failed: device went away");
    }

    #[test]
    fn zero_chunk_size_uses_default() {
        let data = b"abc".to_vec();
        let got = digest_reader(Cursor::new(&data), HashAlgorithm::Md5, 0).unwrap();
        assert_eq!(got.as_str(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn oversized_chunk_size_is_clamped() {
        let got = digest_reader(Cursor::new(b"abc".to_vec()), HashAlgorithm::Md5, usize::MAX).unwrap();
        assert_eq!(got.as_str(), "900150983cd24fb0d6963f7d28e17f72");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc");
        std::fs::write(&path, b"abc").unwrap();
        let got = digest_file_chunked(&path, HashAlgorithm::Sha1, usize::MAX).unwrap();
        assert_eq!(got.as_str(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }
}
