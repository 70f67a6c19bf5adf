//! Background dispatch for digest runs.
//!
//! Hashing is blocking work, so every run is moved onto the tokio blocking
//! pool and handed back as an awaitable [`DigestHandle`]. These functions must
//! be called from inside a tokio runtime.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::compare::Comparison;
use crate::engine::{digest_file_chunked, digest_file_multi};
use crate::error::DigestError;
use crate::hasher::DigestResult;
use crate::HashAlgorithm;

/// A digest running in the background.
///
/// Dropping the handle abandons the result; the run itself finishes and is
/// discarded.
pub struct DigestHandle<T = DigestResult> {
    inner: JoinHandle<Result<T, DigestError>>,
}

impl<T> Future for DigestHandle<T> {
    type Output = Result<T, DigestError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner)
            .poll(cx)
            .map(|joined| joined.unwrap_or_else(|e| Err(worker_error(e))))
    }
}

fn worker_error(e: JoinError) -> DigestError {
    DigestError::Worker {
        reason: e.to_string(),
    }
}

/// Start digesting `path` off the current thread.
pub fn spawn_digest(
    path: impl Into<PathBuf>,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> DigestHandle {
    let path = path.into();
    debug!(path = %path.display(), %algorithm, "spawning digest");
    DigestHandle {
        inner: tokio::task::spawn_blocking(move || {
            digest_file_chunked(&path, algorithm, chunk_size)
        }),
    }
}

/// Start a single-pass multi-algorithm digest of `path` off the current thread.
pub fn spawn_digest_multi(
    path: impl Into<PathBuf>,
    algorithms: Vec<HashAlgorithm>,
    chunk_size: usize,
) -> DigestHandle<Vec<DigestResult>> {
    let path = path.into();
    DigestHandle {
        inner: tokio::task::spawn_blocking(move || {
            digest_file_multi(&path, &algorithms, chunk_size)
        }),
    }
}

/// Digest both files concurrently and classify once both have finished.
///
/// When both sides fail, the left error is reported.
pub async fn compare_files_concurrently(
    a: impl Into<PathBuf>,
    b: impl Into<PathBuf>,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> Comparison {
    let left = spawn_digest(a, algorithm, chunk_size);
    let right = spawn_digest(b, algorithm, chunk_size);
    let (left, right) = tokio::join!(left, right);
    Comparison::from_results(left, right)
}
