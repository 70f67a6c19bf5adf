use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::cli::Options;
use crate::compare::{compare_files_detailed, Comparison, ComparisonOutcome};
use crate::hasher::DigestResult;
use crate::task::{compare_files_concurrently, spawn_digest, spawn_digest_multi};
use crate::utils::is_same_file;
use crate::HashAlgorithm;

/// Digest one file in the background.
///
/// With `all`, every supported algorithm is computed in one pass and the
/// results come back in [`HashAlgorithm::ALL`] order.
pub async fn run_hash(file: &Path, opts: &Options, all: bool) -> Result<Vec<DigestResult>> {
    let result = if all {
        spawn_digest_multi(file, HashAlgorithm::ALL.to_vec(), opts.chunk_size).await
    } else {
        spawn_digest(file, opts.algorithm, opts.chunk_size)
            .await
            .map(|d| vec![d])
    };
    let digests = result.with_context(|| format!("Failed to digest {}", file.display()))?;

    info!(file = %file.display(), count = digests.len(), "digest complete");
    Ok(digests)
}

/// Compare two files, concurrently unless `sequential` is set.
///
/// A file compared against itself is refused up front; every other failure
/// is reported through the returned [`Comparison`].
pub async fn run_compare(
    file_a: &Path,
    file_b: &Path,
    opts: &Options,
    sequential: bool,
) -> Result<Comparison> {
    if is_same_file(file_a, file_b) {
        bail!("file_a and file_b cannot be the same file.");
    }

    let comparison = if sequential {
        let (a, b) = (file_a.to_path_buf(), file_b.to_path_buf());
        let opts = *opts;
        tokio::task::spawn_blocking(move || {
            compare_files_detailed(&a, &b, opts.algorithm, opts.chunk_size)
        })
        .await
        .context("Comparison worker failed")?
    } else {
        compare_files_concurrently(file_a, file_b, opts.algorithm, opts.chunk_size).await
    };

    info!(
        algorithm = %opts.algorithm,
        outcome = %comparison.outcome,
        "comparison complete"
    );
    Ok(comparison)
}

/// Lines printed for a comparison: the outcome, then both hashes when the
/// files differ.
pub fn comparison_report(comparison: &Comparison, algorithm: HashAlgorithm) -> Vec<String> {
    let mut lines = vec![comparison.outcome.to_string()];
    if let (ComparisonOutcome::Different, Some((a, b))) =
        (&comparison.outcome, &comparison.digests)
    {
        lines.push(format!("File 1 ({algorithm}): {a}"));
        lines.push(format!("File 2 ({algorithm}): {b}"));
    }
    lines
}

/// Process exit status for a comparison outcome.
pub fn exit_code(outcome: &ComparisonOutcome) -> u8 {
    match outcome {
        ComparisonOutcome::Identical => 0,
        ComparisonOutcome::Different => 1,
        ComparisonOutcome::Error(_) => 2,
    }
}
