use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::engine::{digest_file_chunked, DEFAULT_CHUNK_SIZE};
use crate::error::DigestError;
use crate::hasher::DigestResult;
use crate::HashAlgorithm;

/// How two digested sources relate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Identical,
    Different,
    Error(String),
}

impl ComparisonOutcome {
    pub fn is_identical(&self) -> bool {
        matches!(self, ComparisonOutcome::Identical)
    }
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOutcome::Identical => f.write_str("Files are identical"),
            ComparisonOutcome::Different => f.write_str("Files are different"),
            ComparisonOutcome::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Outcome of a comparison together with both digests.
///
/// `digests` is only populated when both sides succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub outcome: ComparisonOutcome,
    pub digests: Option<(DigestResult, DigestResult)>,
}

impl Comparison {
    /// Build a comparison from the two per-side results.
    ///
    /// The left failure wins when both sides failed.
    pub fn from_results(
        left: Result<DigestResult, DigestError>,
        right: Result<DigestResult, DigestError>,
    ) -> Self {
        match (left, right) {
            (Ok(l), Ok(r)) => Self::completed(l, r),
            (Err(e), _) | (_, Err(e)) => Self::failed(e),
        }
    }

    fn completed(left: DigestResult, right: DigestResult) -> Self {
        Comparison {
            outcome: compare_digests(&left, &right),
            digests: Some((left, right)),
        }
    }

    fn failed(error: DigestError) -> Self {
        warn!(error = %error, "comparison aborted");
        Comparison {
            outcome: ComparisonOutcome::Error(error.to_string()),
            digests: None,
        }
    }
}

/// Classify two digests computed under the same algorithm.
pub fn compare_digests(left: &DigestResult, right: &DigestResult) -> ComparisonOutcome {
    debug_assert_eq!(left.algorithm(), right.algorithm());
    if left.as_str() == right.as_str() {
        ComparisonOutcome::Identical
    } else {
        ComparisonOutcome::Different
    }
}

/// Digest both files one after the other and classify the result.
pub fn compare_files(a: &Path, b: &Path, algorithm: HashAlgorithm) -> ComparisonOutcome {
    compare_files_detailed(a, b, algorithm, DEFAULT_CHUNK_SIZE).outcome
}

/// Sequential comparison. Stops at the first failing side.
pub fn compare_files_detailed(
    a: &Path,
    b: &Path,
    algorithm: HashAlgorithm,
    chunk_size: usize,
) -> Comparison {
    let left = match digest_file_chunked(a, algorithm, chunk_size) {
        Ok(d) => d,
        Err(e) => return Comparison::failed(e),
    };
    let right = match digest_file_chunked(b, algorithm, chunk_size) {
        Ok(d) => d,
        Err(e) => return Comparison::failed(e),
    };
    Comparison::completed(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::digest_bytes;

    #[test]
    fn equal_digests_are_identical() {
        let a = digest_bytes(b"same", HashAlgorithm::Sha256);
        let b = digest_bytes(b"same", HashAlgorithm::Sha256);
        assert_eq!(compare_digests(&a, &b), ComparisonOutcome::Identical);
    }

    #[test]
    fn unequal_digests_are_different() {
        let a = digest_bytes(b"same", HashAlgorithm::Md5);
        let b = digest_bytes(b"sane", HashAlgorithm::Md5);
        assert_eq!(compare_digests(&a, &b), ComparisonOutcome::Different);
    }

    #[test]
    fn left_failure_is_reported_first() {
        let left = Err(DigestError::Unsupported { name: "left".into() });
        let right = Err(DigestError::Unsupported { name: "right".into() });
        let cmp = Comparison::from_results(left, right);
        assert_eq!(
            cmp.outcome,
            ComparisonOutcome::Error("unsupported hash algorithm: left".into())
        );
        assert!(cmp.digests.is_none());
    }

    #[test]
    fn one_failure_hides_the_other_digest() {
        let ok = Ok(digest_bytes(b"x", HashAlgorithm::Sha1));
        let err = Err(DigestError::Worker { reason: "boom".into() });
        let cmp = Comparison::from_results(ok, err);
        assert!(matches!(cmp.outcome, ComparisonOutcome::Error(_)));
        assert!(cmp.digests.is_none());
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(ComparisonOutcome::Identical.to_string(), "Files are identical");
        assert_eq!(ComparisonOutcome::Different.to_string(), "Files are different");
        assert_eq!(
            ComparisonOutcome::Error("gone".into()).to_string(),
            "Error: gone"
        );
    }
}
