//
// lib.rs
// hashdiff
//
// Library entry that re-exports the digesting engine, the comparison orchestrator and the CLI plumbing so the binary and tests share one surface.
//
// Thales Matheus Mendonça Santos - October 2026
//
pub mod algorithm;
pub mod cli;
pub mod compare;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod run;
pub mod task;
pub mod utils;

pub use algorithm::HashAlgorithm;
pub use cli::{build_options, Args, Command, Options};
pub use compare::{compare_digests, compare_files, compare_files_detailed, Comparison, ComparisonOutcome};
pub use engine::{
    digest_bytes, digest_file, digest_file_chunked, digest_file_multi, digest_reader,
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
};
pub use error::DigestError;
pub use hasher::{Accumulator, DigestResult};
pub use run::{comparison_report, exit_code, run_compare, run_hash};
pub use task::{compare_files_concurrently, spawn_digest, spawn_digest_multi, DigestHandle};
