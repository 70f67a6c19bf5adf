use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::engine::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::utils::parse_size;
use crate::HashAlgorithm;

#[derive(Parser, Debug)]
#[command(author, version, about = "File digests and digest-based file comparison", long_about = None)]
pub struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the digest of a file
    Hash {
        /// File to digest
        file: PathBuf,

        #[command(flatten)]
        digest: DigestArgs,

        /// Digest with every supported algorithm in a single pass
        #[arg(long)]
        all: bool,
    },

    /// Compare two files by digest
    Compare {
        /// First file (A)
        file_a: PathBuf,

        /// Second file (B)
        file_b: PathBuf,

        #[command(flatten)]
        digest: DigestArgs,

        /// Digest the files one after the other instead of concurrently
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct DigestArgs {
    /// Hash algorithm
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,

    /// Read buffer size (e.g., 64KiB, 1MiB, 65536)
    #[arg(short = 'C', long, default_value = "64KiB")]
    pub chunk_size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub algorithm: HashAlgorithm,
    pub chunk_size: usize,
}

pub fn build_options(args: &DigestArgs) -> Result<Options> {
    let Some(size) = parse_size(&args.chunk_size) else {
        bail!("Invalid chunk size: {}", args.chunk_size);
    };
    let chunk_size = usize::try_from(size).unwrap_or(usize::MAX);
    if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
        bail!(
            "Chunk size {} out of range ({MIN_CHUNK_SIZE}..={MAX_CHUNK_SIZE} bytes)",
            args.chunk_size
        );
    }

    Ok(Options {
        algorithm: args.algorithm,
        chunk_size,
    })
}
