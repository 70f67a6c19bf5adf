use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::DigestError;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum HashAlgorithm {
    /// MD5 (16 bytes / 128 bits).
    #[value(name = "md5")]
    Md5,
    /// SHA-1 (20 bytes / 160 bits).
    #[value(name = "sha1", alias = "sha-1")]
    Sha1,
    /// SHA-256 (32 bytes / 256 bits).
    #[default]
    #[value(name = "sha256", alias = "sha-256")]
    Sha256,
    /// SHA-384 (48 bytes / 384 bits).
    #[value(name = "sha384", alias = "sha-384")]
    Sha384,
    /// SHA-512 (64 bytes / 512 bits).
    #[value(name = "sha512", alias = "sha-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Every algorithm, in display order.
    pub const ALL: [HashAlgorithm; 5] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Length of the raw digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Human-readable name, e.g. `SHA-256`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Look up an algorithm by name. Case and the dash are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DigestError::Unsupported {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
