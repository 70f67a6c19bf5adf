use std::fmt;

use digest::Digest;

use crate::HashAlgorithm;

enum AccumulatorInner {
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
}

/// Incremental hash state for one algorithm.
///
/// Data is fed with [`update`](Accumulator::update) or through the
/// [`std::io::Write`] implementation, then finalised into a [`DigestResult`].
pub struct Accumulator {
    algorithm: HashAlgorithm,
    inner: AccumulatorInner,
}

impl Accumulator {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let inner = match algorithm {
            HashAlgorithm::Md5 => AccumulatorInner::Md5(md5::Md5::new()),
            HashAlgorithm::Sha1 => AccumulatorInner::Sha1(sha1::Sha1::new()),
            HashAlgorithm::Sha256 => AccumulatorInner::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Sha384 => AccumulatorInner::Sha384(sha2::Sha384::new()),
            HashAlgorithm::Sha512 => AccumulatorInner::Sha512(sha2::Sha512::new()),
        };
        Self { algorithm, inner }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            AccumulatorInner::Md5(h) => h.update(data),
            AccumulatorInner::Sha1(h) => h.update(data),
            AccumulatorInner::Sha256(h) => h.update(data),
            AccumulatorInner::Sha384(h) => h.update(data),
            AccumulatorInner::Sha512(h) => h.update(data),
        }
    }

    /// Consume the state and render the digest as lowercase hex.
    pub fn finalize(self) -> DigestResult {
        let hex = match self.inner {
            AccumulatorInner::Md5(h) => hex::encode(h.finalize()),
            AccumulatorInner::Sha1(h) => hex::encode(h.finalize()),
            AccumulatorInner::Sha256(h) => hex::encode(h.finalize()),
            AccumulatorInner::Sha384(h) => hex::encode(h.finalize()),
            AccumulatorInner::Sha512(h) => hex::encode(h.finalize()),
        };
        debug_assert_eq!(hex.len(), self.algorithm.hex_len());
        DigestResult {
            algorithm: self.algorithm,
            hex,
        }
    }
}

impl std::io::Write for Accumulator {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A finished digest: lowercase hex, two digits per byte, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestResult {
    algorithm: HashAlgorithm,
    hex: String,
}

impl DigestResult {
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn into_string(self) -> String {
        self.hex
    }
}

impl fmt::Display for DigestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for DigestResult {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}
