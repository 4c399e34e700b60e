//! Algorithm registry, streaming entry points, and the checksum result.

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::{DigestError, Result};
use crate::hasher::{Adler32Hasher, Crc32Hasher, DigestHasher, Hasher};

/// Read-block size used when none is given.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// The supported checksum and digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Adler32,
    Crc32,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Adler32,
        Algorithm::Crc32,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Digest size in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Algorithm::Adler32 | Algorithm::Crc32 => 4,
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Adler32 => "adler32",
            Algorithm::Crc32 => "crc32",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    fn hasher(&self) -> AlgoHasher {
        match self {
            Algorithm::Adler32 => AlgoHasher::Adler32(Adler32Hasher::new()),
            Algorithm::Crc32 => AlgoHasher::Crc32(Crc32Hasher::new()),
            Algorithm::Md5 => AlgoHasher::Md5(DigestHasher::new()),
            Algorithm::Sha1 => AlgoHasher::Sha1(DigestHasher::new()),
            Algorithm::Sha224 => AlgoHasher::Sha224(DigestHasher::new()),
            Algorithm::Sha256 => AlgoHasher::Sha256(DigestHasher::new()),
            Algorithm::Sha384 => AlgoHasher::Sha384(DigestHasher::new()),
            Algorithm::Sha512 => AlgoHasher::Sha512(DigestHasher::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "adler32" => Ok(Algorithm::Adler32),
            "crc32" => Ok(Algorithm::Crc32),
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha224" => Ok(Algorithm::Sha224),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            other => Err(DigestError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Hasher state for a runtime-selected algorithm.
enum AlgoHasher {
    Adler32(Adler32Hasher),
    Crc32(Crc32Hasher),
    Md5(DigestHasher<Md5>),
    Sha1(DigestHasher<Sha1>),
    Sha224(DigestHasher<Sha224>),
    Sha256(DigestHasher<Sha256>),
    Sha384(DigestHasher<Sha384>),
    Sha512(DigestHasher<Sha512>),
}

impl Hasher for AlgoHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            AlgoHasher::Adler32(h) => h.update(data),
            AlgoHasher::Crc32(h) => h.update(data),
            AlgoHasher::Md5(h) => h.update(data),
            AlgoHasher::Sha1(h) => h.update(data),
            AlgoHasher::Sha224(h) => h.update(data),
            AlgoHasher::Sha256(h) => h.update(data),
            AlgoHasher::Sha384(h) => h.update(data),
            AlgoHasher::Sha512(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            AlgoHasher::Adler32(h) => h.finalize(),
            AlgoHasher::Crc32(h) => h.finalize(),
            AlgoHasher::Md5(h) => h.finalize(),
            AlgoHasher::Sha1(h) => h.finalize(),
            AlgoHasher::Sha224(h) => h.finalize(),
            AlgoHasher::Sha256(h) => h.finalize(),
            AlgoHasher::Sha384(h) => h.finalize(),
            AlgoHasher::Sha512(h) => h.finalize(),
        }
    }
}

/// A finished checksum: the algorithm and its digest bytes.
///
/// Displays as lowercase hex, zero-padded to the algorithm's digest size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    algorithm: Algorithm,
    bytes: Vec<u8>,
}

impl Checksum {
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    pub fn into_bytes(self) -> Vec<u8> { self.bytes }

    pub fn to_hex(&self) -> String { hex::encode(&self.bytes) }

    /// Compare against an expected digest. Returns a structured mismatch
    /// error carrying both sides.
    pub fn verify(&self, expected: &[u8]) -> Result<()> {
        if self.bytes == expected {
            Ok(())
        } else {
            Err(DigestError::Mismatch {
                expected: expected.to_vec(),
                actual: self.bytes.clone(),
            })
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash everything `reader` yields, in blocks of `block_size` bytes.
/// A block size of zero is bumped to one.
pub fn hash_reader<R: Read, H: Hasher>(
    mut reader: R,
    mut hasher: H,
    block_size: usize,
) -> Result<Vec<u8>> {
    let mut block = vec![0u8; block_size.max(1)];
    loop {
        match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => hasher.update(&block[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(hasher.finalize())
}

/// Checksum a file, reading it in `block_size`-byte blocks.
pub fn hash_file(
    path: impl AsRef<Path>,
    algorithm: Algorithm,
    block_size: usize,
) -> Result<Checksum> {
    let file = File::open(path.as_ref())?;
    let bytes = hash_reader(file, algorithm.hasher(), block_size)?;
    Ok(Checksum { algorithm, bytes })
}

/// Checksum an in-memory byte buffer.
pub fn hash_bytes(data: &[u8], algorithm: Algorithm) -> Checksum {
    let mut hasher = algorithm.hasher();
    hasher.update(data);
    Checksum {
        algorithm,
        bytes: hasher.finalize(),
    }
}
