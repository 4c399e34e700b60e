//! Checksum and digest computation over files and byte buffers.
//!
//! Eight algorithms behind one incremental interface: Adler-32, CRC-32,
//! MD5, SHA-1, and the SHA-2 family. The two plain checksums are adapted
//! to the same [`Hasher`] trait the digests use, so callers never care
//! which kind they asked for.
//!
//! # Example
//!
//! ```
//! use hako_digest::{hash_bytes, Algorithm};
//!
//! let sum = hash_bytes(b"hello world", Algorithm::Sha256);
//! assert_eq!(
//!     sum.to_hex(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
//! );
//! sum.verify(&sum.as_bytes().to_vec()).unwrap();
//! ```
//!
//! Files are read in fixed-size blocks ([`DEFAULT_BLOCK_SIZE`] unless told
//! otherwise), so hashing never loads the whole file.

pub use self::error::{DigestError, Result};
pub use self::hasher::{Adler32Hasher, Crc32Hasher, DigestHasher, Hasher};
pub use self::sum::{
    Algorithm, Checksum, DEFAULT_BLOCK_SIZE, hash_bytes, hash_file, hash_reader,
};

mod error;
mod hasher;
mod sum;
