use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hako_digest::{Algorithm, DEFAULT_BLOCK_SIZE, hash_file};
use tracing::debug;

#[derive(Debug, Args)]
pub struct HashArg {
    /// File to checksum.
    pub file: PathBuf,

    /// One of adler32, crc32, md5, sha1, sha224, sha256, sha384, sha512.
    #[arg(short, long, default_value = "sha256")]
    pub algorithm: Algorithm,

    /// Read-block size in bytes.
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,
}

impl HashArg {
    pub fn run(self) -> Result<()> {
        debug!(file = %self.file.display(), algorithm = %self.algorithm, "hashing file");
        let sum = hash_file(&self.file, self.algorithm, self.block_size)
            .with_context(|| format!("failed to hash {}", self.file.display()))?;
        println!("{}  {}", sum, self.file.display());
        Ok(())
    }
}
