use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("checksum mismatch: expected {}, got {}", hex::encode(expected), hex::encode(actual))]
    Mismatch { expected: Vec<u8>, actual: Vec<u8> },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
