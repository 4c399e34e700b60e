#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("chunk length must not be zero")]
    ZeroChunkLength,

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("invalid version: {0}")]
    Version(#[from] semver::Error),
}

pub type Result<T> = std::result::Result<T, UtilError>;
