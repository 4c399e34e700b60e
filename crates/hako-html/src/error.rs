#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: u64, actual: u64 },

    #[cfg(feature = "decode")]
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
