use std::path::PathBuf;

use ramplut_core::LutError;

#[derive(Debug, thiserror::Error)]
pub enum ImageIoError {
    #[error("image source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("original is {original:?} but transformed is {transformed:?} (rows, columns)")]
    ShapeMismatch {
        original: (u32, u32),
        transformed: (u32, u32),
    },
    #[error(transparent)]
    Lut(#[from] LutError),
}
