//! Decoding image files into 8-bit grayscale samples.

use std::path::Path;

use ramplut_core::GrayImage;

use crate::error::ImageIoError;

/// Load an image from disk as 8-bit grayscale.
///
/// Any format the `image` crate decodes is accepted; color sources are
/// converted to luma. Missing files and decode failures both surface as
/// [`ImageIoError::SourceUnavailable`] and are not retried.
pub fn load_gray(path: &Path) -> Result<GrayImage, ImageIoError> {
    let decoded = image::open(path).map_err(|source| ImageIoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let luma = decoded.to_luma8();
    tracing::info!(
        "loaded {} ({}x{}, source {:?})",
        path.display(),
        luma.width(),
        luma.height(),
        decoded.color()
    );
    from_buffer(luma)
}

/// Take ownership of an `image` crate luma buffer.
pub fn from_buffer(buffer: image::GrayImage) -> Result<GrayImage, ImageIoError> {
    let (width, height) = buffer.dimensions();
    Ok(GrayImage::new(width, height, buffer.into_raw())?)
}
