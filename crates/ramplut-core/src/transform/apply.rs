//! Table application: every output sample is `table[input sample]`.
//!
//! Application is a per-pixel map with no inter-pixel dependency. The input
//! is borrowed read-only and the output is a fresh buffer of the same shape.

use crate::error::LutError;
use crate::image::{GrayImage, pixel_count};
use crate::transform::lut::{Intensity, Lut};

impl Lut {
    /// Map every sample of `image` through this table.
    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let pixels = image.pixels.iter().map(|&p| self.get(p)).collect();
        tracing::debug!("applied table to {}x{} image", image.width, image.height);
        GrayImage {
            width: image.width,
            height: image.height,
            pixels,
        }
    }
}

/// Apply `lut` to raw row-major decoder samples that may be wider than 8 bits
/// or signed.
///
/// Every sample must already be a valid intensity. An out-of-range sample
/// means the upstream decoder is broken, so it fails the whole call with
/// [`LutError::InvalidPixelValue`] instead of being clamped.
pub fn apply_samples<S>(
    width: u32,
    height: u32,
    samples: &[S],
    lut: &Lut,
) -> Result<GrayImage, LutError>
where
    S: Copy + Into<i64>,
{
    let expected = pixel_count(width, height);
    if samples.len() != expected {
        return Err(LutError::ShapeMismatch {
            expected,
            actual: samples.len(),
        });
    }

    let pixels = samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let value: i64 = sample.into();
            Intensity::try_from(value)
                .map(|x| lut.get(x))
                .map_err(|_| LutError::InvalidPixelValue {
                    row: (i / width as usize) as u32,
                    col: (i % width as usize) as u32,
                    value,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GrayImage {
        width,
        height,
        pixels,
    })
}
