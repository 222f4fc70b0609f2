//! Grayscale image representation for the table applicator.

use crate::error::LutError;
use crate::transform::lut::Intensity;

/// An 8-bit single-channel image stored row-major.
///
/// The pixel buffer always holds exactly `width * height` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<Intensity>,
}

impl GrayImage {
    /// Wrap a row-major pixel buffer, checking it against the shape.
    pub fn new(width: u32, height: u32, pixels: Vec<Intensity>) -> Result<Self, LutError> {
        let expected = pixel_count(width, height);
        if pixels.len() != expected {
            return Err(LutError::ShapeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: Intensity) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; pixel_count(width, height)],
        }
    }

    /// Build an image by evaluating `f(row, col)` for every position.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Intensity) -> Self {
        let mut pixels = Vec::with_capacity(pixel_count(width, height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Sample at `(row, col)`, or `None` outside the image.
    pub fn get(&self, row: u32, col: u32) -> Option<Intensity> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Intensity] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Intensity]> {
        // A zero-width image has an empty buffer, so any chunk size yields nothing.
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = GrayImage::new(3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            LutError::ShapeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let img = GrayImage::new(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();
        assert_eq!(img.shape(), (2, 3));
        assert_eq!(img.get(0, 2), Some(2));
        assert_eq!(img.get(1, 0), Some(10));
        assert_eq!(img.get(2, 0), None);
        assert_eq!(img.get(0, 3), None);
    }

    #[test]
    fn test_rows_and_from_fn_agree() {
        let img = GrayImage::from_fn(4, 3, |row, col| (row * 10 + col) as u8);
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[20, 21, 22, 23]);
    }

    #[test]
    fn test_empty_image_has_no_rows() {
        let img = GrayImage::filled(0, 5, 7);
        assert_eq!(img.rows().count(), 0);
        assert!(img.pixels().is_empty());
    }
}
