//! Encoding and side-by-side comparison rendering.
//!
//! The comparison panel is laid out left to right:
//! ```text
//!   ┌──────────┐   ┌─────────────┐   ┌─────────┐
//!   │ original │   │ transformed │   │  curve  │  256 × 256
//!   └──────────┘   └─────────────┘   └─────────┘
//! ```
//! Panels are top-aligned on a black canvas as tall as the tallest panel.

use std::path::Path;

use image::Luma;
use ramplut_core::{GrayImage, Lut, LutError};

use crate::error::ImageIoError;

/// Side length of the transfer curve plot.
const CURVE_PANEL: u32 = 256;
/// Horizontal gap between panels.
const PANEL_GAP: u32 = 8;
const BACKGROUND: u8 = 0;
const GRID: u8 = 48;
const CURVE: u8 = 255;
/// Grid line spacing in the curve plot, in intensity units.
const GRID_STEP: u32 = 64;

/// Copy into an `image` crate luma buffer.
pub fn to_buffer(image: &GrayImage) -> Result<image::GrayImage, ImageIoError> {
    let pixels = image.pixels().to_vec();
    let actual = pixels.len();
    image::GrayImage::from_raw(image.width(), image.height(), pixels).ok_or_else(|| {
        LutError::ShapeMismatch {
            expected: image.width() as usize * image.height() as usize,
            actual,
        }
        .into()
    })
}

/// Encode `image` to `path`; the format follows the file extension.
pub fn save_gray(path: &Path, image: &GrayImage) -> Result<(), ImageIoError> {
    to_buffer(image)?
        .save(path)
        .map_err(|source| ImageIoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Render original, transformed, and the table's transfer curve side by side.
pub fn render_comparison(
    original: &GrayImage,
    transformed: &GrayImage,
    lut: &Lut,
) -> Result<image::GrayImage, ImageIoError> {
    if original.shape() != transformed.shape() {
        return Err(ImageIoError::ShapeMismatch {
            original: original.shape(),
            transformed: transformed.shape(),
        });
    }

    let width = original.width();
    let canvas_width = 2 * (width + PANEL_GAP) + CURVE_PANEL;
    let canvas_height = original.height().max(CURVE_PANEL);
    let mut canvas =
        image::GrayImage::from_pixel(canvas_width, canvas_height, Luma([BACKGROUND]));

    image::imageops::replace(&mut canvas, &to_buffer(original)?, 0, 0);
    image::imageops::replace(
        &mut canvas,
        &to_buffer(transformed)?,
        i64::from(width + PANEL_GAP),
        0,
    );
    draw_curve(&mut canvas, lut, 2 * (width + PANEL_GAP));

    Ok(canvas)
}

/// Render the comparison panel and encode it to `path`.
pub fn save_comparison(
    path: &Path,
    original: &GrayImage,
    transformed: &GrayImage,
    lut: &Lut,
) -> Result<(), ImageIoError> {
    let canvas = render_comparison(original, transformed, lut)?;
    canvas.save(path).map_err(|source| ImageIoError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("saved comparison panel to {}", path.display());
    Ok(())
}

/// Plot `lut` into the 256 × 256 square whose top-left column is `left`.
///
/// Output 255 is the top row. Consecutive points are joined vertically so
/// jumps in the table stay visible.
fn draw_curve(canvas: &mut image::GrayImage, lut: &Lut, left: u32) {
    let max = CURVE_PANEL - 1;
    for i in (0..CURVE_PANEL).step_by(GRID_STEP as usize).chain([max]) {
        for j in 0..CURVE_PANEL {
            canvas.put_pixel(left + i, j, Luma([GRID]));
            canvas.put_pixel(left + j, max - i, Luma([GRID]));
        }
    }

    let mut previous_row: Option<u32> = None;
    for (input, output) in lut.curve() {
        let col = left + u32::from(input);
        let row = max - u32::from(output);
        let (from, to) = match previous_row {
            Some(prev) => (prev.min(row), prev.max(row)),
            None => (row, row),
        };
        for r in from..=to {
            canvas.put_pixel(col, r, Luma([CURVE]));
        }
        previous_row = Some(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramplut_core::LutSpec;

    #[test]
    fn test_to_buffer_is_row_major() {
        let img = GrayImage::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let buf = to_buffer(&img).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.get_pixel(2, 0).0, [3]);
        assert_eq!(buf.get_pixel(0, 1).0, [4]);
        assert_eq!(buf.as_raw(), img.pixels());
    }

    #[test]
    fn test_to_buffer_of_empty_image() {
        let buf = to_buffer(&GrayImage::filled(0, 7, 0)).unwrap();
        assert_eq!(buf.dimensions(), (0, 7));
        assert!(buf.as_raw().is_empty());
    }

    #[test]
    fn test_comparison_layout() {
        let original = GrayImage::filled(10, 300, 40);
        let lut = Lut::build(&LutSpec::window(100.0, 70.0)).unwrap();
        let transformed = lut.apply(&original);
        let canvas = render_comparison(&original, &transformed, &lut).unwrap();

        assert_eq!(canvas.dimensions(), (2 * (10 + PANEL_GAP) + CURVE_PANEL, 300));
        assert_eq!(canvas.get_pixel(0, 299).0, [40]);
        assert_eq!(canvas.get_pixel(10 + PANEL_GAP, 0).0, [0]);
        // Gap between panels stays background.
        assert_eq!(canvas.get_pixel(10, 0).0, [BACKGROUND]);
    }

    #[test]
    fn test_curve_plots_table_values() {
        let original = GrayImage::filled(2, 2, 0);
        let lut = Lut::identity();
        let canvas = render_comparison(&original, &original, &lut).unwrap();
        let left = 2 * (2 + PANEL_GAP);
        // Identity: input x lands on row 255 − x.
        for x in [1u32, 100, 200, 254] {
            assert_eq!(canvas.get_pixel(left + x, 255 - x).0, [CURVE]);
        }
        // A grid line away from the diagonal.
        assert_eq!(canvas.get_pixel(left + 64, 10).0, [GRID]);
    }

    #[test]
    fn test_comparison_rejects_mismatched_shapes() {
        let a = GrayImage::filled(2, 3, 0);
        let b = GrayImage::filled(3, 2, 0);
        let err = render_comparison(&a, &b, &Lut::identity()).unwrap_err();
        assert!(matches!(
            err,
            ImageIoError::ShapeMismatch {
                original: (3, 2),
                transformed: (2, 3)
            }
        ));
    }
}
