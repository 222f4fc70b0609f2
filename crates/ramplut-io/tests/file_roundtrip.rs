//! Filesystem integration tests. Files are written under the system temp dir.
//!
//! Run with: `cargo test -p ramplut-io`

use std::path::PathBuf;

use ramplut_core::{GrayImage, Lut, presets};
use ramplut_io::{ImageIoError, load_gray, save_comparison, save_gray};

/// Fresh scratch directory unique to this process and test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ramplut-io-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Horizontal ramp across the full intensity range.
fn create_test_gradient(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |_, col| (col * 255 / (width - 1)) as u8)
}

#[test]
fn test_png_roundtrip_preserves_samples() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("gradient.png");
    let img = create_test_gradient(256, 4);

    save_gray(&path, &img).unwrap();
    let loaded = load_gray(&path).unwrap();
    assert_eq!(loaded, img);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_color_source_is_converted_to_luma() {
    let dir = scratch_dir("color");
    let path = dir.join("gray_rgb.png");
    let rgb = image::RgbImage::from_pixel(5, 3, image::Rgb([90, 90, 90]));
    rgb.save(&path).unwrap();

    let loaded = load_gray(&path).unwrap();
    assert_eq!(loaded.shape(), (3, 5));
    assert!(loaded.pixels().iter().all(|&p| p == 90));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let path = scratch_dir("missing").join("does-not-exist.png");
    let err = load_gray(&path).unwrap_err();
    assert!(matches!(err, ImageIoError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("does-not-exist.png"));
}

#[test]
fn test_undecodable_file_is_source_unavailable() {
    let dir = scratch_dir("garbage");
    let path = dir.join("not-an-image.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = load_gray(&path).unwrap_err();
    assert!(matches!(err, ImageIoError::SourceUnavailable { .. }));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_window_pipeline_writes_comparison() {
    let dir = scratch_dir("pipeline");
    let source = dir.join("slice.png");
    save_gray(&source, &create_test_gradient(64, 32)).unwrap();

    let original = load_gray(&source).unwrap();
    let lut = Lut::build(&presets::gray_matter()).unwrap();
    let transformed = lut.apply(&original);
    assert_eq!(transformed.shape(), original.shape());

    let panel = dir.join("comparison.png");
    save_comparison(&panel, &original, &transformed, &lut).unwrap();
    let rendered = image::open(&panel).unwrap().to_luma8();
    assert_eq!(rendered.dimensions(), (2 * (64 + 8) + 256, 256));

    std::fs::remove_dir_all(&dir).ok();
}
