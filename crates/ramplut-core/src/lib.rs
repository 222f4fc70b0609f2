//! Ramplut Core — piecewise-linear intensity tables for 8-bit grayscale.
//!
//! This crate builds 256-entry lookup tables from breakpoint or
//! window/level specifications and applies them to grayscale images.
//! No file, display, or GPU dependencies.

pub mod error;
pub mod image;
pub mod presets;
pub mod scopes;
pub mod transform;

// Re-exports for convenience.
pub use error::LutError;
pub use image::GrayImage;
pub use scopes::Histogram;
pub use transform::apply::apply_samples;
pub use transform::lut::{Intensity, LUT_SIZE, Lut, quantize};
pub use transform::params::{Anchor, LutSpec, WindowSpec};
