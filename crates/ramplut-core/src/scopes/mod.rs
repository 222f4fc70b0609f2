//! Scope computation over grayscale images.

pub mod histogram;

pub use histogram::Histogram;
