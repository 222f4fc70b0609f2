//! Image file integration for Ramplut.
//!
//! Decodes image files into [`GrayImage`](ramplut_core::GrayImage) samples
//! and renders original/transformed/curve comparison panels through the
//! `image` crate. The core engine never touches the filesystem; everything
//! that can fail for reasons outside the table math lives here.

mod error;
mod sink;
mod source;

pub use error::ImageIoError;
pub use sink::{render_comparison, save_comparison, save_gray, to_buffer};
pub use source::{from_buffer, load_gray};
