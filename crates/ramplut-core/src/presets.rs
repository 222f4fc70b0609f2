//! Named tables for proton-density brain slices and midtone stretching.
//!
//! In proton-density images white matter sits darker than gray matter, so
//! each tissue band gets its own 70-wide window.

use crate::transform::params::{Anchor, LutSpec};

/// Window level of the white-matter band.
pub const WHITE_MATTER_LEVEL: f64 = 100.0;
/// Window level of the gray-matter band.
pub const GRAY_MATTER_LEVEL: f64 = 145.0;
/// Window width shared by both tissue bands.
pub const TISSUE_WINDOW_WIDTH: f64 = 70.0;

/// Accentuates white matter.
pub const fn white_matter() -> LutSpec {
    LutSpec::window(WHITE_MATTER_LEVEL, TISSUE_WINDOW_WIDTH)
}

/// Accentuates gray matter.
pub const fn gray_matter() -> LutSpec {
    LutSpec::window(GRAY_MATTER_LEVEL, TISSUE_WINDOW_WIDTH)
}

/// Identity outside `(50, 150]`; inside, `y = 100 + 1.55 × (x − 50)`,
/// which jumps up at 51 and saturates at 150 before dropping back to `y = x`.
pub fn midtone_stretch() -> LutSpec {
    LutSpec::Breakpoints {
        anchors: vec![
            Anchor::new(0, 0.0),
            Anchor::new(50, 50.0),
            Anchor::new(51, 101.55),
            Anchor::new(150, 255.0),
            Anchor::new(151, 151.0),
            Anchor::new(255, 255.0),
        ],
    }
}
