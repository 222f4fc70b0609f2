//! 256-entry intensity lookup tables and their construction.
//!
//! # Breakpoints
//! For anchors `(x_0, y_0) .. (x_n, y_n)` with strictly increasing inputs:
//! ```text
//!   x <= x_0            →  y_0
//!   x_k <= x <= x_k+1   →  y_k + (y_k+1 − y_k) × (x − x_k) / (x_k+1 − x_k)
//!   x >= x_n            →  y_n
//! ```
//!
//! # Window
//! With `lo = level − width/2` and `hi = level + width/2`:
//! ```text
//!   x <= lo      →  out_low
//!   x >= hi      →  out_high
//!   lo < x < hi  →  out_low + (x − lo) / (hi − lo) × (out_high − out_low)
//! ```
//! The window edges themselves belong to the flat regions.
//!
//! Every raw value then goes through [`quantize`]: round half to even,
//! then clamp to `[0, 255]`.

use crate::error::LutError;
use crate::transform::params::{Anchor, LutSpec, WindowSpec};

/// A single 8-bit sample value.
pub type Intensity = u8;

/// Number of entries in every table: one per possible intensity.
pub const LUT_SIZE: usize = 256;

/// A total mapping from input intensity to output intensity.
///
/// Indexed directly by the input value. Immutable once built, so a single
/// table can be shared across threads and reused for any number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lut {
    table: [Intensity; LUT_SIZE],
}

impl Lut {
    /// Build the table described by `spec`.
    ///
    /// Fails only with [`LutError::InvalidSpecification`]; any valid spec
    /// yields a fully populated table.
    pub fn build(spec: &LutSpec) -> Result<Self, LutError> {
        spec.validate()?;
        let lut = match spec {
            LutSpec::Breakpoints { anchors } => Self::from_fn(|x| interpolate(anchors, x)),
            LutSpec::Window(window) => Self::from_fn(|x| ramp(window, x)),
        };
        tracing::debug!("built {} table", spec.kind());
        Ok(lut)
    }

    /// The table that maps every intensity to itself.
    pub fn identity() -> Self {
        Self::from_fn(f64::from)
    }

    /// Wrap a precomputed table.
    pub const fn from_table(table: [Intensity; LUT_SIZE]) -> Self {
        Self { table }
    }

    fn from_fn(f: impl Fn(Intensity) -> f64) -> Self {
        let mut table = [0; LUT_SIZE];
        for (x, out) in (0..=Intensity::MAX).zip(table.iter_mut()) {
            *out = quantize(f(x));
        }
        Self { table }
    }

    /// Output for input `x`.
    #[inline]
    pub const fn get(&self, x: Intensity) -> Intensity {
        self.table[x as usize]
    }

    pub const fn as_array(&self) -> &[Intensity; LUT_SIZE] {
        &self.table
    }

    /// `(input, output)` pairs in input order, for plotting the transfer curve.
    pub fn curve(&self) -> impl Iterator<Item = (Intensity, Intensity)> + '_ {
        (0..=Intensity::MAX).map(|x| (x, self.get(x)))
    }

    /// The table equivalent to applying `self` and then `next`.
    pub fn then(&self, next: &Lut) -> Lut {
        let mut table = [0; LUT_SIZE];
        for (out, &mid) in table.iter_mut().zip(self.table.iter()) {
            *out = next.get(mid);
        }
        Self::from_table(table)
    }

    pub fn is_identity(&self) -> bool {
        self.curve().all(|(x, y)| x == y)
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

/// Discretize a raw transfer value: round half to even, then clamp.
///
/// Rounding happens first so that out-of-range outputs saturate rather
/// than wrap, and exact halves land on the even neighbor
/// (`127.5 → 128`, `152.5 → 152`).
#[inline]
pub fn quantize(value: f64) -> Intensity {
    value.round_ties_even().clamp(0.0, f64::from(Intensity::MAX)) as Intensity
}

/// Piecewise-linear interpolation through validated anchors.
fn interpolate(anchors: &[Anchor], x: Intensity) -> f64 {
    let (first, last) = match anchors {
        [first, .., last] => (first, last),
        // Validation guarantees at least two anchors.
        _ => return f64::from(x),
    };
    if x <= first.input {
        return first.output;
    }
    if x >= last.input {
        return last.output;
    }

    // First anchor strictly above x; always in 1..len here.
    let hi = anchors.partition_point(|a| a.input <= x);
    let (a, b) = (anchors[hi - 1], anchors[hi]);
    if x == a.input {
        return a.output;
    }

    let offset = f64::from(x - a.input);
    let span = f64::from(b.input - a.input);
    let scaled = (b.output - a.output) * offset;
    if scaled.is_finite() {
        a.output + scaled / span
    } else {
        blend(a.output, b.output, offset / span)
    }
}

/// Window/level ramp with the window edges assigned to the flat regions.
fn ramp(window: &WindowSpec, x: Intensity) -> f64 {
    let (lo, hi) = window.bounds();
    let x = f64::from(x);
    if x <= lo {
        window.out_low
    } else if x >= hi {
        window.out_high
    } else {
        let t = (x - lo) / (hi - lo);
        let delta = window.out_high - window.out_low;
        if delta.is_finite() {
            t * delta + window.out_low
        } else {
            blend(window.out_low, window.out_high, t)
        }
    }
}

/// `from + t × (to − from)` for endpoints whose scaled difference overflows `f64`.
///
/// Requires `0 < t < 1`; each term then stays finite.
fn blend(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
