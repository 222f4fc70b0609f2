//! Intensity histogram and histogram-derived window suggestions.
//!
//! Window/level parameters are usually tuned by looking at where the
//! tissue bands sit in the histogram. [`Histogram::suggest_window`] does
//! the same from percentiles: the window spans the intensities between the
//! `low` and `high` quantiles of the image.

use serde::Serialize;

use crate::error::{LutError, invalid_spec};
use crate::image::GrayImage;
use crate::transform::lut::{Intensity, LUT_SIZE};
use crate::transform::params::WindowSpec;

/// Sample counts per intensity.
///
/// Only built by [`Histogram::compute`], so `bins` always has 256 entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    bins: Vec<u32>,
    total: u64,
}

impl Histogram {
    /// Count every sample of `image`.
    pub fn compute(image: &GrayImage) -> Self {
        let mut bins = vec![0u32; LUT_SIZE];
        for &p in image.pixels() {
            bins[p as usize] += 1;
        }
        Self {
            bins,
            total: image.pixels().len() as u64,
        }
    }

    /// Bin counts indexed by intensity.
    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest bin count (for normalization).
    pub fn peak(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Smallest intensity whose cumulative count reaches `fraction` of the
    /// total. `fraction` is clamped to `[0, 1]`; `0` gives the darkest
    /// sample present, `1` the brightest. `None` for an empty histogram.
    pub fn percentile(&self, fraction: f64) -> Option<Intensity> {
        if self.total == 0 {
            return None;
        }
        let target = ((fraction.clamp(0.0, 1.0) * self.total as f64).ceil() as u64).max(1);
        let mut cumulative = 0u64;
        for (value, &count) in (0..=Intensity::MAX).zip(self.bins.iter()) {
            cumulative += u64::from(count);
            if cumulative >= target {
                return Some(value);
            }
        }
        Some(Intensity::MAX)
    }

    /// Full-range window covering the `[low, high]` quantile band.
    ///
    /// Requires `0 <= low < high <= 1` and a non-empty histogram. When the
    /// band collapses to a single intensity the width is widened to 1.
    pub fn suggest_window(&self, low: f64, high: f64) -> Result<WindowSpec, LutError> {
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low >= high {
            return Err(invalid_spec(format!(
                "quantile band [{low}, {high}] must satisfy 0 <= low < high <= 1"
            )));
        }
        let (Some(lo), Some(hi)) = (self.percentile(low), self.percentile(high)) else {
            return Err(invalid_spec("cannot derive a window from an empty histogram"));
        };

        let (lo, hi) = (f64::from(lo), f64::from(hi));
        let mut width = hi - lo;
        if width < 1.0 {
            tracing::warn!("quantile band collapsed to intensity {lo}; using width 1");
            width = 1.0;
        }
        Ok(WindowSpec::new(lo + width / 2.0, width))
    }
}
