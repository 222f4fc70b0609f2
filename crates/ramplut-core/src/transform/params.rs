//! Transformation specifications consumed by the table builder.
//!
//! A `LutSpec` is authored by the caller and is the single source of truth
//! for one table. Specs serialize to a small JSON document:
//!
//! ```json
//! { "kind": "window", "level": 100.0, "width": 70.0 }
//! {
//!   "kind": "breakpoints",
//!   "anchors": [{ "input": 0, "output": 0.0 }, { "input": 255, "output": 255.0 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LutError, invalid_spec};
use crate::transform::lut::Intensity;

/// A fixed `(input, output)` vertex of a piecewise-linear transform.
///
/// The output is real-valued and may lie outside `[0, 255]`; it is rounded
/// and clamped when the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub input: Intensity,
    pub output: f64,
}

impl Anchor {
    pub const fn new(input: Intensity, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(Intensity, f64)> for Anchor {
    fn from((input, output): (Intensity, f64)) -> Self {
        Self::new(input, output)
    }
}

/// A window/level ramp: `[level - width/2, level + width/2]` maps linearly
/// onto `[out_low, out_high]`, with flat regions outside.
///
/// `out_low > out_high` is allowed and produces an inverted ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Center of the ramp.
    pub level: f64,
    /// Span of the ramp. Must be positive.
    pub width: f64,
    /// Output below the window. Default: 0.
    #[serde(default = "WindowSpec::default_out_low")]
    pub out_low: f64,
    /// Output above the window. Default: 255.
    #[serde(default = "WindowSpec::default_out_high")]
    pub out_high: f64,
}

impl WindowSpec {
    /// Full-range window (`out_low = 0`, `out_high = 255`).
    pub const fn new(level: f64, width: f64) -> Self {
        Self {
            level,
            width,
            out_low: Self::default_out_low(),
            out_high: Self::default_out_high(),
        }
    }

    pub const fn with_output(self, out_low: f64, out_high: f64) -> Self {
        Self {
            out_low,
            out_high,
            ..self
        }
    }

    /// `(lo, hi)` edges of the ramp.
    pub fn bounds(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.level - half, self.level + half)
    }

    pub fn validate(&self) -> Result<(), LutError> {
        if !self.level.is_finite() {
            return Err(invalid_spec(format!("level {} is not finite", self.level)));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(invalid_spec(format!(
                "width must be a positive finite number, got {}",
                self.width
            )));
        }
        if !self.out_low.is_finite() || !self.out_high.is_finite() {
            return Err(invalid_spec(format!(
                "output range [{}, {}] is not finite",
                self.out_low, self.out_high
            )));
        }
        Ok(())
    }

    const fn default_out_low() -> f64 {
        0.0
    }

    const fn default_out_high() -> f64 {
        255.0
    }
}

/// How a table is built: explicit anchors or a window/level ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LutSpec {
    /// Piecewise-linear segments between consecutive anchors, flat outside.
    Breakpoints { anchors: Vec<Anchor> },
    /// Single linear ramp with flat clamping outside the window.
    Window(WindowSpec),
}

impl LutSpec {
    /// Breakpoint spec from `(input, output)` pairs.
    pub fn breakpoints<A: Into<Anchor>>(anchors: impl IntoIterator<Item = A>) -> Self {
        Self::Breakpoints {
            anchors: anchors.into_iter().map(Into::into).collect(),
        }
    }

    /// Full-range window spec.
    pub const fn window(level: f64, width: f64) -> Self {
        Self::Window(WindowSpec::new(level, width))
    }

    /// Short label for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Breakpoints { .. } => "breakpoints",
            Self::Window(_) => "window",
        }
    }

    /// Check structural validity without building a table.
    pub fn validate(&self) -> Result<(), LutError> {
        match self {
            Self::Breakpoints { anchors } => validate_anchors(anchors),
            Self::Window(window) => window.validate(),
        }
    }

    /// Parse and validate a JSON spec document.
    pub fn from_json(text: &str) -> Result<Self, LutError> {
        let spec: Self = serde_json::from_str(text)
            .map_err(|e| invalid_spec(format!("malformed spec document: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Pretty-printed JSON document.
    ///
    /// Only valid specs are written; serde_json would otherwise emit
    /// non-finite numbers as `null`, which cannot be read back.
    pub fn to_json(&self) -> Result<String, LutError> {
        self.validate()?;
        serde_json::to_string_pretty(self)
            .map_err(|e| invalid_spec(format!("cannot serialize spec document: {e}")))
    }
}

fn validate_anchors(anchors: &[Anchor]) -> Result<(), LutError> {
    if anchors.len() < 2 {
        return Err(invalid_spec(format!(
            "at least 2 anchors are required, got {}",
            anchors.len()
        )));
    }
    if let Some((i, anchor)) = anchors
        .iter()
        .enumerate()
        .find(|(_, a)| !a.output.is_finite())
    {
        return Err(invalid_spec(format!(
            "anchor {i} output {} is not finite",
            anchor.output
        )));
    }
    for (i, pair) in anchors.windows(2).enumerate() {
        if pair[1].input <= pair[0].input {
            return Err(invalid_spec(format!(
                "anchor inputs must be strictly increasing: anchor {} has input {} after {}",
                i + 1,
                pair[1].input,
                pair[0].input
            )));
        }
    }
    Ok(())
}
