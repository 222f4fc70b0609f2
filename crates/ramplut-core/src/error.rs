//! Error taxonomy shared by the table builder and the applicator.

/// Errors raised while building or applying an intensity table.
///
/// Specification errors surface at build time only; sample errors surface
/// at apply time only. Neither produces a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LutError {
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),
    #[error("sample value {value} at row {row}, column {col} is outside 0..=255")]
    InvalidPixelValue { row: u32, col: u32, value: i64 },
    #[error("expected {expected} samples for the image shape, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub(crate) fn invalid_spec(reason: impl Into<String>) -> LutError {
    LutError::InvalidSpecification(reason.into())
}
