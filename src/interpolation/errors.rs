use thiserror::Error;

/// Errors raised by point mutations and configuration.
///
/// Every mutation that fails leaves the model exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("duplicate abscissa: x={x} collides with point at index {existing_idx}")]
    DuplicateAbscissa { x: f64, existing_idx: usize },

    #[error("index {idx} out of range for {len} points")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("no points stored")]
    EmptyStore,

    #[error("non-finite point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("divided difference overflowed at coefficient {idx}")]
    NonFiniteCoefficient { idx: usize },

    #[error("point ({x}, {y}) not found")]
    PointNotFound { x: f64, y: f64 },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("invalid x_tol {got} must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("invalid precision {got} must be <= {max}")]
    InvalidPrecision { got: usize, max: usize },
}
