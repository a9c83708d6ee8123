//! Configuration for the interpolation model.
//!
//! Provides [`ModelCfg`] with the duplicate-abscissa tolerance
//! [`DEFAULT_X_TOL`] and the formula precision [`DEFAULT_PRECISION`].
//!
//! [`ModelCfg`] fields
//! - `x_tol`     : two abscissas closer than or equal to this are duplicates
//! - `precision` : fractional digits used when rendering the formula
//!
//! [`ModelCfg::new`] initializes the defaults; `set_*` methods validate
//! and consume `self`.


use crate::interpolation::errors::InterpolationError;

/// Exact equality.
pub const DEFAULT_X_TOL: f64 = 0.0;
pub const DEFAULT_PRECISION: usize = 3;
pub const MAX_PRECISION: usize = 17;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelCfg {
    x_tol    : f64,
    precision: usize,
}

impl Default for ModelCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCfg {
    pub fn new() -> Self {
        Self {
            x_tol    : DEFAULT_X_TOL,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.with_x_tol(v);
        Ok(self)
    }

    pub fn set_precision(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v > MAX_PRECISION {
            return Err(InterpolationError::InvalidPrecision { got: v, max: MAX_PRECISION });
        }
        self.with_precision(v);
        Ok(self)
    }

    // getters
    pub fn x_tol(&self)     -> f64   { self.x_tol }
    pub fn precision(&self) -> usize { self.precision }

    // setters (internal)
    pub(crate) fn with_x_tol(&mut self, v: f64)       { self.x_tol = v; }
    pub(crate) fn with_precision(&mut self, v: usize) { self.precision = v; }

    /// Whether `a` and `b` count as the same abscissa under this config.
    #[inline]
    pub(crate) fn same_abscissa(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.x_tol
    }
}
