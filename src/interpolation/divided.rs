//! Newton Divided Differences
//!
//! Builds the [divided-difference](https://en.wikipedia.org/wiki/Divided_differences)
//! table bottom-up:
//!
//! ```text
//! f[x_i]          = y_i
//! f[x_i..x_j]     = (f[x_i..x_{j-1}] - f[x_{i+1}..x_j]) / (x_i - x_j)
//! coefficients[k] = f[x_0..x_k]
//! ```
//!
//! The full triangle is kept in one flat arena, one row per order `m`
//! holding the `n - m` differences over `m + 1` consecutive points. The
//! coefficients are the first entry of every row.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


/// Triangular divided-difference table over an ordered point sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DividedDifferenceTable {
    n           : usize,
    arena       : Vec<f64>,
    coefficients: Vec<f64>,
}

impl DividedDifferenceTable {
    /// Computes the whole table for `points` in their current order.
    ///
    /// Callers guarantee pairwise distinct abscissas. Differences that
    /// still overflow are reported instead of being stored.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteCoefficient`] with the lowest
    ///   coefficient index that came out non-finite.
    pub fn build(points: &[Point]) -> Result<Self, InterpolationError> {
        let n = points.len();
        let mut arena = Vec::with_capacity(n * (n + 1) / 2);

        arena.extend(points.iter().map(|p| p.y));

        for m in 1..n {
            let prev = row_offset(n, m - 1);
            for i in 0..n - m {
                let lo = arena[prev + i];
                let hi = arena[prev + i + 1];
                arena.push((lo - hi) / (points[i].x - points[i + m].x));
            }
        }

        let coefficients: Vec<f64> = (0..n).map(|m| arena[row_offset(n, m)]).collect();
        if let Some(idx) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(InterpolationError::NonFiniteCoefficient { idx });
        }

        Ok(Self { n, arena, coefficients })
    }

    /// `f[x_i..x_j]`, or `None` unless `i <= j < n`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i > j || j >= self.n {
            return None;
        }
        self.arena.get(row_offset(self.n, j - i) + i).copied()
    }

    /// `coefficients[k] = f[x_0..x_k]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self)      -> usize { self.n }
    pub fn is_empty(&self) -> bool  { self.n == 0 }
}


/// Start of row `m` (differences of order `m`) in the flat arena.
#[inline]
fn row_offset(n: usize, m: usize) -> usize {
    m * n - m * m.saturating_sub(1) / 2
}
