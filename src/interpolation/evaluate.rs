//! Nested evaluation of a Newton-form polynomial.
//!
//! ```text
//! P(x) = c[0] + (x - x[0]) * [ c[1] + (x - x[1]) * [ ... c[n-1] ... ] ]
//! ```
//!
//! O(n) multiplications per query, highest-order term first.


/// Evaluates `P(x)` from Newton coefficients and the abscissas of the
/// points that produced them.
///
/// Returns `0.0` for an empty coefficient sequence. Only the first
/// `coeffs.len() - 1` abscissas are read; panics if fewer are given.
#[inline]
pub fn nested_eval(coeffs: &[f64], abscissas: &[f64], x: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };

    let mut acc = 0.0;
    for (i, &ci) in rest.iter().enumerate().rev() {
        acc = (x - abscissas[i]) * (acc + ci);
    }

    acc + c0
}
