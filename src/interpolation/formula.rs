//! Renders a Newton-form polynomial as text.
//!
//! `c0 + (c1)(x - x0) + (c2)(x - x0)(x - x1) + ...`
//!
//! Coefficients and abscissas use a fixed number of fractional digits.

use crate::interpolation::point::Point;

pub const ZERO_POLYNOMIAL: &str = "y = 0";


/// `points` must hold at least `coeffs.len() - 1` entries, in the order the
/// coefficients were computed for.
pub fn newton_formula(coeffs: &[f64], points: &[Point], precision: usize) -> String {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return ZERO_POLYNOMIAL.to_string();
    };

    let mut out = format!("{c0:.precision$}");

    for (k, ck) in rest.iter().enumerate() {
        out.push_str(&format!(" + ({ck:.precision$})"));
        for p in &points[..=k] {
            out.push_str(&factor(p.x, precision));
        }
    }

    out
}


/// `(x - x0)`, or `(x + |x0|)` for negative abscissas.
///
/// The sign follows the rounded magnitude, so an abscissa that rounds to
/// zero always renders as `(x - 0.000)`.
fn factor(x0: f64, precision: usize) -> String {
    let mag = format!("{:.precision$}", x0.abs());
    let negative = x0 < 0.0 && mag.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { '+' } else { '-' };
    format!("(x {sign} {mag})")
}
