//! Defines the struct returned by batch evaluation.
//!
//! [`InterpolationReport`] summarizes one tracing pass over a set of
//! abscissas, e.g. one per horizontal display unit.

/// Algorithm name carried by every report.
pub const ALGORITHM_NAME: &str = "newton";

/// Summary of a tracing pass.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (`"newton"`)
/// - `n_provided`     : number of sample points in the model
/// - `n_evaluated`    : number of abscissas evaluated
/// - `degree`         : degree bound of the interpolant, `None` when empty
/// - `evaluated`      : interpolated values at each abscissa
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub degree: Option<usize>,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: ALGORITHM_NAME,
            n_provided,
            n_evaluated,
            degree: n_provided.checked_sub(1),
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
