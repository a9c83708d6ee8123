//! Interactive polynomial interpolation.
//!
//! [`interpolation::model::InterpolationModel`] owns a set of sample points
//! and keeps the Newton-form coefficients of the unique minimal-degree
//! interpolant in sync with every mutation.

pub mod interpolation;
