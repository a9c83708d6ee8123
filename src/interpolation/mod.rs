// common helpers
pub mod config;
pub mod errors;
pub mod point;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

// core
pub mod store;
pub mod divided;
pub mod evaluate;
pub mod formula;
pub mod model;

pub use errors::InterpolationError;
pub use model::{InterpolationModel, NewtonPolynomial};
pub use point::Point;
