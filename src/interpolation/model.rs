//! Interpolation model facade.
//!
//! [`InterpolationModel`] owns the point sequence exclusively and keeps the
//! divided-difference table in step with it. Every mutation runs against a
//! candidate copy of the store, rebuilds the table from scratch, and is
//! committed only when both succeed. A failed mutation leaves the model
//! untouched, so readers never observe stale or non-finite coefficients.
//!
//! # Concurrency
//! The model is plain data with no interior locking. Share it behind a
//! mutex/rwlock, or hand readers a [`NewtonPolynomial`] from
//! [`InterpolationModel::snapshot`].


use std::fmt;

use log::{debug, trace};

use crate::interpolation::config::ModelCfg;
use crate::interpolation::divided::DividedDifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::evaluate::nested_eval;
use crate::interpolation::formula::newton_formula;
use crate::interpolation::point::Point;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::store::PointStore;
use crate::interpolation::traits::Interpolator;


/// Mutable set of sample points plus its Newton-form interpolant.
///
/// # Construction
/// - [`InterpolationModel::new`] for the zero polynomial with defaults.
/// - [`InterpolationModel::with_cfg`] for a custom [`ModelCfg`].
/// - [`InterpolationModel::from_xy`] / [`InterpolationModel::from_points`]
///   to start from existing samples.
#[derive(Debug, Clone, Default)]
pub struct InterpolationModel {
    store    : PointStore,
    table    : DividedDifferenceTable,
    abscissas: Vec<f64>,
}

impl InterpolationModel {
    pub fn new() -> Self {
        Self::with_cfg(ModelCfg::new())
    }

    pub fn with_cfg(cfg: ModelCfg) -> Self {
        Self {
            store    : PointStore::new(cfg),
            table    : DividedDifferenceTable::default(),
            abscissas: Vec::new(),
        }
    }

    /// Builds the interpolant through `(xs[i], ys[i])`, in that order.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if the slices differ in length.
    /// - Any error [`InterpolationModel::add_point`] would raise.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::UnequalLength { x_len: xs.len(), y_len: ys.len() });
        }
        Self::from_points(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)))
    }

    pub fn from_points<I>(points: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut model = Self::new();
        model.extend(points)?;
        Ok(model)
    }

    /// Appends all `points` as one mutation: either every point is added
    /// or none is.
    pub fn extend<I>(&mut self, points: I) -> Result<(), InterpolationError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.apply("extend", |store| {
            points.into_iter().try_for_each(|p| store.append(p.x, p.y))
        })
    }

    /// Appends `(x, y)` to the end of the order.
    ///
    /// # Errors
    /// - [`InterpolationError::DuplicateAbscissa`] if `x` collides with an
    ///   existing point.
    /// - [`InterpolationError::NonFinitePoint`] for NaN/infinite input.
    /// - [`InterpolationError::NonFiniteCoefficient`] if the new point makes
    ///   a divided difference overflow.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), InterpolationError> {
        self.apply("add_point", |store| store.append(x, y))
    }

    pub fn remove_at(&mut self, idx: usize) -> Result<Point, InterpolationError> {
        self.apply("remove_at", |store| store.remove_at(idx))
    }

    /// Removes the point nearest to `(x, y)`, lowest index on ties.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyStore`] if there are no points.
    pub fn remove_nearest_to(&mut self, x: f64, y: f64) -> Result<Point, InterpolationError> {
        self.apply("remove_nearest_to", |store| store.remove_nearest(&Point::new(x, y)))
    }

    /// Removes the sample equal to `p`.
    pub fn remove_point(&mut self, p: Point) -> Result<Point, InterpolationError> {
        self.apply("remove_point", |store| {
            let idx = store
                .position(&p)
                .ok_or(InterpolationError::PointNotFound { x: p.x, y: p.y })?;
            store.remove_at(idx)
        })
    }

    /// Moves the point at `idx` to `(x, y)` without changing its place in
    /// the order.
    ///
    /// # Errors
    /// - [`InterpolationError::IndexOutOfRange`]
    /// - [`InterpolationError::DuplicateAbscissa`] if `x` collides with
    ///   another point.
    pub fn move_point(&mut self, idx: usize, x: f64, y: f64) -> Result<(), InterpolationError> {
        self.apply("move_point", |store| store.move_at(idx, x, y))
    }

    /// Back to the zero polynomial.
    pub fn clear(&mut self) {
        self.store.clear();
        self.table = DividedDifferenceTable::default();
        self.abscissas.clear();
        debug!("cleared model");
    }

    /// Index of the point nearest to `(x, y)`, for drag hit-testing.
    ///
    /// `None` for an empty model or a non-finite pointer.
    pub fn nearest_index(&self, x: f64, y: f64) -> Option<usize> {
        self.store.nearest_index(&Point::new(x, y))
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.store.position(p).is_some()
    }

    pub fn points(&self) -> &[Point] {
        self.store.ordered()
    }

    /// `coefficients[k] = f[x_0..x_k]` for the current order.
    pub fn coefficients(&self) -> &[f64] {
        self.table.coefficients()
    }

    /// `f[x_i..x_j]` from the retained table.
    pub fn difference(&self, i: usize, j: usize) -> Option<f64> {
        self.table.get(i, j)
    }

    /// Degree bound `n - 1`; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.store.len().checked_sub(1)
    }

    pub fn len(&self)      -> usize { self.store.len() }
    pub fn is_empty(&self) -> bool  { self.store.is_empty() }
    pub fn cfg(&self)      -> &ModelCfg { self.store.cfg() }

    /// `P(x)`; `0.0` when there are no points.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        nested_eval(self.table.coefficients(), &self.abscissas, x)
    }

    pub fn formula(&self) -> String {
        newton_formula(self.table.coefficients(), self.store.ordered(), self.cfg().precision())
    }

    /// Evaluates every abscissa in `xs`, e.g. once per display column.
    pub fn trace(&self, xs: &[f64]) -> InterpolationReport {
        let mut report = InterpolationReport::new(self.len(), xs.len());
        report.evaluated.extend(xs.iter().map(|&xq| self.evaluate(xq)));
        report
    }

    /// Owned, read-only copy of the current interpolant.
    pub fn snapshot(&self) -> NewtonPolynomial {
        NewtonPolynomial {
            coefficients: self.table.coefficients().to_vec(),
            points      : self.store.ordered().to_vec(),
            abscissas   : self.abscissas.clone(),
            precision   : self.cfg().precision(),
        }
    }

    /// Runs `op` on a candidate store and commits it with a fresh table.
    fn apply<T, F>(&mut self, name: &str, op: F) -> Result<T, InterpolationError>
    where
        F: FnOnce(&mut PointStore) -> Result<T, InterpolationError>,
    {
        let mut candidate = self.store.clone();

        let outcome = op(&mut candidate).and_then(|out| {
            let table = DividedDifferenceTable::build(candidate.ordered())?;
            Ok((out, table))
        });

        match outcome {
            Ok((out, table)) => {
                trace!("{name}: {} -> {} points", self.store.len(), candidate.len());
                self.abscissas = candidate.ordered().iter().map(|p| p.x).collect();
                self.store = candidate;
                self.table = table;
                debug!("recomputed {} coefficients", self.table.len());
                Ok(out)
            }
            Err(e) => {
                debug!("{name} rejected: {e}");
                Err(e)
            }
        }
    }
}

impl Interpolator for InterpolationModel {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl fmt::Display for InterpolationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}


/// Frozen interpolant detached from the model.
///
/// Cheap to clone and safe to send to another thread while the model
/// keeps mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    coefficients: Vec<f64>,
    points      : Vec<Point>,
    abscissas   : Vec<f64>,
    precision   : usize,
}

impl NewtonPolynomial {
    pub fn coefficients(&self) -> &[f64]   { &self.coefficients }
    pub fn points(&self)       -> &[Point] { &self.points }

    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn formula(&self) -> String {
        newton_formula(&self.coefficients, &self.points, self.precision)
    }
}

impl Interpolator for NewtonPolynomial {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        nested_eval(&self.coefficients, &self.abscissas, x)
    }
}

impl fmt::Display for NewtonPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}
