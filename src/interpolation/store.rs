//! Ordered point storage.
//!
//! [`PointStore`] holds the sample points in insertion order. The order
//! fixes the Newton basis `(x - x0), (x - x0)(x - x1), ...`, so every
//! mutation is positional and never reorders the remaining points.
//!
//! Mutations validate before touching the sequence:
//! - coordinates must be finite
//! - no two points may share an abscissa (within [`ModelCfg::x_tol`])
//! - indices must be in range
//!
//! The store knows nothing about coefficients; the owning model recomputes
//! after each successful call.


use crate::interpolation::config::ModelCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
    cfg   : ModelCfg,
}

impl PointStore {
    pub fn new(cfg: ModelCfg) -> Self {
        Self { points: Vec::new(), cfg }
    }

    /// Adds a point at the end of the order.
    pub fn append(&mut self, x: f64, y: f64) -> Result<(), InterpolationError> {
        let p = Point::new(x, y);
        check_finite(&p)?;
        self.check_abscissa(x, None)?;

        self.points.push(p);
        Ok(())
    }

    /// Removes and returns the point at `idx`.
    pub fn remove_at(&mut self, idx: usize) -> Result<Point, InterpolationError> {
        self.check_index(idx)?;
        Ok(self.points.remove(idx))
    }

    /// Index of the point closest to `target`, lowest index on ties.
    ///
    /// `None` when the store is empty or `target` is not finite.
    pub fn nearest_index(&self, target: &Point) -> Option<usize> {
        if !target.is_finite() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = p.distance(target);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Removes the point closest to `target` and returns it.
    pub fn remove_nearest(&mut self, target: &Point) -> Result<Point, InterpolationError> {
        check_finite(target)?;
        let idx = self.nearest_index(target).ok_or(InterpolationError::EmptyStore)?;
        Ok(self.points.remove(idx))
    }

    /// Relocates the point at `idx`, keeping its position in the order.
    pub fn move_at(&mut self, idx: usize, x: f64, y: f64) -> Result<(), InterpolationError> {
        self.check_index(idx)?;
        let p = Point::new(x, y);
        check_finite(&p)?;
        self.check_abscissa(x, Some(idx))?;

        self.points[idx] = p;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Read-only view in insertion/mutation order.
    pub fn ordered(&self) -> &[Point] {
        &self.points
    }

    pub fn position(&self, p: &Point) -> Option<usize> {
        self.points.iter().position(|q| q == p)
    }

    pub fn len(&self)      -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool  { self.points.is_empty() }
    pub fn cfg(&self)      -> &ModelCfg { &self.cfg }

    fn check_index(&self, idx: usize) -> Result<(), InterpolationError> {
        if idx >= self.points.len() {
            return Err(InterpolationError::IndexOutOfRange { idx, len: self.points.len() });
        }
        Ok(())
    }

    /// `skip` excludes the point being moved from the collision check.
    fn check_abscissa(&self, x: f64, skip: Option<usize>) -> Result<(), InterpolationError> {
        let hit = self.points
            .iter()
            .enumerate()
            .find(|&(i, p)| Some(i) != skip && self.cfg.same_abscissa(p.x, x));

        match hit {
            Some((existing_idx, _)) => Err(InterpolationError::DuplicateAbscissa { x, existing_idx }),
            None => Ok(()),
        }
    }
}


fn check_finite(p: &Point) -> Result<(), InterpolationError> {
    if !p.is_finite() {
        return Err(InterpolationError::NonFinitePoint { x: p.x, y: p.y });
    }
    Ok(())
}
