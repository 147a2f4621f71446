//! Sample points and validated point sets.
//!
//! A [`PointSet`] is the snapshot every interpolator consumes. It holds at
//! least two finite `(x, y)` samples, in the order the caller supplied them.
//! Sets are never edited in place: [`PointSet::with_point`],
//! [`PointSet::without_point`] and [`PointSet::replace_point`] each return a
//! fresh set.
//!
//! Method-specific layout rules (equal spacing, distinct abscissae) are not
//! checked here; each interpolator checks its own.

use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;

/// Immutable `(x, y)` sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline] pub fn x(&self) -> f64 { self.x }
    #[inline] pub fn y(&self) -> f64 { self.y }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Ordered collection of at least two finite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validates and wraps `points`.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientData`] if fewer than 2 points.
    /// - [`InterpolationError::NonFiniteVec`] with the index of the first
    ///   point holding a NaN or infinite coordinate.
    pub fn new(points: Vec<Point>) -> Result<Self, InterpolationError> {
        if points.len() < 2 {
            return Err(InterpolationError::InsufficientData { got: points.len() });
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        Ok(Self { points })
    }

    /// Builds a set from parallel `x` and `y` slices.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let points = x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| Point::new(xi, yi))
            .collect();
        Self::new(points)
    }

    #[inline] pub fn len(&self) -> usize { self.points.len() }

    /// Always `false`.
    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    #[inline] pub fn points(&self) -> &[Point] { &self.points }
    #[inline] pub fn get(&self, idx: usize) -> Option<Point> { self.points.get(idx).copied() }

    // indexing cannot panic: `new` guarantees len >= 2
    #[inline] pub fn first(&self) -> Point { self.points[0] }
    #[inline] pub fn last(&self) -> Point { self.points[self.points.len() - 1] }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    pub fn xs(&self) -> Vec<f64> { self.points.iter().map(Point::x).collect() }
    pub fn ys(&self) -> Vec<f64> { self.points.iter().map(Point::y).collect() }

    /// Same samples, opposite order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// New set with `p` appended.
    pub fn with_point(&self, p: Point) -> Result<Self, InterpolationError> {
        let mut points = self.points.clone();
        points.push(p);
        Self::new(points)
    }

    /// New set without the point at `idx`.
    ///
    /// # Errors
    /// - [`InterpolationError::IndexOutOfRange`] if `idx >= len`.
    /// - [`InterpolationError::InsufficientData`] if removal leaves fewer than 2.
    pub fn without_point(&self, idx: usize) -> Result<Self, InterpolationError> {
        self.check_idx(idx)?;
        let mut points = self.points.clone();
        points.remove(idx);
        Self::new(points)
    }

    /// New set with the point at `idx` replaced by `p`.
    pub fn replace_point(&self, idx: usize, p: Point) -> Result<Self, InterpolationError> {
        self.check_idx(idx)?;
        let mut points = self.points.clone();
        points[idx] = p;
        Self::new(points)
    }

    fn check_idx(&self, idx: usize) -> Result<(), InterpolationError> {
        if idx >= self.points.len() {
            return Err(InterpolationError::IndexOutOfRange { idx, len: self.points.len() });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = InterpolationError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        PointSet::new(points)
    }
}

impl TryFrom<&[(f64, f64)]> for PointSet {
    type Error = InterpolationError;

    fn try_from(pairs: &[(f64, f64)]) -> Result<Self, Self::Error> {
        PointSet::new(pairs.iter().copied().map(Point::from).collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
