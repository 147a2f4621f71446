//! Newton-Gregory (Finite-Difference) Interpolation
//!
//! Implements the forward and backward
//! [Newton-Gregory formulas](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula)
//! for equally spaced abscissae with step `h = x[1] - x[0]`.
//!
//! ```text
//! forward  : u = (xq - x[0])   / h,  P = y[0]   + Σₖ Δᵏy[0]     · u(u-1)…(u-k+1) / k!
//! backward : u = (xq - x[n-1]) / h,  P = y[n-1] + Σₖ Δᵏy[n-1-k] · u(u+1)…(u+k-1) / k!
//! ```
//!
//! The polynomial is assembled once as an [`Equation`]; estimates are sums of
//! its terms, so the rendered formula and the number always agree.

use log::debug;

use crate::interpolation::algorithms::{Algorithm, Direction};
use crate::interpolation::config::{
    check_query, impl_common_cfg, CommonCfg, SpacingTol, SPACING_EPS_FACTOR,
};
use crate::interpolation::differences::DifferenceTable;
use crate::interpolation::equation::{Equation, Factor, Term, Variable};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSet;
use crate::interpolation::report::{InterpolationReport, InterpolationResult};
use crate::interpolation::traits::Interpolator;


/// Newton-Gregory interpolation configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`]
/// - `direction` : [`Direction`], forward by default
///
/// # Construction
/// - Use [`NewtonGregoryCfg::new`] then optional setters.
///
/// # Defaults
/// - Zero-step threshold [`crate::interpolation::config::DEFAULT_X_TOL`] (exact zero).
/// - Uniform-spacing tolerance [`crate::interpolation::config::DEFAULT_SPACING_RTOL`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonGregoryCfg<'a> {
    common: CommonCfg<'a>,
    direction: Direction,
}
impl<'a> NewtonGregoryCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), direction: Direction::Forward }
    }

    pub fn set_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> Direction { self.direction }
}
impl_common_cfg!(NewtonGregoryCfg<'a>);

impl Default for NewtonGregoryCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


/// Newton-Gregory interpolant over one [`PointSet`] snapshot.
#[derive(Debug, Clone)]
pub struct NewtonGregory {
    direction: Direction,
    step: f64,
    table: DifferenceTable,
    equation: Equation,
}

impl NewtonGregory {
    /// Builds the interpolant with default [`SpacingTol`].
    pub fn new(points: &PointSet, direction: Direction) -> Result<Self, InterpolationError> {
        Self::with_tol(points, direction, SpacingTol::default())
    }

    /// Builds the interpolant.
    ///
    /// # Errors
    /// - [`InterpolationError::DegenerateSpacing`] if `|x[1] - x[0]| <= tol.min_spacing`.
    /// - [`InterpolationError::NonUniformSpacing`] if any later gap differs from
    ///   `h` beyond the [`SpacingTol`] allowance.
    pub fn with_tol(
        points: &PointSet,
        direction: Direction,
        tol: SpacingTol,
    ) -> Result<Self, InterpolationError> {
        let step  = uniform_step(points, tol)?;
        let table = DifferenceTable::build(points);
        let equation = expand(points, &table, step, direction);

        debug!(
            "{}: built over {} points, h={}",
            Algorithm::NewtonGregory(direction),
            points.len(),
            step,
        );

        Ok(Self { direction, step, table, equation })
    }

    #[inline] pub fn direction(&self) -> Direction { self.direction }
    #[inline] pub fn step(&self) -> f64 { self.step }
    #[inline] pub fn table(&self) -> &DifferenceTable { &self.table }
}

impl Interpolator for NewtonGregory {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NewtonGregory(self.direction)
    }

    fn explain(&self) -> &Equation {
        &self.equation
    }
}


/// Returns the common step `h = x[1] - x[0]` after checking the whole set.
pub fn uniform_step(points: &PointSet, tol: SpacingTol) -> Result<f64, InterpolationError> {
    let p = points.points();
    let (x0, x1) = (p[0].x(), p[1].x());

    let h = x1 - x0;
    if h.abs() <= tol.min_spacing {
        return Err(InterpolationError::DegenerateSpacing { x0, x1 });
    }

    // gaps of decimal steps far from the origin carry rounding of order eps * |x|
    let h_scale = x0.abs().max(x1.abs());
    for idx in 1..p.len() - 1 {
        let (xa, xb) = (p[idx].x(), p[idx + 1].x());
        let gap   = xb - xa;
        let scale = h_scale.max(xa.abs()).max(xb.abs());
        let allowed = tol.uniform_rtol * h.abs() + SPACING_EPS_FACTOR * scale;
        if (gap - h).abs() > allowed {
            return Err(InterpolationError::NonUniformSpacing { idx, expected: h, got: gap });
        }
    }

    Ok(h)
}

/// `k!` as a float; exact up to `k = 22`, finite up to `k = 170`.
///
/// Beyond `k = 22` the result is the nearest `f64` to the running product,
/// and the rendered divisor shows those digits.
#[inline]
pub fn factorial(k: usize) -> f64 {
    (2..=k).fold(1.0, |acc, i| acc * i as f64)
}

// Term k uses the order-k difference at the reference end of its row:
// index 0 forward, index n-1-k (the row's last entry) backward.
fn expand(points: &PointSet, table: &DifferenceTable, step: f64, direction: Direction) -> Equation {
    let n = points.len();
    let (base, shift) = match direction {
        Direction::Forward  => (points.first(), -1.0),
        Direction::Backward => (points.last(),   1.0),
    };

    let mut terms = Vec::with_capacity(n);
    terms.push(Term::constant(base.y()));

    for (idx, row) in table.rows().iter().enumerate() {
        let k = idx + 1;
        let delta = match direction {
            Direction::Forward  => row[0],
            Direction::Backward => row[n - 1 - k],
        };
        let factors = (0..k)
            .map(|j| Factor::Shifted { offset: shift * j as f64 })
            .collect();

        terms.push(Term::new(delta, factors, Some(factorial(k))));
    }

    Equation::new(Variable::Normalized { origin: base.x(), step }, terms)
}


/// Evaluates the Newton-Gregory polynomial of `points` at `query_x`.
///
/// The difference table is rebuilt from scratch on every call.
///
/// # Errors
/// - [`InterpolationError::InvalidQuery`] if `query_x` is not finite.
/// - Any error of [`NewtonGregory::with_tol`].
pub fn evaluate(
    points: &PointSet,
    query_x: f64,
    direction: Direction,
) -> Result<InterpolationResult, InterpolationError> {
    evaluate_with(points, query_x, direction, SpacingTol::default())
}

/// [`evaluate`] with explicit spacing tolerances.
pub fn evaluate_with(
    points: &PointSet,
    query_x: f64,
    direction: Direction,
    tol: SpacingTol,
) -> Result<InterpolationResult, InterpolationError> {
    let query_x = check_query(query_x)?;
    let interp  = NewtonGregory::with_tol(points, direction, tol)?;
    let result  = interp.evaluate(query_x)?;

    debug!("{}: f({}) = {}", interp.algorithm(), query_x, result.estimate);
    Ok(result)
}


/// Performs Newton-Gregory interpolation over the data in [`CommonCfg`].
///
/// # Behavior
/// - Checks the spacing, builds the difference table and the polynomial.
/// - Evaluates the polynomial at each point in `cfg.common.x_eval()`;
///   points outside the sampled range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_gregory_forward"` or `"newton_gregory_backward"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `equation`       : the polynomial
///
/// # Errors
/// - Input shape errors from [`CommonCfg::points`].
/// - Spacing errors from [`NewtonGregory::with_tol`].
pub fn interpolate(cfg: NewtonGregoryCfg) -> Result<InterpolationReport, InterpolationError> {
    let points = cfg.common.points()?;
    let evals  = cfg.common.x_eval();

    let interp = NewtonGregory::with_tol(&points, cfg.direction, cfg.common.tol())?;

    let mut report = InterpolationReport::new(
        interp.algorithm(),
        points.len(),
        evals.len(),
        interp.explain().clone(),
    );
    report.evaluated.reserve(evals.len());

    for &xq in evals {
        report.evaluated.push(interp.eval(xq)?);
    }

    Ok(report)
}
