//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(xq) = Σᵢ y[i] · Lᵢ(xq),    Lᵢ(xq) = ∏_{j≠i} (xq - x[j]) / (x[i] - x[j])
//! ```
//!
//! Abscissae may come in any order but must be pairwise distinct.
//! Each evaluation is O(n²).

use log::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_query, impl_common_cfg, CommonCfg, SpacingTol};
use crate::interpolation::equation::{Equation, Factor, Term, Variable};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSet;
use crate::interpolation::report::{InterpolationReport, InterpolationResult};
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
///
/// # Defaults
/// - Duplicate-abscissa threshold;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] (exact equality) by default.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);

impl Default for LagrangeCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


/// Lagrange interpolant over one [`PointSet`] snapshot.
#[derive(Debug, Clone)]
pub struct Lagrange {
    equation: Equation,
}

impl Lagrange {
    pub fn new(points: &PointSet) -> Result<Self, InterpolationError> {
        Self::with_tol(points, SpacingTol::default())
    }

    /// # Errors
    /// - [`InterpolationError::DuplicateAbscissa`] for the first pair `i < j`
    ///   with `|x[i] - x[j]| <= tol.min_spacing`.
    pub fn with_tol(points: &PointSet, tol: SpacingTol) -> Result<Self, InterpolationError> {
        check_distinct(points, tol.min_spacing)?;
        let equation = expand(points);

        debug!("{}: built over {} points", Algorithm::Lagrange, points.len());
        Ok(Self { equation })
    }
}

impl Interpolator for Lagrange {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lagrange
    }

    fn explain(&self) -> &Equation {
        &self.equation
    }
}


fn check_distinct(points: &PointSet, min_spacing: f64) -> Result<(), InterpolationError> {
    let p = points.points();
    for i in 0..p.len() {
        for j in i + 1..p.len() {
            if (p[i].x() - p[j].x()).abs() <= min_spacing {
                return Err(InterpolationError::DuplicateAbscissa { i, j, x: p[i].x() });
            }
        }
    }
    Ok(())
}

// one term per sample; factors in ascending j, skipping j == i
fn expand(points: &PointSet) -> Equation {
    let p = points.points();

    let terms = p.iter()
        .enumerate()
        .map(|(i, pi)| {
            let factors = p.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, pj)| Factor::Ratio { node: pj.x(), pivot: pi.x() })
                .collect();
            Term::new(pi.y(), factors, None)
        })
        .collect();

    Equation::new(Variable::Abscissa, terms)
}


/// Evaluates the Lagrange polynomial of `points` at `query_x`.
///
/// # Errors
/// - [`InterpolationError::InvalidQuery`] if `query_x` is not finite.
/// - [`InterpolationError::DuplicateAbscissa`] if two abscissae coincide.
pub fn evaluate(points: &PointSet, query_x: f64) -> Result<InterpolationResult, InterpolationError> {
    evaluate_with(points, query_x, SpacingTol::default())
}

/// [`evaluate`] with an explicit duplicate-abscissa threshold.
pub fn evaluate_with(
    points: &PointSet,
    query_x: f64,
    tol: SpacingTol,
) -> Result<InterpolationResult, InterpolationError> {
    let query_x = check_query(query_x)?;
    let interp  = Lagrange::with_tol(points, tol)?;
    let result  = interp.evaluate(query_x)?;

    debug!("{}: f({}) = {}", Algorithm::Lagrange, query_x, result.estimate);
    Ok(result)
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `equation`       : the polynomial
///
/// # Errors
/// - Input shape errors from [`CommonCfg::points`].
/// - [`InterpolationError::DuplicateAbscissa`] if two abscissae coincide.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let points = cfg.common.points()?;
    let evals  = cfg.common.x_eval();

    let interp = Lagrange::with_tol(&points, cfg.common.tol())?;

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
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
