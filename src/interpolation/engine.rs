//! Method dispatch.
//!
//! A caller hands over a [`PointSet`] snapshot, a query abscissa and an
//! [`Algorithm`]; the selected interpolator is built fresh for that call.

use log::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_query, parse_query, SpacingTol};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::newton_gregory::NewtonGregory;
use crate::interpolation::points::PointSet;
use crate::interpolation::report::InterpolationResult;
use crate::interpolation::traits::Interpolator;


/// Builds the interpolant `algorithm` selects.
pub fn build(
    points: &PointSet,
    algorithm: Algorithm,
    tol: SpacingTol,
) -> Result<Box<dyn Interpolator>, InterpolationError> {
    Ok(match algorithm {
        Algorithm::NewtonGregory(direction) => {
            Box::new(NewtonGregory::with_tol(points, direction, tol)?)
        }
        Algorithm::Lagrange => Box::new(Lagrange::with_tol(points, tol)?),
    })
}

/// Estimates `f(query_x)` with `algorithm` and default tolerances.
///
/// # Errors
/// - [`InterpolationError::InvalidQuery`] if `query_x` is not finite;
///   nothing is computed in that case.
/// - The construction errors of the selected interpolator.
pub fn evaluate(
    points: &PointSet,
    query_x: f64,
    algorithm: Algorithm,
) -> Result<InterpolationResult, InterpolationError> {
    evaluate_with(points, query_x, algorithm, SpacingTol::default())
}

/// [`evaluate`] with explicit spacing tolerances.
pub fn evaluate_with(
    points: &PointSet,
    query_x: f64,
    algorithm: Algorithm,
    tol: SpacingTol,
) -> Result<InterpolationResult, InterpolationError> {
    let query_x = check_query(query_x)?;
    let result  = build(points, algorithm, tol)?.evaluate(query_x)?;

    debug!("{}: f({}) = {}", algorithm, query_x, result.estimate);
    Ok(result)
}

/// Like [`evaluate`], taking the query and method as text
/// (`"1.5"`, `"newton-forward"`).
pub fn evaluate_str(
    points: &PointSet,
    query_x: &str,
    method: &str,
) -> Result<InterpolationResult, InterpolationError> {
    let query_x = parse_query(query_x)?;
    let algorithm: Algorithm = method.parse()?;
    evaluate(points, query_x, algorithm)
}
