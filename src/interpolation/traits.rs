use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::check_query;
use crate::interpolation::equation::Equation;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationResult;

/// Evaluate-and-explain capability shared by every interpolant.
pub trait Interpolator {
    /// method that built the interpolant
    fn algorithm(&self) -> Algorithm;

    /// symbolic form of the interpolating polynomial
    fn explain(&self) -> &Equation;

    /// evaluates single point
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let x = check_query(x)?;
        Ok(self.explain().evaluate(x))
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// estimate plus rendered equation
    fn evaluate(&self, x: f64) -> Result<InterpolationResult, InterpolationError> {
        let estimate = self.eval(x)?;
        Ok(InterpolationResult::new(estimate, self.explain().clone()))
    }
}
