//! Defines the values returned by the interpolation algorithms.
//!
//! - [`InterpolationResult`] : one query, one estimate, plus the equation
//! - [`InterpolationReport`] : a batch run over many query points

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::equation::{Equation, Notation};

/// Outcome of evaluating one query point.
///
/// - `estimate` : interpolated ordinate
/// - `equation` : plain-text rendering of `symbolic`
/// - `symbolic` : the polynomial the estimate was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationResult {
    pub estimate: f64,
    pub equation: String,
    pub symbolic: Equation,
}

impl InterpolationResult {
    pub fn new(estimate: f64, symbolic: Equation) -> Self {
        Self {
            estimate,
            equation: symbolic.render(Notation::Plain),
            symbolic,
        }
    }

    /// Re-renders the equation in another notation.
    pub fn equation_in(&self, notation: Notation) -> String {
        self.symbolic.render(notation)
    }
}

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"lagrange"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
/// - `equation`       : the interpolating polynomial shared by all evaluations
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub equation: Equation,
}

impl InterpolationReport {
    pub fn new(
        algorithm: Algorithm,
        n_provided: usize,
        n_evaluated: usize,
        equation: Equation,
    ) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
            equation,
        }
    }
}
