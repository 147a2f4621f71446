//! Interpolation error types.
//!
//! ┌ input shape      : empty, unequal length, too few points, non-finite
//! ├ query            : query value not a well-formed number
//! ├ abscissa layout  : degenerate step, duplicate x, uneven spacing
//! └ configuration    : invalid tolerances, unknown method name

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient data: got {got} point(s), need at least 2")]
    InsufficientData { got: usize },

    #[error("invalid query: {got:?} is not a finite number")]
    InvalidQuery { got: String },

    #[error("degenerate spacing: x0={x0} and x1={x1} give a zero step h")]
    DegenerateSpacing { x0: f64, x1: f64 },

    #[error("duplicate abscissa: x[{i}] and x[{j}] are both {x}")]
    DuplicateAbscissa { i: usize, j: usize, x: f64 },

    #[error("non-uniform spacing at index {idx}: expected step {expected}, got {got}")]
    NonUniformSpacing { idx: usize, expected: f64, got: f64 },

    #[error("index {idx} out of range for point set of length {len}")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("unknown method {got:?}: expected newton-forward, newton-backward or lagrange")]
    UnknownMethod { got: String },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid spacing_rtol {got} must be finite and >= 0")]
    InvalidSpacingRtol { got: f64 },
}
