//! Shared configuration for interpolation algorithms.
//!
//! Provides [`SpacingTol`] with the default abscissa tolerances
//! [`DEFAULT_X_TOL`] and [`DEFAULT_SPACING_RTOL`], and [`CommonCfg`] shared
//! by all batch configs.
//!
//! [`CommonCfg`] — universal fields
//! - `x`       : x values provided
//! - `y`       : y values provided
//! - `x_eval`  : x values to evaluate
//! - `tol`     : [`SpacingTol`] used when checking the abscissa layout
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSet;

/// Two abscissae whose distance is at most this are treated as equal.
/// Zero by default: only identical abscissae coincide. Raise it through
/// `set_x_tol` to also reject near-duplicates.
pub const DEFAULT_X_TOL: f64 = 0.0;

/// Relative deviation of a gap from the step `h` tolerated as "equal spacing".
pub const DEFAULT_SPACING_RTOL: f64 = 1e-9;

/// Rounding allowance per unit of abscissa magnitude when comparing gaps.
pub const SPACING_EPS_FACTOR: f64 = 4.0 * f64::EPSILON;

/// Tolerances applied to the abscissa layout.
///
/// - `min_spacing`  : `|x_i - x_j| <= min_spacing` is a zero step / duplicate x
/// - `uniform_rtol` : Newton-Gregory accepts gap `g` when
///   `|g - h| <= uniform_rtol * |h| + SPACING_EPS_FACTOR * max|x|`,
///   `max|x|` taken over the abscissae forming `h` and `g`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpacingTol {
    pub min_spacing: f64,
    pub uniform_rtol: f64,
}

impl Default for SpacingTol {
    fn default() -> Self {
        Self { min_spacing: DEFAULT_X_TOL, uniform_rtol: DEFAULT_SPACING_RTOL }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) tol    : SpacingTol,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            tol    : SpacingTol::default(),
        }
    }

    /// Assembles the configured samples into a [`PointSet`].
    pub fn points(&self) -> Result<PointSet, InterpolationError> {
        PointSet::from_xy(self.x, self.y)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn tol(&self) -> SpacingTol { self.tol }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.tol.min_spacing = v; }
    pub(crate) fn with_spacing_rtol(&mut self, v: f64) { self.tol.uniform_rtol = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Checks a query abscissa.
///
/// # Errors
/// - [`InterpolationError::InvalidQuery`] if `q` is NaN or infinite.
pub fn check_query(q: f64) -> Result<f64, InterpolationError> {
    if !q.is_finite() {
        return Err(InterpolationError::InvalidQuery { got: q.to_string() });
    }
    Ok(q)
}

/// Parses a textual query abscissa (surrounding whitespace ignored).
///
/// # Errors
/// - [`InterpolationError::InvalidQuery`] if `s` is not a finite number.
pub fn parse_query(s: &str) -> Result<f64, InterpolationError> {
    let q: f64 = s.trim()
        .parse()
        .map_err(|_| InterpolationError::InvalidQuery { got: s.to_string() })?;
    if !q.is_finite() {
        return Err(InterpolationError::InvalidQuery { got: s.to_string() });
    }
    Ok(q)
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientData { got: v.len() });
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                for &q in v {
                    $crate::interpolation::config::check_query(q)?;
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_spacing_rtol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InterpolationError::InvalidSpacingRtol { got: v });
                }

                self.common.with_spacing_rtol(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
