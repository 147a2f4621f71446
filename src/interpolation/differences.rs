//! Finite-difference table
//!
//! Builds the forward-difference pyramid of a y-sequence:
//!
//! ```text
//! Δ⁰y[j] = y[j]
//! Δᵏy[j] = Δᵏ⁻¹y[j+1] − Δᵏ⁻¹y[j]        j = 0 .. n-k-1
//! ```
//!
//! Row 0 (the samples themselves) is not stored; row `k` (`1 ≤ k ≤ n-1`)
//! has `n-k` entries. Abscissae play no part in the construction.

use std::fmt;

use log::trace;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSet;


#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds the table from the y-values of `points`, in point order.
    ///
    /// Infallible: a [`PointSet`] always holds at least two points, so the
    /// [`InterpolationError::InsufficientData`] case of [`Self::from_values`]
    /// cannot arise.
    pub fn build(points: &PointSet) -> Self {
        Self::tabulate(&points.ys())
    }

    /// Builds the table from a raw y-sequence.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientData`] if `y` has fewer than 2 values.
    pub fn from_values(y: &[f64]) -> Result<Self, InterpolationError> {
        if y.len() < 2 {
            return Err(InterpolationError::InsufficientData { got: y.len() });
        }
        Ok(Self::tabulate(y))
    }

    fn tabulate(y: &[f64]) -> Self {
        let n = y.len();
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n - 1);

        for k in 1..n {
            let row: Vec<f64> = {
                let prev: &[f64] = if k == 1 { y } else { rows[k - 2].as_slice() };
                prev.windows(2).map(|w| w[1] - w[0]).collect()
            };
            rows.push(row);
        }

        trace!("difference table: {} samples, {} orders", n, rows.len());
        Self { rows }
    }

    /// Highest difference order stored (`n - 1`).
    #[inline] pub fn orders(&self) -> usize { self.rows.len() }

    /// Number of samples the table was built from.
    #[inline] pub fn n_samples(&self) -> usize { self.rows.len() + 1 }

    /// All stored rows; `rows()[k-1]` is the order-`k` row.
    #[inline] pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    /// Order-`k` row, `None` for `k == 0` or `k > orders()`.
    pub fn order(&self, k: usize) -> Option<&[f64]> {
        if k == 0 {
            return None;
        }
        self.rows.get(k - 1).map(Vec::as_slice)
    }

    /// `Δᵏy[0]`, the leading entry used by the forward formula.
    pub fn leading(&self, k: usize) -> Option<f64> {
        self.order(k).and_then(|row| row.first().copied())
    }

    /// `Δᵏy[n-1-k]`, the trailing entry used by the backward formula.
    pub fn trailing(&self, k: usize) -> Option<f64> {
        self.order(k).and_then(|row| row.last().copied())
    }
}

/// One line per order, entries to 4 decimals:
///
/// ```text
/// Δ^1y: 1.0000 3.0000 5.0000
/// Δ^2y: 2.0000 2.0000
/// Δ^3y: 0.0000
/// ```
impl fmt::Display for DifferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, row) in self.rows.iter().enumerate() {
            if k > 0 {
                writeln!(f)?;
            }
            write!(f, "Δ^{}y:", k + 1)?;
            for v in row {
                write!(f, " {:.4}", v)?;
            }
        }
        Ok(())
    }
}
