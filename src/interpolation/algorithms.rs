//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and the [`Direction`] of a Newton-Gregory difference formula.

use std::fmt;
use std::str::FromStr;

use crate::interpolation::errors::InterpolationError;

/// Which end of the difference table a Newton-Gregory formula expands from.
/// - [`Direction::Forward`]  : base point `x[0]`, leading differences `Δᵏy[0]`
/// - [`Direction::Backward`] : base point `x[n-1]`, trailing differences `Δᵏy[n-1-k]`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The opposite expansion end.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward  => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Interpolation algorithm variants.
/// - [`Algorithm::NewtonGregory`] equally spaced finite-difference formula
/// - [`Algorithm::Lagrange`]      basis-polynomial form, any distinct abscissae
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    NewtonGregory(Direction),
    Lagrange,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::NewtonGregory(Direction::Forward)  => "newton_gregory_forward",
            Algorithm::NewtonGregory(Direction::Backward) => "newton_gregory_backward",
            Algorithm::Lagrange                           => "lagrange",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Parses the method names a caller selects from:
/// `newton-forward`, `newton-backward`, `lagrange` (case-insensitive,
/// `_` accepted in place of `-`).
impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "newton-forward"  | "forward"  => Ok(Algorithm::NewtonGregory(Direction::Forward)),
            "newton-backward" | "backward" => Ok(Algorithm::NewtonGregory(Direction::Backward)),
            "lagrange"                     => Ok(Algorithm::Lagrange),
            _ => Err(InterpolationError::UnknownMethod { got: s.to_string() }),
        }
    }
}
