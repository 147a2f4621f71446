pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod points;
pub mod differences;
pub mod equation;

pub mod newton_gregory;
pub mod lagrange;
pub mod engine;

pub use algorithms::{Algorithm, Direction};
pub use equation::{Equation, Notation};
pub use errors::InterpolationError;
pub use points::{Point, PointSet};
pub use report::InterpolationResult;
