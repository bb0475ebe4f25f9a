#![warn(missing_docs)]
//! Module for generating point distributions
//!
//! These distributions are used as sample kernels in shaders, e.g. as directions on the upper
//! hemisphere around a surface normal or as positions on a face of the unit cube.
//!
//! ## Example
//!
//! ```rust
//! use pointlut::distributions::{Hemisphere, PointDistribution};
//!
//! let hemisphere = Hemisphere::new(16).unwrap();
//! let points = hemisphere.generate();
//! assert_eq!(points.len(), 16);
//! ```
//! `points` now contains 16 unit vectors with z >= 0 arranged on a golden-angle spiral.
use crate::error::{LutResult, PointLutError};
use crate::point_set::PointSet;
use num::Zero;

mod cube_face;
mod hemisphere;
pub mod low_discrepancy;

pub use cube_face::{CubeFace, Face};
pub use hemisphere::Hemisphere;
pub use low_discrepancy::SquareSequence;

/// Trait for the generation of point distributions
pub trait PointDistribution {
    /// Generate the point distribution.
    ///
    /// This function generates a [`PointSet`] with the parameters defined earlier.
    fn generate(&self) -> PointSet;
}

/// Check that a requested number of points can be generated.
///
/// # Errors
///
/// This function will return an error if `nr_of_points` is zero.
pub fn validate_nr_of_points(nr_of_points: usize) -> LutResult<usize> {
    if nr_of_points.is_zero() {
        return Err(PointLutError::InvalidArgument(
            "nr_of_points must be >= 1.".into(),
        ));
    }
    Ok(nr_of_points)
}
