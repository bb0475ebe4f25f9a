#![warn(missing_docs)]
//! Upper unit hemisphere, golden-angle spiral distribution
use std::f64::consts::PI;

use super::{validate_nr_of_points, PointDistribution};
use crate::{error::LutResult, point_set::PointSet, utils::usize_to_f64};
use log::debug;
use nalgebra::point;
use serde::{Deserialize, Serialize};

/// Golden-angle spiral on the upper unit hemisphere (z >= 0).
///
/// Point `i` of `N` has the polar angle `φ = acos(1 - (i + 0.5) / N)`, so that every point covers
/// the same solid angle, and the azimuth `θ = 2π · i · (1 + √5) / 2`. The irrational azimuth
/// increment avoids periodic alignment of consecutive points.
///
/// For further details see [here](https://en.wikipedia.org/wiki/Golden_angle)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub struct Hemisphere {
    nr_of_points: usize,
}
impl Hemisphere {
    /// Create a new [`Hemisphere`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `nr_of_points` is zero.
    pub fn new(nr_of_points: usize) -> LutResult<Self> {
        Ok(Self {
            nr_of_points: validate_nr_of_points(nr_of_points)?,
        })
    }
    /// Returns the number of points of this [`Hemisphere`] distribution.
    #[must_use]
    pub const fn nr_of_points(&self) -> usize {
        self.nr_of_points
    }
    /// Sets the number of points of this [`Hemisphere`] distribution.
    ///
    /// A value of zero is accepted here and results in an empty [`PointSet`].
    pub fn set_nr_of_points(&mut self, nr_of_points: usize) {
        self.nr_of_points = nr_of_points;
    }
}

impl Default for Hemisphere {
    fn default() -> Self {
        Self { nr_of_points: 16 }
    }
}

impl PointDistribution for Hemisphere {
    fn generate(&self) -> PointSet {
        let golden_ratio = f64::midpoint(1., f64::sqrt(5.));
        let n = usize_to_f64(self.nr_of_points);
        let points: PointSet = (0..self.nr_of_points)
            .map(|i| {
                let i_f64 = usize_to_f64(i);
                let phi = f64::acos(1.0 - (i_f64 + 0.5) / n);
                let theta = 2.0 * PI * i_f64 * golden_ratio;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let (sin_theta, cos_theta) = theta.sin_cos();
                point![sin_phi * cos_theta, sin_phi * sin_theta, cos_phi]
            })
            .collect();
        debug!("generated {} hemisphere points", points.len());
        points
    }
}
