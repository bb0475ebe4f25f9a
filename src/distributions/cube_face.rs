#![warn(missing_docs)]
//! Square, low-discrepancy distribution on one face of the cube [-1, 1]³
use super::{validate_nr_of_points, PointDistribution, SquareSequence};
use crate::{
    error::{LutResult, PointLutError},
    point_set::PointSet,
};
use itertools::Itertools;
use log::{debug, warn};
use nalgebra::Point3;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A face of the cube [-1, 1]³.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Face {
    /// z = +1
    #[default]
    Front,
    /// z = -1
    Back,
    /// x = -1
    Left,
    /// x = +1
    Right,
    /// y = +1
    Top,
    /// y = -1
    Bottom,
}
impl Face {
    /// Parse a face from its lowercase name.
    ///
    /// # Errors
    ///
    /// This function will return an [`PointLutError::InvalidArgument`] naming the unknown face.
    pub fn from_name(name: &str) -> LutResult<Self> {
        Self::from_str(name).map_err(|_| {
            PointLutError::InvalidArgument(format!(
                "unknown face '{name}', expected one of: {}",
                Self::iter().join(", ")
            ))
        })
    }
    /// Index (0 = x, 1 = y, 2 = z) of the axis which is constant on this face.
    #[must_use]
    pub const fn fixed_axis(self) -> usize {
        match self {
            Self::Front | Self::Back => 2,
            Self::Left | Self::Right => 0,
            Self::Top | Self::Bottom => 1,
        }
    }
    /// Value of the fixed axis on this face.
    #[must_use]
    pub const fn fixed_value(self) -> f64 {
        match self {
            Self::Front | Self::Right | Self::Top => 1.0,
            Self::Back | Self::Left | Self::Bottom => -1.0,
        }
    }
    /// Indices of the two in-plane axes. The first one is fed by the first square coordinate.
    #[must_use]
    pub const fn free_axes(self) -> (usize, usize) {
        match self {
            Self::Front | Self::Back => (0, 1),
            Self::Left | Self::Right => (1, 2),
            Self::Top | Self::Bottom => (0, 2),
        }
    }
    /// Map a point `(a, b)` of the unit square onto this face.
    ///
    /// Both square coordinates are scaled from `[0, 1)` to `[-1, 1)`.
    #[must_use]
    pub fn map_from_square(self, a: f64, b: f64) -> Point3<f64> {
        let mut coords = [0.0; 3];
        let (first, second) = self.free_axes();
        coords[first] = 2.0f64.mul_add(a, -1.0);
        coords[second] = 2.0f64.mul_add(b, -1.0);
        coords[self.fixed_axis()] = self.fixed_value();
        Point3::from(coords)
    }
}

/// Low-discrepancy distribution on a face of the cube [-1, 1]³
///
/// The points are generated on the unit square (see [`SquareSequence`]) and mapped affinely onto
/// the selected [`Face`]. Optionally the order of the points is shuffled so that every prefix of
/// the resulting table is still reasonably well spread over the face.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CubeFace {
    nr_of_points: usize,
    face: Face,
    shuffle: bool,
    seed: Option<u64>,
    sequence: SquareSequence,
}
impl CubeFace {
    /// Create a new [`CubeFace`] distribution generator.
    ///
    /// The generator uses the [`SquareSequence::Hammersley`] construction and an unseeded shuffle.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `nr_of_points` is zero.
    pub fn new(nr_of_points: usize, face: Face, shuffle: bool) -> LutResult<Self> {
        Ok(Self {
            nr_of_points: validate_nr_of_points(nr_of_points)?,
            face,
            shuffle,
            seed: None,
            sequence: SquareSequence::default(),
        })
    }
    /// Use a fixed seed for shuffling, which makes the point order reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Use the given construction for the points on the unit square.
    #[must_use]
    pub fn with_sequence(mut self, sequence: SquareSequence) -> Self {
        self.sequence = sequence;
        self
    }
    /// Returns the number of points of this [`CubeFace`] distribution.
    #[must_use]
    pub const fn nr_of_points(&self) -> usize {
        self.nr_of_points
    }
    /// Returns the [`Face`] of this [`CubeFace`] distribution.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }
    /// Returns `true` if the generated points are shuffled.
    #[must_use]
    pub const fn shuffle(&self) -> bool {
        self.shuffle
    }
    /// Returns the shuffle seed of this [`CubeFace`] distribution.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Returns the unit square construction of this [`CubeFace`] distribution.
    #[must_use]
    pub const fn sequence(&self) -> SquareSequence {
        self.sequence
    }
    /// Sets the number of points.
    ///
    /// A value of zero is accepted here and results in an empty [`PointSet`].
    pub fn set_nr_of_points(&mut self, nr_of_points: usize) {
        self.nr_of_points = nr_of_points;
    }
    /// Sets the face.
    pub fn set_face(&mut self, face: Face) {
        self.face = face;
    }
    /// Enables or disables shuffling.
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }
}

impl Default for CubeFace {
    fn default() -> Self {
        Self {
            nr_of_points: 64,
            face: Face::default(),
            shuffle: true,
            seed: None,
            sequence: SquareSequence::default(),
        }
    }
}

impl PointDistribution for CubeFace {
    fn generate(&self) -> PointSet {
        let mut points: Vec<Point3<f64>> = self
            .sequence
            .generate(self.nr_of_points)
            .into_iter()
            .map(|[a, b]| self.face.map_from_square(a, b))
            .collect();
        if !self.shuffle && self.seed.is_some() {
            warn!("seed is ignored since shuffling is disabled");
        }
        if self.shuffle {
            if let Some(seed) = self.seed {
                points.shuffle(&mut StdRng::seed_from_u64(seed));
            } else {
                warn!("shuffling without seed, point order is not reproducible");
                points.shuffle(&mut rand::rng());
            }
        }
        debug!(
            "generated {} points on the {} face ({} sequence)",
            points.len(),
            self.face,
            self.sequence
        );
        PointSet::new(points)
    }
}
