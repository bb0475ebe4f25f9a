#![warn(missing_docs)]
//! Ordered sets of 3D points as produced by the [`distributions`](crate::distributions) module.
//!
//! A [`PointSet`] is created once by a generator and is not modified afterwards. Operations such as
//! [`PointSet::normalized`] return a new set.
use crate::error::{LutResult, PointLutError};
use log::debug;
use nalgebra::Point3;
use num::Zero;
use std::ops::Index;

/// An ordered sequence of 3D points.
///
/// The order is the generation (or shuffle) order and determines the order of the entries in the
/// serialized lookup table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point3<f64>>,
}
impl PointSet {
    /// Create a new [`PointSet`] from the given points.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }
    /// Returns the number of points in this [`PointSet`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns `true` if this [`PointSet`] contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns an iterator over the points in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.points.iter()
    }
    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }
    /// Return a new [`PointSet`] where every point is scaled to unit length (i.e. interpreted as a
    /// direction vector from the origin).
    ///
    /// # Errors
    ///
    /// This function will return an error if a point has a zero or non-finite Euclidean norm.
    pub fn normalized(&self) -> LutResult<Self> {
        let mut normalized = Vec::with_capacity(self.points.len());
        for (index, point) in self.points.iter().enumerate() {
            let norm = point.coords.norm();
            if norm.is_zero() || !norm.is_finite() {
                return Err(PointLutError::InvalidArgument(format!(
                    "cannot normalize point #{index} ({}, {}, {}): norm is {norm}",
                    point.x, point.y, point.z
                )));
            }
            normalized.push(Point3::from(point.coords / norm));
        }
        debug!("normalized {} points", normalized.len());
        Ok(Self::new(normalized))
    }
}
impl From<Vec<Point3<f64>>> for PointSet {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}
impl FromIterator<Point3<f64>> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point3<f64>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl IntoIterator for PointSet {
    type Item = Point3<f64>;
    type IntoIter = std::vec::IntoIter<Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
impl Index<usize> for PointSet {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
