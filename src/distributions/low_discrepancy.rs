//! Low-discrepancy point sets in the unit square
use crate::utils::usize_to_f64;
use serde::{Deserialize, Serialize};
use sobol::{params::JoeKuoD6, Sobol};
use strum::{Display, EnumIter, EnumString};

/// Radical inverse of `index` in the given `base`.
///
/// The digits of `index` are mirrored at the radix point, e.g. for base 2 the index `6 = 0b110` is
/// mapped to `0b0.011 = 0.375`. The result is in `[0, 1)`.
///
/// # Panics
///
/// Panics if `base` is smaller than 2.
#[must_use]
pub(crate) fn van_der_corput(index: usize, base: usize) -> f64 {
    assert!(base >= 2, "van der Corput base must be >= 2");
    let inv_base = 1.0 / usize_to_f64(base);
    let mut denominator = inv_base;
    let mut value = 0.0;
    let mut n = index;
    while n > 0 {
        value += usize_to_f64(n % base) * denominator;
        n /= base;
        denominator *= inv_base;
    }
    value
}

/// Construction used for the 2D points that are mapped onto a cube face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SquareSequence {
    /// Hammersley set: radix-2 van der Corput for the first, `i / N` for the second coordinate.
    #[default]
    Hammersley,
    /// First `N` points of the 2D Sobol sequence
    Sobol,
}
impl SquareSequence {
    /// Generate `nr_of_points` points in `[0, 1)²`.
    #[must_use]
    pub fn generate(self, nr_of_points: usize) -> Vec<[f64; 2]> {
        match self {
            Self::Hammersley => hammersley(nr_of_points),
            Self::Sobol => sobol(nr_of_points),
        }
    }
}

fn hammersley(nr_of_points: usize) -> Vec<[f64; 2]> {
    let n = usize_to_f64(nr_of_points);
    (0..nr_of_points)
        .map(|i| [van_der_corput(i, 2), usize_to_f64(i) / n])
        .collect()
}

fn sobol(nr_of_points: usize) -> Vec<[f64; 2]> {
    let params = JoeKuoD6::minimal();
    Sobol::<f64>::new(2, &params)
        .take(nr_of_points)
        .map(|p| [p[0], p[1]])
        .collect()
}
