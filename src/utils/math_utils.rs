//! Numeric conversions shared by the samplers.

/// Convert a point index or count into an `f64`.
///
/// Counts of generated points stay far below 2^52, so no precision is lost in practice.
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}
