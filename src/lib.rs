//! This is the documentation for **pointlut**, a generator for shader sample kernels.
//!
//! **pointlut** produces deterministic, evenly spread point sets (directions on the upper unit
//! hemisphere and positions on a face of the cube [-1, 1]³) and writes them as constant `vec3`
//! arrays which can be included into GLSL (or `glm` based C++) sources.
//!
//! ```rust
//! use pointlut::distributions::{CubeFace, Face, PointDistribution};
//! use pointlut::vec3_array::format_vec3_array;
//!
//! let points = CubeFace::new(4, Face::Front, false).unwrap().generate();
//! let source = format_vec3_array(&points.normalized().unwrap(), "frontVectors").unwrap();
//! assert!(source.starts_with("const vec3 frontVectors[4] = {"));
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod distributions;
pub mod error;
pub mod job;
#[cfg(feature = "plot")]
pub mod plot;
pub mod point_set;
pub mod utils;
pub mod vec3_array;

pub use point_set::PointSet;

use chrono::DateTime;
/// Return the version information of the currently built pointlut executable.
///
/// This function returns a `String` which contains the current Git tag/hash combination as well as
/// the timestamp of this commit. Outside of a Git checkout the crate version is used instead.
#[must_use]
pub fn get_version() -> String {
    let describe = option_env!("VERGEN_GIT_DESCRIBE")
        .filter(|d| !d.starts_with("VERGEN"))
        .unwrap_or(env!("CARGO_PKG_VERSION"));
    let commit_timestamp = option_env!("VERGEN_GIT_COMMIT_TIMESTAMP").unwrap_or_default();
    let timestamp = DateTime::parse_from_rfc3339(commit_timestamp).map_or_else(
        |_| String::from("invalid timestamp"),
        |timestamp| timestamp.format("%Y/%m/%d %H:%M").to_string(),
    );
    format!("{describe} ({timestamp})")
}
