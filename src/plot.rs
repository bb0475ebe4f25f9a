//! Static SVG previews of point sets.
//!
//! The points are projected onto two axes and drawn as dots inside the square [-1, 1]². The dot
//! color runs from red (first point) to blue (last point), which shows how well a prefix of the
//! table covers the area.
use crate::{
    error::{LutResult, PointLutError},
    point_set::PointSet,
    utils::usize_to_f64,
};
use log::info;
use plotters::prelude::*;
use std::{fmt::Display, path::Path};

const FIG_SIZE: (u32, u32) = (600, 600);

fn plot_error(e: impl Display) -> PointLutError {
    PointLutError::Plot(format!("drawing of point plot failed: {e}"))
}

/// Write a scatter plot of `points` projected onto the given `axes` (0 = x, 1 = y, 2 = z) as SVG.
///
/// # Errors
///
/// This function will return an error if an axis index is larger than 2 or the plot cannot be
/// drawn / written to `path`.
pub fn plot_points(points: &PointSet, axes: (usize, usize), path: &Path) -> LutResult<()> {
    if axes.0 > 2 || axes.1 > 2 {
        return Err(PointLutError::InvalidArgument(format!(
            "invalid plot axes ({}, {})",
            axes.0, axes.1
        )));
    }
    let root = SVGBackend::new(path, FIG_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-1.1f64..1.1f64, -1.1f64..1.1f64)
        .map_err(plot_error)?;
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)],
            BLACK,
        )))
        .map_err(plot_error)?;
    let nr_of_points = usize_to_f64(points.len().max(1));
    chart
        .draw_series(points.iter().enumerate().map(|(i, p)| {
            let hue = 0.7 * usize_to_f64(i) / nr_of_points;
            Circle::new((p[axes.0], p[axes.1]), 3, HSLColor(hue, 0.8, 0.45).filled())
        }))
        .map_err(plot_error)?;
    root.present().map_err(plot_error)?;
    info!("wrote plot of {} points to {}", points.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::distributions::{CubeFace, Face, Hemisphere, PointDistribution};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plot_cube_face() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("front.svg");
        let points = CubeFace::new(32, Face::Front, false).unwrap().generate();
        plot_points(&points, Face::Front.free_axes(), &path).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), 32);
    }
    #[test]
    fn plot_hemisphere() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hemisphere.svg");
        let points = Hemisphere::new(16).unwrap().generate();
        assert!(plot_points(&points, (0, 1), &path).is_ok());
        assert!(path.exists());
    }
    #[test]
    fn plot_invalid_axes() {
        let dir = TempDir::new().unwrap();
        let points = Hemisphere::new(4).unwrap().generate();
        assert!(plot_points(&points, (0, 3), &dir.path().join("p.svg")).is_err());
    }
}
