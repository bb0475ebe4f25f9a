#![warn(missing_docs)]
//! Generation jobs.
//!
//! A [`GenerationJob`] describes one lookup table: which distribution to sample, whether the points
//! are normalized and where the `vec3` array is written. Several jobs can be bundled in a YAML
//! [`JobFile`]:
//!
//! ```yaml
//! jobs:
//!   - kind: hemisphere
//!     count: 16
//!     output: hemisphere_vectors.glsl
//!   - kind: cube_face
//!     count: 64
//!     face: top
//!     seed: 42
//!     output: top_face.glsl
//!     name: topFaceVectors
//! ```
use crate::{
    distributions::{CubeFace, Face, Hemisphere, PointDistribution, SquareSequence},
    error::{LutResult, PointLutError},
    point_set::PointSet,
    vec3_array::{validate_array_name, write_vec3_array, DEFAULT_ARRAY_NAME},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

const fn default_true() -> bool {
    true
}
fn default_array_name() -> String {
    DEFAULT_ARRAY_NAME.to_string()
}

/// The distribution to be sampled by a [`GenerationJob`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionConfig {
    /// golden-angle spiral on the upper unit hemisphere
    Hemisphere {
        /// number of points
        count: usize,
    },
    /// low-discrepancy points on a face of the cube [-1, 1]³
    CubeFace {
        /// number of points
        count: usize,
        /// the face to be sampled
        #[serde(default)]
        face: Face,
        /// shuffle the point order
        #[serde(default = "default_true")]
        shuffle: bool,
        /// seed for a reproducible shuffle order
        #[serde(default)]
        seed: Option<u64>,
        /// construction of the points on the unit square
        #[serde(default)]
        sequence: SquareSequence,
    },
}
impl DistributionConfig {
    /// Returns the number of points requested by this [`DistributionConfig`].
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Hemisphere { count } | Self::CubeFace { count, .. } => *count,
        }
    }
    /// Generate the configured distribution.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number of points is zero.
    pub fn generate(&self) -> LutResult<PointSet> {
        match self {
            Self::Hemisphere { count } => Ok(Hemisphere::new(*count)?.generate()),
            Self::CubeFace {
                count,
                face,
                shuffle,
                seed,
                sequence,
            } => {
                let mut distribution =
                    CubeFace::new(*count, *face, *shuffle)?.with_sequence(*sequence);
                if let Some(seed) = seed {
                    distribution = distribution.with_seed(*seed);
                }
                Ok(distribution.generate())
            }
        }
    }
    /// The two axes which give a meaningful 2D view of the generated points.
    #[must_use]
    pub const fn view_axes(&self) -> (usize, usize) {
        match self {
            Self::Hemisphere { .. } => (0, 1),
            Self::CubeFace { face, .. } => face.free_axes(),
        }
    }
}
impl Display for DistributionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hemisphere { count } => write!(f, "{count} hemisphere points"),
            Self::CubeFace { count, face, .. } => write!(f, "{count} points on the {face} face"),
        }
    }
}

/// A single lookup table to be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationJob {
    /// the sampled distribution
    #[serde(flatten)]
    pub distribution: DistributionConfig,
    /// destination of the `vec3` array
    pub output: PathBuf,
    /// name of the array in the generated source
    #[serde(default = "default_array_name")]
    pub name: String,
    /// scale all points to unit length before writing
    #[serde(default = "default_true")]
    pub normalize: bool,
    /// optional destination of an SVG preview plot
    #[cfg(feature = "plot")]
    #[serde(default)]
    pub plot: Option<PathBuf>,
}
impl GenerationJob {
    /// Create a new [`GenerationJob`] writing normalized points into an array with the default name.
    #[must_use]
    pub fn new(distribution: DistributionConfig, output: PathBuf) -> Self {
        Self {
            distribution,
            output,
            name: default_array_name(),
            normalize: true,
            #[cfg(feature = "plot")]
            plot: None,
        }
    }
    /// Check the job parameters without generating anything.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number of points is zero or the array name is
    /// not a valid identifier.
    pub fn validate(&self) -> LutResult<()> {
        crate::distributions::validate_nr_of_points(self.distribution.count())?;
        validate_array_name(&self.name)
    }
    /// Generate the points of this job, normalized if requested.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parameters are invalid (see [`Self::validate`]) or
    /// a generated point cannot be normalized.
    pub fn points(&self) -> LutResult<PointSet> {
        self.validate()?;
        let points = self.distribution.generate()?;
        if self.normalize {
            points.normalized()
        } else {
            Ok(points)
        }
    }
    /// Run this job: generate, normalize (if requested) and write the array to [`Self::output`].
    ///
    /// Returns the written points.
    ///
    /// # Errors
    ///
    /// This function will return an error if the generation fails (see [`Self::points`]) or the
    /// output file cannot be written.
    pub fn run(&self) -> LutResult<PointSet> {
        info!("Generate {} for '{}'", self.distribution, self.name);
        let points = self.points()?;
        write_vec3_array(&points, &self.name, &self.output)?;
        #[cfg(feature = "plot")]
        if let Some(plot_path) = &self.plot {
            crate::plot::plot_points(&points, self.distribution.view_axes(), plot_path)?;
        }
        Ok(points)
    }
}

/// A list of [`GenerationJob`]s read from a YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JobFile {
    /// the jobs in execution order
    pub jobs: Vec<GenerationJob>,
}
impl JobFile {
    /// Read a [`JobFile`] from the given path.
    ///
    /// Relative output paths are interpreted relative to the directory of the job file.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> LutResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PointLutError::Io(format!("cannot read file {} : {}", path.display(), e))
        })?;
        let mut job_file = Self::from_string(&contents)?;
        if let Some(base) = path.parent() {
            for job in &mut job_file.jobs {
                job.output = base.join(&job.output);
                #[cfg(feature = "plot")]
                if let Some(plot) = &job.plot {
                    job.plot = Some(base.join(plot));
                }
            }
        }
        Ok(job_file)
    }
    /// Create a [`JobFile`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(file_string: &str) -> LutResult<Self> {
        serde_yaml::from_str(file_string)
            .map_err(|e| PointLutError::JobFile(format!("parsing of job file failed: {e}")))
    }
    /// Run all jobs in order.
    ///
    /// All jobs are validated before the first one is run, so an invalid entry does not leave a
    /// partially processed batch behind. Processing stops at the first failing job.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the jobs is invalid or fails.
    pub fn run(&self) -> LutResult<()> {
        for (index, job) in self.jobs.iter().enumerate() {
            job.validate().map_err(|e| {
                PointLutError::InvalidArgument(format!("job #{index} ({}): {e}", job.name))
            })?;
        }
        for (index, job) in self.jobs.iter().enumerate() {
            info!("Job {}/{}", index + 1, self.jobs.len());
            job.run()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{utils::test_helper::test_helper::check_logs, vec3_array::parse_vec3_array};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn cube_face(count: usize, face: Face, seed: Option<u64>) -> DistributionConfig {
        DistributionConfig::CubeFace {
            count,
            face,
            shuffle: true,
            seed,
            sequence: SquareSequence::Hammersley,
        }
    }
    #[test]
    fn distribution_count() {
        assert_eq!(DistributionConfig::Hemisphere { count: 3 }.count(), 3);
        assert_eq!(cube_face(7, Face::Top, None).count(), 7);
    }
    #[test]
    fn distribution_generate() {
        let points = DistributionConfig::Hemisphere { count: 4 }
            .generate()
            .unwrap();
        assert_eq!(points, Hemisphere::new(4).unwrap().generate());
        let points = cube_face(10, Face::Back, Some(1)).generate().unwrap();
        assert_eq!(
            points,
            CubeFace::new(10, Face::Back, true)
                .unwrap()
                .with_seed(1)
                .generate()
        );
        assert!(DistributionConfig::Hemisphere { count: 0 }
            .generate()
            .is_err());
    }
    #[test]
    fn distribution_seed_without_shuffle() {
        let config: DistributionConfig = serde_yaml::from_str(
            "kind: cube_face\ncount: 4\nface: top\nshuffle: false\nseed: 9\n",
        )
        .unwrap();
        testing_logger::setup();
        let points = config.generate().unwrap();
        check_logs(
            log::Level::Warn,
            vec!["seed is ignored since shuffling is disabled"],
        );
        assert_eq!(
            points,
            CubeFace::new(4, Face::Top, false).unwrap().generate()
        );
    }
    #[test]
    fn view_axes() {
        assert_eq!(DistributionConfig::Hemisphere { count: 1 }.view_axes(), (0, 1));
        assert_eq!(cube_face(1, Face::Right, None).view_axes(), (1, 2));
        assert_eq!(cube_face(1, Face::Top, None).view_axes(), (0, 2));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", DistributionConfig::Hemisphere { count: 16 }),
            "16 hemisphere points"
        );
        assert_eq!(
            format!("{}", cube_face(8, Face::Left, None)),
            "8 points on the left face"
        );
    }
    #[test]
    fn new_job() {
        let job = GenerationJob::new(
            DistributionConfig::Hemisphere { count: 16 },
            PathBuf::from("out.glsl"),
        );
        assert_eq!(job.name, "hemisphereVectors");
        assert!(job.normalize);
        assert!(job.validate().is_ok());
    }
    #[test]
    fn validate() {
        let mut job = GenerationJob::new(
            DistributionConfig::Hemisphere { count: 0 },
            PathBuf::from("out.glsl"),
        );
        assert_matches!(job.validate(), Err(PointLutError::InvalidArgument(_)));
        job.distribution = DistributionConfig::Hemisphere { count: 1 };
        job.name = "not valid".into();
        assert_matches!(job.validate(), Err(PointLutError::InvalidArgument(_)));
    }
    #[test]
    fn points_normalized() {
        let job = GenerationJob::new(cube_face(32, Face::Front, Some(9)), PathBuf::new());
        for p in &job.points().unwrap() {
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-9);
        }
        let mut raw = job.clone();
        raw.normalize = false;
        for p in &raw.points().unwrap() {
            assert_eq!(p.z, 1.0);
        }
    }
    #[test]
    fn run() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("hemisphere.glsl");
        let job = GenerationJob::new(DistributionConfig::Hemisphere { count: 16 }, output.clone());
        let points = job.run().unwrap();
        let (name, parsed) = parse_vec3_array(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(name, "hemisphereVectors");
        assert_eq!(parsed, points);
        assert_eq!(parsed.len(), 16);
    }
    #[test]
    fn run_logs() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("k.glsl");
        let mut job = GenerationJob::new(DistributionConfig::Hemisphere { count: 2 }, output.clone());
        job.name = "k".into();
        testing_logger::setup();
        job.run().unwrap();
        check_logs(
            log::Level::Info,
            vec![
                "Generate 2 hemisphere points for 'k'",
                &format!("wrote 2 points to {}", output.display()),
            ],
        );
    }
    #[test]
    fn run_invalid_does_not_write() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("k.glsl");
        let job = GenerationJob::new(cube_face(0, Face::Front, None), output.clone());
        assert!(job.run().is_err());
        assert!(!output.exists());
    }
    #[test]
    fn job_file_from_string() {
        let yaml = "
jobs:
  - kind: hemisphere
    count: 16
    output: hemisphere.glsl
  - kind: cube_face
    count: 64
    face: top
    seed: 42
    sequence: sobol
    output: top.glsl
    name: topFace
    normalize: false
";
        let job_file = JobFile::from_string(yaml).unwrap();
        assert_eq!(job_file.jobs.len(), 2);
        assert_eq!(
            job_file.jobs[0],
            GenerationJob::new(
                DistributionConfig::Hemisphere { count: 16 },
                PathBuf::from("hemisphere.glsl")
            )
        );
        let second = &job_file.jobs[1];
        assert_eq!(
            second.distribution,
            DistributionConfig::CubeFace {
                count: 64,
                face: Face::Top,
                shuffle: true,
                seed: Some(42),
                sequence: SquareSequence::Sobol,
            }
        );
        assert_eq!(second.name, "topFace");
        assert!(!second.normalize);
    }
    #[test]
    fn job_file_cube_face_defaults() {
        let yaml = "
jobs:
  - kind: cube_face
    count: 8
    output: front.glsl
";
        let job_file = JobFile::from_string(yaml).unwrap();
        assert_eq!(
            job_file.jobs[0].distribution,
            DistributionConfig::CubeFace {
                count: 8,
                face: Face::Front,
                shuffle: true,
                seed: None,
                sequence: SquareSequence::Hammersley,
            }
        );
    }
    #[test]
    fn job_file_invalid() {
        assert_matches!(
            JobFile::from_string("jobs:\n  - kind: sphere\n    count: 3\n    output: a.glsl\n"),
            Err(PointLutError::JobFile(_))
        );
        assert_matches!(
            JobFile::from_string(
                "jobs:\n  - kind: cube_face\n    count: 3\n    face: diagonal\n    output: a.glsl\n"
            ),
            Err(PointLutError::JobFile(_))
        );
        assert_matches!(
            JobFile::from_string("jobs:\n  - kind: hemisphere\n    output: a.glsl\n"),
            Err(PointLutError::JobFile(_))
        );
    }
    #[test]
    fn job_file_from_file() {
        let dir = TempDir::new().unwrap();
        let job_path = dir.path().join("jobs.yaml");
        fs::write(
            &job_path,
            "jobs:\n  - kind: hemisphere\n    count: 4\n    output: h.glsl\n  - kind: cube_face\n    count: 4\n    face: left\n    shuffle: false\n    output: l.glsl\n    name: leftFace\n",
        )
        .unwrap();
        let job_file = JobFile::from_file(&job_path).unwrap();
        assert_eq!(job_file.jobs[0].output, dir.path().join("h.glsl"));
        job_file.run().unwrap();
        let (_, hemisphere) =
            parse_vec3_array(&fs::read_to_string(dir.path().join("h.glsl")).unwrap()).unwrap();
        assert_eq!(hemisphere.len(), 4);
        let (name, left) =
            parse_vec3_array(&fs::read_to_string(dir.path().join("l.glsl")).unwrap()).unwrap();
        assert_eq!(name, "leftFace");
        assert_eq!(
            left,
            CubeFace::new(4, Face::Left, false)
                .unwrap()
                .generate()
                .normalized()
                .unwrap()
        );
    }
    #[test]
    fn demo_job_file() {
        let job_file = JobFile::from_file(Path::new("./demos/kernels.yaml")).unwrap();
        assert_eq!(job_file.jobs.len(), 2);
        assert_eq!(
            job_file.jobs[0].output,
            PathBuf::from("./demos/hemisphere_vectors.glsl")
        );
        assert_eq!(job_file.jobs[1].name, "frontFaceVectors");
        for job in &job_file.jobs {
            assert!(job.validate().is_ok());
        }
    }
    #[test]
    fn job_file_missing() {
        assert_matches!(
            JobFile::from_file(Path::new("./does_not_exist/jobs.yaml")),
            Err(PointLutError::Io(_))
        );
    }
    #[test]
    fn job_file_validates_before_running() {
        let dir = TempDir::new().unwrap();
        let job_file = JobFile {
            jobs: vec![
                GenerationJob::new(
                    DistributionConfig::Hemisphere { count: 4 },
                    dir.path().join("first.glsl"),
                ),
                GenerationJob::new(
                    DistributionConfig::Hemisphere { count: 0 },
                    dir.path().join("second.glsl"),
                ),
            ],
        };
        let err = job_file.run().unwrap_err();
        assert_eq!(
            err,
            PointLutError::InvalidArgument(
                "job #1 (hemisphereVectors): InvalidArgument:nr_of_points must be >= 1.".into()
            )
        );
        assert!(!dir.path().join("first.glsl").exists());
    }
}
