//! Handling the pointlut CLI
//!
//! This module handles the command line parsing and turns the given arguments into
//! [`GenerationJob`]s.
use crate::{
    distributions::{validate_nr_of_points, Face, SquareSequence},
    error::{LutResult, PointLutError},
    get_version,
    job::{DistributionConfig, GenerationJob, JobFile},
    vec3_array::{validate_array_name, DEFAULT_ARRAY_NAME},
};
use clap::{builder::Str, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};

/// Command line arguments for the pointlut application.
#[derive(Parser, Debug)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct Args {
    /// the lookup table to be generated
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the pointlut application.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Golden-angle spiral on the upper unit hemisphere
    Hemisphere {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Low-discrepancy points on one face of the cube [-1, 1]³
    CubeFace {
        #[command(flatten)]
        output: OutputArgs,

        /// cube face: front, back, left, right, top or bottom
        #[arg(default_value = "front", value_parser = parse_face)]
        face: Face,

        /// keep the generation order instead of shuffling the points
        #[arg(long)]
        no_shuffle: bool,

        /// seed for a reproducible shuffle order
        #[arg(long, conflicts_with = "no_shuffle")]
        seed: Option<u64>,

        /// construction of the points on the unit square: hammersley or sobol
        #[arg(long, default_value = "hammersley", value_parser = parse_sequence)]
        sequence: SquareSequence,
    },
    /// Run all jobs of a YAML job file
    Batch {
        /// path of the job file
        job_file: PathBuf,
    },
}

/// Arguments shared by all generating subcommands.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// number of points (>= 1)
    #[arg(value_parser = parse_count)]
    count: usize,

    /// file the vec3 array is written to
    output: PathBuf,

    /// name of the generated array
    #[arg(short, long, default_value = DEFAULT_ARRAY_NAME, value_parser = parse_array_name)]
    name: String,

    /// write the points as generated instead of scaling them to unit length
    #[arg(long)]
    raw: bool,

    /// additionally write an SVG preview plot to this path
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: Option<PathBuf>,
}
impl OutputArgs {
    fn into_job(self, distribution: DistributionConfig) -> GenerationJob {
        let mut job = GenerationJob::new(distribution, self.output);
        job.name = self.name;
        job.normalize = !self.raw;
        #[cfg(feature = "plot")]
        {
            job.plot = self.plot;
        }
        job
    }
}

fn parse_count(input: &str) -> LutResult<usize> {
    let count = input.parse::<usize>().map_err(|e| {
        PointLutError::InvalidArgument(format!("'{input}' is not a valid number of points: {e}"))
    })?;
    validate_nr_of_points(count)
}

fn parse_face(input: &str) -> LutResult<Face> {
    Face::from_name(input)
}

fn parse_sequence(input: &str) -> LutResult<SquareSequence> {
    SquareSequence::from_str(input).map_err(|_| {
        PointLutError::InvalidArgument(format!(
            "unknown sequence '{input}', expected hammersley or sobol"
        ))
    })
}

fn parse_array_name(input: &str) -> LutResult<String> {
    validate_array_name(input)?;
    Ok(input.to_string())
}

impl Command {
    /// Convert this [`Command`] into the list of jobs to be run.
    ///
    /// # Errors
    ///
    /// This function will return an error if a job file cannot be read or parsed.
    pub fn into_jobs(self) -> LutResult<Vec<GenerationJob>> {
        match self {
            Self::Hemisphere { output } => {
                let count = output.count;
                Ok(vec![
                    output.into_job(DistributionConfig::Hemisphere { count })
                ])
            }
            Self::CubeFace {
                output,
                face,
                no_shuffle,
                seed,
                sequence,
            } => {
                let count = output.count;
                Ok(vec![output.into_job(DistributionConfig::CubeFace {
                    count,
                    face,
                    shuffle: !no_shuffle,
                    seed,
                    sequence,
                })])
            }
            Self::Batch { job_file } => Ok(JobFile::from_file(&job_file)?.jobs),
        }
    }
}

impl Args {
    /// Run the jobs described by these arguments.
    ///
    /// # Errors
    ///
    /// This function will return an error if a job is invalid or cannot be completed.
    pub fn run(self) -> LutResult<()> {
        JobFile {
            jobs: self.command.into_jobs()?,
        }
        .run()
    }
}
