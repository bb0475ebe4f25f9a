#![warn(missing_docs)]
//! pointlut specific error structures
use std::{error::Error, fmt::Display};

/// pointlut specific Result type
pub type LutResult<T> = std::result::Result<T, PointLutError>;

/// Errors that can be returned by the generation, normalization and output functions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PointLutError {
    /// a caller supplied value is not acceptable (unknown face, zero point count, bad array name, ...)
    InvalidArgument(String),
    /// the output file could not be created, written or moved into place, or a job file could not be read
    Io(String),
    /// a batch job file could not be parsed
    JobFile(String),
    /// drawing the optional preview plot failed
    Plot(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for PointLutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(m) => {
                write!(f, "InvalidArgument:{m}")
            }
            Self::Io(m) => {
                write!(f, "Io:{m}")
            }
            Self::JobFile(m) => {
                write!(f, "JobFile:{m}")
            }
            Self::Plot(m) => {
                write!(f, "Plot:{m}")
            }
            Self::Other(m) => write!(f, "pointlut Error:Other:{m}"),
        }
    }
}
impl Error for PointLutError {}

impl std::convert::From<String> for PointLutError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
