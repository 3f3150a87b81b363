use thiserror::Error;

/// An error that can occur before or around a simulation run.
///
/// The engine itself never fails; every variant here is raised while
/// validating input or talking to the outside world.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid pattern name: {name} (valid values are: {valid})")]
    InvalidPattern { name: String, valid: String },

    #[error("Invalid iteration count: {0} (expected a non-negative integer)")]
    InvalidIterationCount(String),

    #[error("Invalid RLE pattern: {0}")]
    InvalidRle(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
