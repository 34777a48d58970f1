use std::io;
use thiserror::Error;

/// Failures raised while delivering emitted lines to their destination.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output line: {0}")]
    Write(#[source] io::Error),

    #[error("failed to flush output: {0}")]
    Flush(#[source] io::Error),
}

impl OutputError {
    /// The underlying I/O error, whichever stage produced it.
    pub fn io(&self) -> &io::Error {
        match self {
            Self::Write(err) | Self::Flush(err) => err,
        }
    }
}

pub type OutputResult<T> = Result<T, OutputError>;
