//! Staging-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while staging a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageError {
    /// Backing storage could not be reserved for the requested capacity.
    ///
    /// Not retried internally. The caller decides whether to retry with
    /// a smaller capacity or abort.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "buffer allocation failed: requested {requested} elements")
            }
        }
    }
}

impl Error for StageError {}
