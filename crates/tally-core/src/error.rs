//! Error types for arithmetic evaluation.

use std::error::Error;
use std::fmt;

/// Errors from evaluating an arithmetic request.
///
/// Division by zero is the only failure the dispatcher recognizes; every
/// other request resolves to a numeric result. The error is definitive —
/// retrying the same request cannot change the outcome — so callers
/// either substitute operands or abandon the computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The divisor operand of a `Divide` request was zero.
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Error for EvalError {}
