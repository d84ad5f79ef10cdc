//! Tally: staged integer buffers and checked arithmetic evaluation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tally sub-crates. For most users, adding `tally` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tally::prelude::*;
//!
//! // Stage a buffer of five indices: allocated and filled in one step.
//! let buffer = IndexBuffer::new(5).unwrap();
//! assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
//!
//! // Evaluate requests over the closed operator set.
//! assert_eq!(evaluate(10, 5, Operator::Add), Ok(15));
//! assert_eq!(evaluate(7, 2, Operator::Divide), Ok(3));
//! assert_eq!(evaluate(10, 0, Operator::Divide), Err(EvalError::DivisionByZero));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tally-core` | `Operator`, `ArithmeticRequest`, `EvalError` |
//! | [`stage`] | `tally-stage` | `IndexBuffer`, `StageError` |
//! | [`eval`] | `tally-eval` | `evaluate`, `evaluate_request` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tally-core`).
///
/// Contains the closed [`types::Operator`] set, the
/// [`types::ArithmeticRequest`] payload, and [`types::EvalError`].
pub use tally_core as types;

/// Staged index buffers (`tally-stage`).
///
/// Provides [`stage::IndexBuffer`] and [`stage::StageError`].
pub use tally_stage as stage;

/// Arithmetic dispatch (`tally-eval`).
///
/// Provides [`eval::evaluate`] and [`eval::evaluate_request`].
pub use tally_eval as eval;

/// Common imports for typical Tally usage.
///
/// ```rust
/// use tally::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tally_core::{ArithmeticRequest, EvalError, Operator};

    // Staging
    pub use tally_stage::{IndexBuffer, StageError};

    // Evaluation
    pub use tally_eval::{evaluate, evaluate_request};
}
