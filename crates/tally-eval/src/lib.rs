//! Arithmetic evaluation for the Tally kernel.
//!
//! A single pure function, [`evaluate`], resolves a binary request over
//! the closed [`Operator`](tally_core::Operator) set to either a numeric
//! result or [`EvalError::DivisionByZero`](tally_core::EvalError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispatch;

// Public re-exports for the primary API surface.
pub use dispatch::{evaluate, evaluate_request};
