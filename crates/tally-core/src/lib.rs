//! Core types for the Tally arithmetic kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the closed [`Operator`] set, the [`ArithmeticRequest`] payload, and
//! the evaluation error type consumed by the dispatcher crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod operator;
pub mod request;

// Public re-exports for the primary API surface.
pub use error::EvalError;
pub use operator::Operator;
pub use request::ArithmeticRequest;
