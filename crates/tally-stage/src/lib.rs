//! Staged index buffers for the Tally arithmetic kernel.
//!
//! Provides [`IndexBuffer`], an owned fixed-capacity `i64` sequence that
//! is allocated and deterministically filled in a single step, and
//! [`StageError`] for the one way staging can fail.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;

// Public re-exports for the primary API surface.
pub use buffer::IndexBuffer;
pub use error::StageError;
