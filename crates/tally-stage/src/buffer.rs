//! Owned, fixed-capacity index buffers with a deterministic fill.
//!
//! An [`IndexBuffer`] is allocated to its full capacity up front and
//! filled with the sequence `0, 1, 2, ...` before it is handed to the
//! caller. A partially initialized buffer is never observable: staging
//! either completes in full or fails before any buffer exists.

use crate::error::StageError;

/// An owned, fixed-length sequence of `i64` where element `i` equals `i`.
///
/// Staging happens in one step: storage for exactly `capacity` elements
/// is reserved, then every slot is written in increasing index order.
/// The caller owns the buffer exclusively — there is no sharing and no
/// aliasing — and dropping it releases the storage exactly once.
///
/// The buffer never grows or shrinks after staging, so its length always
/// equals the capacity it was requested with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexBuffer {
    /// Backing storage. Reserved to exact capacity at creation.
    values: Vec<i64>,
}

impl IndexBuffer {
    /// Default capacity for callers with no specific size requirement.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Allocate and fill a buffer of exactly `capacity` elements.
    ///
    /// Storage is reserved with [`Vec::try_reserve_exact`], so a request
    /// the allocator cannot satisfy surfaces as
    /// [`StageError::AllocationFailed`] instead of aborting the process.
    /// On success, `get(i) == Some(i as i64)` for every `i < capacity`.
    ///
    /// A zero capacity yields an empty buffer.
    pub fn new(capacity: usize) -> Result<Self, StageError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| StageError::AllocationFailed {
                requested: capacity,
            })?;
        values.extend((0..capacity).map(|i| i as i64));
        Ok(Self { values })
    }

    /// Number of elements. Always equals the capacity the buffer was
    /// staged with.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer was staged with a capacity of zero.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Consume the buffer and return the backing storage.
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.values.len() * std::mem::size_of::<i64>()
    }
}
