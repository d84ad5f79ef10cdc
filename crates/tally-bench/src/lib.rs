//! Benchmark workloads for the Tally arithmetic kernel.
//!
//! Provides deterministic request mixes shared by the criterion benches
//! and the `calculator` example.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tally_core::{ArithmeticRequest, Operator};

/// Build a deterministic mix of `count` requests cycling through the four
/// operators, with operands spread across the `i64` range.
///
/// Divisors are offset by one so the divide share of the mix exercises
/// the full division path rather than the zero guard.
pub fn request_mix(count: usize) -> Vec<ArithmeticRequest> {
    (0..count)
        .map(|i| {
            let op = Operator::ALL[i % Operator::ALL.len()];
            let lhs = (i as i64).wrapping_mul(0x9E37_79B9_7F4A_7C15u64 as i64);
            let rhs = (i as i64).wrapping_mul(40_503).wrapping_add(1);
            ArithmeticRequest::new(lhs, rhs, op)
        })
        .collect()
}
