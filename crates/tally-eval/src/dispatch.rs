//! Exhaustive dispatch over the closed operator set.

use tally_core::{ArithmeticRequest, EvalError, Operator};

/// Evaluate `lhs op rhs`.
///
/// Addition, subtraction, and multiplication use two's-complement
/// wraparound; overflow is not a failure. Division truncates toward zero
/// and fails with [`EvalError::DivisionByZero`] when `rhs` is zero — the
/// guard runs before any computation, so no partial result is produced.
/// The one overflowing quotient, `i64::MIN / -1`, wraps like the other
/// operators rather than introducing a failure kind the error taxonomy
/// does not have.
///
/// The match is exhaustive with no fallback arm, so an unrecognized
/// operation cannot silently produce a value.
///
/// Pure and stateless: the result depends only on the three inputs.
///
/// # Examples
///
/// ```
/// use tally_core::{EvalError, Operator};
/// use tally_eval::evaluate;
///
/// assert_eq!(evaluate(10, 5, Operator::Add), Ok(15));
/// assert_eq!(evaluate(10, 0, Operator::Divide), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(lhs: i64, rhs: i64, op: Operator) -> Result<i64, EvalError> {
    match op {
        Operator::Add => Ok(lhs.wrapping_add(rhs)),
        Operator::Subtract => Ok(lhs.wrapping_sub(rhs)),
        Operator::Multiply => Ok(lhs.wrapping_mul(rhs)),
        Operator::Divide => {
            if rhs == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(lhs.wrapping_div(rhs))
            }
        }
    }
}

/// Evaluate a prepared [`ArithmeticRequest`].
pub fn evaluate_request(request: &ArithmeticRequest) -> Result<i64, EvalError> {
    evaluate(request.lhs, request.rhs, request.op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_concrete() {
        assert_eq!(evaluate(10, 5, Operator::Add), Ok(15));
    }

    #[test]
    fn subtract_concrete() {
        assert_eq!(evaluate(10, 5, Operator::Subtract), Ok(5));
    }

    #[test]
    fn multiply_concrete() {
        assert_eq!(evaluate(10, 5, Operator::Multiply), Ok(50));
    }

    #[test]
    fn divide_concrete() {
        assert_eq!(evaluate(10, 5, Operator::Divide), Ok(2));
    }

    #[test]
    fn divide_by_zero_fails_for_any_dividend() {
        assert_eq!(evaluate(10, 0, Operator::Divide), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate(0, 0, Operator::Divide), Err(EvalError::DivisionByZero));
        assert_eq!(
            evaluate(i64::MIN, 0, Operator::Divide),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(evaluate(7, 2, Operator::Divide), Ok(3));
        assert_eq!(evaluate(-7, 2, Operator::Divide), Ok(-3));
        assert_eq!(evaluate(7, -2, Operator::Divide), Ok(-3));
        assert_eq!(evaluate(-7, -2, Operator::Divide), Ok(3));
    }

    #[test]
    fn addition_wraps_at_the_boundary() {
        assert_eq!(evaluate(i64::MAX, 1, Operator::Add), Ok(i64::MIN));
        assert_eq!(evaluate(i64::MIN, -1, Operator::Add), Ok(i64::MAX));
    }

    #[test]
    fn subtraction_wraps_at_the_boundary() {
        assert_eq!(evaluate(i64::MIN, 1, Operator::Subtract), Ok(i64::MAX));
    }

    #[test]
    fn multiplication_wraps_at_the_boundary() {
        assert_eq!(
            evaluate(i64::MAX, 2, Operator::Multiply),
            Ok(i64::MAX.wrapping_mul(2))
        );
    }

    #[test]
    fn min_divided_by_minus_one_wraps() {
        assert_eq!(evaluate(i64::MIN, -1, Operator::Divide), Ok(i64::MIN));
    }

    #[test]
    fn request_evaluation_matches_direct_dispatch() {
        let request = ArithmeticRequest::new(10, 5, Operator::Multiply);
        assert_eq!(evaluate_request(&request), Ok(50));
    }

    proptest! {
        #[test]
        fn add_matches_wrapping_reference(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(evaluate(a, b, Operator::Add), Ok(a.wrapping_add(b)));
        }

        #[test]
        fn add_commutes(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(evaluate(a, b, Operator::Add), evaluate(b, a, Operator::Add));
        }

        #[test]
        fn subtract_matches_wrapping_reference(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(evaluate(a, b, Operator::Subtract), Ok(a.wrapping_sub(b)));
        }

        #[test]
        fn multiply_matches_wrapping_reference(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(evaluate(a, b, Operator::Multiply), Ok(a.wrapping_mul(b)));
        }

        #[test]
        fn divide_by_zero_always_fails(a in any::<i64>()) {
            prop_assert_eq!(evaluate(a, 0, Operator::Divide), Err(EvalError::DivisionByZero));
        }

        #[test]
        fn divide_by_nonzero_never_fails(
            a in any::<i64>(),
            b in any::<i64>().prop_filter("divisor must be nonzero", |b| *b != 0),
        ) {
            prop_assert!(evaluate(a, b, Operator::Divide).is_ok());
        }

        #[test]
        fn division_reconstructs_the_dividend(
            a in any::<i64>(),
            b in any::<i64>().prop_filter("divisor must be nonzero", |b| *b != 0),
        ) {
            // The overflow corner wraps by contract and does not satisfy
            // the Euclidean identity, so it is excluded here.
            prop_assume!(!(a == i64::MIN && b == -1));
            let q = evaluate(a, b, Operator::Divide).unwrap();
            prop_assert_eq!(q * b + a % b, a);
        }
    }
}
