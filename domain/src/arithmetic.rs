//! Pure arithmetic operations exposed through the web layer.
//!
//! Each operation is a stateless function of its inputs. Overflow is treated
//! as an error rather than wrapping silently, so every value returned to a
//! client is the mathematically exact result.

use crate::error::{ArithmeticErrorKind, Error};

/// Returns the sum of two integers.
pub fn add(number1: i64, number2: i64) -> Result<i64, Error> {
    number1
        .checked_add(number2)
        .ok_or_else(|| Error::arithmetic(ArithmeticErrorKind::Overflow))
}

/// Returns the product of two integers.
pub fn multiply(number1: i64, number2: i64) -> Result<i64, Error> {
    number1
        .checked_mul(number2)
        .ok_or_else(|| Error::arithmetic(ArithmeticErrorKind::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};

    fn assert_overflow(result: Result<i64, Error>) {
        let error = result.expect_err("expected an overflow error");
        assert_eq!(
            error.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Arithmetic(
                ArithmeticErrorKind::Overflow
            ))
        );
    }

    #[test]
    fn test_add_returns_the_sum() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(add(-5, 10).unwrap(), 5);
        assert_eq!(add(0, 0).unwrap(), 0);
        assert_eq!(add(i64::MAX, 0).unwrap(), i64::MAX);
        assert_eq!(add(i64::MIN, i64::MAX).unwrap(), -1);
    }

    #[test]
    fn test_multiply_returns_the_product() {
        assert_eq!(multiply(4, 6).unwrap(), 24);
        assert_eq!(multiply(0, 999).unwrap(), 0);
        assert_eq!(multiply(-3, 7).unwrap(), -21);
        assert_eq!(multiply(-1, i64::MAX).unwrap(), i64::MIN + 1);
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        assert_overflow(add(i64::MAX, 1));
        assert_overflow(add(i64::MIN, -1));
    }

    #[test]
    fn test_multiply_overflow_is_an_error() {
        assert_overflow(multiply(i64::MAX, 2));
        assert_overflow(multiply(i64::MIN, -1));
    }

    #[test]
    fn test_operations_are_pure() {
        // Repeating the same call yields the same output; nothing is retained
        // between invocations.
        for _ in 0..3 {
            assert_eq!(add(2, 3).unwrap(), 5);
            assert_eq!(multiply(4, 6).unwrap(), 24);
        }
    }
}
