use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Divides `a` by `b`, rounding toward negative infinity.
///
/// ## Errors
/// - `DivisionByZero` if `b` is zero.
/// - `Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use minilisp::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert_eq!(floor_div(7, -2, 1).unwrap(), -4);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(a: i64, b: i64, line: usize) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let quotient = a.checked_div(b).ok_or(RuntimeError::Overflow { line })?;

    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Remainder of the floor division of `a` by `b`.
///
/// The result is zero or has the sign of `b`, so that
/// `floor_div(a, b) * b + floor_mod(a, b) == a`.
///
/// ## Errors
/// `DivisionByZero` if `b` is zero.
///
/// ## Example
/// ```
/// use minilisp::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3, 1).unwrap(), 1);
/// assert_eq!(floor_mod(-7, 3, 1).unwrap(), 2);
/// assert_eq!(floor_mod(7, -3, 1).unwrap(), -2);
/// ```
pub fn floor_mod(a: i64, b: i64, line: usize) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let remainder = a.wrapping_rem(b);

    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_identity_holds() {
        for a in -20..=20 {
            for b in [-7, -3, -2, -1, 1, 2, 3, 7] {
                let q = floor_div(a, b, 1).unwrap();
                let r = floor_mod(a, b, 1).unwrap();
                assert_eq!(q * b + r, a, "a = {a}, b = {b}");
            }
        }
    }

    #[test]
    fn extreme_operands() {
        assert!(matches!(floor_div(i64::MIN, -1, 3), Err(RuntimeError::Overflow { line: 3 })));
        assert_eq!(floor_mod(i64::MIN, -1, 1).unwrap(), 0);
        assert!(matches!(floor_mod(5, 0, 2), Err(RuntimeError::DivisionByZero { line: 2 })));
    }
}
