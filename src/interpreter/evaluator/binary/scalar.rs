use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, core::unsupported},
            core::EvalResult,
        },
        value::{coercion::Kind, core::Value},
    },
};

/// Integer operator table.
///
/// Arithmetic wraps on overflow. Division truncates toward zero and the
/// remainder takes the sign of the dividend. Compound operators compute the
/// same value as their plain forms.
///
/// # Errors
/// - `DivisionByZero` for `/`, `%`, `/=` and `%=` with a zero divisor.
/// - `UnsupportedOperator` for anything else that is not arithmetic or a
///   comparison.
///
/// # Example
/// ```
/// use quasi::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::scalar::integer, value::core::Value},
/// };
///
/// assert_eq!(integer(InfixOperator::Modulo, -7, 3).unwrap(), Value::integer(-1));
/// assert!(integer(InfixOperator::Divide, 1, 0).is_err());
/// ```
pub fn integer(op: InfixOperator, a: i64, b: i64) -> EvalResult<Value> {
    use InfixOperator::{Add, Divide, Modulo, Multiply, Subtract};

    if let Some(result) = compare(op, &a, &b) {
        return Ok(Value::Boolean(result));
    }

    let value = match op.arithmetic() {
        Add => a.wrapping_add(b),
        Subtract => a.wrapping_sub(b),
        Multiply => a.wrapping_mul(b),
        Divide | Modulo if b == 0 => return Err(RuntimeError::DivisionByZero { operator: op }),
        Divide => a.wrapping_div(b),
        Modulo => a.wrapping_rem(b),
        _ => return Err(unsupported(op, Kind::Integer)),
    };

    Ok(Value::integer(value))
}

/// Double operator table.
///
/// Follows IEEE 754 except that a zero divisor is an error rather than an
/// infinity or `NaN`.
///
/// # Errors
/// The same as [`integer`].
pub fn double(op: InfixOperator, a: f64, b: f64) -> EvalResult<Value> {
    use InfixOperator::{Add, Divide, Modulo, Multiply, Subtract};

    if let Some(result) = compare(op, &a, &b) {
        return Ok(Value::Boolean(result));
    }

    let value = match op.arithmetic() {
        Add => a + b,
        Subtract => a - b,
        Multiply => a * b,
        Divide | Modulo if b == 0.0 => return Err(RuntimeError::DivisionByZero { operator: op }),
        Divide => a / b,
        Modulo => a % b,
        _ => return Err(unsupported(op, Kind::Double)),
    };

    Ok(Value::double(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(integer(InfixOperator::Add, i64::MAX, 1).unwrap(), Value::integer(i64::MIN));
        assert_eq!(integer(InfixOperator::Divide, i64::MIN, -1).unwrap(), Value::integer(i64::MIN));
    }

    #[test]
    fn compound_forms_compute_like_plain_ones() {
        assert_eq!(integer(InfixOperator::MultiplyAssign, 6, 7).unwrap(), Value::integer(42));
        assert_eq!(double(InfixOperator::SubtractAssign, 1.5, 0.5).unwrap(), Value::double(1.0));
    }

    #[test]
    fn double_zero_divisor_is_an_error() {
        let error = double(InfixOperator::Modulo, 1.0, 0.0).unwrap_err();
        assert_eq!(error.to_string(), "% by zero");
        assert_eq!(double(InfixOperator::Divide, 1.0, 4.0).unwrap(), Value::double(0.25));
    }

    #[test]
    fn comparisons_yield_booleans() {
        assert_eq!(integer(InfixOperator::GreaterEqual, 3, 3).unwrap(), Value::Boolean(true));
        assert_eq!(double(InfixOperator::Less, 2.0, 1.0).unwrap(), Value::Boolean(false));
    }
}
