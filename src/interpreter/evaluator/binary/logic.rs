use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, core::unsupported},
            core::EvalResult,
        },
        value::{
            coercion::{Kind, to_boolean},
            core::Value,
        },
    },
};

/// Evaluates `&&` or `||`.
///
/// Both operands are already evaluated; there is no short circuit. Each is
/// reduced with the boolean conversion, so `"yes" && true` is `false`.
///
/// # Example
/// ```
/// use quasi::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let result = eval_logic(InfixOperator::Or, &Value::integer(0), &Value::double(0.5));
/// assert_eq!(result, Value::Boolean(true));
/// ```
#[must_use]
pub fn eval_logic(op: InfixOperator, left: &Value, right: &Value) -> Value {
    let (l, r) = (to_boolean(left), to_boolean(right));
    Value::Boolean(if op == InfixOperator::And { l && r } else { l || r })
}

/// Boolean operator table.
///
/// Arithmetic runs on `0`/`1` and maps the result back to a boolean:
/// `+` is true when the sum is positive, `-` when the difference is
/// negative, `*` when the product is positive and `/` when the quotient is
/// positive. `%` is always false for a non-zero divisor. Ordering compares
/// `false` below `true`.
///
/// # Errors
/// - `DivisionByZero` for `/` and `%` when the right operand is `false`.
/// - `UnsupportedOperator` for anything else.
pub fn boolean(op: InfixOperator, a: bool, b: bool) -> EvalResult<Value> {
    use InfixOperator::{Add, Divide, Modulo, Multiply, Subtract};

    let (l, r) = (i64::from(a), i64::from(b));

    if let Some(result) = compare(op, &l, &r) {
        return Ok(Value::Boolean(result));
    }

    let value = match op.arithmetic() {
        Add => l + r > 0,
        Subtract => l - r < 0,
        Multiply => l * r > 0,
        Divide | Modulo if r == 0 => return Err(RuntimeError::DivisionByZero { operator: op }),
        Divide => l / r > 0,
        Modulo => false,
        _ => return Err(unsupported(op, Kind::Boolean)),
    };

    Ok(Value::Boolean(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic_uses_boolean_conversion() {
        let text = Value::from("true");
        assert_eq!(eval_logic(InfixOperator::And, &text, &Value::Boolean(true)),
                   Value::Boolean(false));
        assert_eq!(eval_logic(InfixOperator::Or, &Value::Null, &Value::integer(-1)),
                   Value::Boolean(true));
    }

    #[test]
    fn boolean_arithmetic() {
        assert_eq!(boolean(InfixOperator::Add, false, true).unwrap(), Value::Boolean(true));
        assert_eq!(boolean(InfixOperator::Subtract, false, true).unwrap(), Value::Boolean(true));
        assert_eq!(boolean(InfixOperator::Subtract, true, false).unwrap(), Value::Boolean(false));
        assert_eq!(boolean(InfixOperator::Multiply, true, false).unwrap(), Value::Boolean(false));
        assert_eq!(boolean(InfixOperator::Modulo, true, true).unwrap(), Value::Boolean(false));
    }

    #[test]
    fn boolean_division_by_false() {
        let error = boolean(InfixOperator::Divide, true, false).unwrap_err();
        assert_eq!(error.to_string(), "/ by zero");
    }

    #[test]
    fn false_orders_below_true() {
        assert_eq!(boolean(InfixOperator::Less, false, true).unwrap(), Value::Boolean(true));
        assert_eq!(boolean(InfixOperator::Equal, true, true).unwrap(), Value::Boolean(true));
    }
}
