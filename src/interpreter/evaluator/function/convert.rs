use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            coercion::{self, Kind, convert},
            core::Value,
        },
    },
    util::num::f64_to_i64_truncating,
};

fn conversion_error(value: &Value, target: Kind) -> RuntimeError {
    RuntimeError::Conversion { type_name: value.type_name().to_string(),
                               target:    target.name().to_string(), }
}

/// Returns the printed form of any value.
pub fn to_string(args: &[Value]) -> EvalResult<Value> {
    convert(&args[0], Kind::String).ok_or_else(|| conversion_error(&args[0], Kind::String))
}

/// Converts to an integer.
///
/// Booleans become `0`/`1`, doubles are truncated toward zero and strings
/// are parsed after trimming whitespace. A string holding a double is
/// parsed and truncated.
///
/// # Errors
/// `Conversion` for strings that are not numbers and for every other type.
///
/// # Example
/// ```
/// use quasi::interpreter::{evaluator::function::convert::to_integer, value::core::Value};
///
/// assert_eq!(to_integer(&[Value::double(-2.7)]).unwrap(), Value::integer(-2));
/// assert_eq!(to_integer(&[Value::from(" 42 ")]).unwrap(), Value::integer(42));
/// assert!(to_integer(&[Value::from("forty")]).is_err());
/// ```
pub fn to_integer(args: &[Value]) -> EvalResult<Value> {
    let value = &args[0];
    if let Value::String(s) = value {
        let text = s.borrow();
        let s = text.trim();
        return s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(f64_to_i64_truncating))
                .map(Value::integer)
                .ok_or_else(|| conversion_error(value, Kind::Integer));
    }
    convert(value, Kind::Integer).ok_or_else(|| conversion_error(value, Kind::Integer))
}

/// Converts to a double.
///
/// Integers and booleans convert exactly; strings are parsed after
/// trimming whitespace.
///
/// # Errors
/// `Conversion` for strings that are not numbers and for every other type.
pub fn to_double(args: &[Value]) -> EvalResult<Value> {
    let value = &args[0];
    if let Value::String(s) = value {
        return s.borrow()
                .trim()
                .parse::<f64>()
                .map(Value::double)
                .map_err(|_| conversion_error(value, Kind::Double));
    }
    convert(value, Kind::Double).ok_or_else(|| conversion_error(value, Kind::Double))
}

/// Applies the boolean conversion: numbers are `true` when non-zero and
/// everything that is not a boolean or a number is `false`.
pub fn to_boolean(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Boolean(coercion::to_boolean(&args[0])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_conversion_is_not_truthiness() {
        assert_eq!(to_boolean(&[Value::integer(0)]).unwrap(), Value::Boolean(false));
        assert_eq!(to_boolean(&[Value::from("yes")]).unwrap(), Value::Boolean(false));
        assert_eq!(to_boolean(&[Value::double(-0.1)]).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn strings_parse_as_numbers() {
        assert_eq!(to_double(&[Value::from("2.5")]).unwrap(), Value::double(2.5));
        assert_eq!(to_integer(&[Value::from("3.9")]).unwrap(), Value::integer(3));
        assert_eq!(to_double(&[Value::Boolean(true)]).unwrap(), Value::double(1.0));
    }

    #[test]
    fn null_has_no_numeric_conversion() {
        let error = to_integer(&[Value::Null]).unwrap_err();
        assert_eq!(error.to_string(), "cannot convert Null to Integer");
    }

    #[test]
    fn to_string_uses_the_printed_form() {
        let array = Value::from(vec![Value::integer(1), Value::double(2.0)]);
        assert_eq!(to_string(&[array]).unwrap(), Value::from("[1, 2.0]"));
    }
}
