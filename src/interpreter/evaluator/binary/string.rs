use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::{
            binary::{comparison::equality, core::unsupported},
            core::EvalResult,
        },
        value::{coercion::Kind, core::Value},
    },
};

/// String operator table.
///
/// - `+` concatenates.
/// - `-` removes the first occurrence of the right string.
/// - `==` and `!=` compare the text.
///
/// Strings have no ordering and no `*`, `/` or `%`.
///
/// # Errors
/// `UnsupportedOperator` for every other operator.
///
/// # Example
/// ```
/// use quasi::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::string::string, value::core::Value},
/// };
///
/// assert_eq!(string(InfixOperator::Subtract, "banana", "an").unwrap(), Value::from("bana"));
/// assert!(string(InfixOperator::Less, "a", "b").is_err());
/// ```
pub fn string(op: InfixOperator, a: &str, b: &str) -> EvalResult<Value> {
    if let Some(result) = equality(op, a == b) {
        return Ok(Value::Boolean(result));
    }

    match op.arithmetic() {
        InfixOperator::Add => Ok(Value::from(format!("{a}{b}"))),
        InfixOperator::Subtract => Ok(Value::from(a.replacen(b, "", 1))),
        _ => Err(unsupported(op, Kind::String)),
    }
}
