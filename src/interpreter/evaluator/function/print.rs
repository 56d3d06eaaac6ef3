use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::BUILTIN_FUNCTIONS},
    value::core::Value,
};

/// Prints each argument on its own line and returns `null`.
///
/// Values are formatted using their `Display` implementation, so strings
/// print without quotes.
///
/// # Example
/// ```
/// use quasi::interpreter::{evaluator::function::print::puts, value::core::Value};
///
/// // The function prints to stdout, but the doctest only checks the
/// // returned result.
/// let result = puts(&[Value::from("hello"), Value::integer(1)]).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}

/// Prints the name of every builtin, one per line, and returns `null`.
pub fn list_builtin(_args: &[Value]) -> EvalResult<Value> {
    for name in BUILTIN_FUNCTIONS {
        println!("{name}");
    }
    Ok(Value::Null)
}
