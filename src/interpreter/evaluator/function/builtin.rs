use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64,
};

fn invalid_argument(name: &str, value: &Value) -> RuntimeError {
    RuntimeError::InvalidArgument { name:      name.to_string(),
                                    type_name: value.type_name().to_string(), }
}

/// Returns the length of a string, array or hash.
///
/// Strings are measured in characters, not bytes.
///
/// # Errors
/// `InvalidArgument` for any other value.
///
/// # Example
/// ```
/// use quasi::interpreter::{evaluator::function::builtin::size, value::core::Value};
///
/// assert_eq!(size(&[Value::from("héllo")]).unwrap(), Value::integer(5));
/// assert!(size(&[Value::integer(3)]).is_err());
/// ```
pub fn size(args: &[Value]) -> EvalResult<Value> {
    let length = match &args[0] {
        Value::String(s) => s.borrow().chars().count(),
        Value::Array(elements) => elements.borrow().len(),
        Value::Hash(entries) => entries.borrow().len(),
        other => return Err(invalid_argument("size", other)),
    };
    Ok(Value::integer(usize_to_i64(length)))
}

/// Appends the second argument to the array given first and returns that
/// array.
///
/// The array is modified in place.
///
/// # Errors
/// `InvalidArgument` if the first argument is not an array.
pub fn push(args: &[Value]) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(invalid_argument("push", &args[0]));
    };
    elements.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}

/// Removes and returns the last element of an array.
///
/// # Errors
/// - `InvalidArgument` if the argument is not an array.
/// - `EmptyArray` if the array has no elements.
pub fn pop(args: &[Value]) -> EvalResult<Value> {
    let Value::Array(elements) = &args[0] else {
        return Err(invalid_argument("pop", &args[0]));
    };
    elements.borrow_mut().pop().ok_or(RuntimeError::EmptyArray)
}

/// Returns the type name of a value as a string.
pub fn type_of(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::from(args[0].type_name()))
}

/// Returns a copy that no longer shares storage with its argument.
///
/// Arrays and hashes are copied shallowly. Booleans and `null` come back
/// unchanged.
///
/// # Errors
/// `InvalidArgument` for functions, macros, builtins and quotes.
pub fn clone(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Function(_) | Value::Macro(_) | Value::Builtin(_) | Value::Quote(_) => {
            Err(invalid_argument("clone", &args[0]))
        },
        other => Ok(other.shallow_copy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_the_same_array() {
        let array = Value::from(vec![Value::integer(1)]);
        let result = push(&[array.clone(), Value::integer(2)]).unwrap();
        assert_eq!(result.to_string(), "[1, 2]");
        assert_eq!(array.to_string(), "[1, 2]");
    }

    #[test]
    fn pop_on_empty_array_is_an_error() {
        let array = Value::from(vec![Value::integer(7)]);
        assert_eq!(pop(&[array.clone()]).unwrap(), Value::integer(7));
        assert_eq!(pop(&[array]).unwrap_err(), RuntimeError::EmptyArray);
    }

    #[test]
    fn type_names() {
        assert_eq!(type_of(&[Value::double(1.0)]).unwrap(), Value::from("Double"));
        assert_eq!(type_of(&[Value::Null]).unwrap(), Value::from("Null"));
    }

    #[test]
    fn clone_detaches_arrays() {
        let array = Value::from(vec![Value::integer(1)]);
        let copy = clone(&[array.clone()]).unwrap();
        push(&[copy.clone(), Value::integer(2)]).unwrap();
        assert_eq!(array.to_string(), "[1]");
        assert_eq!(copy.to_string(), "[1, 2]");
    }

    #[test]
    fn clone_detaches_scalars() {
        let n = Value::integer(1);
        let copy = clone(&[n.clone()]).unwrap();
        assert!(copy.overwrite(&Value::integer(2)));
        assert_eq!(n, Value::integer(1));
    }
}
