use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{hash_key, integer_index},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `target[index]`.
    ///
    /// The target is evaluated before the index.
    pub(crate) fn eval_index(&self, target: &Expr, index: &Expr) -> EvalResult<Value> {
        let container = self.eval(target)?;
        let index = self.eval(index)?;
        index_value(&container, &index)
    }
}

/// Reads one element of a string, array or hash.
///
/// - A string yields its character at `index` as a one character string.
/// - An array yields the element at `index`.
/// - A hash yields the value stored under `index`, or `null` if there is
///   none.
///
/// Array and hash elements are returned as shared values, so a compound
/// operator on the result updates the element.
///
/// # Errors
/// - `InvalidIndex` / `IndexOutOfRange` for bad string and array indexes.
/// - `UnhashableKey` for a hash index that cannot be a key.
/// - `IndexNotSupported` for any other container.
///
/// # Example
/// ```
/// use quasi::interpreter::{evaluator::index::index_value, value::core::Value};
///
/// let word = Value::from("héllo");
/// assert_eq!(index_value(&word, &Value::integer(1)).unwrap(), Value::from("é"));
/// assert!(index_value(&word, &Value::integer(5)).is_err());
/// ```
pub fn index_value(container: &Value, index: &Value) -> EvalResult<Value> {
    match container {
        Value::String(s) => {
            let s = s.borrow();
            let i = integer_index(index, s.chars().count())?;
            Ok(s.chars().nth(i).map_or(Value::Null, |c| Value::from(c.to_string())))
        },
        Value::Array(elements) => {
            let elements = elements.borrow();
            let i = integer_index(index, elements.len())?;
            Ok(elements[i].clone())
        },
        Value::Hash(entries) => {
            let key = hash_key(index)?;
            Ok(entries.borrow().get(&key).cloned().unwrap_or(Value::Null))
        },
        other => Err(RuntimeError::IndexNotSupported { type_name: other.type_name().to_string() }),
    }
}

/// Writes one element of an array or hash in place.
///
/// Every binding that shares the container observes the write.
///
/// # Errors
/// The same index errors as [`index_value`]. Strings are immutable and
/// report `IndexNotSupported`.
pub fn store_element(container: &Value, index: &Value, value: Value) -> EvalResult<()> {
    match container {
        Value::Array(elements) => {
            let mut elements = elements.borrow_mut();
            let i = integer_index(index, elements.len())?;
            elements[i] = value;
            Ok(())
        },
        Value::Hash(entries) => {
            let key = hash_key(index)?;
            entries.borrow_mut().insert(key, value);
            Ok(())
        },
        other => Err(RuntimeError::IndexNotSupported { type_name: other.type_name().to_string() }),
    }
}

/// Replaces the character at `index` of `s` with the printed form of
/// `value`.
///
/// # Errors
/// `InvalidIndex` or `IndexOutOfRange` for a bad index.
///
/// # Example
/// ```
/// use quasi::interpreter::{evaluator::index::splice_string, value::core::Value};
///
/// let spliced = splice_string("cat", &Value::integer(0), &Value::from("b")).unwrap();
/// assert_eq!(spliced, "bat");
/// ```
pub fn splice_string(s: &str, index: &Value, value: &Value) -> EvalResult<String> {
    let i = integer_index(index, s.chars().count())?;
    let mut spliced: String = s.chars().take(i).collect();
    spliced.push_str(&value.to_string());
    spliced.extend(s.chars().skip(i + 1));
    Ok(spliced)
}
