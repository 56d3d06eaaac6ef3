use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::{
            binary::{
                comparison::{compare, equality},
                core::unsupported,
            },
            core::EvalResult,
        },
        value::{
            coercion::Kind,
            core::{HashRef, Value},
        },
    },
};

/// Hash operator table.
///
/// - `+` merges into a new hash, right entries winning; `+=` merges into the
///   left hash.
/// - `-` drops the left entries whose key and value both appear in the right
///   hash; `-=` does the same in place.
/// - `== !=` compare entries.
/// - `< <= > >=` compare entry counts.
///
/// # Errors
/// `UnsupportedOperator` for `* / %` and their compound forms.
pub fn hash(op: InfixOperator, a: &HashRef, b: &HashRef) -> EvalResult<Value> {
    use InfixOperator::{Add, AddAssign, Subtract, SubtractAssign};

    if let Some(result) = equality(op, *a.borrow() == *b.borrow()) {
        return Ok(Value::Boolean(result));
    }
    if let Some(result) = compare(op, &a.borrow().len(), &b.borrow().len()) {
        return Ok(Value::Boolean(result));
    }

    let right = b.borrow().clone();

    match op {
        Add => {
            let mut entries = a.borrow().clone();
            entries.extend(right);
            Ok(Value::from(entries))
        },
        AddAssign => {
            a.borrow_mut().extend(right);
            Ok(Value::Hash(a.clone()))
        },
        Subtract => {
            let mut entries = a.borrow().clone();
            entries.retain(|key, value| right.get(key) != Some(&*value));
            Ok(Value::from(entries))
        },
        SubtractAssign => {
            a.borrow_mut().retain(|key, value| right.get(key) != Some(&*value));
            Ok(Value::Hash(a.clone()))
        },
        _ => Err(unsupported(op, Kind::Hash)),
    }
}
