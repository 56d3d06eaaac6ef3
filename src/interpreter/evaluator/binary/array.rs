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
            core::{ArrayRef, Value},
        },
    },
};

/// Array operator table.
///
/// - `+` concatenates into a new array; `+=` appends to the left array.
/// - `-` keeps the left elements that do not occur in the right array;
///   `-=` does the same in place.
/// - `== !=` compare element by element.
/// - `< <= > >=` compare lengths.
///
/// The in-place forms return the left array itself, so every binding that
/// shares it sees the change.
///
/// # Errors
/// `UnsupportedOperator` for `* / %` and their compound forms.
pub fn array(op: InfixOperator, a: &ArrayRef, b: &ArrayRef) -> EvalResult<Value> {
    use InfixOperator::{Add, AddAssign, Subtract, SubtractAssign};

    if let Some(result) = equality(op, *a.borrow() == *b.borrow()) {
        return Ok(Value::Boolean(result));
    }
    if let Some(result) = compare(op, &a.borrow().len(), &b.borrow().len()) {
        return Ok(Value::Boolean(result));
    }

    // Copy the right elements first; `a` and `b` may be the same array.
    let right = b.borrow().clone();

    match op {
        Add => {
            let mut elements = a.borrow().clone();
            elements.extend(right);
            Ok(Value::from(elements))
        },
        AddAssign => {
            a.borrow_mut().extend(right);
            Ok(Value::Array(a.clone()))
        },
        Subtract => {
            let elements = a.borrow()
                            .iter()
                            .filter(|element| !right.contains(element))
                            .cloned()
                            .collect::<Vec<_>>();
            Ok(Value::from(elements))
        },
        SubtractAssign => {
            a.borrow_mut().retain(|element| !right.contains(element));
            Ok(Value::Array(a.clone()))
        },
        _ => Err(unsupported(op, Kind::Array)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> ArrayRef {
        match Value::from(values.iter().copied().map(Value::integer).collect::<Vec<_>>()) {
            Value::Array(elements) => elements,
            _ => unreachable!(),
        }
    }

    #[test]
    fn difference_removes_every_match() {
        let result = array(InfixOperator::Subtract, &ints(&[1, 2, 1, 3]), &ints(&[1])).unwrap();
        assert_eq!(result.to_string(), "[2, 3]");
    }

    #[test]
    fn append_in_place_to_itself() {
        let a = ints(&[1, 2]);
        let result = array(InfixOperator::AddAssign, &a, &a).unwrap();
        assert_eq!(result.to_string(), "[1, 2, 1, 2]");
        assert_eq!(a.borrow().len(), 4);
    }

    #[test]
    fn ordering_compares_lengths() {
        let result = array(InfixOperator::Greater, &ints(&[0, 0]), &ints(&[9])).unwrap();
        assert_eq!(result, Value::Boolean(true));
        let result = array(InfixOperator::Equal, &ints(&[1]), &ints(&[1])).unwrap();
        assert_eq!(result, Value::Boolean(true));
    }
}
