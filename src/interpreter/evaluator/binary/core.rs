use log::trace;

use crate::{
    ast::{Expr, InfixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{array, hash, logic, scalar, string},
            core::{Context, EvalResult},
        },
        value::{
            coercion::{Kind, common_kind, convert},
            core::Value,
        },
    },
};

impl Context {
    /// Evaluates an infix expression.
    ///
    /// The right operand is always evaluated first. Then:
    /// - `=` stores the right value through the left expression and yields
    ///   `null`.
    /// - `&&` and `||` combine the boolean conversions of both operands.
    /// - Every other operator runs in the common kind of its operands, see
    ///   [`apply_operator`].
    ///
    /// When the common kind is `Boolean` and the left operand is an
    /// identifier, the result is also bound to that identifier in the current
    /// frame. A compound operator whose left operand already has the
    /// resolved integer, double or string kind writes the result into the
    /// operand's storage, so every alias of it observes the change.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The infix operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` with the operator's result.
    ///
    /// # Example
    /// ```
    /// use quasi::{interpreter::value::core::Value, run};
    ///
    /// assert_eq!(run("true + 1").unwrap(), Value::integer(2));
    /// assert_eq!(run("1 + 2.5").unwrap(), Value::double(3.5));
    /// assert_eq!(run("let x = 1; let y = x; x += 1; y").unwrap(), Value::integer(2));
    /// ```
    pub(crate) fn eval_infix(&self,
                             left: &Expr,
                             op: InfixOperator,
                             right: &Expr)
                             -> EvalResult<Value> {
        if op == InfixOperator::Assign {
            let value = self.eval(right)?;
            self.eval_assign(left, value)?;
            return Ok(Value::Null);
        }

        let right_value = self.eval(right)?;
        let left_value = self.eval(left)?;

        if matches!(op, InfixOperator::And | InfixOperator::Or) {
            return Ok(logic::eval_logic(op, &left_value, &right_value));
        }

        let (result, kind) = apply_operator(op, &left_value, &right_value)?;
        if kind == Kind::Boolean {
            self.bind_boolean_result(left, op, &result);
        }
        Ok(store_in_place(op, &left_value, result))
    }
}

/// Applies a non-assigning infix operator to two values.
///
/// Both operands are converted to their common kind, picked by
/// [`common_kind`], and the operator table of that kind computes the result.
/// Compound operators are applied like their plain counterparts, except
/// that arrays and hashes are modified in place. Scalar results are always
/// new values; see [`store_in_place`].
///
/// # Returns
/// The result together with the kind the operator ran in.
///
/// # Errors
/// - `IncompatibleOperands` when no kind accepts both operands.
/// - Whatever the selected table reports, such as `DivisionByZero` or
///   `UnsupportedOperator`.
///
/// # Example
/// ```
/// use quasi::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::core::apply_operator, value::{coercion::Kind, core::Value}},
/// };
///
/// let (value, kind) = apply_operator(InfixOperator::Add, &Value::from("n="), &Value::integer(4)).unwrap();
/// assert_eq!(value, Value::from("n=4"));
/// assert_eq!(kind, Kind::String);
/// ```
pub fn apply_operator(op: InfixOperator,
                      left: &Value,
                      right: &Value)
                      -> EvalResult<(Value, Kind)> {
    let incompatible = || RuntimeError::IncompatibleOperands { left:     left.type_name().to_string(),
                                                              right:    right.type_name().to_string(),
                                                              operator: op, };

    let kind = common_kind(left, right).ok_or_else(incompatible)?;
    let (Some(l), Some(r)) = (convert(left, kind), convert(right, kind)) else {
        return Err(incompatible());
    };

    let result = match (&l, &r) {
        (Value::Integer(a), Value::Integer(b)) => scalar::integer(op, a.get(), b.get())?,
        (Value::Double(a), Value::Double(b)) => scalar::double(op, a.get(), b.get())?,
        (Value::Boolean(a), Value::Boolean(b)) => logic::boolean(op, *a, *b)?,
        (Value::String(a), Value::String(b)) => string::string(op, &a.borrow(), &b.borrow())?,
        (Value::Array(a), Value::Array(b)) => array::array(op, a, b)?,
        (Value::Hash(a), Value::Hash(b)) => hash::hash(op, a, b)?,
        _ => return Err(incompatible()),
    };

    Ok((result, kind))
}

/// Finishes a compound operator on a scalar.
///
/// When `left` is an integer, double or string of the same type as
/// `result`, the result is written into `left`'s storage and `left` itself
/// is returned. Otherwise, and for every non-compound operator, `result` is
/// returned untouched.
fn store_in_place(op: InfixOperator, left: &Value, result: Value) -> Value {
    if op.is_compound() && left.overwrite(&result) {
        trace!("{op} updated its left operand in place");
        left.clone()
    } else {
        result
    }
}

/// Builds the error every table reports for an operator it has no entry for.
pub(super) fn unsupported(op: InfixOperator, kind: Kind) -> RuntimeError {
    RuntimeError::UnsupportedOperator { operator:  op,
                                        type_name: kind.name().to_string(), }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_operands_meet_in_common_kind() {
        let (value, kind) =
            apply_operator(InfixOperator::Multiply, &Value::Boolean(true), &Value::double(2.5)).unwrap();
        assert_eq!(value, Value::double(2.5));
        assert_eq!(kind, Kind::Double);
    }

    #[test]
    fn array_and_hash_meet_in_string() {
        let array = Value::from(vec![Value::integer(1)]);
        let hash = Value::from(std::collections::BTreeMap::new());
        let (value, kind) = apply_operator(InfixOperator::Add, &array, &hash).unwrap();
        assert_eq!(value, Value::from("[1]{}"));
        assert_eq!(kind, Kind::String);
    }

    #[test]
    fn division_by_zero_names_the_operator() {
        let error = apply_operator(InfixOperator::DivideAssign, &Value::integer(1), &Value::integer(0))
            .unwrap_err();
        assert_eq!(error.to_string(), "/= by zero");
    }

    #[test]
    fn two_nulls_have_no_common_kind() {
        let error = apply_operator(InfixOperator::Subtract, &Value::Null, &Value::Null).unwrap_err();
        assert_eq!(error.to_string(),
                   "cannot convert Null and Null to the same type for operator -");
    }

    #[test]
    fn plain_operators_allocate_new_values() {
        let x = Value::integer(1);
        let (value, _) = apply_operator(InfixOperator::Add, &x, &Value::integer(1)).unwrap();
        assert!(value.overwrite(&Value::integer(10)));
        assert_eq!(x, Value::integer(1));
    }
}
