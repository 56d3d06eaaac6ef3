use log::trace;

use crate::{
    ast::{Expr, InfixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            index::{splice_string, store_element},
        },
        value::core::Value,
    },
};

impl Context {
    /// Stores `value` through the left side of `=`.
    ///
    /// - An identifier is bound in the current frame, shadowing any outer
    ///   binding.
    /// - `s[i]` on a string bound to an identifier rebinds that identifier to
    ///   a new string with character `i` replaced by the printed form of
    ///   `value`. Other holders of the old string keep it.
    /// - `a[i]` on an array replaces the element in place.
    /// - `h[k]` on a hash inserts or replaces the entry in place.
    ///
    /// # Errors
    /// - `InvalidAssignment` for any other left side.
    /// - The index errors of [`store_element`] and [`splice_string`].
    pub(crate) fn eval_assign(&self, left: &Expr, value: Value) -> EvalResult<()> {
        match left {
            Expr::Identifier { name } => {
                self.env().borrow_mut().set(name.clone(), value);
                Ok(())
            },
            Expr::Index { target, index } => {
                let container = self.eval(target)?;
                let index = self.eval(index)?;

                if let Value::String(s) = &container {
                    let Expr::Identifier { name } = target.as_ref() else {
                        return Err(RuntimeError::InvalidAssignment { target: left.to_string() });
                    };
                    let spliced = splice_string(&s.borrow(), &index, &value)?;
                    self.env().borrow_mut().set(name.clone(), Value::from(spliced));
                    return Ok(());
                }

                store_element(&container, &index, value)
            },
            other => Err(RuntimeError::InvalidAssignment { target: other.to_string() }),
        }
    }

    /// Binds the result of an operator that ran in the `Boolean` kind to
    /// the left operand, when that operand is an identifier.
    ///
    /// The binding goes to the current frame, for every operator.
    pub(super) fn bind_boolean_result(&self, left: &Expr, op: InfixOperator, result: &Value) {
        if let Expr::Identifier { name } = left {
            trace!("binding boolean result of {op} to {name}");
            self.env().borrow_mut().set(name.clone(), result.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{interpreter::value::core::Value, run};

    #[test]
    fn assignment_yields_null() {
        assert_eq!(run("let x = 1; x = 2").unwrap(), Value::Null);
    }

    #[test]
    fn assignment_in_a_function_shadows() {
        assert_eq!(run("let x = 1; function() { x = 2; }(); x;").unwrap(), Value::integer(1));
    }

    #[test]
    fn compound_assignment_updates_the_binding() {
        assert_eq!(run("let x = 1; x += 2; x").unwrap(), Value::integer(3));
        assert_eq!(run("let s = \"a\"; s += 1; s").unwrap(), Value::from("a1"));
    }

    #[test]
    fn compound_assignment_in_a_function_updates_the_outer_binding() {
        let source = "let n = 0; let inc = function() { n += 1; }; inc(); inc(); n";
        assert_eq!(run(source).unwrap(), Value::integer(2));
    }

    #[test]
    fn compound_assignment_is_seen_through_aliases() {
        assert_eq!(run("let x = 1; let y = x; x += 1; y").unwrap(), Value::integer(2));
        assert_eq!(run("let s = \"a\"; let t = s; s += \"b\"; t").unwrap(), Value::from("ab"));
        assert_eq!(run("let d = 1.5; let e = d; d *= 2; e").unwrap(), Value::double(3.0));
    }

    #[test]
    fn compound_assignment_on_a_parameter_changes_the_argument() {
        let source = "let inc = function(n) { n += 1; }; let x = 1; inc(x); x";
        assert_eq!(run(source).unwrap(), Value::integer(2));
    }

    #[test]
    fn compound_assignment_on_an_element_changes_its_readers() {
        let source = "let a = [1, 2]; let e = a[0]; a[0] += 5; e";
        assert_eq!(run(source).unwrap(), Value::integer(6));
        let source = "let h = {\"k\": 1}; let v = h[\"k\"]; h[\"k\"] += 1; v";
        assert_eq!(run(source).unwrap(), Value::integer(2));
    }

    #[test]
    fn plain_assignment_does_not_touch_aliases() {
        assert_eq!(run("let x = 1; let y = x; x = 5; y").unwrap(), Value::integer(1));
        assert_eq!(run("let x = 1; let y = x; x = x + 1; y").unwrap(), Value::integer(1));
        assert_eq!(run("let s = \"cat\"; let t = s; s[0] = \"b\"; t").unwrap(), Value::from("cat"));
    }

    #[test]
    fn literals_are_fresh_on_every_evaluation() {
        let source = "let f = function() { let n = 0; n += 1; n }; f(); f()";
        assert_eq!(run(source).unwrap(), Value::integer(1));
    }

    #[test]
    fn compound_result_of_another_kind_is_not_stored() {
        assert_eq!(run("let x = 1; x += 0.5").unwrap(), Value::double(1.5));
        assert_eq!(run("let x = 1; x += 0.5; x").unwrap(), Value::integer(1));
    }

    #[test]
    fn index_assignment() {
        assert_eq!(run("let a = [1, 2]; let b = a; a[0] = 9; b").unwrap().to_string(), "[9, 2]");
        assert_eq!(run("let h = {}; h[\"k\"] = 1; h").unwrap().to_string(), "{k:1}");
        assert_eq!(run("let s = \"cat\"; s[0] = \"b\"; s").unwrap(), Value::from("bat"));
    }

    #[test]
    fn compound_index_assignment() {
        assert_eq!(run("let a = [1, 2]; a[1] *= 10; a").unwrap().to_string(), "[1, 20]");
        assert_eq!(run("let a = [[1]]; a[0] += [2]; a").unwrap().to_string(), "[[1, 2]]");
        assert_eq!(run("let h = {}; h[\"z\"] += 1; h").unwrap().to_string(), "{}");
    }

    #[test]
    fn boolean_results_are_bound_to_the_left_name() {
        assert_eq!(run("let t = true; t == false; t").unwrap(), Value::Boolean(false));
        assert_eq!(run("let n = 5; n < 9; n").unwrap(), Value::integer(5));
    }

    #[test]
    fn assigning_to_a_literal_is_an_error() {
        assert_eq!(run("1 = 2").unwrap().to_string(), "ERROR: cannot assign to 1");
    }
}
