use crate::{
    ast::{Block, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an `if` expression.
    ///
    /// The condition is tested with truthiness. The chosen block runs in the
    /// current frame, so assignments inside it are visible afterwards. With
    /// no `else` block a false condition yields `null`.
    pub(crate) fn eval_if(&self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>)
                          -> EvalResult<Value> {
        if self.eval(condition)?.is_truthy() {
            self.eval_block(consequence)
        } else {
            alternative.map_or(Ok(Value::Null), |block| self.eval_block(block))
        }
    }

    /// Evaluates `condition ? consequence : alternative`; only the chosen
    /// branch is evaluated.
    pub(crate) fn eval_ternary(&self,
                               condition: &Expr,
                               consequence: &Expr,
                               alternative: &Expr)
                               -> EvalResult<Value> {
        if self.eval(condition)?.is_truthy() {
            self.eval(consequence)
        } else {
            self.eval(alternative)
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration in the current
    /// frame, so the body can change it. A `return` inside the body ends the
    /// loop and is passed up.
    ///
    /// # Returns
    /// The value of the last iteration's body, or `null` if the body never
    /// ran.
    pub(crate) fn eval_while(&self, condition: &Expr, body: &Block) -> EvalResult<Value> {
        let mut result = Value::Null;

        while self.eval(condition)?.is_truthy() {
            result = self.eval_block(body)?;
            if matches!(result, Value::Return(_)) {
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::{interpreter::value::core::Value, run};

    #[test]
    fn zero_is_a_true_condition() {
        assert_eq!(run("if (0) { 1 } else { 2 }").unwrap(), Value::integer(1));
        assert_eq!(run("if (null) { 1 }").unwrap(), Value::Null);
    }

    #[test]
    fn while_shares_the_enclosing_frame() {
        let source = "let i = 0; let sum = 0; while (i < 5) { sum += i; i += 1; } sum";
        assert_eq!(run(source).unwrap(), Value::integer(10));
    }

    #[test]
    fn return_leaves_the_loop() {
        let source = "let f = function() { let i = 0; while (true) { i += 1; if (i == 3) { return i; } } }; f()";
        assert_eq!(run(source).unwrap(), Value::integer(3));
    }

    #[test]
    fn ternary_evaluates_one_branch() {
        assert_eq!(run("let x = 1; true ? 10 : x = 5; x").unwrap(), Value::integer(1));
    }
}
