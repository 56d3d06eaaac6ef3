use crate::{
    ast::{Expr, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            coercion::{Kind, convert, convertible},
            core::Value,
        },
    },
};

impl Context {
    /// Evaluates a prefix operation.
    ///
    /// - `!` negates condition truthiness, so `!0` is `false` and `!null` is
    ///   `true`.
    /// - `+` and `-` accept integers and booleans, which convert to `0` or
    ///   `1`. Negation wraps on overflow.
    ///
    /// # Errors
    /// `Conversion` if `+`/`-` is applied to anything else, doubles and
    /// strings included.
    pub(crate) fn eval_prefix(&self, op: PrefixOperator, right: &Expr) -> EvalResult<Value> {
        let value = self.eval(right)?;

        match op {
            PrefixOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
            PrefixOperator::Plus | PrefixOperator::Minus => {
                let converted = convertible(&value, Kind::Integer).then(|| convert(&value, Kind::Integer))
                                                                  .flatten();
                let Some(Value::Integer(n)) = converted else {
                    return Err(RuntimeError::Conversion { type_name: value.type_name().to_string(),
                                                          target:    Kind::Integer.name()
                                                                                      .to_string(), });
                };
                let n = n.get();
                Ok(Value::integer(if op == PrefixOperator::Minus { n.wrapping_neg() } else { n }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{interpreter::value::core::Value, run};

    #[test]
    fn minus_negates_integers_and_booleans() {
        assert_eq!(run("let x = 7; -x").unwrap(), Value::integer(-7));
        assert_eq!(run("-true").unwrap(), Value::integer(-1));
        assert_eq!(run("+false").unwrap(), Value::integer(0));
    }

    #[test]
    fn sign_on_a_double_is_an_error() {
        assert_eq!(run("let x = 2.9; -x").unwrap().to_string(),
                   "ERROR: cannot convert Double to Integer");
        assert_eq!(run("let x = 2.9; +x").unwrap().to_string(),
                   "ERROR: cannot convert Double to Integer");
    }

    #[test]
    fn bang_uses_truthiness() {
        assert_eq!(run("!0").unwrap(), Value::Boolean(false));
        assert_eq!(run("!null").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn minus_on_string_is_an_error() {
        let value = run("-\"a\"").unwrap();
        assert_eq!(value.to_string(), "ERROR: cannot convert String to Integer");
    }
}
