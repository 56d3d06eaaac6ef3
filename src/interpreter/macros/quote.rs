use std::{convert::Infallible, rc::Rc};

use log::trace;

use crate::{
    ast::Expr,
    interpreter::{
        environment::Env,
        evaluator::core::Context,
        macros::modify::modify_expr,
        value::core::Value,
    },
};

/// Quotes `node`: the node is not evaluated, but every `unquote(x)` inside
/// it is, in `env`, and replaced by the result.
///
/// `x.unquote()` is accepted as well. Unquote calls are only found where
/// the rewriter descends, so an `unquote` nested in the arguments of another
/// call is left alone.
///
/// # Example
/// ```
/// use quasi::{
///     interpreter::{environment::Environment, macros::quote::quote},
///     parse,
/// };
///
/// let (program, _) = parse("unquote(1 + 2) * x");
/// let quasi::ast::Statement::Expression { expr } = &program.statements[0] else {
///     unreachable!()
/// };
///
/// let quoted = quote(expr, &Environment::new_global());
/// assert_eq!(quoted.to_string(), "QUOTE((3 * x))");
/// ```
#[must_use]
pub fn quote(node: &Expr, env: &Env) -> Value {
    let context = Context::with_env(Rc::clone(env));
    let expanded = modify_expr(node.clone(), &mut |expr| Ok::<_, Infallible>(unquote(expr, &context)))
        .unwrap_or_else(|never| match never {});
    Value::Quote(Rc::new(expanded))
}

/// Replaces an unquote call by the node of its evaluated argument.
fn unquote(expr: Expr, context: &Context) -> Expr {
    let argument = match &expr {
        Expr::Call { function, arguments } if is_unquote(function) && arguments.len() == 1 => {
            &arguments[0]
        },
        Expr::DotCall { receiver,
                        function,
                        arguments, }
            if function == "unquote" && arguments.is_empty() =>
        {
            receiver.as_ref()
        },
        _ => return expr,
    };

    match context.eval(argument).map(|value| value.unwrap_return()) {
        Ok(value) => {
            trace!("unquote {argument} -> {value}");
            to_node(value).unwrap_or(expr)
        },
        Err(error) => {
            trace!("unquote {argument} failed: {error}");
            expr
        },
    }
}

fn is_unquote(function: &Expr) -> bool {
    matches!(function, Expr::Identifier { name } if name == "unquote")
}

/// Converts a value back into an AST node.
///
/// Integers, doubles and booleans become literals and a quote yields its
/// node. Every other value has no node form.
fn to_node(value: Value) -> Option<Expr> {
    match value {
        Value::Integer(n) => Some(Expr::Integer(n.get())),
        Value::Double(d) => Some(Expr::Double(d.get())),
        Value::Boolean(b) => Some(Expr::Boolean(b)),
        Value::Quote(node) => Some(Rc::unwrap_or_clone(node)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::run;

    #[test]
    fn quote_does_not_evaluate() {
        assert_eq!(run("quote(foobar + 1)").unwrap().to_string(), "QUOTE((foobar + 1))");
    }

    #[test]
    fn unquote_splices_values() {
        assert_eq!(run("let x = 8; quote(unquote(x) + 1)").unwrap().to_string(), "QUOTE((8 + 1))");
        assert_eq!(run("quote(unquote(true) == false)").unwrap().to_string(),
                   "QUOTE((true == false))");
        assert_eq!(run("quote(unquote(1.5))").unwrap().to_string(), "QUOTE(1.5)");
    }

    #[test]
    fn unquote_of_a_quote_splices_its_node() {
        let source = "let q = quote(4 + 4); quote(unquote(q) * 2)";
        assert_eq!(run(source).unwrap().to_string(), "QUOTE(((4 + 4) * 2))");
    }

    #[test]
    fn dot_unquote_uses_the_receiver() {
        assert_eq!(run("let x = 3; quote(x.unquote() - 1)").unwrap().to_string(), "QUOTE((3 - 1))");
    }

    #[test]
    fn unconvertible_results_are_left_in_place() {
        let value = run("quote(unquote(\"s\") + 1)").unwrap();
        assert_eq!(value.to_string(), "QUOTE((unquote(\"s\") + 1))");
        let value = run("quote(unquote(missing))").unwrap();
        assert_eq!(value.to_string(), "QUOTE(unquote(missing))");
    }

    #[test]
    fn quoted_strings_keep_their_escapes() {
        assert_eq!(run(r#"quote("a\tb")"#).unwrap().to_string(), r#"QUOTE("a\tb")"#);
    }
}
