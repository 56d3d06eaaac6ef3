use std::rc::Rc;

use log::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::MacroError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::Context,
        macros::modify::modify_program,
        value::core::{Macro, Value},
    },
};

/// Removes the top level macro definitions from `program` and registers them
/// in `env`.
///
/// A definition is a `let` statement whose value is a macro literal. Macro
/// literals anywhere else are ordinary values and are not registered.
/// Registered macros are resolved by expansion only; they are not bound as
/// values.
#[must_use]
pub fn define_macros(program: Program, env: &Env) -> Program {
    let mut statements = Vec::with_capacity(program.statements.len());

    for statement in program.statements {
        match statement {
            Statement::Let { name,
                             value: Expr::Macro { parameters, body }, } => {
                debug!("registering macro {name}({})", parameters.join(", "));
                let definition = Macro { parameters,
                                         body,
                                         env: Rc::clone(env) };
                env.borrow_mut().define_macro(name, Rc::new(definition));
            },
            other => statements.push(other),
        }
    }

    Program { statements }
}

/// Collects the macro definitions of `program`, then replaces every macro
/// call with the AST its macro returns.
///
/// A call `m(a, b)` or `a.m(b)` is a macro call when `m` names a registered
/// macro. The arguments are bound, unevaluated and wrapped in quotes, to the
/// macro's parameters in a frame enclosed by the macro's definition
/// environment, and the body is evaluated there. Missing arguments leave
/// their parameters unbound; extra arguments are ignored.
///
/// Expansion runs once: calls produced by an expansion are not expanded
/// again. Calls are found where the rewriter descends; see
/// [`modify_expr`](super::modify::modify_expr).
///
/// # Errors
/// - `NotQuote` when a macro body evaluates to anything but a quote.
/// - `Evaluation` when a macro body raises a runtime error.
///
/// # Example
/// ```
/// use quasi::{interpreter::{environment::Environment, macros::expansion::expand}, parse};
///
/// let (program, _) = parse("let twice = macro(x) { quote(unquote(x) * 2) }; twice(1 + 1);");
/// let expanded = expand(program, &Environment::new_global()).unwrap();
///
/// assert_eq!(expanded.to_string(), "((1 + 1) * 2)");
/// ```
pub fn expand(program: Program, env: &Env) -> Result<Program, MacroError> {
    let program = define_macros(program, env);
    modify_program(program, &mut |expr| expand_call(expr, env))
}

fn expand_call(expr: Expr, env: &Env) -> Result<Expr, MacroError> {
    match expr {
        Expr::Call { function, arguments } => {
            let Some((name, definition)) = macro_callee(&function, env) else {
                return Ok(Expr::Call { function, arguments });
            };
            invoke(&name, &definition, arguments)
        },
        Expr::DotCall { receiver,
                        function,
                        arguments, } => {
            let Some(definition) = env.borrow().get_macro(&function) else {
                return Ok(Expr::DotCall { receiver,
                                          function,
                                          arguments });
            };
            let mut all = Vec::with_capacity(arguments.len() + 1);
            all.push(*receiver);
            all.extend(arguments);
            invoke(&function, &definition, all)
        },
        other => Ok(other),
    }
}

fn macro_callee(function: &Expr, env: &Env) -> Option<(String, Rc<Macro>)> {
    let Expr::Identifier { name } = function else {
        return None;
    };
    let definition = env.borrow().get_macro(name)?;
    Some((name.clone(), definition))
}

fn invoke(name: &str, definition: &Macro, arguments: Vec<Expr>) -> Result<Expr, MacroError> {
    debug!("expanding macro {name} with {} argument(s)", arguments.len());

    let frame = Environment::new_enclosed(&definition.env);
    for (parameter, argument) in definition.parameters.iter().zip(arguments) {
        frame.borrow_mut().set(parameter.clone(), Value::Quote(Rc::new(argument)));
    }

    let result = Context::with_env(frame).eval_block(&definition.body)
                                         .map_err(|source| MacroError::Evaluation { name: name.to_string(),
                                                                                     source })?
                                         .unwrap_return();

    match result {
        Value::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
        other => Err(MacroError::NotQuote { name:  name.to_string(),
                                            found: other.type_name().to_string(), }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn expand_source(source: &str) -> Result<String, MacroError> {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "{errors:?}");
        expand(program, &Environment::new_global()).map(|program| program.to_string())
    }

    #[test]
    fn definitions_are_removed() {
        let source = "let m = macro(a) { quote(unquote(a) + 1) }; let y = 1; m(y);";
        assert_eq!(expand_source(source).unwrap(), "let y = 1;\n(y + 1)");
    }

    #[test]
    fn arguments_are_not_evaluated() {
        let source = "let unless = macro(c, a, b) { quote(if (!(unquote(c))) { unquote(a) } else { unquote(b) }) };
                      unless(10 > 5, puts(\"no\"), puts(\"yes\"));";
        assert_eq!(expand_source(source).unwrap(),
                   "if ((!(10 > 5))) { puts(\"no\") } else { puts(\"yes\") }");
    }

    #[test]
    fn dot_call_quotes_the_receiver() {
        let source = "let neg = macro(x) { quote(-(unquote(x))) }; (1 + 2).neg();";
        assert_eq!(expand_source(source).unwrap(), "(-(1 + 2))");
    }

    #[test]
    fn the_definition_is_not_changed_by_expansion() {
        let source = "let m = macro(a) { quote(unquote(a) * 2) }; m(1); m(2);";
        assert_eq!(expand_source(source).unwrap(), "(1 * 2)\n(2 * 2)");
    }

    #[test]
    fn a_macro_must_return_a_quote() {
        let error = expand_source("let m = macro() { 1 }; m();").unwrap_err();
        assert_eq!(error,
                   MacroError::NotQuote { name:  "m".to_string(),
                                          found: "Integer".to_string(), });
    }

    #[test]
    fn a_failing_body_aborts_expansion() {
        let error = expand_source("let m = macro() { missing }; m();").unwrap_err();
        assert!(matches!(error, MacroError::Evaluation { .. }));
    }

    #[test]
    fn nested_definitions_are_not_collected() {
        let source = "let f = function() { let m = macro() { quote(1) }; m() };";
        assert_eq!(expand_source(source).unwrap(),
                   "let f = function() { let m = macro() { quote(1) }; m() };");
    }
}
