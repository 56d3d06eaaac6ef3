use std::{collections::BTreeMap, rc::Rc};

use log::trace;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::utils::{decode_escapes, hash_key},
        value::core::{Function, Macro, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. An error stops every enclosing
/// statement list, the same way a `return` stops a function body.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context is a handle to the environment frame code runs in. Statements
/// and blocks evaluate in the context they are given; a function call
/// evaluates its body in a fresh context whose frame is enclosed by the
/// function's captured environment.
///
/// ## Usage
///
/// ```
/// use quasi::{interpreter::evaluator::core::Context, parse};
///
/// let (program, errors) = parse("let a = 2; a * 21");
/// assert!(errors.is_empty());
///
/// let context = Context::new();
/// let value = context.eval_program(&program).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
pub struct Context {
    env: Env,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context over a fresh root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new_global() }
    }

    /// Creates a context that evaluates in `env`.
    #[must_use]
    pub const fn with_env(env: Env) -> Self {
        Self { env }
    }

    /// The frame this context reads and writes.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluates the statements of a program in order.
    ///
    /// Evaluation stops at the first `return`, whose value becomes the
    /// program's value. Otherwise the program's value is the value of its
    /// last statement, or `null` for an empty program.
    ///
    /// Macro definitions must already have been expanded away; see
    /// [`expand`](crate::interpreter::macros::expansion::expand).
    ///
    /// # Errors
    /// The first runtime error raised by any statement.
    pub fn eval_program(&self, program: &Program) -> EvalResult<Value> {
        Ok(self.eval_statements(&program.statements)?.unwrap_return())
    }

    /// Evaluates a block in this context's frame.
    ///
    /// Unlike [`eval_program`](Self::eval_program), a `return` is passed up
    /// still wrapped, so it can stop the enclosing function.
    pub fn eval_block(&self, block: &Block) -> EvalResult<Value> {
        self.eval_statements(&block.statements)
    }

    fn eval_statements(&self, statements: &[Statement]) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in statements {
            result = self.eval_statement(statement)?;
            if matches!(result, Value::Return(_)) {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds in the current frame and yields `null`; a failing right
    /// hand side binds nothing. `return` wraps its value in a return marker.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Value> {
        trace!("evaluating statement: {statement}");

        match statement {
            Statement::Let { name, value } => {
                let value = self.eval(value)?;
                if matches!(value, Value::Return(_)) {
                    return Ok(value);
                }
                self.env.borrow_mut().set(name.clone(), value);
                Ok(Value::Null)
            },
            Statement::Return { value } => {
                let value = self.eval(value)?.unwrap_return();
                Ok(Value::Return(Box::new(value)))
            },
            Statement::Expression { expr } => self.eval(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: identifiers,
    /// literals, prefix and infix operations, conditionals, loops, calls and
    /// index reads.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. An `if` or `while` whose body hit a
    /// `return` yields the still wrapped return marker.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name } => {
                self.env
                    .borrow()
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.clone() })
            },
            Expr::Integer(n) => Ok(Value::integer(*n)),
            Expr::Double(d) => Ok(Value::double(*d)),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::String(raw) => Ok(Value::from(decode_escapes(raw)?)),
            Expr::Null => Ok(Value::Null),
            Expr::Array { elements } => self.eval_array_literal(elements),
            Expr::Hash { entries } => self.eval_hash_literal(entries),
            Expr::Function { parameters, body } => {
                Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                      body:       body.clone(),
                                                      env:        Rc::clone(&self.env), })))
            },
            Expr::Macro { parameters, body } => {
                Ok(Value::Macro(Rc::new(Macro { parameters: parameters.clone(),
                                                body:       body.clone(),
                                                env:        Rc::clone(&self.env), })))
            },
            Expr::Prefix { op, right } => self.eval_prefix(*op, right),
            Expr::Infix { left, op, right } => self.eval_infix(left, *op, right),
            Expr::Ternary { condition,
                            consequence,
                            alternative, } => {
                self.eval_ternary(condition, consequence, alternative)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                self.eval_if(condition, consequence, alternative.as_ref())
            },
            Expr::While { condition, body } => self.eval_while(condition, body),
            Expr::Call { function, arguments } => self.eval_call(function, arguments),
            Expr::DotCall { receiver,
                            function,
                            arguments, } => self.eval_dot_call(receiver, function, arguments),
            Expr::Index { target, index } => self.eval_index(target, index),
        }
    }

    /// Evaluates a list of expressions left to right, stopping at the first
    /// error.
    pub(crate) fn eval_all(&self, exprs: &[Expr]) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval(expr)).collect()
    }

    fn eval_array_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        Ok(Value::from(self.eval_all(elements)?))
    }

    /// Evaluates a hash literal. Each key is checked for hashability before
    /// its value is evaluated; later duplicates overwrite earlier ones.
    fn eval_hash_literal(&self, entries: &[(Expr, Expr)]) -> EvalResult<Value> {
        let mut map = BTreeMap::new();

        for (key, value) in entries {
            let key = hash_key(&self.eval(key)?)?;
            let value = self.eval(value)?;
            map.insert(key, value);
        }

        Ok(Value::from(map))
    }
}
