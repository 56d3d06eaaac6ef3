use std::fmt;

use log::{debug, trace};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, convert, print},
        },
        macros::quote::quote,
        value::core::{Function, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, already checked against its
/// arity, and returns a value or a runtime error.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts every argument count.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the table row a `Value::Builtin` points to),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One row of the builtin table.
        pub struct BuiltinDef {
            /// Name the builtin is resolved by.
            pub name: &'static str,
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "size"        => { arity: Arity::Exact(1), func: builtin::size },
    "push"        => { arity: Arity::Exact(2), func: builtin::push },
    "pop"         => { arity: Arity::Exact(1), func: builtin::pop },
    "type"        => { arity: Arity::Exact(1), func: builtin::type_of },
    "clone"       => { arity: Arity::Exact(1), func: builtin::clone },
    "toString"    => { arity: Arity::Exact(1), func: convert::to_string },
    "toInteger"   => { arity: Arity::Exact(1), func: convert::to_integer },
    "toDouble"    => { arity: Arity::Exact(1), func: convert::to_double },
    "toBoolean"   => { arity: Arity::Exact(1), func: convert::to_boolean },
    "puts"        => { arity: Arity::Any,      func: print::puts },
    "listBuiltin" => { arity: Arity::Exact(0), func: print::list_builtin },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl BuiltinDef {
    /// Checks the argument count, then runs the native function.
    ///
    /// # Errors
    /// `WrongArgumentCount` if the arity does not match, otherwise whatever
    /// the builtin reports.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::WrongArgumentCount { name:     self.name.to_string(),
                                                          expected: self.arity.to_string(),
                                                          found:    args.len(), });
        }
        debug!("calling builtin {} with {} argument(s)", self.name, args.len());
        (self.func)(args)
    }
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use quasi::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("size").map(|def| def.name), Some("size"));
/// assert!(lookup_builtin("quote").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|def| def.name == name)
}

/// Returns `true` if `expr` is the bare identifier `quote`.
fn is_quote(expr: &Expr) -> bool {
    matches!(expr, Expr::Identifier { name } if name == "quote")
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// `quote(x)` is handled before anything else and yields the quoted
    /// node of `x`. Otherwise the callee is evaluated, then the arguments
    /// left to right.
    ///
    /// # Errors
    /// - `QuoteArity` if `quote` is not given exactly one argument.
    /// - `NotCallable` / `MacroCall` if the callee is not a function.
    /// - Any error raised by an argument or by the call itself.
    pub(crate) fn eval_call(&self, function: &Expr, arguments: &[Expr]) -> EvalResult<Value> {
        if is_quote(function) {
            let [argument] = arguments else {
                return Err(RuntimeError::QuoteArity { found: arguments.len() });
            };
            return Ok(quote(argument, self.env()));
        }

        let callee = self.eval(function)?;
        let args = self.eval_all(arguments)?;
        call_function(&callee, &function.to_string(), args)
    }

    /// Evaluates `receiver.function(arguments)` as
    /// `function(receiver, arguments)`.
    ///
    /// `receiver.quote()` quotes the receiver. The receiver is evaluated
    /// before the function name is resolved.
    pub(crate) fn eval_dot_call(&self,
                                receiver: &Expr,
                                function: &str,
                                arguments: &[Expr])
                                -> EvalResult<Value> {
        if function == "quote" {
            return Ok(quote(receiver, self.env()));
        }

        let receiver = self.eval(receiver)?;
        let callee = self.env()
                         .borrow()
                         .get(function)
                         .ok_or_else(|| RuntimeError::UnknownIdentifier { name: function.to_string() })?;

        let mut args = Vec::with_capacity(arguments.len() + 1);
        args.push(receiver);
        args.extend(self.eval_all(arguments)?);

        call_function(&callee, function, args)
    }
}

/// Invokes a function or builtin value with evaluated arguments.
///
/// `callee_name` is only used in error messages.
///
/// # Errors
/// - `MacroCall` for macros, which only run during expansion.
/// - `NotCallable` for every other non-function value.
/// - `WrongArgumentCount` when the argument count does not match.
pub fn call_function(callee: &Value, callee_name: &str, args: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => call_user_function(function, callee_name, args),
        Value::Builtin(def) => def.call(&args),
        Value::Macro(_) => Err(RuntimeError::MacroCall { callee: callee_name.to_string() }),
        other => Err(RuntimeError::NotCallable { callee:    callee_name.to_string(),
                                                 type_name: other.type_name().to_string(), }),
    }
}

/// Runs a user function body in a new frame enclosed by the function's
/// captured environment, with the parameters bound positionally.
fn call_user_function(function: &Function, name: &str, args: Vec<Value>) -> EvalResult<Value> {
    if args.len() != function.parameters.len() {
        return Err(RuntimeError::WrongArgumentCount { name:     name.to_string(),
                                                      expected: function.parameters
                                                                        .len()
                                                                        .to_string(),
                                                      found:    args.len(), });
    }
    trace!("calling {name} with {} argument(s)", args.len());

    let env = Environment::new_enclosed(&function.env);
    for (parameter, value) in function.parameters.iter().zip(args) {
        env.borrow_mut().set(parameter.clone(), value);
    }

    let result = Context::with_env(env).eval_block(&function.body)?;
    Ok(result.unwrap_return())
}
