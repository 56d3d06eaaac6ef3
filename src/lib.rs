//! # quasi
//!
//! quasi is an interpreter for a small, dynamically typed scripting language
//! with C-like syntax, written in Rust. It has first-class functions and
//! closures, arrays and hashes, `while` loops, a ternary operator and
//! syntactic macros built on `quote` and `unquote`.
//!
//! Source text goes through three phases:
//! 1. [`parse`] builds a [`Program`](ast::Program) with a Pratt parser.
//! 2. [`expand`] collects macro definitions and replaces macro calls.
//! 3. The evaluator walks the expanded tree in an
//!    [`Environment`](interpreter::environment::Environment).
//!
//! ```
//! use quasi::{interpreter::value::core::Value, run};
//!
//! let source = "let unless = macro(c, a, b) { quote(unquote(c) ? unquote(b) : unquote(a)) };
//!               unless(1 > 2, \"small\", \"big\")";
//! assert_eq!(run(source).unwrap(), Value::from("small"));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{InterpreterError, MacroError},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::Context,
        macros::expansion,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser, rewritten
/// by macro expansion and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Gives every node a printable, fully parenthesized description.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// macro expansion or evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, macros).
/// - Attaches line numbers to parse errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, macro expansion, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, macros, evaluator, and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and helpers.
///
/// This module provides reusable helpers used by the evaluator and the
/// builtins: conversions between integers and doubles, index validation
/// and number formatting.
pub mod util;

/// Parses `source` into a program.
///
/// Parsing never stops at the first error. The returned program holds
/// every statement that parsed; the messages describe the rest, in source
/// order.
///
/// # Returns
/// The program and the rendered parse errors. A non-empty error list means
/// the program is incomplete and should not be evaluated.
///
/// # Examples
/// ```
/// use quasi::parse;
///
/// let (program, errors) = parse("1 + 2 * 3");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
///
/// let (_, errors) = parse("let x 5;");
/// assert_eq!(errors, ["Error on line 1: expected next token to be =, got 5 instead."]);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(ToString::to_string).collect();
    (program, errors)
}

/// Expands the macros of `program` against `env`.
///
/// Top level macro definitions are removed from the program and registered
/// in `env`, so later programs evaluated in the same environment can use
/// them.
///
/// # Errors
/// A fatal [`MacroError`] if a macro body does not produce a quote.
pub fn expand(program: Program, env: &Env) -> Result<Program, MacroError> {
    expansion::expand(program, env)
}

/// Evaluates `program` in a fresh environment.
///
/// # Returns
/// The program's value. Runtime errors are values too: a failing program
/// yields `Value::Error`.
///
/// # Errors
/// A fatal [`MacroError`] from macro expansion.
pub fn evaluate(program: Program) -> Result<Value, MacroError> {
    evaluate_in(program, &Environment::new_global())
}

/// Expands and evaluates `program` in `env`.
///
/// Bindings made by the program stay in `env`, which is how the REPL keeps
/// state between lines.
///
/// # Errors
/// A fatal [`MacroError`] from macro expansion.
///
/// # Examples
/// ```
/// use quasi::{evaluate_in, interpreter::environment::Environment, parse};
///
/// let env = Environment::new_global();
/// evaluate_in(parse("let x = 20;").0, &env).unwrap();
/// let value = evaluate_in(parse("x + 22").0, &env).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn evaluate_in(program: Program, env: &Env) -> Result<Value, MacroError> {
    let program = expand(program, env)?;
    Ok(evaluate_expanded(&program, env))
}

/// Evaluates an already expanded `program` in `env`.
///
/// No macro expansion happens here; use it on the output of [`expand`].
#[must_use]
pub fn evaluate_expanded(program: &Program, env: &Env) -> Value {
    Context::with_env(env.clone()).eval_program(program)
                                  .unwrap_or_else(Value::Error)
}

/// Parses and evaluates `source` in a fresh environment.
///
/// # Errors
/// - [`InterpreterError::Parse`] if the source has parse errors; nothing is
///   evaluated then.
/// - [`InterpreterError::Macro`] if macro expansion fails.
///
/// # Examples
/// ```
/// use quasi::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("let f = function(x) { x * 2 }; f(21)").unwrap(), Value::integer(42));
/// assert_eq!(run("10 / 0").unwrap().to_string(), "ERROR: / by zero");
/// assert!(run("let = 1").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, InterpreterError> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    let errors = parser.into_errors();
    if !errors.is_empty() {
        return Err(InterpreterError::Parse(errors));
    }
    Ok(evaluate(program)?)
}
