/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a language element such as a number, identifier,
/// operator, delimiter or keyword, tagged with its line. This is the first
/// stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: every token kind has an optional prefix handler, an
/// optional infix handler and a binding precedence. Errors are collected and
/// parsing continues with the next statement.
pub mod parser;
/// Macro definition, expansion and the quote/unquote protocol.
///
/// # Responsibilities
/// - Collects top level `let name = macro(...) { ... }` definitions.
/// - Replaces macro calls with the AST their bodies return.
/// - Splices `unquote(...)` results into quoted AST.
pub mod macros;
/// Lexical scope as a chain of frames.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every runtime value: integers, doubles, booleans,
/// strings, arrays, hashes, functions, macros, quotes and the control
/// markers. It also implements the coercion lattice that decides how two
/// operands of different types meet.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// applies operators through the coercion lattice, manages bindings and
/// calls functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, and control flow.
/// - Reports runtime errors such as division by zero or unknown identifiers.
pub mod evaluator;
