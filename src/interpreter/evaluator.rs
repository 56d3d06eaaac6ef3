/// Binary operator evaluation logic.
///
/// Handles assignment, compound assignment, `&&`/`||` and the per-type
/// operator tables selected by the coercion lattice.
pub mod binary;

/// Prefix operator evaluation logic.
///
/// Implements `!`, unary `+` and unary `-`.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, statement sequencing and the dispatch
/// over expression kinds.
pub mod core;

/// Evaluation of `if`, `while` and the ternary operator.
pub mod control;

/// Index reads on strings, arrays and hashes.
pub mod index;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
