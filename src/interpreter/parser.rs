/// Parser state and the precedence climbing loop.
///
/// Holds the current and lookahead tokens, the accumulated error list and
/// the `parse_expression` entry point every handler recurses through.
pub mod core;

/// Prefix handlers.
///
/// Literals, identifiers, prefix operators, grouping and the keyword
/// introduced expressions (`if`, `while`, `function`, `macro`).
pub mod unary;

/// Infix handlers.
///
/// Binary operators, assignment, indexing, calls, dot calls and the ternary
/// operator.
pub mod binary;

/// Block parsing.
///
/// Parses braced statement lists used as bodies.
pub mod block;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements and the top-level
/// program loop.
pub mod statement;

/// Parser helpers.
///
/// The precedence table, token to operator mapping and comma separated list
/// parsing shared by several handlers.
pub mod utils;
