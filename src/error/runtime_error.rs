use thiserror::Error;

use crate::ast::InfixOperator;

/// Represents all recoverable errors raised while evaluating a program.
///
/// A `RuntimeError` never unwinds the evaluator. It travels as the payload of
/// [`Value::Error`](crate::interpreter::value::core::Value::Error) and stops
/// the enclosing statement list the same way a `return` does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a name bound nowhere in the environment chain.
    #[error("identifier not found: {name}")]
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// The two operands of an infix operator have no common type.
    #[error("cannot convert {left} and {right} to the same type for operator {operator}")]
    IncompatibleOperands {
        /// Type name of the left operand.
        left:     String,
        /// Type name of the right operand.
        right:    String,
        /// The operator that was applied.
        operator: InfixOperator,
    },
    /// The operands share a type that has no meaning for the operator.
    #[error("operator {operator} is not supported for {type_name}")]
    UnsupportedOperator {
        /// The operator that was applied.
        operator:  InfixOperator,
        /// Type name both operands were converted to.
        type_name: String,
    },
    /// Integer or double division or modulo with a zero right operand.
    #[error("{operator} by zero")]
    DivisionByZero {
        /// The operator that was applied.
        operator: InfixOperator,
    },
    /// A value could not be converted to the requested type.
    #[error("cannot convert {type_name} to {target}")]
    Conversion {
        /// Type name of the value.
        type_name: String,
        /// Name of the requested type.
        target:    String,
    },
    /// Called something that is neither a function nor a builtin.
    #[error("{callee} is not a function, found {type_name}")]
    NotCallable {
        /// Description of the callee expression.
        callee:    String,
        /// Type name of the evaluated callee.
        type_name: String,
    },
    /// A macro value reached a call at evaluation time.
    #[error("macro {callee} can only be invoked during macro expansion")]
    MacroCall {
        /// Description of the callee expression.
        callee: String,
    },
    /// A function or builtin was called with the wrong number of arguments.
    #[error("wrong number of arguments for {name}: want {expected}, got {found}")]
    WrongArgumentCount {
        /// Name of the function.
        name:     String,
        /// Human readable description of the accepted arity.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A builtin received an argument of the wrong type.
    #[error("argument to {name} not supported, got {type_name}")]
    InvalidArgument {
        /// Name of the builtin.
        name:      String,
        /// Type name of the offending argument.
        type_name: String,
    },
    /// `pop` on an empty array.
    #[error("cannot pop from an empty array")]
    EmptyArray,
    /// Indexing a value that has no index operator.
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported {
        /// Type name of the indexed value.
        type_name: String,
    },
    /// An array or string index that is not an integer.
    #[error("index must be an Integer, got {type_name}")]
    InvalidIndex {
        /// Type name of the index value.
        type_name: String,
    },
    /// An array or string index past either end.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index:  i64,
        /// The length of the indexed value.
        length: usize,
    },
    /// A hash key of a type that cannot be hashed.
    #[error("unusable as hash key: {type_name}")]
    UnhashableKey {
        /// Type name of the key.
        type_name: String,
    },
    /// The left side of `=` is neither an identifier nor an index expression.
    #[error("cannot assign to {target}")]
    InvalidAssignment {
        /// Description of the assignment target.
        target: String,
    },
    /// `quote` needs exactly one argument.
    #[error("quote takes exactly one argument, got {found}")]
    QuoteArity {
        /// The number of arguments supplied.
        found: usize,
    },
    /// A string literal contains an escape the language does not define.
    #[error("illegal escape character \\{character}")]
    IllegalEscape {
        /// The character following the backslash.
        character: char,
    },
    /// A string literal ends with a lone backslash.
    #[error("unterminated escape sequence at end of string")]
    UnterminatedEscape,
}
