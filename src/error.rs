use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, illegal characters and invalid literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the recoverable errors raised during evaluation. They are carried
/// as values and short-circuit statement sequencing.
pub mod runtime_error;
/// Fatal macro expansion errors.
pub mod macro_error;

pub use macro_error::MacroError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Everything that can stop [`run`](crate::run) before a value is produced.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The source did not parse cleanly.
    #[error("{}", render_parse_errors(.0))]
    Parse(Vec<ParseError>),
    /// Macro expansion aborted.
    #[error(transparent)]
    Macro(#[from] MacroError),
}

fn render_parse_errors(errors: &[ParseError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
