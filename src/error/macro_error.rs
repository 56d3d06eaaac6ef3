use thiserror::Error;

use crate::error::RuntimeError;

/// Fatal failures of macro expansion.
///
/// Unlike [`RuntimeError`](super::RuntimeError) these are not values: they
/// abort evaluation of the whole program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    /// A macro body evaluated to something other than a quoted node.
    #[error("macro {name} returned {found}; macros may only return quoted AST nodes")]
    NotQuote {
        /// Name the macro was invoked through.
        name:  String,
        /// Type name of the value the body produced.
        found: String,
    },
    /// A macro body raised a runtime error while expanding.
    #[error("macro {name} failed: {source}")]
    Evaluation {
        /// Name the macro was invoked through.
        name:   String,
        /// The error the body raised.
        source: RuntimeError,
    },
}
