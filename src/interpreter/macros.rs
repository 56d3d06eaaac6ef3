/// Generic AST rewriting.
///
/// A bottom-up fold over a fixed set of composite node kinds, shared by
/// macro expansion and unquote evaluation.
pub mod modify;
/// Macro collection and expansion.
pub mod expansion;
/// `quote` and `unquote`.
pub mod quote;
