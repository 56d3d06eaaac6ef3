/// Container builtins.
///
/// `size`, `push`, `pop`, `type` and `clone`.
pub mod builtin;
/// Conversion builtins.
///
/// `toString`, `toInteger`, `toDouble` and `toBoolean`.
pub mod convert;
/// Output builtins.
///
/// `puts` and `listBuiltin` write to standard output.
pub mod print;

/// Call evaluation and the builtin table.
pub mod core;
