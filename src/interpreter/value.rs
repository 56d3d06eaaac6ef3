/// Runtime values.
///
/// Defines the `Value` enum every expression evaluates to, its printable
/// form, structural equality and condition truthiness.
pub mod core;
/// Hash key representation.
///
/// Defines the `HashKey` type used for the keys of a `Value::Hash`. Only
/// integers, doubles, booleans and strings can be keys.
pub mod hash_key;
/// The coercion lattice.
///
/// Decides which single type two operands of a binary operator are converted
/// to, and performs those conversions.
pub mod coercion;
