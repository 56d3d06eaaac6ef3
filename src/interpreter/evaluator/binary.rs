/// Infix dispatch.
///
/// Evaluates both operands, resolves their common kind through the coercion
/// lattice and routes to the matching operator table.
pub mod core;
/// Assignment.
///
/// `=` on identifiers and index expressions, and the write-back of compound
/// assignment results.
pub mod assign;
/// Ordering and equality shared by every operator table.
pub mod comparison;
/// Integer and double operator tables.
pub mod scalar;
/// Boolean operator table.
pub mod logic;
/// String operator table.
pub mod string;
/// Array operator table.
pub mod array;
/// Hash operator table.
pub mod hash;
