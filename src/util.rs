/// Numeric conversion helpers.
///
/// This module provides the lossy conversions the language defines between
/// integers and doubles, index validation against container lengths and the
/// printable form of doubles.
pub mod num;
