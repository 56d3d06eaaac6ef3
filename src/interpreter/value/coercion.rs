use std::mem::discriminant;

use crate::{
    interpreter::value::core::Value,
    util::num::{f64_to_i64_truncating, i64_to_f64},
};

/// The types a binary operator can operate in, lowest priority first.
///
/// When two operands differ, the operator runs in a type both can be
/// converted to, preferring the operand type with the higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Boolean,
    Integer,
    Double,
    Array,
    Hash,
    String,
}

/// Every [`Kind`] in priority order.
const LATTICE: [Kind; 6] = [Kind::Boolean,
                            Kind::Integer,
                            Kind::Double,
                            Kind::Array,
                            Kind::Hash,
                            Kind::String];

impl Kind {
    /// Returns the kind of an operand, or `None` for values outside the
    /// lattice (`null`, functions, quotes and control markers).
    #[must_use]
    pub const fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(_) => Some(Self::Boolean),
            Value::Integer(_) => Some(Self::Integer),
            Value::Double(_) => Some(Self::Double),
            Value::Array(_) => Some(Self::Array),
            Value::Hash(_) => Some(Self::Hash),
            Value::String(_) => Some(Self::String),
            _ => None,
        }
    }

    /// Position in [`LATTICE`]; values outside it rank lowest.
    const fn priority(kind: Option<Self>) -> usize {
        match kind {
            Some(kind) => kind as usize,
            None => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::String => "String",
        }
    }
}

/// Returns `true` if `value` has a conversion to `kind`.
///
/// - `Integer` accepts integers and booleans.
/// - `Double` accepts integers, booleans and doubles.
/// - `Boolean` and `String` accept anything.
/// - `Array` and `Hash` accept only themselves.
#[must_use]
pub const fn convertible(value: &Value, kind: Kind) -> bool {
    match kind {
        Kind::Integer => matches!(value, Value::Integer(_) | Value::Boolean(_)),
        Kind::Double => matches!(value, Value::Integer(_) | Value::Boolean(_) | Value::Double(_)),
        Kind::Boolean | Kind::String => true,
        Kind::Array => matches!(value, Value::Array(_)),
        Kind::Hash => matches!(value, Value::Hash(_)),
    }
}

/// Picks the single kind both operands of a binary operator convert to.
///
/// 1. Two operands of the same type outside the lattice, such as two
///    functions or two `null`s, have no common kind.
/// 2. Operands of the same lattice kind stay in it.
/// 3. Otherwise the operand with the higher priority wins if the other one
///    converts to its kind. On a priority tie the right operand's kind is
///    tried.
/// 4. Otherwise the first kind, starting from the higher of the two
///    priorities, that both operands convert to.
///
/// # Returns
/// The chosen kind, or `None` if no kind accepts both operands.
///
/// # Example
/// ```
/// use quasi::interpreter::value::{
///     coercion::{Kind, common_kind},
///     core::Value,
/// };
///
/// assert_eq!(common_kind(&Value::Boolean(true), &Value::integer(1)), Some(Kind::Integer));
/// assert_eq!(common_kind(&Value::integer(1), &Value::double(2.5)), Some(Kind::Double));
/// assert_eq!(common_kind(&Value::integer(1), &Value::from("a")), Some(Kind::String));
/// ```
#[must_use]
pub fn common_kind(left: &Value, right: &Value) -> Option<Kind> {
    let (left_kind, right_kind) = (Kind::of(left), Kind::of(right));

    if left_kind.is_none() && discriminant(left) == discriminant(right) {
        return None;
    }

    if let Some(kind) = left_kind
       && left_kind == right_kind
    {
        return Some(kind);
    }

    let (p, q) = (Kind::priority(left_kind), Kind::priority(right_kind));
    if p > q {
        if let Some(kind) = left_kind
           && convertible(right, kind)
        {
            return Some(kind);
        }
    } else if let Some(kind) = right_kind
              && convertible(left, kind)
    {
        return Some(kind);
    }

    LATTICE[p.max(q)..].iter()
                       .copied()
                       .find(|&kind| convertible(left, kind) && convertible(right, kind))
}

/// Boolean conversion, used by `&&`, `||`, `toBoolean` and Boolean-kind
/// operators.
///
/// Integers and doubles are `true` when non-zero. Every value that is not a
/// boolean or a number converts to `false`, whatever its content. This is
/// not condition truthiness; see [`Value::is_truthy`].
#[must_use]
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(n) => n.get() != 0,
        Value::Double(d) => d.get() != 0.0,
        _ => false,
    }
}

/// Converts `value` to `kind`.
///
/// A value that already has `kind` comes back as the same shared value, not
/// a copy. Converters are slightly wider than [`convertible`]: a double
/// converts to an integer by truncating toward zero, which `toInteger`
/// relies on. Operator resolution never picks Integer for a double operand.
///
/// # Returns
/// The converted value, or `None` when no converter exists, such as from a
/// string to a number or between arrays and hashes.
#[must_use]
pub fn convert(value: &Value, kind: Kind) -> Option<Value> {
    let converted = match (kind, value) {
        (Kind::Integer, Value::Integer(_))
        | (Kind::Double, Value::Double(_))
        | (Kind::String, Value::String(_))
        | (Kind::Array, Value::Array(_))
        | (Kind::Hash, Value::Hash(_)) => value.clone(),
        (Kind::Integer, Value::Boolean(b)) => Value::integer(i64::from(*b)),
        (Kind::Integer, Value::Double(d)) => Value::integer(f64_to_i64_truncating(d.get())),
        (Kind::Double, Value::Integer(n)) => Value::double(i64_to_f64(n.get())),
        (Kind::Double, Value::Boolean(b)) => Value::double(f64::from(u8::from(*b))),
        (Kind::Boolean, _) => Value::Boolean(to_boolean(value)),
        (Kind::String, other) => Value::from(other.to_string()),
        _ => return None,
    };
    Some(converted)
}
