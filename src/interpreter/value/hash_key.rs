use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// Enum representing values allowed as hash keys.
///
/// Keys are ordered so hashes print their entries in a stable order:
/// integers, then doubles, then booleans, then strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A double such as `3.5`. `NaN` equals itself as a key.
    Double(OrderedFloat<f64>),
    /// A boolean such as `true`.
    Boolean(bool),
    /// A string such as `"name"`.
    String(String),
}

impl TryFrom<&Value> for HashKey {
    type Error = ();

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Integer(i) => Ok(Self::Integer(i.get())),
            Value::Double(d) => Ok(Self::Double(OrderedFloat(d.get()))),
            Value::Boolean(b) => Ok(Self::Boolean(*b)),
            Value::String(s) => Ok(Self::String(s.borrow().clone())),
            _ => Err(()),
        }
    }
}

impl From<&HashKey> for Value {
    fn from(key: &HashKey) -> Self {
        match key {
            HashKey::Integer(i) => Self::integer(*i),
            HashKey::Double(d) => Self::double(d.into_inner()),
            HashKey::Boolean(b) => Self::Boolean(*b),
            HashKey::String(s) => Self::from(s.as_str()),
        }
    }
}

impl Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = Value::from(self);
        write!(f, "{value}")
    }
}
