use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    rc::Rc,
};

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::function::core::BuiltinDef,
        value::hash_key::HashKey,
    },
    util::num::format_double,
};

/// Shared, mutable storage of an integer value.
pub type IntegerRef = Rc<Cell<i64>>;
/// Shared, mutable storage of a double value.
pub type DoubleRef = Rc<Cell<f64>>;
/// Shared, mutable storage of a string value.
pub type StringRef = Rc<RefCell<String>>;
/// Shared, mutable element storage of an array value.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
/// Shared, mutable entry storage of a hash value.
pub type HashRef = Rc<RefCell<BTreeMap<HashKey, Value>>>;

/// A user function: parameters, body and the environment it was created in.
pub struct Function {
    /// Parameter names, bound positionally.
    pub parameters: Vec<String>,
    /// Function body.
    pub body:       Block,
    /// The environment the literal was evaluated in.
    pub env:        Env,
}

/// A macro: like [`Function`], but only invoked during macro expansion.
pub struct Macro {
    /// Parameter names; each is bound to a quoted argument.
    pub parameters: Vec<String>,
    /// Macro body, expected to evaluate to a quote.
    pub body:       Block,
    /// The environment the macro was defined in.
    pub env:        Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Debug for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Macro")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// Integers, doubles, strings, arrays and hashes are shared: cloning the
/// value clones the handle, so every binding, parameter and container slot
/// holding it observes in-place mutation such as `+=`. Evaluating a literal
/// always allocates new storage. Booleans and `null` are plain values.
///
/// `Return` and `Error` are control markers. They stop statement sequencing
/// and are never stored in a binding or container by the evaluator.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64 bit integer.
    Integer(IntegerRef),
    /// A double precision floating point number.
    Double(DoubleRef),
    /// `true` or `false`.
    Boolean(bool),
    /// A string with its escapes already decoded.
    String(StringRef),
    /// An ordered list of values.
    Array(ArrayRef),
    /// A mapping from hashable values to values.
    Hash(HashRef),
    /// A user function closing over its defining environment.
    Function(Rc<Function>),
    /// A macro closing over its defining environment.
    Macro(Rc<Macro>),
    /// A native function from the builtin table.
    Builtin(&'static BuiltinDef),
    /// An unevaluated AST node produced by `quote`.
    Quote(Rc<Expr>),
    /// The value of a `return` statement on its way out of a function.
    Return(Box<Self>),
    /// A recoverable runtime error.
    Error(RuntimeError),
    /// `null`
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::from(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::new(RefCell::new(v)))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<BTreeMap<HashKey, Self>> for Value {
    fn from(v: BTreeMap<HashKey, Self>) -> Self {
        Self::Hash(Rc::new(RefCell::new(v)))
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// Allocates a new integer.
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::Integer(Rc::new(Cell::new(n)))
    }

    /// Allocates a new double.
    #[must_use]
    pub fn double(d: f64) -> Self {
        Self::Double(Rc::new(Cell::new(d)))
    }

    /// Returns the type name reported by `type()` and in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Double(_) => "Double",
            Self::Boolean(_) => "Boolean",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Function(_) => "Function",
            Self::Macro(_) => "Macro",
            Self::Builtin(_) => "BuiltinFunction",
            Self::Quote(_) => "Quote",
            Self::Return(_) => "Return",
            Self::Error(_) => "Error",
            Self::Null => "Null",
        }
    }

    /// Condition truthiness, used by `if`, `while`, the ternary operator and
    /// `!`.
    ///
    /// Only `false` and `null` are falsy. `0`, `""` and `[]` are truthy.
    ///
    /// # Example
    /// ```
    /// use quasi::interpreter::value::core::Value;
    ///
    /// assert!(Value::integer(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Strips a `Return` marker, leaving any other value untouched.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }

    /// Copies the storage of a value, keeping the elements of an array or
    /// hash.
    ///
    /// The copy no longer aliases the original: pushing to one or `+=` on
    /// one does not change the other. Elements of a copied array or hash are
    /// still shared. Every other value is cloned as is.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        match self {
            Self::Integer(n) => Self::integer(n.get()),
            Self::Double(d) => Self::double(d.get()),
            Self::String(s) => Self::from(s.borrow().clone()),
            Self::Array(elements) => Self::from(elements.borrow().clone()),
            Self::Hash(entries) => Self::from(entries.borrow().clone()),
            other => other.clone(),
        }
    }

    /// Writes the contents of `source` into the storage of `self`.
    ///
    /// Both must be integers, both doubles or both strings. Every holder of
    /// `self` observes the new contents.
    ///
    /// # Returns
    /// `false`, leaving `self` untouched, if the two are not the same kind of
    /// scalar.
    ///
    /// # Example
    /// ```
    /// use quasi::interpreter::value::core::Value;
    ///
    /// let x = Value::integer(1);
    /// let alias = x.clone();
    /// assert!(x.overwrite(&Value::integer(5)));
    /// assert_eq!(alias, Value::integer(5));
    /// assert!(!x.overwrite(&Value::double(1.5)));
    /// ```
    pub fn overwrite(&self, source: &Self) -> bool {
        match (self, source) {
            (Self::Integer(slot), Self::Integer(n)) => slot.set(n.get()),
            (Self::Double(slot), Self::Double(d)) => slot.set(d.get()),
            (Self::String(slot), Self::String(s)) => {
                let contents = s.borrow().clone();
                *slot.borrow_mut() = contents;
            },
            _ => return false,
        }
        true
    }
}

impl PartialEq for Value {
    /// Structural equality for data, identity for functions and macros.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.get() == b.get(),
            (Self::Double(a), Self::Double(b)) => a.get() == b.get(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Macro(a), Self::Macro(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Quote(a), Self::Quote(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n.get()),
            Self::Double(d) => write!(f, "{}", format_double(d.get())),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{}", s.borrow()),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, v) in elements.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            },
            Self::Hash(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "function({}) {}", function.parameters.join(", "), function.body)
            },
            Self::Macro(m) => write!(f, "macro({}) {}", m.parameters.join(", "), m.body),
            Self::Builtin(def) => write!(f, "builtin function {}", def.name),
            Self::Quote(node) => write!(f, "QUOTE({node})"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
            Self::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        let array = Value::from(vec![Value::integer(1), Value::from("a"), Value::double(2.0)]);
        assert_eq!(array.to_string(), "[1, a, 2.0]");

        let mut entries = BTreeMap::new();
        entries.insert(HashKey::String("b".to_string()), Value::Boolean(true));
        entries.insert(HashKey::Integer(1), Value::Null);
        assert_eq!(Value::from(entries).to_string(), "{1:null,b:true}");

        let error = Value::Error(RuntimeError::EmptyArray);
        assert_eq!(error.to_string(), "ERROR: cannot pop from an empty array");
    }

    #[test]
    fn truthiness_only_rejects_false_and_null() {
        assert!(Value::integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(Vec::new()).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn arrays_compare_by_content() {
        let a = Value::from(vec![Value::integer(1)]);
        let b = Value::from(vec![Value::integer(1)]);
        assert_eq!(a, b);
        assert_ne!(a, Value::from(vec![Value::integer(2)]));
    }

    #[test]
    fn shallow_copy_detaches_the_container() {
        let original = Value::from(vec![Value::integer(1)]);
        let copy = original.shallow_copy();
        if let Value::Array(elements) = &copy {
            elements.borrow_mut().push(Value::integer(2));
        }
        assert_eq!(original.to_string(), "[1]");
        assert_eq!(copy.to_string(), "[1, 2]");
    }

    #[test]
    fn clones_share_scalar_storage() {
        let s = Value::from("ab");
        let alias = s.clone();
        let copy = s.shallow_copy();
        assert!(s.overwrite(&Value::from("abc")));
        assert_eq!(alias.to_string(), "abc");
        assert_eq!(copy.to_string(), "ab");
    }
}
