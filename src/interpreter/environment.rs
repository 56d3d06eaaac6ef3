use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::{
    evaluator::function::core::lookup_builtin,
    value::core::{Macro, Value},
};

/// Shared handle to one frame of the environment chain.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of lexical scope.
///
/// A frame owns its bindings and holds a handle to the frame it was created
/// in. The root frame has no parent; names missing from the whole chain fall
/// back to the builtin table.
///
/// Function and macro calls create a frame whose parent is the callee's
/// captured environment. `if`, `while` and block bodies run in the frame of
/// their enclosing statement list.
///
/// Macros registered by expansion live in a namespace of their own: they are
/// visible to [`get_macro`](Self::get_macro) but not to
/// [`get`](Self::get).
#[derive(Debug, Default)]
pub struct Environment {
    store:  HashMap<String, Value>,
    macros: HashMap<String, Rc<Macro>>,
    outer:  Option<Env>,
}

impl Environment {
    /// Creates an empty root frame.
    #[must_use]
    pub fn new_global() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty frame whose lookups continue in `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store:  HashMap::new(),
                                    macros: HashMap::new(),
                                    outer:  Some(Rc::clone(outer)), }))
    }

    /// Resolves `name`, innermost frame first.
    ///
    /// # Returns
    /// A clone of the bound value, a builtin function when no frame binds the
    /// name, or `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        match &self.outer {
            Some(outer) => outer.borrow().get(name),
            None => lookup_builtin(name).map(Value::Builtin),
        }
    }

    /// Binds `name` in this frame, shadowing any outer binding.
    ///
    /// Used by `let` and `=`, which never write through to an enclosing
    /// frame. Compound assignment needs no binding change: it writes into
    /// the storage of the bound value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Registers a macro under `name` in this frame.
    pub fn define_macro(&mut self, name: impl Into<String>, definition: Rc<Macro>) {
        self.macros.insert(name.into(), definition);
    }

    /// Resolves a macro by name, innermost frame first.
    #[must_use]
    pub fn get_macro(&self, name: &str) -> Option<Rc<Macro>> {
        if let Some(definition) = self.macros.get(name) {
            return Some(Rc::clone(definition));
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get_macro(name))
    }
}
