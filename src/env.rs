// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates the root environment. A missing parent identifies the
    /// global scope.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a child scope chained to a parent
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Looks up a symbol in this scope and then through the parent chain,
    /// returning a copy of the bound value
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        if let Some(ref parent) = self.parent {
            return parent.get(name);
        }

        None
    }

    /// Binds a name in THIS scope, inserting or overwriting
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Binds a name at the root of the parent chain
    pub fn define_global(&self, name: String, value: Value) {
        match &self.parent {
            Some(parent) => parent.define_global(name, value),
            None => self.define(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Long(42));

        match env.get("x") {
            Some(Value::Long(n)) => assert_eq!(n, 42),
            _ => panic!("Expected Long(42)"),
        }
    }

    #[test]
    fn test_missing_symbol() {
        let env = Environment::new();
        assert!(env.get("missing").is_none());
    }

    #[test]
    fn test_define_overwrites() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Long(1));
        env.define("x".to_string(), Value::Long(2));

        match env.get("x") {
            Some(Value::Long(n)) => assert_eq!(n, 2),
            _ => panic!("Expected Long(2)"),
        }
    }

    #[test]
    fn test_shadowing() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Long(42));

        let child = Environment::with_parent(parent);
        child.define("x".to_string(), Value::Long(100));

        match child.get("x") {
            Some(Value::Long(n)) => assert_eq!(n, 100),
            _ => panic!("Expected Long(100)"),
        }
    }

    #[test]
    fn test_parent_lookup() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Long(42));

        let child = Environment::with_parent(parent);

        match child.get("x") {
            Some(Value::Long(n)) => assert_eq!(n, 42),
            _ => panic!("Expected Long(42)"),
        }
    }

    #[test]
    fn test_define_global_writes_root() {
        let root = Environment::new();
        let middle = Environment::with_parent(root.clone());
        let leaf = Environment::with_parent(middle);

        leaf.define_global("g".to_string(), Value::Long(7));

        // The binding lands at the root, not in the leaf scope
        match root.get("g") {
            Some(Value::Long(n)) => assert_eq!(n, 7),
            _ => panic!("Expected Long(7) at root"),
        }

        // A sibling scope sees it through its own chain
        let sibling = Environment::with_parent(root);
        match sibling.get("g") {
            Some(Value::Long(n)) => assert_eq!(n, 7),
            _ => panic!("Expected Long(7) from sibling"),
        }
    }
}
