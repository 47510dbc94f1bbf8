//! Variable-binding store for a future evaluator.
//!
//! Nothing in the front end reads or writes it yet. Scopes chain to an
//! optional outer scope; lookups fall back outward, writes always land in
//! the innermost scope.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[derive(Debug, Clone)]
pub struct Environment<T> {
    store: HashMap<String, T>,
    outer: Option<Rc<RefCell<Environment<T>>>>,
}

impl<T: Clone> Environment<T> {
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// Creates a scope nested inside `outer`.
    pub fn new_enclosed(outer: Rc<RefCell<Environment<T>>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<T> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: T) -> T {
        self.store.insert(name.into(), value.clone());
        value
    }
}

impl<T: Clone> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::Environment;

    #[test]
    fn test_set_and_get() {
        let mut env = Environment::new();

        assert_eq!(env.set("x", 5), 5);
        assert_eq!(env.get("x"), Some(5));
        assert_eq!(env.get("y"), None);

        env.set("x", 7);
        assert_eq!(env.get("x"), Some(7));
    }

    #[test]
    fn test_enclosed_lookup_falls_back_to_outer() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        outer.borrow_mut().set("a", 1);
        outer.borrow_mut().set("b", 2);

        let mut inner = Environment::new_enclosed(Rc::clone(&outer));
        inner.set("b", 20);

        assert_eq!(inner.get("a"), Some(1));
        assert_eq!(inner.get("b"), Some(20));
        assert_eq!(outer.borrow().get("b"), Some(2));
        assert_eq!(inner.get("c"), None);
    }

    #[test]
    fn test_outer_updates_are_visible() {
        let outer = Rc::new(RefCell::new(Environment::new()));
        let inner = Environment::new_enclosed(Rc::clone(&outer));

        assert_eq!(inner.get("late"), None);
        outer.borrow_mut().set("late", "bound".to_string());
        assert_eq!(inner.get("late"), Some("bound".to_string()));
    }
}
