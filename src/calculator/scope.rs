use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Variables that persist across evaluations of one session.
///
/// Names are case-sensitive. A later assignment replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: HashMap<String, Value>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, returning the value it replaces.
    ///
    /// # Example
    /// ```
    /// use numtap::{Scope, Value};
    ///
    /// let mut scope = Scope::new();
    /// assert_eq!(scope.set("x", Value::Number(1.0)), None);
    /// assert_eq!(scope.set("x", Value::Number(2.0)), Some(Value::Number(1.0)));
    /// assert_eq!(scope.get("x"), Some(&Value::Number(2.0)));
    /// assert_eq!(scope.get("X"), None);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
