//! Row identity as an ordered list of column/value pairs.

use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one row of one table. Column order is the declared order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Key {
    pub table: String,
    pub parts: Vec<(String, Value)>,
}

impl Key {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            parts: Vec::new(),
        }
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parts.push((column.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(col, _)| col.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.parts.iter().map(|(_, val)| val)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .parts
            .iter()
            .map(|(col, val)| format!("{col}={val}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({parts})", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_keeps_declared_order() {
        let key = Key::new("orders").with("region", "west").with("id", 5);
        assert_eq!(key.columns().collect::<Vec<_>>(), vec!["region", "id"]);
        assert_eq!(key.len(), 2);
        assert_eq!(key.to_string(), "orders(region='west', id=5)");
    }

    #[test]
    fn test_empty_key() {
        let key = Key::new("orders");
        assert!(key.is_empty());
        assert_eq!(key.to_string(), "orders()");
    }
}
