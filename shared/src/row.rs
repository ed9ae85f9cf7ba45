use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A record that can be shown as one table row or grid tile.
///
/// Rows have no shared schema: each page decides which keys exist. The views
/// only ever need the string form of a keyed value, for display and search.
pub trait Row {
    /// String form of the value stored under `key`, or `None` when the row
    /// has no such key (or the value is null).
    fn field(&self, key: &str) -> Option<String>;
}

/// String-casts a JSON value the way cells display it.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

impl Row for Map<String, Value> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }
}

impl Row for Value {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }
}

impl Row for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Row for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: Row> Row for std::rc::Rc<T> {
    fn field(&self, key: &str) -> Option<String> {
        (**self).field(key)
    }
}
