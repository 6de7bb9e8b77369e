//! Nodes of the JSON document tree.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// A node of the JSON document tree.
///
/// Objects are held through [`JsonObject`], a shared handle, so cloning an element
/// that contains objects aliases them. Numbers keep serde_json's representation
/// (integer or floating); the numeric kind is recovered by [`super::JsonOps`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonElement {
    /// JSON `null`, the empty node
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<JsonElement>),
    Object(JsonObject),
}

impl JsonElement {
    /// Returns the JSON type name
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonElement::Null => "null",
            JsonElement::Bool(_) => "boolean",
            JsonElement::Number(_) => "number",
            JsonElement::String(_) => "string",
            JsonElement::Array(_) => "array",
            JsonElement::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonElement::Null)
    }

    /// Attempts to convert to an object handle (aliasing, not copying)
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonElement::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonElement]> {
        match self {
            JsonElement::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonElement::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Compact JSON text
impl fmt::Display for JsonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Value> for JsonElement {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonElement::Null,
            Value::Bool(b) => JsonElement::Bool(b),
            Value::Number(n) => JsonElement::Number(n),
            Value::String(s) => JsonElement::String(s),
            Value::Array(items) => {
                JsonElement::Array(items.into_iter().map(JsonElement::from).collect())
            }
            Value::Object(map) => JsonElement::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonElement::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonElement> for Value {
    fn from(element: &JsonElement) -> Self {
        match element {
            JsonElement::Null => Value::Null,
            JsonElement::Bool(b) => Value::Bool(*b),
            JsonElement::Number(n) => Value::Number(n.clone()),
            JsonElement::String(s) => Value::String(s.clone()),
            JsonElement::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonElement::Object(obj) => Value::Object(
                obj.borrow()
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonObject> for JsonElement {
    fn from(value: JsonObject) -> Self {
        JsonElement::Object(value)
    }
}

impl Serialize for JsonElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonElement::Null => serializer.serialize_unit(),
            JsonElement::Bool(b) => serializer.serialize_bool(*b),
            JsonElement::Number(n) => n.serialize(serializer),
            JsonElement::String(s) => serializer.serialize_str(s),
            JsonElement::Array(items) => items.serialize(serializer),
            JsonElement::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(JsonElement::from)
    }
}

/// Shared handle to an insertion-ordered JSON object.
///
/// Clones alias the same storage. Equality compares members regardless of order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(Rc<RefCell<IndexMap<String, JsonElement>>>);

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if both handles point to the same storage
    pub fn ptr_eq(&self, other: &JsonObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn borrow(&self) -> Ref<'_, IndexMap<String, JsonElement>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, IndexMap<String, JsonElement>> {
        self.0.borrow_mut()
    }

    /// Returns a clone of the member stored at `key`, explicit nulls included
    pub fn get(&self, key: &str) -> Option<JsonElement> {
        self.0.borrow().get(key).cloned()
    }

    /// Stores a member, returning the previous one. New keys are appended.
    pub fn insert(&self, key: impl Into<String>, value: JsonElement) -> Option<JsonElement> {
        self.0.borrow_mut().insert(key.into(), value)
    }

    /// Removes a member, keeping the order of the others
    pub fn remove(&self, key: &str) -> Option<JsonElement> {
        self.0.borrow_mut().shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl fmt::Debug for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

impl FromIterator<(String, JsonElement)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonElement)>>(iter: I) -> Self {
        JsonObject(Rc::new(RefCell::new(iter.into_iter().collect())))
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let members = self.0.borrow();
        let mut map = serializer.serialize_map(Some(members.len()))?;
        for (key, value) in members.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
