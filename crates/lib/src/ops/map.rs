//! [`TypeOps`] for the in-memory object tree.

use super::TypeOps;
use crate::{Number, Object, ObjectMap};

/// Operations over [`Object`] nodes.
///
/// Numbers keep their exact kind and booleans are native, so a tree converted
/// into objects and back loses nothing. Maps never hold [`Object::Null`]:
/// [`TypeOps::create_map`] drops empty values, matching the "absent key" model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapOps;

impl MapOps {
    /// The shared instance
    pub const INSTANCE: &'static MapOps = &MapOps;
}

/// Map keys must be strings; numbers are accepted in their decimal form.
fn key_string(key: &Object) -> Option<String> {
    match key {
        Object::String(s) => Some(s.clone()),
        other => other.as_number().map(|n| n.to_string()),
    }
}

impl TypeOps for MapOps {
    type Node = Object;

    fn empty(&self) -> Object {
        Object::Null
    }

    fn create_numeric(&self, value: Number) -> Object {
        Object::from(value)
    }

    fn get_number_value(&self, input: &Object) -> Option<Number> {
        input.as_number()
    }

    fn create_string(&self, value: &str) -> Object {
        Object::String(value.to_string())
    }

    fn get_string(&self, input: &Object) -> Option<String> {
        input.as_str().map(str::to_string)
    }

    fn create_map(&self, entries: Vec<(Object, Object)>) -> Object {
        let map: ObjectMap = entries
            .into_iter()
            .filter_map(|(key, value)| match key_string(&key) {
                Some(key) => Some((key, value)),
                None => {
                    tracing::warn!(key = ?key, "Skipping map entry with a non-string key");
                    None
                }
            })
            .collect();
        Object::Map(map)
    }

    fn get_map_entries(&self, input: &Object) -> Option<Vec<(Object, Object)>> {
        let map = input.as_map()?;
        let entries = map
            .borrow()
            .iter()
            .map(|(key, value)| (Object::String(key.clone()), value.clone()))
            .collect();
        Some(entries)
    }

    fn create_list(&self, items: Vec<Object>) -> Object {
        Object::List(items)
    }

    fn get_list(&self, input: &Object) -> Option<Vec<Object>> {
        input.as_list().map(<[Object]>::to_vec)
    }

    fn remove(&self, input: &Object, key: &str) -> Object {
        match input {
            Object::Map(map) => {
                let copy: ObjectMap = map
                    .borrow()
                    .iter()
                    .filter(|(k, _)| k.as_str() != key)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Object::Map(copy)
            }
            other => other.clone(),
        }
    }

    fn create_boolean(&self, value: bool) -> Object {
        Object::Bool(value)
    }

    fn get_bool_value(&self, input: &Object) -> Option<bool> {
        match input {
            Object::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
