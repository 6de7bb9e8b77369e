//! [`TypeOps`] for the JSON document tree.

use super::{JsonElement, JsonObject};
use crate::{Number, TypeOps};

/// Operations over [`JsonElement`] nodes.
///
/// JSON numbers carry no kind. Reading one back yields the narrowest kind that
/// holds the value: integers become byte, short, int or long; integers beyond
/// `i64` and fractional values become float when they survive an `f32` round
/// trip, otherwise double.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOps;

impl JsonOps {
    /// The shared instance
    pub const INSTANCE: &'static JsonOps = &JsonOps;
}

fn json_number(value: Number) -> Option<serde_json::Number> {
    match value {
        Number::Byte(v) => Some(v.into()),
        Number::Short(v) => Some(v.into()),
        Number::Int(v) => Some(v.into()),
        Number::Long(v) => Some(v.into()),
        // Through the decimal form, so 0.1f32 is written as 0.1
        Number::Float(v) => v
            .to_string()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64),
        Number::Double(v) => serde_json::Number::from_f64(v),
    }
}

impl TypeOps for JsonOps {
    type Node = JsonElement;

    fn empty(&self) -> JsonElement {
        JsonElement::Null
    }

    fn create_numeric(&self, value: Number) -> JsonElement {
        match json_number(value) {
            Some(n) => JsonElement::Number(n),
            None => {
                tracing::warn!(%value, "JSON cannot hold a non-finite number, storing null");
                JsonElement::Null
            }
        }
    }

    fn get_number_value(&self, input: &JsonElement) -> Option<Number> {
        let JsonElement::Number(n) = input else {
            return None;
        };
        if let Some(v) = n.as_i64() {
            return Some(Number::narrow_integral(v));
        }
        n.as_f64().map(Number::narrow_floating)
    }

    fn create_string(&self, value: &str) -> JsonElement {
        JsonElement::String(value.to_string())
    }

    fn get_string(&self, input: &JsonElement) -> Option<String> {
        input.as_str().map(str::to_string)
    }

    fn create_map(&self, entries: Vec<(JsonElement, JsonElement)>) -> JsonElement {
        let obj: JsonObject = entries
            .into_iter()
            .filter_map(|(key, value)| {
                let name = match &key {
                    JsonElement::String(s) => Some(s.clone()),
                    JsonElement::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                if name.is_none() {
                    tracing::warn!(key = %key, "Skipping object member with a non-string key");
                }
                name.map(|name| (name, value))
            })
            .collect();
        JsonElement::Object(obj)
    }

    fn get_map_entries(&self, input: &JsonElement) -> Option<Vec<(JsonElement, JsonElement)>> {
        let obj = input.as_object()?;
        let entries = obj
            .borrow()
            .iter()
            .map(|(key, value)| (JsonElement::String(key.clone()), value.clone()))
            .collect();
        Some(entries)
    }

    fn create_list(&self, items: Vec<JsonElement>) -> JsonElement {
        JsonElement::Array(items)
    }

    fn get_list(&self, input: &JsonElement) -> Option<Vec<JsonElement>> {
        input.as_array().map(<[JsonElement]>::to_vec)
    }

    fn remove(&self, input: &JsonElement, key: &str) -> JsonElement {
        match input {
            JsonElement::Object(obj) => JsonElement::Object(
                obj.borrow()
                    .iter()
                    .filter(|(k, _)| k.as_str() != key)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn create_boolean(&self, value: bool) -> JsonElement {
        JsonElement::Bool(value)
    }

    fn get_bool_value(&self, input: &JsonElement) -> Option<bool> {
        match input {
            JsonElement::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
