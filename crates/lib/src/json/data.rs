//! The JSON holder.

use super::{JsonElement, JsonObject, JsonOps};
use crate::{
    DataHolder, Error, Result,
    path::{extract_map_key, segments},
};

/// [`DataHolder`] over a JSON object.
///
/// Works like [`crate::NestedKeyMap`] with two JSON-specific rules: putting the empty
/// node stores an explicit `null` member instead of removing the key, and getters
/// read explicit `null` members as absent. Member order follows insertion order.
///
/// ```
/// use dataops::{DataHolder, json::{JsonData, JsonElement}};
///
/// let data = JsonData::new();
/// data.put_long("stats.count", 3)?;
/// data.put_value("stats.note", JsonElement::Null)?;
///
/// assert_eq!(data.to_string(), r#"{"stats":{"count":3,"note":null}}"#);
/// assert_eq!(data.get("stats.note")?, None);
/// assert!(data.contains("stats.note")?);
/// # Ok::<(), dataops::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonData {
    data: JsonObject,
}

impl JsonData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object without copying it
    pub fn from_raw(data: JsonObject) -> Self {
        Self { data }
    }

    /// The backing object
    pub fn raw(&self) -> &JsonObject {
        &self.data
    }

    /// Walks `path` from the root and returns the object it addresses.
    ///
    /// With `create`, missing segments and explicit `null` members become empty
    /// objects; any other non-object member is a [`Error::PathConflict`]. Without
    /// `create`, both cases read as `None`.
    pub fn resolve_map(&self, path: &str, create: bool) -> Result<Option<JsonObject>> {
        let mut current = self.data.clone();
        for segment in segments(path) {
            if segment.is_empty() {
                break;
            }
            let next = current.get(segment);
            current = match next {
                Some(JsonElement::Object(obj)) => obj,
                Some(other) if create && !other.is_null() => {
                    tracing::debug!(path, segment, found = other.type_name(), "Path conflict");
                    return Err(Error::PathConflict {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    });
                }
                _ if create => {
                    tracing::trace!(path, segment, "Creating intermediate object");
                    let obj = JsonObject::new();
                    current.insert(segment, JsonElement::Object(obj.clone()));
                    obj
                }
                _ => return Ok(None),
            };
        }
        Ok(Some(current))
    }

    fn lookup(&self, key: &str) -> Result<Option<(JsonObject, String)>> {
        let map_key = extract_map_key(key)?;
        let local = map_key.local.to_string();
        Ok(self.resolve_map(map_key.path, false)?.map(|obj| (obj, local)))
    }
}

impl DataHolder for JsonData {
    type Ops = JsonOps;

    fn ops(&self) -> &'static JsonOps {
        JsonOps::INSTANCE
    }

    fn get(&self, key: &str) -> Result<Option<JsonElement>> {
        Ok(self
            .lookup(key)?
            .and_then(|(obj, local)| obj.get(&local))
            .filter(|value| !value.is_null()))
    }

    fn put_value(&self, key: &str, value: JsonElement) -> Result<Option<JsonElement>> {
        let map_key = extract_map_key(key)?;
        let Some(obj) = self.resolve_map(map_key.path, true)? else {
            return Ok(None);
        };
        Ok(obj
            .insert(map_key.local, value)
            .filter(|previous| !previous.is_null()))
    }

    fn remove(&self, key: &str) -> Result<Option<JsonElement>> {
        Ok(self
            .lookup(key)?
            .and_then(|(obj, local)| obj.remove(&local))
            .filter(|value| !value.is_null()))
    }

    /// True for every member, explicit `null` members included.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self
            .lookup(key)?
            .is_some_and(|(obj, local)| obj.contains_key(&local)))
    }

    fn put_root(&self, key: &str, value: JsonElement) -> Option<JsonElement> {
        self.data
            .insert(key, value)
            .filter(|previous| !previous.is_null())
    }

    fn keys(&self) -> Vec<String> {
        self.data.keys()
    }

    fn keys_at(&self, key: &str) -> Result<Vec<String>> {
        Ok(match self.get(key)? {
            Some(JsonElement::Object(obj)) => obj.keys(),
            _ => Vec::new(),
        })
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn clear(&self) {
        self.data.clear();
    }

    fn as_node(&self) -> JsonElement {
        JsonElement::Object(self.data.clone())
    }

    fn from_node(node: &JsonElement) -> Option<Self> {
        node.as_object().cloned().map(Self::from_raw)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        self.data.ptr_eq(&other.data)
    }
}

/// Compact JSON text of the whole document
impl std::fmt::Display for JsonData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.as_node(), f)
    }
}

impl From<JsonObject> for JsonData {
    fn from(data: JsonObject) -> Self {
        Self::from_raw(data)
    }
}
