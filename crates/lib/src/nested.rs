//! The in-memory holder: a map of maps addressed by dot-separated keys.

use crate::{
    DataHolder, Error, IntoObject, MapOps, Object, ObjectMap, Result,
    holder::check_acyclic,
    path::{extract_map_key, segments},
};

/// In-memory [`DataHolder`] over [`Object`] nodes.
///
/// `NestedKeyMap` is a handle to an [`ObjectMap`]: clones alias the same storage and
/// sections returned by [`DataHolder::get_section`] write into their parent.
/// Absence is "key not present", so putting [`Object::Null`] removes the key.
///
/// ```
/// use dataops::{DataHolder, NestedKeyMap, Object};
///
/// let map = NestedKeyMap::new();
/// map.put("a.b.c", 1)?;
/// assert_eq!(map.get("a.b.c")?, Some(Object::Int(1)));
/// assert_eq!(map.keys_at("a")?, vec!["b"]);
///
/// map.put("a.b.c", Object::Null)?;
/// assert!(!map.contains("a.b.c")?);
/// # Ok::<(), dataops::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedKeyMap {
    data: ObjectMap,
}

impl NestedKeyMap {
    /// Creates a new, empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing object map without copying it
    pub fn from_raw(data: ObjectMap) -> Self {
        Self { data }
    }

    /// The backing map
    pub fn raw(&self) -> &ObjectMap {
        &self.data
    }

    /// Walks `path` from the root and returns the map it addresses.
    ///
    /// With `create`, missing segments are added as empty maps; a segment holding a
    /// non-map value is a [`Error::PathConflict`]. Without `create`, both cases read
    /// as `None`.
    pub fn resolve_map(&self, path: &str, create: bool) -> Result<Option<ObjectMap>> {
        let mut current = self.data.clone();
        for segment in segments(path) {
            if segment.is_empty() {
                break;
            }
            let next = current.get(segment);
            current = match next {
                Some(Object::Map(map)) => map,
                Some(other) if create => {
                    tracing::debug!(path, segment, found = other.type_name(), "Path conflict");
                    return Err(Error::PathConflict {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    });
                }
                None if create => {
                    tracing::trace!(path, segment, "Creating intermediate map");
                    let map = ObjectMap::new();
                    current.insert(segment, Object::Map(map.clone()));
                    map
                }
                _ => return Ok(None),
            };
        }
        Ok(Some(current))
    }

    /// Resolves the containing map of `key` for reading.
    fn lookup(&self, key: &str) -> Result<Option<(ObjectMap, String)>> {
        let map_key = extract_map_key(key)?;
        let local = map_key.local.to_string();
        Ok(self.resolve_map(map_key.path, false)?.map(|map| (map, local)))
    }
}

impl DataHolder for NestedKeyMap {
    type Ops = MapOps;

    fn ops(&self) -> &'static MapOps {
        MapOps::INSTANCE
    }

    fn get(&self, key: &str) -> Result<Option<Object>> {
        Ok(self
            .lookup(key)?
            .and_then(|(map, local)| map.get(&local)))
    }

    fn put_value(&self, key: &str, value: Object) -> Result<Option<Object>> {
        let map_key = extract_map_key(key)?;
        if value.is_null() {
            return Ok(self
                .resolve_map(map_key.path, false)?
                .and_then(|map| map.remove(map_key.local)));
        }
        let Some(map) = self.resolve_map(map_key.path, true)? else {
            return Ok(None);
        };
        Ok(map.insert(map_key.local, value))
    }

    /// Stores the value directly; objects need no conversion.
    ///
    /// An [`ObjectMap`] is stored aliased, like a section, and is rejected the same
    /// way if it would end up inside itself.
    fn put<V: IntoObject>(&self, key: &str, value: V) -> Result<Option<Object>> {
        let value = value.into_object()?;
        if matches!(value, Object::Map(_) | Object::List(_)) {
            check_acyclic(self, key, &value)?;
        }
        self.put_value(key, value)
    }

    fn remove(&self, key: &str) -> Result<Option<Object>> {
        Ok(self
            .lookup(key)?
            .and_then(|(map, local)| map.remove(&local)))
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self
            .lookup(key)?
            .is_some_and(|(map, local)| map.contains_key(&local)))
    }

    fn put_root(&self, key: &str, value: Object) -> Option<Object> {
        if value.is_null() {
            return self.data.remove(key);
        }
        self.data.insert(key, value)
    }

    fn keys(&self) -> Vec<String> {
        self.data.keys()
    }

    fn keys_at(&self, key: &str) -> Result<Vec<String>> {
        Ok(match self.get(key)? {
            Some(Object::Map(map)) => map.keys(),
            _ => Vec::new(),
        })
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn clear(&self) {
        self.data.clear();
    }

    fn as_node(&self) -> Object {
        Object::Map(self.data.clone())
    }

    fn from_node(node: &Object) -> Option<Self> {
        node.as_map().cloned().map(Self::from_raw)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        self.data.ptr_eq(&other.data)
    }
}

impl From<ObjectMap> for NestedKeyMap {
    fn from(data: ObjectMap) -> Self {
        Self::from_raw(data)
    }
}
