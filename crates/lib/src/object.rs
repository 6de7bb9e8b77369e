//! Nodes of the in-memory object tree.
//!
//! [`Object`] is the node type of the in-memory representation ([`crate::ops::MapOps`]).
//! Maps are held through [`ObjectMap`], a shared handle: cloning an `ObjectMap` (or an
//! `Object::Map`) aliases the same storage instead of copying it. This is what lets a
//! section returned by [`crate::NestedKeyMap::get_section`] write into its parent.
//!
//! Absence is modelled as "key not present". [`Object::Null`] exists so that lists can
//! carry empty elements and so that the representation has an `empty()` node, but a map
//! never stores it: putting `Null` at a key removes the key.

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::HashMap,
    fmt,
    rc::Rc,
};

use crate::{Error, Number, Result, json::JsonData, nested::NestedKeyMap};

/// A node of the in-memory object tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// The empty node
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Ordered list; elements need not share a kind
    List(Vec<Object>),
    /// Shared, mutable string-keyed map
    Map(ObjectMap),
}

impl Object {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "null",
            Object::Bool(_) => "bool",
            Object::Byte(_) => "byte",
            Object::Short(_) => "short",
            Object::Int(_) => "int",
            Object::Long(_) => "long",
            Object::Float(_) => "float",
            Object::Double(_) => "double",
            Object::String(_) => "string",
            Object::List(_) => "list",
            Object::Map(_) => "map",
        }
    }

    /// Returns true if this is the empty node
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Returns the numeric value with its kind, if this is a number
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Object::Byte(v) => Some(Number::Byte(v)),
            Object::Short(v) => Some(Number::Short(v)),
            Object::Int(v) => Some(Number::Int(v)),
            Object::Long(v) => Some(Number::Long(v)),
            Object::Float(v) => Some(Number::Float(v)),
            Object::Double(v) => Some(Number::Double(v)),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a map handle (aliasing, not copying)
    pub fn as_map(&self) -> Option<&ObjectMap> {
        match self {
            Object::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a list slice
    pub fn as_list(&self) -> Option<&[Object]> {
        match self {
            Object::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Number> for Object {
    fn from(value: Number) -> Self {
        match value {
            Number::Byte(v) => Object::Byte(v),
            Number::Short(v) => Object::Short(v),
            Number::Int(v) => Object::Int(v),
            Number::Long(v) => Object::Long(v),
            Number::Float(v) => Object::Float(v),
            Number::Double(v) => Object::Double(v),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Bool(value)
    }
}

impl From<i8> for Object {
    fn from(value: i8) -> Self {
        Object::Byte(value)
    }
}

impl From<i16> for Object {
    fn from(value: i16) -> Self {
        Object::Short(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Int(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Long(value)
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Object::Float(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Double(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::String(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::String(value.to_string())
    }
}

impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::List(value)
    }
}

impl From<ObjectMap> for Object {
    fn from(value: ObjectMap) -> Self {
        Object::Map(value)
    }
}

/// Shared handle to a string-keyed map of [`Object`]s.
///
/// Clones alias the same storage. Equality compares contents, use
/// [`ObjectMap::ptr_eq`] to test for aliasing.
#[derive(Clone, Default, PartialEq)]
pub struct ObjectMap(Rc<RefCell<HashMap<String, Object>>>);

impl ObjectMap {
    /// Creates a new, empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if both handles point to the same storage
    pub fn ptr_eq(&self, other: &ObjectMap) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Immutably borrows the underlying map
    pub fn borrow(&self) -> Ref<'_, HashMap<String, Object>> {
        self.0.borrow()
    }

    /// Mutably borrows the underlying map
    pub fn borrow_mut(&self) -> RefMut<'_, HashMap<String, Object>> {
        self.0.borrow_mut()
    }

    /// Returns a clone of the value stored at `key`
    pub fn get(&self, key: &str) -> Option<Object> {
        self.0.borrow().get(key).cloned()
    }

    /// Stores `value` at `key`, returning the previous value
    pub fn insert(&self, key: impl Into<String>, value: Object) -> Option<Object> {
        self.0.borrow_mut().insert(key.into(), value)
    }

    /// Removes `key`, returning the previous value
    pub fn remove(&self, key: &str) -> Option<Object> {
        self.0.borrow_mut().remove(key)
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

impl fmt::Debug for ObjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

impl FromIterator<(String, Object)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (String, Object)>>(iter: I) -> Self {
        let map: HashMap<String, Object> = iter
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect();
        ObjectMap(Rc::new(RefCell::new(map)))
    }
}

/// Values accepted by the generic [`crate::DataHolder::put`] setter.
///
/// A value is first expressed as an in-memory [`Object`] and then converted into the
/// holder's own representation. Holders themselves are rejected: a section must be
/// stored with `put_section`, which keeps it aliased instead of nesting the wrapper.
pub trait IntoObject {
    fn into_object(self) -> Result<Object>;
}

macro_rules! impl_into_object_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoObject for $ty {
                fn into_object(self) -> Result<Object> {
                    Ok(Object::from(self))
                }
            }
        )*
    };
}

impl_into_object_via_from!(
    bool, i8, i16, i32, i64, f32, f64, Number, String, &str, Object, ObjectMap
);

impl<T: IntoObject> IntoObject for Vec<T> {
    fn into_object(self) -> Result<Object> {
        let items = self
            .into_iter()
            .map(IntoObject::into_object)
            .collect::<Result<Vec<_>>>()?;
        Ok(Object::List(items))
    }
}

impl<T: IntoObject> IntoObject for Option<T> {
    fn into_object(self) -> Result<Object> {
        match self {
            Some(value) => value.into_object(),
            None => Ok(Object::Null),
        }
    }
}

impl<T: IntoObject> IntoObject for HashMap<String, T> {
    fn into_object(self) -> Result<Object> {
        let entries = self
            .into_iter()
            .map(|(key, value)| Ok((key, value.into_object()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Object::Map(entries.into_iter().collect()))
    }
}

macro_rules! impl_into_object_rejected {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl IntoObject for $ty {
                fn into_object(self) -> Result<Object> {
                    Err(Error::IllegalSectionAssignment {
                        holder: $name,
                        setter: "put_section",
                    })
                }
            }
        )*
    };
}

impl_into_object_rejected!(
    NestedKeyMap => "NestedKeyMap",
    &NestedKeyMap => "NestedKeyMap",
    JsonData => "JsonData",
    &JsonData => "JsonData",
);
