//! The keyed CRUD surface shared by every representation.
//!
//! A holder wraps one backing map of its representation and addresses values with
//! flat dot-separated keys (see [`crate::path`]). Implementations supply a handful of
//! primitives; typed accessors, list helpers, sections and conversion are provided
//! on top of them and behave the same for every representation.
//!
//! # Core Types
//!
//! - [`DataHolder`] - The holder contract
//! - [`NodeOf`] - The node type of a holder's representation
//!
//! # Failure model
//!
//! An empty key is an error ([`crate::Error::InvalidKey`]). A value of the wrong
//! kind is not: typed getters return `None` (or the caller's default) and list
//! getters do so as soon as one element fails to read.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    Builder, Error, IntoObject, MapOps, Result, Scalar, TypeOps,
    path::{extract_map_key, segments},
};

/// The node type of a holder's representation.
pub type NodeOf<H> = <<H as DataHolder>::Ops as TypeOps>::Node;

macro_rules! typed_accessors {
    ($($ty:ty => $get:ident, $get_or:ident, $put:ident, $get_list:ident, $get_list_or:ident,
        $put_list:ident, $get_array:ident, $put_array:ident;)*) => {
        $(
            #[doc = concat!("Reads the `", stringify!($ty), "` at `key`.")]
            fn $get(&self, key: &str) -> Result<Option<$ty>> {
                self.get_as::<$ty>(key)
            }

            fn $get_or(&self, key: &str, default: $ty) -> Result<$ty> {
                self.get_as_or(key, default)
            }

            fn $put(&self, key: &str, value: $ty) -> Result<Option<NodeOf<Self>>> {
                self.put_as(key, value)
            }

            #[doc = concat!("Reads a list whose every element is a `", stringify!($ty), "`.")]
            fn $get_list(&self, key: &str) -> Result<Option<Vec<$ty>>> {
                self.get_list_of::<$ty>(key)
            }

            fn $get_list_or(&self, key: &str, default: Vec<$ty>) -> Result<Vec<$ty>> {
                Ok(self.get_list_of::<$ty>(key)?.unwrap_or(default))
            }

            fn $put_list(&self, key: &str, values: Vec<$ty>) -> Result<Option<NodeOf<Self>>> {
                self.put_list_of(key, values)
            }

            fn $get_array(&self, key: &str) -> Result<Option<Box<[$ty]>>> {
                self.get_array_of::<$ty>(key)
            }

            fn $put_array(&self, key: &str, values: &[$ty]) -> Result<Option<NodeOf<Self>>> {
                self.put_array_of(key, values)
            }
        )*
    };
}

/// Keyed access to a tree of one representation.
///
/// Holders are handles: cloning one, or wrapping the same map node with
/// [`DataHolder::from_node`], yields an alias of the same storage. All mutating
/// methods therefore take `&self`.
///
/// # Examples
///
/// ```
/// use dataops::{DataHolder, NestedKeyMap};
///
/// let data = NestedKeyMap::new();
/// data.put_int("limits.max", 10)?;
/// data.put_string_list("limits.names", vec!["a".into(), "b".into()])?;
///
/// assert_eq!(data.get_long("limits.max")?, Some(10));
/// assert_eq!(data.get_int_list("limits.names")?, None);
/// assert!(data.contains_section("limits")?);
///
/// let limits = data.get_section("limits")?.unwrap();
/// limits.put_int("min", 1)?;
/// assert_eq!(data.get_int("limits.min")?, Some(1));
/// # Ok::<(), dataops::Error>(())
/// ```
pub trait DataHolder: Clone + Default + fmt::Debug {
    /// The representation's operations
    type Ops: TypeOps + 'static;

    fn ops(&self) -> &'static Self::Ops;

    /// Returns the value at `key`. Absent keys and empty values both read as `None`.
    fn get(&self, key: &str) -> Result<Option<NodeOf<Self>>>;

    /// Stores a node at `key`, creating intermediate maps, and returns the previous value.
    fn put_value(&self, key: &str, value: NodeOf<Self>) -> Result<Option<NodeOf<Self>>>;

    /// Removes `key` and returns the removed value.
    fn remove(&self, key: &str) -> Result<Option<NodeOf<Self>>>;

    fn contains(&self, key: &str) -> Result<bool>;

    /// Stores a node in the root map under `key` taken literally, dots included.
    /// The empty node is treated as in [`DataHolder::put_value`].
    fn put_root(&self, key: &str, value: NodeOf<Self>) -> Option<NodeOf<Self>>;

    /// Keys of the root map
    fn keys(&self) -> Vec<String>;

    /// Keys of the map stored at `key`, empty when there is no such map
    fn keys_at(&self, key: &str) -> Result<Vec<String>>;

    /// Number of entries in the root map
    fn size(&self) -> usize;

    fn clear(&self);

    /// The backing map as a node of the representation, aliasing the storage.
    fn as_node(&self) -> NodeOf<Self>;

    /// Wraps a map node, aliasing it. Returns `None` for anything but a map.
    fn from_node(node: &NodeOf<Self>) -> Option<Self>;

    /// Returns true if both holders share the same backing map
    fn ptr_eq(&self, other: &Self) -> bool;

    fn get_or(&self, key: &str, default: NodeOf<Self>) -> Result<NodeOf<Self>> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Returns true if the value at `key` reads as a `T`.
    fn contains_as<T: Scalar>(&self, key: &str) -> Result<bool> {
        Ok(self.get_as::<T>(key)?.is_some())
    }

    /// Returns true if `key` holds a map.
    fn contains_section(&self, key: &str) -> Result<bool> {
        Ok(self
            .get(key)?
            .is_some_and(|node| Self::from_node(&node).is_some()))
    }

    /// Stores a plain value at `key`.
    ///
    /// The value is expressed as an in-memory [`crate::Object`] and converted into
    /// this holder's representation. Holders are rejected with
    /// [`crate::Error::IllegalSectionAssignment`]; use [`DataHolder::put_section`].
    fn put<V: IntoObject>(&self, key: &str, value: V) -> Result<Option<NodeOf<Self>>> {
        let object = value.into_object()?;
        let node = MapOps::INSTANCE.convert_to(self.ops(), &object)?;
        self.put_value(key, node)
    }

    // typed scalars

    fn get_as<T: Scalar>(&self, key: &str) -> Result<Option<T>> {
        Ok(self.get(key)?.and_then(|node| T::read(self.ops(), &node)))
    }

    fn get_as_or<T: Scalar>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.get_as(key)?.unwrap_or(default))
    }

    fn put_as<T: Scalar>(&self, key: &str, value: T) -> Result<Option<NodeOf<Self>>> {
        self.put_value(key, T::create(self.ops(), value))
    }

    /// Reads a list of `T`; `None` unless every element reads as `T`.
    fn get_list_of<T: Scalar>(&self, key: &str) -> Result<Option<Vec<T>>> {
        Ok(self
            .get(key)?
            .and_then(|node| self.ops().get_list_of(&node)))
    }

    fn put_list_of<T: Scalar>(&self, key: &str, values: Vec<T>) -> Result<Option<NodeOf<Self>>> {
        self.put_value(key, self.ops().create_list_of(values))
    }

    fn get_array_of<T: Scalar>(&self, key: &str) -> Result<Option<Box<[T]>>> {
        Ok(self
            .get(key)?
            .and_then(|node| self.ops().get_array_of(&node)))
    }

    fn put_array_of<T: Scalar>(&self, key: &str, values: &[T]) -> Result<Option<NodeOf<Self>>> {
        self.put_value(key, self.ops().create_array_of(values))
    }

    typed_accessors! {
        bool => get_bool, get_bool_or, put_bool, get_bool_list, get_bool_list_or,
            put_bool_list, get_bool_array, put_bool_array;
        i8 => get_byte, get_byte_or, put_byte, get_byte_list, get_byte_list_or,
            put_byte_list, get_byte_array, put_byte_array;
        i16 => get_short, get_short_or, put_short, get_short_list, get_short_list_or,
            put_short_list, get_short_array, put_short_array;
        i32 => get_int, get_int_or, put_int, get_int_list, get_int_list_or,
            put_int_list, get_int_array, put_int_array;
        i64 => get_long, get_long_or, put_long, get_long_list, get_long_list_or,
            put_long_list, get_long_array, put_long_array;
        f32 => get_float, get_float_or, put_float, get_float_list, get_float_list_or,
            put_float_list, get_float_array, put_float_array;
        f64 => get_double, get_double_or, put_double, get_double_list, get_double_list_or,
            put_double_list, get_double_array, put_double_array;
    }

    // strings

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.get_as::<String>(key)
    }

    fn get_string_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .get_string(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    fn put_string(&self, key: &str, value: impl Into<String>) -> Result<Option<NodeOf<Self>>> {
        self.put_as(key, value.into())
    }

    fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.get_list_of::<String>(key)
    }

    fn get_string_list_or(&self, key: &str, default: Vec<String>) -> Result<Vec<String>> {
        Ok(self.get_string_list(key)?.unwrap_or(default))
    }

    fn put_string_list(&self, key: &str, values: Vec<String>) -> Result<Option<NodeOf<Self>>> {
        self.put_list_of(key, values)
    }

    fn get_string_array(&self, key: &str) -> Result<Option<Box<[String]>>> {
        self.get_array_of::<String>(key)
    }

    fn put_string_array(&self, key: &str, values: &[String]) -> Result<Option<NodeOf<Self>>> {
        self.put_array_of(key, values)
    }

    // raw nodes

    /// Returns the elements of the list at `key`, whatever their kinds.
    fn get_list(&self, key: &str) -> Result<Option<Vec<NodeOf<Self>>>> {
        Ok(self.get(key)?.and_then(|node| self.ops().get_list(&node)))
    }

    fn put_list(&self, key: &str, items: Vec<NodeOf<Self>>) -> Result<Option<NodeOf<Self>>> {
        self.put_value(key, self.ops().create_list(items))
    }

    /// Returns a copy of the map at `key`. Entries whose keys are not strings are skipped.
    fn get_map(&self, key: &str) -> Result<Option<IndexMap<String, NodeOf<Self>>>> {
        Ok(self.get(key)?.and_then(|node| node_to_map(self.ops(), &node)))
    }

    fn put_map(
        &self,
        key: &str,
        map: IndexMap<String, NodeOf<Self>>,
    ) -> Result<Option<NodeOf<Self>>> {
        self.put_value(key, map_to_node(self.ops(), map))
    }

    /// Reads a list of maps; `None` unless every element is a map.
    fn get_map_list(&self, key: &str) -> Result<Option<Vec<IndexMap<String, NodeOf<Self>>>>> {
        let ops = self.ops();
        Ok(self.get_list(key)?.and_then(|items| {
            items
                .iter()
                .map(|item| node_to_map(ops, item))
                .collect::<Option<Vec<_>>>()
        }))
    }

    fn put_map_list(
        &self,
        key: &str,
        maps: Vec<IndexMap<String, NodeOf<Self>>>,
    ) -> Result<Option<NodeOf<Self>>> {
        let ops = self.ops();
        let items = maps.into_iter().map(|map| map_to_node(ops, map)).collect();
        self.put_list(key, items)
    }

    // sections

    /// Returns the map at `key` as a holder aliasing it.
    fn get_section(&self, key: &str) -> Result<Option<Self>> {
        Ok(self.get(key)?.and_then(|node| Self::from_node(&node)))
    }

    /// Stores `section`'s backing map at `key`. The stored map stays aliased with `section`.
    ///
    /// Fails with [`Error::SectionCycle`] if the map that would contain `section`
    /// is reachable from it, which includes storing a holder inside itself.
    fn put_section(&self, key: &str, section: &Self) -> Result<Option<NodeOf<Self>>> {
        let node = section.as_node();
        check_acyclic(self, key, &node)?;
        self.put_value(key, node)
    }

    /// Reads a list of sections; `None` unless every element is a map.
    fn get_section_list(&self, key: &str) -> Result<Option<Vec<Self>>> {
        Ok(self.get_list(key)?.and_then(|items| {
            items
                .iter()
                .map(Self::from_node)
                .collect::<Option<Vec<_>>>()
        }))
    }

    fn put_section_list(&self, key: &str, sections: &[Self]) -> Result<Option<NodeOf<Self>>> {
        let items = sections.iter().map(DataHolder::as_node).collect();
        let node = self.ops().create_list(items);
        check_acyclic(self, key, &node)?;
        self.put_value(key, node)
    }

    /// A builder positioned on this holder.
    fn to_builder(&self) -> Builder<Self> {
        Builder::on(self.clone())
    }

    /// A builder positioned on the section at `key`, creating the section if needed.
    fn builder_at(&self, key: &str) -> Result<Builder<Self>> {
        let section = match self.get_section(key)? {
            Some(section) => section,
            None => {
                let section = Self::default();
                self.put_section(key, &section)?;
                section
            }
        };
        Ok(Builder::on(section))
    }

    /// Copies every top-level entry into `to`, converting between representations.
    ///
    /// Root keys are copied literally, so a key containing dots stays one key. Returns
    /// `to`. Values already present in `to` under other keys are kept.
    fn convert_to<H: DataHolder>(&self, to: H) -> Result<H> {
        let from = self.ops();
        let out = to.ops();
        let entries = from.get_map_entries(&self.as_node()).unwrap_or_default();
        for (key, value) in entries {
            let Some(key) = from.get_string(&key) else {
                continue;
            };
            let converted = from.convert_to(out, &value)?;
            to.put_root(&key, converted);
        }
        tracing::debug!(entries = to.size(), "Converted holder");
        Ok(to)
    }
}

/// Fails if storing `node` at `key` would make a map contain itself.
///
/// Every existing map on the way to `key`'s containing map is checked, since missing
/// maps are created below the deepest of them.
pub(crate) fn check_acyclic<H: DataHolder>(
    holder: &H,
    key: &str,
    node: &NodeOf<H>,
) -> Result<()> {
    let map_key = extract_map_key(key)?;
    let mut ancestors = vec![holder.clone()];
    let mut prefix = String::new();
    for segment in segments(map_key.path) {
        if segment.is_empty() {
            break;
        }
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(segment);
        match holder.get_section(&prefix)? {
            Some(section) => ancestors.push(section),
            None => break,
        }
    }

    let ops = holder.ops();
    if ancestors.iter().any(|ancestor| reaches(ops, node, ancestor)) {
        tracing::debug!(key, "Rejected section cycle");
        return Err(Error::SectionCycle {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Returns true if `target`'s backing map is `node` or is nested anywhere inside it.
fn reaches<H: DataHolder>(ops: &H::Ops, node: &NodeOf<H>, target: &H) -> bool {
    if let Some(map) = H::from_node(node) {
        if map.ptr_eq(target) {
            return true;
        }
        return ops
            .get_map_entries(node)
            .is_some_and(|entries| entries.iter().any(|(_, value)| reaches(ops, value, target)));
    }
    ops.get_list(node)
        .is_some_and(|items| items.iter().any(|item| reaches(ops, item, target)))
}

fn node_to_map<O: TypeOps>(ops: &O, node: &O::Node) -> Option<IndexMap<String, O::Node>> {
    let entries = ops.get_map_entries(node)?;
    Some(
        entries
            .into_iter()
            .filter_map(|(key, value)| ops.get_string(&key).map(|key| (key, value)))
            .collect(),
    )
}

fn map_to_node<O: TypeOps>(ops: &O, map: IndexMap<String, O::Node>) -> O::Node {
    ops.create_map(
        map.into_iter()
            .map(|(key, value)| (ops.create_string(&key), value))
            .collect(),
    )
}
