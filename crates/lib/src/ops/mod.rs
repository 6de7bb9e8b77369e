//! The capability contract shared by every tree representation.
//!
//! A representation takes part by implementing [`TypeOps`] on a stateless unit struct.
//! Only a handful of primitives are required: building and inspecting numbers,
//! strings, lists and maps, plus removing a map key. Everything else in this module
//! (typed scalar helpers, list-of-kind helpers, keyed map access, conversion) is
//! derived from those primitives and works the same for every representation.
//!
//! # Core Types
//!
//! - [`TypeOps`] - The contract itself
//! - [`Scalar`] - Scalar kinds usable with the generic list helpers
//! - [`MapOps`] - The in-memory object representation
//! - [`convert`] - The conversion engine
//!
//! Representations shipped with the crate:
//!
//! | representation | ops | node |
//! |---|---|---|
//! | in-memory objects | [`MapOps`] | [`crate::Object`] |
//! | JSON tree | [`crate::json::JsonOps`] | [`crate::json::JsonElement`] |

use std::fmt;

use crate::{Number, Result};

pub mod convert;
pub mod map;
pub mod scalar;

pub use convert::convert;
pub use map::MapOps;
pub use scalar::Scalar;

/// Operations a representation provides over its own node type.
///
/// Implementations own no data. Nodes are passed in and new nodes are returned;
/// map helpers such as [`TypeOps::set`] rebuild the map instead of mutating it, so a
/// representation is not required to support in-place updates.
///
/// # Examples
///
/// ```
/// use dataops::{MapOps, TypeOps};
///
/// let ops = MapOps::INSTANCE;
/// let map = ops.set(&ops.empty_map(), "port", ops.create_int(8080));
/// assert_eq!(ops.get(&map, "port").and_then(|n| ops.get_int(&n)), Some(8080));
///
/// let list = ops.create_list_of(vec![1_i32, 2, 3]);
/// assert_eq!(ops.get_list_of::<i64>(&list), Some(vec![1, 2, 3]));
/// assert_eq!(ops.get_list_of::<String>(&list), None);
/// ```
pub trait TypeOps {
    /// The node type of this representation
    type Node: Clone + PartialEq + fmt::Debug;

    /// The representation's canonical "no value" node.
    fn empty(&self) -> Self::Node;

    fn create_numeric(&self, value: Number) -> Self::Node;

    /// Returns the number stored in `input`, with the kind the representation knows about.
    fn get_number_value(&self, input: &Self::Node) -> Option<Number>;

    fn create_string(&self, value: &str) -> Self::Node;

    fn get_string(&self, input: &Self::Node) -> Option<String>;

    /// Builds a map node from key/value pairs. Keys are nodes of this representation.
    fn create_map(&self, entries: Vec<(Self::Node, Self::Node)>) -> Self::Node;

    /// Returns the entries of a map node, or `None` if `input` is not a map.
    fn get_map_entries(&self, input: &Self::Node) -> Option<Vec<(Self::Node, Self::Node)>>;

    fn create_list(&self, items: Vec<Self::Node>) -> Self::Node;

    /// Returns the elements of a list node, or `None` if `input` is not a list.
    fn get_list(&self, input: &Self::Node) -> Option<Vec<Self::Node>>;

    /// Returns a map node without `key`. Non-map inputs are returned unchanged.
    fn remove(&self, input: &Self::Node, key: &str) -> Self::Node;

    /// Converts `input` into the representation described by `out`.
    ///
    /// See [`convert`] for the algorithm.
    fn convert_to<O: TypeOps>(&self, out: &O, input: &Self::Node) -> Result<O::Node>
    where
        Self: Sized,
    {
        convert(self, out, input)
    }

    fn is_empty_value(&self, input: &Self::Node) -> bool {
        *input == self.empty()
    }

    fn empty_map(&self) -> Self::Node {
        self.create_map(Vec::new())
    }

    fn empty_list(&self) -> Self::Node {
        self.create_list(Vec::new())
    }

    fn get_number_value_or(&self, input: &Self::Node, default: Number) -> Number {
        self.get_number_value(input).unwrap_or(default)
    }

    // byte

    fn create_byte(&self, value: i8) -> Self::Node {
        self.create_numeric(Number::Byte(value))
    }

    fn get_byte(&self, input: &Self::Node) -> Option<i8> {
        self.get_number_value(input).map(|n| n.as_i8())
    }

    // short

    fn create_short(&self, value: i16) -> Self::Node {
        self.create_numeric(Number::Short(value))
    }

    fn get_short(&self, input: &Self::Node) -> Option<i16> {
        self.get_number_value(input).map(|n| n.as_i16())
    }

    // int

    fn create_int(&self, value: i32) -> Self::Node {
        self.create_numeric(Number::Int(value))
    }

    fn get_int(&self, input: &Self::Node) -> Option<i32> {
        self.get_number_value(input).map(|n| n.as_i32())
    }

    // long

    fn create_long(&self, value: i64) -> Self::Node {
        self.create_numeric(Number::Long(value))
    }

    fn get_long(&self, input: &Self::Node) -> Option<i64> {
        self.get_number_value(input).map(|n| n.as_i64())
    }

    // float

    fn create_float(&self, value: f32) -> Self::Node {
        self.create_numeric(Number::Float(value))
    }

    fn get_float(&self, input: &Self::Node) -> Option<f32> {
        self.get_number_value(input).map(|n| n.as_f32())
    }

    // double

    fn create_double(&self, value: f64) -> Self::Node {
        self.create_numeric(Number::Double(value))
    }

    fn get_double(&self, input: &Self::Node) -> Option<f64> {
        self.get_number_value(input).map(|n| n.as_f64())
    }

    // boolean

    /// Creates a boolean node. Encoded as byte `1`/`0` unless overridden.
    fn create_boolean(&self, value: bool) -> Self::Node {
        self.create_byte(if value { 1 } else { 0 })
    }

    /// Returns the value of a native boolean node.
    ///
    /// Representations without a boolean node keep the default, which makes the
    /// conversion engine treat their byte-encoded booleans as numbers.
    fn get_bool_value(&self, _input: &Self::Node) -> Option<bool> {
        None
    }

    /// Reads a boolean from a native boolean node or from any number (non-zero byte value).
    fn get_boolean(&self, input: &Self::Node) -> Option<bool> {
        self.get_bool_value(input)
            .or_else(|| self.get_number_value(input).map(|n| n.as_i8() != 0))
    }

    // lists of scalars

    /// Reads every element of a list as `T`.
    ///
    /// Returns `None` if `input` is not a list or if any single element is not a `T`;
    /// a partial list is never returned.
    fn get_list_of<T: Scalar>(&self, input: &Self::Node) -> Option<Vec<T>>
    where
        Self: Sized,
    {
        self.get_list(input)?
            .iter()
            .map(|item| T::read(self, item))
            .collect()
    }

    fn create_list_of<T: Scalar>(&self, values: Vec<T>) -> Self::Node
    where
        Self: Sized,
    {
        self.create_list(
            values
                .into_iter()
                .map(|value| T::create(self, value))
                .collect(),
        )
    }

    /// Same as [`TypeOps::get_list_of`], as a fixed-size array.
    fn get_array_of<T: Scalar>(&self, input: &Self::Node) -> Option<Box<[T]>>
    where
        Self: Sized,
    {
        self.get_list_of(input).map(Vec::into_boxed_slice)
    }

    fn create_array_of<T: Scalar>(&self, values: &[T]) -> Self::Node
    where
        Self: Sized,
    {
        self.create_list(
            values
                .iter()
                .map(|value| T::create(self, value.clone()))
                .collect(),
        )
    }

    // keyed map access

    /// Returns the value stored at `key` in a map node. Explicit empty values count as absent.
    fn get(&self, input: &Self::Node, key: &str) -> Option<Self::Node> {
        self.get_map_entries(input)?
            .into_iter()
            .find(|(k, _)| self.get_string(k).as_deref() == Some(key))
            .map(|(_, v)| v)
            .filter(|v| !self.is_empty_value(v))
    }

    /// Returns a map node with `key` set to `value`.
    ///
    /// The map is rebuilt from its entries. An empty input starts a new map; any
    /// other non-map input is returned unchanged.
    fn set(&self, input: &Self::Node, key: &str, value: Self::Node) -> Self::Node {
        let mut entries = match self.get_map_entries(input) {
            Some(entries) => entries,
            None if self.is_empty_value(input) => Vec::new(),
            None => return input.clone(),
        };
        match entries
            .iter_mut()
            .find(|(k, _)| self.get_string(k).as_deref() == Some(key))
        {
            Some(entry) => entry.1 = value,
            None => entries.push((self.create_string(key), value)),
        }
        self.create_map(entries)
    }

    /// Applies `f` to the value at `key` and writes the result back. No-op when `key` is absent.
    fn update<F>(&self, input: &Self::Node, key: &str, f: F) -> Self::Node
    where
        F: FnOnce(Self::Node) -> Self::Node,
    {
        match self.get(input, key) {
            Some(value) => self.set(input, key, f(value)),
            None => input.clone(),
        }
    }
}
