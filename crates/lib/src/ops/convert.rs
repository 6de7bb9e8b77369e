//! The conversion engine.
//!
//! [`convert`] rebuilds a node of one representation in another. It only talks to the
//! two [`TypeOps`] implementations and knows nothing about either concrete format.
//!
//! Dispatch runs from the most structured interpretation to the least: empty, map,
//! list, string, boolean, number. A node that matches none of these is reported as
//! [`Error::UnsupportedNodeKind`]; that means the source `TypeOps` does not describe
//! all of its own nodes, and the error is handed back to the caller untouched.

use super::TypeOps;
use crate::{Error, Number, Result};

/// Converts `input` from the representation of `from` into the representation of `to`.
///
/// Numbers keep their kind: a byte is created with `create_byte`, a double with
/// `create_double`, and so on. Representations that do not tag numeric kinds report
/// the narrowest kind holding the value (see [`crate::json::JsonOps`]).
///
/// ```
/// use dataops::{MapOps, Object, json::JsonOps, ops::convert};
///
/// let list = Object::List(vec![Object::Byte(1), Object::Bool(true), Object::from("x")]);
/// let json = convert(MapOps::INSTANCE, JsonOps::INSTANCE, &list)?;
/// assert_eq!(json.to_string(), r#"[1,true,"x"]"#);
///
/// let back = convert(JsonOps::INSTANCE, MapOps::INSTANCE, &json)?;
/// assert_eq!(back, list);
/// # Ok::<(), dataops::Error>(())
/// ```
pub fn convert<I, O>(from: &I, to: &O, input: &I::Node) -> Result<O::Node>
where
    I: TypeOps,
    O: TypeOps,
{
    if from.is_empty_value(input) {
        return Ok(to.empty());
    }

    if let Some(entries) = from.get_map_entries(input) {
        let entries = entries
            .iter()
            .map(|(key, value)| Ok((convert(from, to, key)?, convert(from, to, value)?)))
            .collect::<Result<Vec<_>>>()?;
        return Ok(to.create_map(entries));
    }

    if let Some(items) = from.get_list(input) {
        let items = items
            .iter()
            .map(|item| convert(from, to, item))
            .collect::<Result<Vec<_>>>()?;
        return Ok(to.create_list(items));
    }

    if let Some(value) = from.get_string(input) {
        return Ok(to.create_string(&value));
    }

    if let Some(value) = from.get_bool_value(input) {
        return Ok(to.create_boolean(value));
    }

    if let Some(number) = from.get_number_value(input) {
        return Ok(create_number(to, number));
    }

    tracing::error!(node = ?input, "Conversion met a node its representation does not describe");
    Err(Error::UnsupportedNodeKind {
        node: format!("{input:?}"),
    })
}

/// Creates `number` in `to` with the constructor matching its kind.
fn create_number<O: TypeOps>(to: &O, number: Number) -> O::Node {
    match number {
        Number::Byte(v) => to.create_byte(v),
        Number::Short(v) => to.create_short(v),
        Number::Int(v) => to.create_int(v),
        Number::Long(v) => to.create_long(v),
        Number::Float(v) => to.create_float(v),
        Number::Double(v) => to.create_double(v),
    }
}
