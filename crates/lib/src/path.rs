//! Flat dot-separated keys.
//!
//! A key such as `"server.limits.max"` addresses the entry `max` inside the map found
//! by walking `server` then `limits` from the root. Holders split the key once at the
//! **last** dot with [`extract_map_key`] and then resolve the containing map segment by
//! segment with their own container type (see `NestedKeyMap::resolve_map` and
//! `JsonData::resolve_map`). Both follow the same rules:
//!
//! - an empty segment stops the walk and yields the map reached so far, which is how
//!   a key without a dot addresses the root map;
//! - an existing map is descended into;
//! - an existing non-map value ends the walk: reads see "not found", creating writes
//!   fail with [`Error::PathConflict`] instead of replacing the value;
//! - a missing segment is created only when the caller asked for creation.

use crate::{Error, Result};

/// A key split into the path of its containing map and the key inside that map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapKey<'a> {
    /// Dot-separated path to the containing map, empty for the root map
    pub path: &'a str,
    /// Key inside the containing map
    pub local: &'a str,
}

/// Rejects the empty key.
pub fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Splits `key` at its last dot.
///
/// ```
/// # use dataops::path::{extract_map_key, MapKey};
/// assert_eq!(extract_map_key("a.b.c")?, MapKey { path: "a.b", local: "c" });
/// assert_eq!(extract_map_key("a")?, MapKey { path: "", local: "a" });
/// assert!(extract_map_key("").is_err());
/// # Ok::<(), dataops::Error>(())
/// ```
pub fn extract_map_key(key: &str) -> Result<MapKey<'_>> {
    check_key(key)?;
    Ok(match key.rfind('.') {
        Some(i) => MapKey {
            path: &key[..i],
            local: &key[i + 1..],
        },
        None => MapKey {
            path: "",
            local: key,
        },
    })
}

/// Splits a map path on literal dots.
///
/// Trailing empty segments are dropped, so `"a."` walks only `a`. Empty segments
/// elsewhere are kept; resolution stops at the first one.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    // "" still yields one empty segment, which addresses the root map
    path.trim_end_matches('.').split('.')
}
