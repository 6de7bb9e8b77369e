//!
//! dataops: format-independent operations over nested tree data.
//! This library provides one capability contract for tree representations and the
//! generic algorithms that are written once against it.
//!
//! ## Core Concepts
//!
//! * **Representations**: a concrete backing format for tree data. Two ship with the crate:
//!     * the in-memory object tree (`object::Object`, addressed through `nested::NestedKeyMap`),
//!     * the JSON document tree (`json::JsonElement`, addressed through `json::JsonData`).
//! * **TypeOps (`ops::TypeOps`)**: the minimal set of primitives a representation supplies
//!   (create/inspect numbers, strings, lists, maps). Everything richer is derived from it.
//! * **Conversion (`ops::convert`)**: a depth-first walk that rebuilds a tree from one
//!   representation in another, using only the two `TypeOps` implementations.
//! * **Data holders (`holder::DataHolder`)**: the keyed CRUD surface. Keys are flat
//!   dot-separated paths (`"server.limits.max"`), intermediate maps are created on write.
//! * **Sections**: a nested map exposed as its own holder. Sections alias the parent's
//!   storage, so writes through a section are visible through the parent.
//!
//! ```
//! use dataops::{DataHolder, NestedKeyMap, json::JsonData};
//!
//! let config = NestedKeyMap::new();
//! config.put_int("server.port", 8080)?;
//! config.put_string("server.host", "localhost")?;
//!
//! let json = config.convert_to(JsonData::new())?;
//! assert_eq!(json.get_int("server.port")?, Some(8080));
//! # Ok::<(), dataops::Error>(())
//! ```

pub mod builder;
pub mod holder;
pub mod json;
pub mod nested;
pub mod number;
pub mod object;
pub mod ops;
pub mod path;

pub use builder::Builder;
pub use holder::{DataHolder, NodeOf};
pub use nested::NestedKeyMap;
pub use number::Number;
pub use object::{IntoObject, Object, ObjectMap};
pub use ops::{MapOps, Scalar, TypeOps};

/// Result type used throughout the dataops library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dataops library.
///
/// Type mismatches are not errors: typed getters fall back to `None` or the
/// caller's default. The variants here are structural problems that the caller
/// (or the author of a `TypeOps` implementation) is expected to fix.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An empty key was passed to a keyed operation
    #[error("Invalid key '{key}': keys must not be empty")]
    InvalidKey { key: String },

    /// Path creation met an existing value that is not a map
    #[error("Cannot create path '{path}': segment '{segment}' holds a non-map value")]
    PathConflict { path: String, segment: String },

    /// A holder was passed to the generic value setter
    #[error("Cannot store {holder} as a plain value, use {setter} instead")]
    IllegalSectionAssignment {
        holder: &'static str,
        setter: &'static str,
    },

    /// Storing a section would make a map contain itself
    #[error("Cannot store section at '{key}': the section contains its own destination")]
    SectionCycle { key: String },

    /// The conversion engine met a node that its representation does not describe
    #[error("Don't know how to convert {node}")]
    UnsupportedNodeKind { node: String },

    /// A JSON document whose root is not an object
    #[error("Expected a JSON object at the document root, found {found}")]
    NotAnObject { found: &'static str },
}

impl Error {
    /// Get the originating area for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::InvalidKey { .. } | Error::PathConflict { .. } => "path",
            Error::IllegalSectionAssignment { .. } | Error::SectionCycle { .. } => "holder",
            Error::UnsupportedNodeKind { .. } => "ops",
            Error::NotAnObject { .. } => "json",
        }
    }

    /// Check if this error was caused by an empty key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey { .. })
    }

    /// Check if this error is a path resolution conflict.
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, Error::PathConflict { .. })
    }

    /// Check if this error comes from using the wrong setter for a section.
    pub fn is_illegal_section_assignment(&self) -> bool {
        matches!(self, Error::IllegalSectionAssignment { .. })
    }

    /// Check if this error was raised to keep a section from containing itself.
    pub fn is_section_cycle(&self) -> bool {
        matches!(self, Error::SectionCycle { .. })
    }

    /// Check if this error indicates a broken `TypeOps` implementation.
    pub fn is_unsupported_node(&self) -> bool {
        matches!(self, Error::UnsupportedNodeKind { .. })
    }

    /// Check if this error is a misuse of the keyed API rather than a data problem.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidKey { .. }
                | Error::PathConflict { .. }
                | Error::IllegalSectionAssignment { .. }
                | Error::SectionCycle { .. }
                | Error::UnsupportedNodeKind { .. }
        )
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error was raised while reading or writing JSON text.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_) | Error::NotAnObject { .. })
    }
}
