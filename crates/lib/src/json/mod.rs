//! The JSON document representation.
//!
//! # Core Types
//!
//! - [`JsonElement`] - A node of the JSON tree
//! - [`JsonObject`] - Shared handle to a JSON object
//! - [`JsonOps`] - [`crate::TypeOps`] over [`JsonElement`]
//! - [`JsonData`] - [`crate::DataHolder`] over a JSON object
//!
//! Text I/O lives in [`io`].

pub mod data;
pub mod element;
pub mod io;
pub mod ops;

pub use data::JsonData;
pub use element::{JsonElement, JsonObject};
pub use io::WriterOptions;
pub use ops::JsonOps;
