//! Reading and writing JSON documents.
//!
//! A document is a [`JsonData`]: its root must be a JSON object. Text is parsed with
//! serde_json and written either compact or pretty-printed as [`WriterOptions`] asks.

use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{JsonData, JsonElement};
use crate::{DataHolder, Error, Result};

/// How JSON text is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    indent: String,
}

impl WriterOptions {
    /// Everything on one line
    pub fn minimized() -> Self {
        Self {
            indent: String::new(),
        }
    }

    /// Two-space indentation
    pub fn normal() -> Self {
        Self::with_indent(2)
    }

    /// One tab per level
    pub fn tabs() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }

    /// `spaces` spaces per level; zero means minimized
    pub fn with_indent(spaces: usize) -> Self {
        Self {
            indent: " ".repeat(spaces),
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.indent.is_empty()
    }

    /// The indentation unit
    pub fn indent(&self) -> &str {
        &self.indent
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::normal()
    }
}

/// Parses a document. The root must be an object.
pub fn from_str(text: &str) -> Result<JsonData> {
    let element: JsonElement = serde_json::from_str(text)?;
    match element {
        JsonElement::Object(obj) => Ok(JsonData::from_raw(obj)),
        other => Err(Error::NotAnObject {
            found: other.type_name(),
        }),
    }
}

/// Formats a document.
pub fn to_string(data: &JsonData, options: &WriterOptions) -> Result<String> {
    let node = data.as_node();
    if options.is_minimized() {
        return Ok(serde_json::to_string(&node)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(options.indent().as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    node.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Reads the document stored at `path`.
pub fn read(path: impl AsRef<Path>) -> Result<JsonData> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let data = from_str(&text)?;
    tracing::debug!(path = %path.display(), members = data.size(), "Read JSON document");
    Ok(data)
}

/// Writes `data` to `path`, creating missing parent directories.
pub fn write(data: &JsonData, path: impl AsRef<Path>, options: &WriterOptions) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let text = to_string(data, options)?;
    fs::write(path, text)?;
    tracing::debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}

impl std::str::FromStr for JsonData {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        from_str(text)
    }
}
