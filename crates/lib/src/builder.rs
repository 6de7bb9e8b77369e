//! Fluent construction of nested sections.

use crate::{DataHolder, IntoObject, Result};

/// Chains writes into a holder level by level.
///
/// The builder keeps the stack of sections it walked through. [`Builder::down`]
/// opens a fresh section under the current level, [`Builder::up`] returns to the
/// parent (or stays put at the top) and [`Builder::build`] hands back the top level.
///
/// ```
/// use dataops::{Builder, DataHolder, NestedKeyMap};
///
/// let map: NestedKeyMap = Builder::new()
///     .put("name", "demo")?
///     .down("server")?
///     .put("port", 8080)?
///     .up()
///     .put("debug", true)?
///     .build();
///
/// assert_eq!(map.get_int("server.port")?, Some(8080));
/// assert_eq!(map.get_bool("debug")?, Some(true));
/// # Ok::<(), dataops::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder<H: DataHolder> {
    levels: Vec<H>,
}

impl<H: DataHolder> Builder<H> {
    /// Starts a builder on a new, empty holder.
    pub fn new() -> Self {
        Self::on(H::default())
    }

    /// Starts a builder on an existing holder. Writes go straight into it.
    pub fn on(holder: H) -> Self {
        Self {
            levels: vec![holder],
        }
    }

    /// The holder of the current level
    pub fn current(&self) -> &H {
        // levels is never empty: `up` keeps the top level
        &self.levels[self.levels.len() - 1]
    }

    /// Number of sections below the top level
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Stores a plain value on the current level.
    pub fn put<V: IntoObject>(self, key: &str, value: V) -> Result<Self> {
        self.current().put(key, value)?;
        Ok(self)
    }

    /// Stores an existing section on the current level, aliased.
    pub fn section(self, key: &str, section: &H) -> Result<Self> {
        self.current().put_section(key, section)?;
        Ok(self)
    }

    /// Opens a new section at `name`, replacing whatever was stored there.
    pub fn down(mut self, name: &str) -> Result<Self> {
        let child = H::default();
        self.current().put_section(name, &child)?;
        self.levels.push(child);
        Ok(self)
    }

    /// Returns to the parent level; a no-op on the top level.
    pub fn up(mut self) -> Self {
        if self.levels.len() > 1 {
            self.levels.pop();
        }
        self
    }

    /// Returns the top level.
    pub fn build(self) -> H {
        self.levels.into_iter().next().unwrap_or_default()
    }
}

impl<H: DataHolder> Default for Builder<H> {
    fn default() -> Self {
        Self::new()
    }
}
