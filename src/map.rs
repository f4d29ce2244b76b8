//! Ordered mapping type for [`Value::Mapping`](crate::Value::Mapping).
//!
//! [`Mapping`] is a wrapper around [`IndexMap`]. Entries are encoded in the order they
//! were inserted; the encoder itself makes no further ordering promise, so callers that
//! need a canonical document should build mappings in the order they want or call
//! [`Mapping::sort_keys`] first.
//!
//! ## Examples
//!
//! ```rust
//! use anyxml::{Mapping, Value};
//!
//! let mut map = Mapping::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::Value;

/// An ordered map of string keys to values.
///
/// Keys are raw strings; they are only turned into legal element names when encoded.
///
/// # Examples
///
/// ```rust
/// use anyxml::{Mapping, Value};
///
/// let mut map = Mapping::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping(IndexMap<String, Value>);

impl Mapping {
    /// Creates an empty `Mapping`.
    #[must_use]
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the key keeps
    /// its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::{Mapping, Value};
    ///
    /// let mut map = Mapping::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the only entry of a single-key map.
    ///
    /// Single-key mappings inside sequences contribute their key as the element tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::{Mapping, Value};
    ///
    /// let mut map = Mapping::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// assert_eq!(map.single_entry().map(|(k, _)| k.as_str()), Some("a"));
    ///
    /// map.insert("b".to_string(), Value::from(2));
    /// assert!(map.single_entry().is_none());
    /// ```
    #[must_use]
    pub fn single_entry(&self) -> Option<(&String, &Value)> {
        if self.0.len() == 1 {
            self.0.first()
        } else {
            None
        }
    }

    /// Sorts the entries by key so encoding produces a canonical order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::{Mapping, Value};
    ///
    /// let mut map = Mapping::new();
    /// map.insert("b".to_string(), Value::from(2));
    /// map.insert("a".to_string(), Value::from(1));
    /// map.sort_keys();
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn sort_keys(&mut self) {
        self.0.sort_keys();
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Mapping {
    fn from(map: HashMap<String, Value>) -> Self {
        Mapping(map.into_iter().collect())
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Mapping(IndexMap::from_iter(iter))
    }
}
