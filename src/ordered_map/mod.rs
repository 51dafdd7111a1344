//! Insertion-ordered map from string keys to values.
//!
//! The map keeps two structures in step:
//!
//! * `sequence`: every slot ever handed out, in insertion order. Deleting a key
//!   tombstones its slot (`None`) instead of shifting the tail, so no position
//!   is ever reused.
//! * `index`: key -> slot position for every live key.
//!
//! A key is in `index` iff its slot is occupied. Updating a live key writes
//! into its existing slot, so the order of live keys is always the order in
//! which they were first inserted (since their last deletion).

mod encode;
mod finite;

use std::{
    collections::HashMap,
    fmt,
    iter::{FromIterator, FusedIterator},
    mem, slice, vec,
};

use tracing::trace;

use crate::{map::SequentialMap, value::Value};

/// A single key/value pair as stored in the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new<K: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Clone)]
pub struct OrderedMap<V = Value> {
    sequence: Vec<Option<Entry<V>>>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sequence: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Build a map by setting every pair from left to right.
    ///
    /// A key repeated later in `pairs` overwrites the earlier value but keeps
    /// the earlier position.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    /// Set the value for `key`.
    ///
    /// A new key is appended after every live key. A live key keeps its
    /// position and only has its value replaced.
    pub fn set<K: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        let _ = self.replace(key.into(), value);
        self
    }

    fn replace(&mut self, key: String, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.sequence[slot].as_mut() {
                return Some(mem::replace(&mut entry.value, value));
            }
        }

        self.index.insert(key.clone(), self.sequence.len());
        self.sequence.push(Some(Entry { key, value }));
        None
    }

    fn entry(&self, key: &str) -> Option<&Entry<V>> {
        let slot = *self.index.get(key)?;
        self.sequence[slot].as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entry(key).map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.sequence[slot].as_mut().map(|entry| &mut entry.value)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key` and return its value.
    ///
    /// The slot is tombstoned, not reclaimed: setting the same key later
    /// appends it at the current end.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let slot = crate::some_or!(self.index.remove(key), return None);
        trace!(key, slot, "tombstoning ordered map entry");

        self.sequence[slot].take().map(|entry| entry.value)
    }

    /// Remove `key`. Deleting a key that is not live does nothing.
    pub fn delete(&mut self, key: &str) {
        let _ = self.remove(key);
    }

    /// Live keys in insertion order. Every call walks the map afresh.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    pub fn get_keys(&self) -> Vec<&str> {
        self.keys().collect()
    }

    /// Live (key, value) pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.sequence.iter(),
            remaining: self.index.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of slots left behind by deleted keys.
    pub fn tombstones(&self) -> usize {
        self.sequence.len() - self.index.len()
    }

    pub fn clear(&mut self) {
        self.sequence.clear();
        self.index.clear();
    }

    /// Drop tombstoned slots and renumber the live ones.
    ///
    /// The relative order of live keys is unchanged. Nothing calls this
    /// implicitly; without it the sequence only grows.
    pub fn compact(&mut self) {
        let before = self.sequence.len();
        self.sequence.retain(Option::is_some);

        for (slot, entry) in self.sequence.iter().enumerate() {
            if let Some(entry) = entry {
                if let Some(position) = self.index.get_mut(&entry.key) {
                    *position = slot;
                }
            }
        }

        trace!(before, after = self.sequence.len(), "compacted ordered map");
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Snapshot of the live pairs in insertion order.
    pub fn to_list(&self) -> Vec<Entry<V>> {
        self.iter()
            .map(|(key, value)| Entry::new(key, value.clone()))
            .collect()
    }

    /// Merge the live pairs of `other`, in `other`'s order, into this map.
    ///
    /// Keys only in `other` are appended. For keys already live here the
    /// existing value wins unless `overwrite` is set, in which case the value
    /// is replaced in place. Either way the key keeps its position here.
    pub fn append(&mut self, other: &OrderedMap<V>, overwrite: bool) -> &mut Self {
        let mut merged = 0;
        let mut skipped = 0;

        for (key, value) in other {
            if !overwrite && self.exists(key) {
                skipped += 1;
                continue;
            }

            self.set(key, value.clone());
            merged += 1;
        }

        trace!(merged, skipped, overwrite, "appended ordered map");
        self
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for OrderedMap<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<V> SequentialMap<V> for OrderedMap<V> {
    fn new() -> Self {
        OrderedMap::new()
    }

    fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.replace(key.to_string(), value)
    }

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        OrderedMap::remove(self, key)
    }

    fn ordered_keys(&self) -> Vec<&str> {
        self.get_keys()
    }

    fn len(&self) -> usize {
        OrderedMap::len(self)
    }
}

pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Option<Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(Option::as_ref)?;
        self.remaining -= 1;

        Some((entry.key.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

impl<V> FusedIterator for Keys<'_, V> {}

pub struct IntoIter<V> {
    slots: vec::IntoIter<Option<Entry<V>>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(|slot| slot)?;
        self.remaining -= 1;

        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.index.len(),
            slots: self.sequence.into_iter(),
        }
    }
}
