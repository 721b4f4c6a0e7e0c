use core::mem;
use core::slice;

use rustc_hash::FxHashMap;

use crate::array_key::ArrayKey;

/// Backing storage for `ArrayMap`.
///
/// `entries` holds the key-value pairs in insertion order and is the single
/// source of truth for both order and contents. `index` maps every stored
/// key to its current position in `entries`; each mutating method restores
/// this before returning.
#[derive(Clone)]
pub(crate) struct RawArrayMap<V> {
    entries: Vec<(ArrayKey, V)>,
    index: FxHashMap<ArrayKey, usize>,
}

impl<V> RawArrayMap<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub(crate) fn position_of(&self, key: &ArrayKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn contains_key(&self, key: &ArrayKey) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn get(&self, key: &ArrayKey) -> Option<&V> {
        self.position_of(key).map(|pos| &self.entries[pos].1)
    }

    pub(crate) fn get_mut(&mut self, key: &ArrayKey) -> Option<&mut V> {
        let pos = self.position_of(key)?;
        Some(&mut self.entries[pos].1)
    }

    pub(crate) fn get_key_value(&self, key: &ArrayKey) -> Option<(&ArrayKey, &V)> {
        self.position_of(key).map(|pos| {
            let (k, v) = &self.entries[pos];
            (k, v)
        })
    }

    pub(crate) fn get_index(&self, pos: usize) -> Option<(&ArrayKey, &V)> {
        self.entries.get(pos).map(|(k, v)| (k, v))
    }

    pub(crate) fn get_index_mut(&mut self, pos: usize) -> Option<(&ArrayKey, &mut V)> {
        self.entries.get_mut(pos).map(|(k, v)| (&*k, v))
    }

    /// Inserts or overwrites. An existing key keeps its position and the old
    /// value is returned; a new key is appended at the end.
    pub(crate) fn insert(&mut self, key: ArrayKey, value: V) -> Option<V> {
        if let Some(pos) = self.position_of(&key) {
            Some(mem::replace(&mut self.entries[pos].1, value))
        } else {
            self.append_new(key, value);
            None
        }
    }

    /// Appends an entry whose key is known to be absent and returns a
    /// mutable reference to the stored value.
    pub(crate) fn append_new(&mut self, key: ArrayKey, value: V) -> &mut V {
        debug_assert!(!self.index.contains_key(&key));
        let pos = self.entries.len();
        self.index.insert(key.clone(), pos);
        self.entries.push((key, value));
        &mut self.entries[pos].1
    }

    /// Appends a value under the next sequential integer key.
    ///
    /// The caller is responsible for the list-shape precondition; on a
    /// list-shaped map `len()` is exactly one past the largest integer key.
    pub(crate) fn append_value(&mut self, value: V) {
        #[allow(clippy::cast_possible_wrap)]
        let key = ArrayKey::Int(self.entries.len() as i64);
        self.append_new(key, value);
    }

    /// Removes the entry for `key`, preserving the order of the rest.
    pub(crate) fn remove(&mut self, key: &ArrayKey) -> Option<(ArrayKey, V)> {
        let pos = self.index.remove(key)?;
        Some(self.remove_shifted(pos))
    }

    /// Removes the entry at `pos`, preserving the order of the rest.
    pub(crate) fn remove_index(&mut self, pos: usize) -> (ArrayKey, V) {
        self.index.remove(&self.entries[pos].0).expect("index entry for stored key");
        self.remove_shifted(pos)
    }

    fn remove_shifted(&mut self, pos: usize) -> (ArrayKey, V) {
        let entry = self.entries.remove(pos);
        // Entries after `pos` moved down one slot.
        for (key, _) in &self.entries[pos..] {
            let stored = self.index.get_mut(key).expect("index entry for stored key");
            *stored -= 1;
        }
        entry
    }

    /// Removes and returns the last entry.
    pub(crate) fn pop(&mut self) -> Option<(ArrayKey, V)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key).expect("index entry for stored key");
        Some((key, value))
    }

    /// True iff the keys are exactly `Int(0)..Int(n)` in order.
    pub(crate) fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(pos, (key, _))| key.as_int() == i64::try_from(pos).ok())
    }

    /// Stable in-place sort of the entries by value; key association is
    /// untouched.
    pub(crate) fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&V, &V) -> core::cmp::Ordering,
    {
        self.entries.sort_by(|a, b| cmp(&a.1, &b.1));
        // Same key set, new positions.
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            let stored = self.index.get_mut(key).expect("index entry for stored key");
            *stored = pos;
        }
    }

    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ArrayKey, &mut V) -> bool,
    {
        self.entries.retain_mut(|(k, v)| keep(k, v));
        self.index.clear();
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), pos);
        }
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, (ArrayKey, V)> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, (ArrayKey, V)> {
        self.entries.iter_mut()
    }

    pub(crate) fn as_entries(&self) -> &[(ArrayKey, V)] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<(ArrayKey, V)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The index must mirror `entries` exactly after any operation mix.
    fn check_invariant(raw: &RawArrayMap<i64>) {
        assert_eq!(raw.index.len(), raw.entries.len());
        for (pos, (key, _)) in raw.entries.iter().enumerate() {
            assert_eq!(raw.index.get(key), Some(&pos));
        }
    }

    fn key_strategy() -> impl Strategy<Value = ArrayKey> {
        prop_oneof![
            (-8i64..8).prop_map(ArrayKey::Int),
            "[a-e]{1,2}".prop_map(ArrayKey::Str),
        ]
    }

    proptest! {
        #[test]
        fn index_tracks_entries(ops in proptest::collection::vec((key_strategy(), any::<i64>(), 0u8..4), 0..200)) {
            let mut raw = RawArrayMap::new();
            for (key, value, op) in ops {
                match op {
                    0 | 1 => {
                        raw.insert(key, value);
                    }
                    2 => {
                        raw.remove(&key);
                    }
                    _ => {
                        raw.sort_by(i64::cmp);
                    }
                }
                check_invariant(&raw);
            }
        }
    }
}
