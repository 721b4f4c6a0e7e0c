use core::fmt;
use core::mem;

use crate::array_key::ArrayKey;
use crate::raw::RawArrayMap;

/// A view into a single entry in a map, which may either be vacant or
/// occupied.
///
/// This `enum` is constructed from the [`entry`] method on
/// [`crate::ArrayMap`].
///
/// # Examples
///
/// ```
/// use arraymap::ArrayMap;
/// use arraymap::array_map::Entry;
///
/// let mut map = ArrayMap::new();
///
/// match map.entry("oz") {
///     Entry::Vacant(v) => {
///         v.insert(1);
///     }
///     Entry::Occupied(mut o) => {
///         *o.get_mut() += 1;
///     }
/// }
/// assert_eq!(map["oz"], 1);
/// ```
///
/// [`entry`]: crate::ArrayMap::entry
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),

    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<V: fmt::Debug> fmt::Debug for Entry<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Vacant(v) => f.debug_tuple("Entry").field(v).finish(),
            Entry::Occupied(o) => f.debug_tuple("Entry").field(o).finish(),
        }
    }
}

/// A view into a vacant entry in an `ArrayMap`.
/// It is part of the [`Entry`] enum.
///
/// # Examples
///
/// ```
/// use arraymap::ArrayMap;
/// use arraymap::array_map::Entry;
///
/// let mut map = ArrayMap::new();
///
/// if let Entry::Vacant(v) = map.entry("oz") {
///     v.insert(5);
/// }
/// assert_eq!(map["oz"], 5);
/// ```
pub struct VacantEntry<'a, V> {
    pub(crate) key: ArrayKey,
    pub(crate) raw: &'a mut RawArrayMap<V>,
}

impl<V> fmt::Debug for VacantEntry<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VacantEntry").field("key", &self.key).finish()
    }
}

/// A view into an occupied entry in an `ArrayMap`.
/// It is part of the [`Entry`] enum.
///
/// # Examples
///
/// ```
/// use arraymap::ArrayMap;
/// use arraymap::array_map::Entry;
///
/// let mut map = ArrayMap::new();
/// map.set("oz", 1);
///
/// if let Entry::Occupied(mut o) = map.entry("oz") {
///     *o.get_mut() += 1;
/// }
/// assert_eq!(map["oz"], 2);
/// ```
pub struct OccupiedEntry<'a, V> {
    pub(crate) pos: usize,
    pub(crate) raw: &'a mut RawArrayMap<V>,
}

impl<V: fmt::Debug> fmt::Debug for OccupiedEntry<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry").field("key", self.key()).field("value", self.get()).finish()
    }
}

impl<'a, V> Entry<'a, V> {
    /// Ensures a value is in the entry by inserting the default if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// A vacant entry is appended at the end of the map, like
    /// [`set`](crate::ArrayMap::set) with a new key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// assert_eq!(map["poneyland"], 12);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// default function if empty, and returns a mutable reference to the
    /// value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map: ArrayMap<String> = ArrayMap::new();
    /// let s = "hoho".to_string();
    ///
    /// map.entry("poneyland").or_insert_with(|| s);
    ///
    /// assert_eq!(map["poneyland"], "hoho");
    /// ```
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting, if empty, the result
    /// of the default function, which gets a reference to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    ///
    /// map.entry("poneyland").or_insert_with_key(|key| key.to_string().len());
    ///
    /// assert_eq!(map["poneyland"], 9);
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&ArrayKey) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => {
                let value = default(&v.key);
                v.insert(value)
            }
        }
    }

    /// Returns a reference to this entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// assert_eq!(map.entry("poneyland").key(), &ArrayKey::from("poneyland"));
    /// ```
    #[must_use]
    pub fn key(&self) -> &ArrayKey {
        match self {
            Entry::Occupied(o) => o.key(),
            Entry::Vacant(v) => v.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map["poneyland"], 42);
    ///
    /// map.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map["poneyland"], 43);
    /// ```
    #[allow(clippy::return_self_not_must_use)]
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(ref mut o) = self {
            f(o.get_mut());
        }
        self
    }
}

impl<'a, V: Default> Entry<'a, V> {
    /// Ensures a value is in the entry by inserting the default value if
    /// empty, and returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map: ArrayMap<Option<usize>> = ArrayMap::new();
    /// map.entry("poneyland").or_default();
    ///
    /// assert_eq!(map["poneyland"], None);
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(V::default()),
        }
    }
}

impl<'a, V> VacantEntry<'a, V> {
    /// Gets a reference to the key that would be used when inserting a
    /// value through the `VacantEntry`.
    #[must_use]
    pub fn key(&self) -> &ArrayKey {
        &self.key
    }

    /// Take ownership of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    ///
    /// if let Entry::Vacant(v) = map.entry("poneyland") {
    ///     assert_eq!(v.into_key(), ArrayKey::from("poneyland"));
    /// }
    /// ```
    #[must_use]
    pub fn into_key(self) -> ArrayKey {
        self.key
    }

    /// Sets the value of the entry with the `VacantEntry`'s key, appending
    /// it at the end of the map, and returns a mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<u32> = ArrayMap::new();
    ///
    /// if let Entry::Vacant(o) = map.entry("poneyland") {
    ///     o.insert(37);
    /// }
    /// assert_eq!(map["poneyland"], 37);
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        self.raw.append_new(self.key, value)
    }
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the key in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    /// assert_eq!(map.entry("poneyland").key(), &ArrayKey::from("poneyland"));
    /// ```
    #[must_use]
    pub fn key(&self) -> &ArrayKey {
        self.raw.get_index(self.pos).expect("occupied entry position").0
    }

    /// Take ownership of the key and value from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// if let Entry::Occupied(o) = map.entry("poneyland") {
    ///     o.remove_entry();
    /// }
    /// assert!(!map.contains_key("poneyland"));
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn remove_entry(self) -> (ArrayKey, V) {
        self.raw.remove_index(self.pos)
    }

    /// Gets a reference to the value in the entry.
    #[must_use]
    pub fn get(&self) -> &V {
        self.raw.get_index(self.pos).expect("occupied entry position").1
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// If you need a reference that may outlive the destruction of the
    /// `Entry` value, see [`into_mut`](OccupiedEntry::into_mut).
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// if let Entry::Occupied(mut o) = map.entry("poneyland") {
    ///     *o.get_mut() += 10;
    ///     *o.get_mut() += 2;
    /// }
    /// assert_eq!(map["poneyland"], 24);
    /// ```
    pub fn get_mut(&mut self) -> &mut V {
        self.raw.get_index_mut(self.pos).expect("occupied entry position").1
    }

    /// Converts the entry into a mutable reference to its value.
    ///
    /// If you need multiple references to the `OccupiedEntry`, see
    /// [`get_mut`](OccupiedEntry::get_mut).
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_mut(self) -> &'a mut V {
        self.raw.get_index_mut(self.pos).expect("occupied entry position").1
    }

    /// Sets the value of the entry and returns the entry's old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// if let Entry::Occupied(mut o) = map.entry("poneyland") {
    ///     assert_eq!(o.insert(15), 12);
    /// }
    /// assert_eq!(map["poneyland"], 15);
    /// ```
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Takes the value of the entry out of the map, and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    /// use arraymap::array_map::Entry;
    ///
    /// let mut map: ArrayMap<usize> = ArrayMap::new();
    /// map.entry("poneyland").or_insert(12);
    ///
    /// if let Entry::Occupied(o) = map.entry("poneyland") {
    ///     assert_eq!(o.remove(), 12);
    /// }
    /// assert!(map.is_empty());
    /// ```
    #[allow(clippy::must_use_candidate)]
    pub fn remove(self) -> V {
        self.remove_entry().1
    }
}
