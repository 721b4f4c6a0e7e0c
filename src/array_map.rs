use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::array_key::ArrayKey;
use crate::error::Error;
use crate::raw::RawArrayMap;

mod capacity;
mod entry;

pub use entry::{Entry, OccupiedEntry, VacantEntry};

/// An insertion-ordered map from [`ArrayKey`] (integer or string) to `V`.
///
/// Entries iterate in the order they were first added. Overwriting the
/// value under an existing key keeps the entry's position; removing an
/// entry closes the gap without disturbing the order of the rest. After an
/// explicit [`sort`](ArrayMap::sort) the order is by value, with each key
/// still attached to its value.
///
/// A map whose keys are exactly the integers `0..n` in order is a *list*
/// (see [`is_list`](ArrayMap::is_list)). Lists additionally support
/// [`push`](ArrayMap::push), which appends under the next integer key;
/// pushing onto a non-list fails rather than guessing a key.
///
/// Every operation that takes a key accepts `impl Into<ArrayKey>`, so
/// integers and string slices work directly.
///
/// # Examples
///
/// ```
/// use arraymap::ArrayMap;
///
/// let mut reviews = ArrayMap::new();
///
/// // `set` chains, and insertion order sticks.
/// reviews
///     .set("Office Space", "Deals with real issues in the workplace.")
///     .set("Pulp Fiction", "Masterpiece.")
///     .set("The Godfather", "Very enjoyable.");
///
/// assert_eq!(reviews.first_key().and_then(|k| k.as_str()), Some("Office Space"));
///
/// // Lookup is by key, strictly typed.
/// if !reviews.contains_key("Les Miserables") {
///     println!("{} reviews, but Les Miserables ain't one.", reviews.len());
/// }
///
/// // Removal is idempotent; an absent key is a no-op.
/// assert_eq!(reviews.remove("Alien"), None);
///
/// // Iterate in insertion order.
/// for (movie, review) in &reviews {
///     println!("{movie}: {review}");
/// }
/// ```
///
/// An `ArrayMap` with a known list of entries can be initialized from an
/// array, and plain sequences get 0-based integer keys:
///
/// ```
/// use arraymap::ArrayMap;
///
/// let solar_distance = ArrayMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
/// ]);
/// assert!(!solar_distance.is_list());
///
/// let moons = ArrayMap::from_values([0, 0, 1, 2]);
/// assert!(moons.is_list());
/// assert_eq!(moons.get(3), Some(&2));
/// ```
///
/// ## `Entry` API
///
/// `ArrayMap` implements an [`Entry API`](ArrayMap::entry) for in-place
/// conditional insertion and updates:
///
/// ```
/// use arraymap::ArrayMap;
///
/// let mut tally: ArrayMap<u32> = ArrayMap::new();
/// for word in ["a", "b", "a", "c", "a"] {
///     *tally.entry(word).or_insert(0) += 1;
/// }
/// assert_eq!(tally["a"], 3);
/// assert_eq!(tally["b"], 1);
/// ```
pub struct ArrayMap<V> {
    raw: RawArrayMap<V>,
}

/// An iterator over the entries of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`ArrayMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use arraymap::{ArrayKey, ArrayMap};
///
/// let map = ArrayMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&ArrayKey::Int(1), &"a")));
/// assert_eq!(iter.next_back(), Some((&ArrayKey::Int(2), &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: ArrayMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, (ArrayKey, V)>,
}

/// A mutable iterator over the entries of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`iter_mut`] method on [`ArrayMap`]. See
/// its documentation for more.
///
/// [`iter_mut`]: ArrayMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, V> {
    inner: slice::IterMut<'a, (ArrayKey, V)>,
}

/// An owning iterator over the entries of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`ArrayMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<V> {
    inner: std::vec::IntoIter<(ArrayKey, V)>,
}

/// An iterator over the keys of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`keys`] method on [`ArrayMap`]. See its
/// documentation for more.
///
/// [`keys`]: ArrayMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

/// An iterator over the values of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`values`] method on [`ArrayMap`]. See
/// its documentation for more.
///
/// [`values`]: ArrayMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

/// A mutable iterator over the values of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`values_mut`] method on [`ArrayMap`].
/// See its documentation for more.
///
/// [`values_mut`]: ArrayMap::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, V> {
    inner: IterMut<'a, V>,
}

/// An owning iterator over the keys of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`into_keys`] method on [`ArrayMap`].
///
/// [`into_keys`]: ArrayMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<V> {
    inner: IntoIter<V>,
}

/// An owning iterator over the values of an `ArrayMap` in insertion order.
///
/// This `struct` is created by the [`into_values`] method on [`ArrayMap`].
///
/// [`into_values`]: ArrayMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<V> {
    inner: IntoIter<V>,
}

impl<V> ArrayMap<V> {
    /// Makes a new, empty `ArrayMap`.
    ///
    /// Does not allocate until the first entry is added.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> ArrayMap<V> {
        ArrayMap {
            raw: RawArrayMap::new(),
        }
    }

    /// Builds a map from a plain sequence of values, keyed by position.
    ///
    /// The first value gets key `0`, the second key `1`, and so on; the
    /// result always satisfies [`is_list`](ArrayMap::is_list).
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values(["a", "b", "c"]);
    /// assert!(map.is_list());
    /// assert_eq!(map.get(1), Some(&"b"));
    /// ```
    pub fn from_values<I>(values: I) -> ArrayMap<V>
    where
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter();
        let mut map = ArrayMap {
            raw: RawArrayMap::with_capacity(values.size_hint().0),
        };
        for value in values {
            map.raw.append_value(value);
        }
        map
    }

    /// Clears the map, removing all entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut a = ArrayMap::new();
    /// a.set(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.first_key(), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value for `key`, or `None` if the key is
    /// absent.
    ///
    /// This is the optional-returning lookup; use
    /// [`try_get`](ArrayMap::try_get) for an error-carrying one, or
    /// indexing (`map[key]`) to panic on absence.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// assert_eq!(map.get(1), Some(&"a"));
    /// assert_eq!(map.get(2), None);
    /// assert_eq!(map.get("1"), None); // string "1" is a different key
    /// ```
    pub fn get<K: Into<ArrayKey>>(&self, key: K) -> Option<&V> {
        self.raw.get(&key.into())
    }

    /// Returns a reference to the value for `key`, or
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KeyNotFound`] naming the missing key.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayMap, Error};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("present", 1);
    /// assert_eq!(map.try_get("present"), Ok(&1));
    /// assert!(matches!(map.try_get("absent"), Err(Error::KeyNotFound(_))));
    /// ```
    pub fn try_get<K: Into<ArrayKey>>(&self, key: K) -> Result<&V, Error> {
        let key = key.into();
        match self.raw.get(&key) {
            Some(value) => Ok(value),
            None => Err(Error::KeyNotFound(key)),
        }
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// if let Some(x) = map.get_mut(1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[1], "b");
    /// ```
    pub fn get_mut<K: Into<ArrayKey>>(&mut self, key: K) -> Option<&mut V> {
        self.raw.get_mut(&key.into())
    }

    /// Returns the stored key-value pair for `key`.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("a", 1);
    /// assert_eq!(map.get_key_value("a"), Some((&ArrayKey::from("a"), &1)));
    /// assert_eq!(map.get_key_value("b"), None);
    /// ```
    pub fn get_key_value<K: Into<ArrayKey>>(&self, key: K) -> Option<(&ArrayKey, &V)> {
        self.raw.get_key_value(&key.into())
    }

    /// Returns `true` if the map contains an entry for `key`.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// assert!(map.contains_key(1));
    /// assert!(!map.contains_key(2));
    /// ```
    pub fn contains_key<K: Into<ArrayKey>>(&self, key: K) -> bool {
        self.raw.contains_key(&key.into())
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    ///
    /// Equality is `PartialEq` on `V`; there is no cross-type coercion.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values([10, 20]);
    /// assert!(map.contains_value(&20));
    /// assert!(!map.contains_value(&30));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.key_of(value).is_some()
    }

    /// Returns the key of the first entry (in insertion order) whose value
    /// equals `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("a", 1).set("b", 2).set("c", 2);
    /// assert_eq!(map.key_of(&2), Some(&ArrayKey::from("b")));
    /// assert_eq!(map.key_of(&9), None);
    /// ```
    pub fn key_of(&self, value: &V) -> Option<&ArrayKey>
    where
        V: PartialEq,
    {
        self.raw.iter().find(|(_, v)| v == value).map(|(k, _)| k)
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    ///
    /// An existing key keeps its position in the order; a new key is
    /// appended at the end. [`set`](ArrayMap::set) is the chaining sibling
    /// of this method.
    ///
    /// # Complexity
    ///
    /// O(1) average, amortized
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map[37], "b");
    /// ```
    pub fn insert<K: Into<ArrayKey>>(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key.into(), value)
    }

    /// Inserts or overwrites the value at `key` and returns the map for
    /// chaining.
    ///
    /// Same position rules as [`insert`](ArrayMap::insert): an existing key
    /// keeps its place, a new key is appended.
    ///
    /// # Complexity
    ///
    /// O(1) average, amortized
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("a", 1).set("b", 2).set("a", 3);
    ///
    /// // "a" kept its first position.
    /// assert_eq!(map.first(), Some(&3));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn set<K: Into<ArrayKey>>(&mut self, key: K, value: V) -> &mut Self {
        self.raw.insert(key.into(), value);
        self
    }

    /// Appends a value under the next sequential integer key.
    ///
    /// Only a map that currently [`is_list`](ArrayMap::is_list) can be
    /// pushed to; the new entry's key is `len()`, keeping the map a list.
    /// On a keyed map nothing is changed and [`Error::NotAList`] is
    /// returned.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotAList`] when the keys are not the contiguous
    /// integers `0..n` in order; use [`set`](ArrayMap::set) there instead.
    ///
    /// # Complexity
    ///
    /// O(n) (list-shape check), amortized O(1) append
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayMap, Error};
    ///
    /// let mut list = ArrayMap::from_values(["a", "b"]);
    /// list.push("c")?;
    /// assert_eq!(list.get(2), Some(&"c"));
    /// assert_eq!(list.last(), Some(&"c"));
    ///
    /// let mut keyed = ArrayMap::new();
    /// keyed.set("foo", "bar");
    /// assert_eq!(keyed.push("baz").unwrap_err(), Error::NotAList);
    /// assert_eq!(keyed.len(), 1);
    /// # Ok::<(), arraymap::Error>(())
    /// ```
    pub fn push(&mut self, value: V) -> Result<&mut Self, Error> {
        if !self.raw.is_list() {
            return Err(Error::NotAList);
        }
        self.raw.append_value(value);
        Ok(self)
    }

    /// Appends every value from `values` under sequential integer keys.
    ///
    /// The list-shape precondition is checked once up front; either all
    /// values are appended or none are.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotAList`] like [`push`](ArrayMap::push).
    ///
    /// # Complexity
    ///
    /// O(n + m) for m appended values
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut list = ArrayMap::from_values([1]);
    /// list.push_all([2, 3])?.push(4)?;
    /// assert_eq!(list.len(), 4);
    /// assert_eq!(list.get(3), Some(&4));
    /// # Ok::<(), arraymap::Error>(())
    /// ```
    pub fn push_all<I>(&mut self, values: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = V>,
    {
        if !self.raw.is_list() {
            return Err(Error::NotAList);
        }
        for value in values {
            self.raw.append_value(value);
        }
        Ok(self)
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// Removing an absent key is a no-op returning `None`. The remaining
    /// entries keep their relative order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// assert_eq!(map.remove(1), Some("a"));
    /// assert_eq!(map.remove(1), None);
    /// assert!(!map.contains_key(1));
    /// ```
    pub fn remove<K: Into<ArrayKey>>(&mut self, key: K) -> Option<V> {
        self.raw.remove(&key.into()).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(1, "a");
    /// assert_eq!(map.remove_entry(1), Some((ArrayKey::Int(1), "a")));
    /// assert_eq!(map.remove_entry(1), None);
    /// ```
    pub fn remove_entry<K: Into<ArrayKey>>(&mut self, key: K) -> Option<(ArrayKey, V)> {
        self.raw.remove(&key.into())
    }

    /// Removes the first entry (in insertion order) whose value equals
    /// `value`, returning whether an entry was removed.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from_values(["a", "b", "a"]);
    /// assert!(map.remove_value(&"a"));
    ///
    /// // Only the first match goes; the later "a" survives.
    /// assert_eq!(map.len(), 2);
    /// assert!(map.contains_value(&"a"));
    /// assert!(!map.remove_value(&"z"));
    /// ```
    pub fn remove_value(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self.raw.iter().position(|(_, v)| v == value) {
            Some(pos) => {
                self.raw.remove_index(pos);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the first entry in insertion order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.pop_first(), Some((ArrayKey::from("a"), 1)));
    /// assert_eq!(map.pop_first(), Some((ArrayKey::from("b"), 2)));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(ArrayKey, V)> {
        if self.raw.is_empty() {
            return None;
        }
        Some(self.raw.remove_index(0))
    }

    /// Removes and returns the last entry in insertion order.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.pop_last(), Some((ArrayKey::from("b"), 2)));
    /// assert_eq!(map.last(), Some(&1));
    /// ```
    pub fn pop_last(&mut self) -> Option<(ArrayKey, V)> {
        self.raw.pop()
    }

    /// Returns the first value in insertion order, or `None` when empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// assert_eq!(map.first(), None);
    /// map.set("foo", 1).set("bar", 2);
    /// assert_eq!(map.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.raw.get_index(0).map(|(_, v)| v)
    }

    /// Returns the first key in insertion order, or `None` when empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("foo", 1).set("bar", 2);
    /// assert_eq!(map.first_key(), Some(&ArrayKey::from("foo")));
    /// ```
    #[must_use]
    pub fn first_key(&self) -> Option<&ArrayKey> {
        self.raw.get_index(0).map(|(k, _)| k)
    }

    /// Returns the first key-value pair in insertion order.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn first_key_value(&self) -> Option<(&ArrayKey, &V)> {
        self.raw.get_index(0)
    }

    /// Returns the last value in insertion order, or `None` when empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// assert_eq!(map.last(), None);
    /// map.set("foo", 1).set("bar", 2);
    /// assert_eq!(map.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.raw.get_index(self.raw.len().checked_sub(1)?).map(|(_, v)| v)
    }

    /// Returns the last key in insertion order, or `None` when empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("foo", 1).set("bar", 2);
    /// assert_eq!(map.last_key(), Some(&ArrayKey::from("bar")));
    /// ```
    #[must_use]
    pub fn last_key(&self) -> Option<&ArrayKey> {
        self.raw.get_index(self.raw.len().checked_sub(1)?).map(|(k, _)| k)
    }

    /// Returns the last key-value pair in insertion order.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn last_key_value(&self) -> Option<(&ArrayKey, &V)> {
        self.raw.get_index(self.raw.len().checked_sub(1)?)
    }

    /// Returns `true` if the keys are exactly the integers `0..n` in
    /// order.
    ///
    /// An empty map is vacuously a list. Lists are the only maps
    /// [`push`](ArrayMap::push) accepts.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// assert!(ArrayMap::<u8>::new().is_list());
    /// assert!(ArrayMap::from_values([1, 2, 3]).is_list());
    /// assert!(!ArrayMap::from([("foo", 1)]).is_list());
    ///
    /// // A gap in the integer keys breaks the list shape.
    /// assert!(!ArrayMap::from([(0, "a"), (2, "b")]).is_list());
    /// ```
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.raw.is_list()
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// # Complexity
    ///
    /// O(1) average
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut count: ArrayMap<usize> = ArrayMap::new();
    /// for word in ["a", "b", "a", "c", "a", "b"] {
    ///     count.entry(word).and_modify(|n| *n += 1).or_insert(1);
    /// }
    ///
    /// assert_eq!(count["a"], 3);
    /// assert_eq!(count["b"], 2);
    /// assert_eq!(count["c"], 1);
    /// ```
    pub fn entry<K: Into<ArrayKey>>(&mut self, key: K) -> Entry<'_, V> {
        let key = key.into();
        match self.raw.position_of(&key) {
            Some(pos) => Entry::Occupied(OccupiedEntry {
                pos,
                raw: &mut self.raw,
            }),
            None => Entry::Vacant(VacantEntry {
                key,
                raw: &mut self.raw,
            }),
        }
    }

    /// Retains only the entries the predicate approves of.
    ///
    /// Entries are visited in insertion order; the survivors keep their
    /// keys and relative order. This is the in-place sibling of
    /// [`filter`](ArrayMap::filter).
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from_values([0, 1, 2, 3, 4, 5]);
    /// map.retain(|_, v| *v % 2 == 0);
    /// let survivors: Vec<_> = map.values().copied().collect();
    /// assert_eq!(survivors, [0, 2, 4]);
    /// ```
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ArrayKey, &mut V) -> bool,
    {
        self.raw.retain(keep);
    }

    /// Returns a new map holding the entries the predicate approves of,
    /// with their original keys.
    ///
    /// The receiver is untouched; the result is an independent deep copy.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let odd = map.filter(|_, v| v % 2 == 1);
    ///
    /// assert_eq!(odd.len(), 2);
    /// assert!(odd.contains_key("a"));      // original key preserved
    /// assert!(!odd.contains_key("b"));
    /// assert_eq!(map.len(), 3);            // source unchanged
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut pred: F) -> ArrayMap<V>
    where
        V: Clone,
        F: FnMut(&ArrayKey, &V) -> bool,
    {
        let mut out = ArrayMap::new();
        for (k, v) in self.raw.iter() {
            if pred(k, v) {
                out.raw.append_new(k.clone(), v.clone());
            }
        }
        out
    }

    /// Returns a new map with the same keys and each value replaced by
    /// `f(&key, &value)`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// let doubled = map.map(|_, v| v * 2);
    ///
    /// assert_eq!(doubled["a"], 2);
    /// assert_eq!(doubled["b"], 4);
    /// assert_eq!(map["a"], 1); // source unchanged
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> ArrayMap<U>
    where
        F: FnMut(&ArrayKey, &V) -> U,
    {
        let mut out = ArrayMap {
            raw: RawArrayMap::with_capacity(self.len()),
        };
        for (k, v) in self.raw.iter() {
            out.raw.append_new(k.clone(), f(k, v));
        }
        out
    }

    /// Left-to-right fold over the values.
    ///
    /// Keys are not exposed to the callback; iterate with
    /// [`iter`](ArrayMap::iter) when they matter.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values([10, 20, 30]);
    /// assert_eq!(map.fold(0, |acc, v| acc + v), 60);
    /// ```
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        let mut acc = init;
        for (_, v) in self.raw.iter() {
            acc = f(acc, v);
        }
        acc
    }

    /// Returns the first value (in insertion order) the predicate accepts.
    ///
    /// # Complexity
    ///
    /// O(n), short-circuiting
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values([1, 7, 2, 9]);
    /// assert_eq!(map.find(|v| *v > 5), Some(&7));
    /// assert_eq!(map.find(|v| *v > 50), None);
    /// ```
    pub fn find<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.raw.iter().map(|(_, v)| v).find(|&v| pred(v))
    }

    /// Returns `true` if the predicate accepts at least one entry.
    ///
    /// # Complexity
    ///
    /// O(n), short-circuiting
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// assert!(map.any(|_, v| *v == 2));
    /// assert!(!map.any(|k, _| k.is_int()));
    /// ```
    pub fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&ArrayKey, &V) -> bool,
    {
        self.raw.iter().any(|(k, v)| pred(k, v))
    }

    /// Returns `true` if the predicate accepts every entry.
    ///
    /// Vacuously `true` on an empty map.
    ///
    /// # Complexity
    ///
    /// O(n), short-circuiting
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// assert!(map.all(|k, _| k.is_str()));
    /// assert!(!map.all(|_, v| *v == 1));
    /// ```
    pub fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&ArrayKey, &V) -> bool,
    {
        self.raw.iter().all(|(k, v)| pred(k, v))
    }

    /// Sorts the entries in place by value, in natural order.
    ///
    /// Keys stay attached to their values; only positions change. The sort
    /// is stable, so equal values keep their insertion order.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from_values([3, 1, 2, 9, 7]);
    /// map.sort();
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, [1, 2, 3, 7, 9]);
    ///
    /// // Key 0 still maps to the value it was inserted with.
    /// assert_eq!(map[0], 3);
    /// ```
    pub fn sort(&mut self)
    where
        V: Ord,
    {
        self.raw.sort_by(V::cmp);
    }

    /// Sorts the entries in place by value with a three-way comparator.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from_values([3, 1, 2, 9, 7]);
    /// map.sort_by(|a, b| b.cmp(a));
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, [9, 7, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.raw.sort_by(cmp);
    }

    /// Returns a sorted copy, leaving the receiver untouched.
    ///
    /// Same ordering as [`sort`](ArrayMap::sort).
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values([2, 1]);
    /// let sorted = map.sorted();
    ///
    /// let original: Vec<_> = map.values().copied().collect();
    /// let ordered: Vec<_> = sorted.values().copied().collect();
    /// assert_eq!(original, [2, 1]);
    /// assert_eq!(ordered, [1, 2]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> ArrayMap<V>
    where
        V: Clone + Ord,
    {
        let mut out = self.clone();
        out.sort();
        out
    }

    /// Returns a copy sorted with a three-way comparator, leaving the
    /// receiver untouched.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from_values([1, 3, 2]);
    /// let descending = map.sorted_by(|a, b| b.cmp(a));
    /// let values: Vec<_> = descending.values().copied().collect();
    /// assert_eq!(values, [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sorted_by<F>(&self, cmp: F) -> ArrayMap<V>
    where
        V: Clone,
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut out = self.clone();
        out.sort_by(cmp);
        out
    }

    /// Returns a new map of this map's keys, re-indexed from 0.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("a", 10).set(7, 20);
    /// let keys = map.to_keys();
    ///
    /// assert!(keys.is_list());
    /// assert_eq!(keys[0], ArrayKey::from("a"));
    /// assert_eq!(keys[1], ArrayKey::from(7));
    /// ```
    #[must_use]
    pub fn to_keys(&self) -> ArrayMap<ArrayKey> {
        ArrayMap::from_values(self.keys().cloned())
    }

    /// Returns a new map of this map's values, re-indexed from 0.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([("a", 10), ("b", 20)]);
    /// let values = map.to_values();
    ///
    /// assert!(values.is_list());
    /// assert_eq!(values[0], 10);
    /// assert_eq!(values[1], 20);
    /// ```
    #[must_use]
    pub fn to_values(&self) -> ArrayMap<V>
    where
        V: Clone,
    {
        ArrayMap::from_values(self.values().cloned())
    }

    /// Returns the entries as a slice of key-value pairs in insertion
    /// order.
    ///
    /// This is the native export format for code that does not speak
    /// `ArrayMap`.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("a", 1);
    /// assert_eq!(map.as_entries(), [(ArrayKey::from("a"), 1)]);
    /// ```
    #[must_use]
    pub fn as_entries(&self) -> &[(ArrayKey, V)] {
        self.raw.as_entries()
    }

    /// Consumes the map and returns its key-value pairs in insertion
    /// order.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let map = ArrayMap::from([(0, "a"), (1, "b")]);
    /// let entries = map.into_entries();
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(entries[1], (ArrayKey::Int(1), "b"));
    /// ```
    #[must_use]
    pub fn into_entries(self) -> Vec<(ArrayKey, V)> {
        self.raw.into_entries()
    }

    /// Gets an iterator over the entries in insertion order.
    ///
    /// Iteration is non-destructive and restartable: a fresh `iter()`
    /// observes the current contents, and two passes without intervening
    /// mutation yield the same pairs.
    ///
    /// # Complexity
    ///
    /// O(1) to create; O(1) per step
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set(3, "c").set(1, "a");
    ///
    /// // Insertion order, not key order.
    /// let keys: Vec<_> = map.iter().map(|(k, _)| k.as_int().unwrap()).collect();
    /// assert_eq!(keys, [3, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.raw.iter(),
        }
    }

    /// Gets a mutable iterator over the entries in insertion order.
    ///
    /// # Complexity
    ///
    /// O(1) to create; O(1) per step
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from([("a", 1), ("b", 2)]);
    /// for (_, value) in map.iter_mut() {
    ///     *value += 10;
    /// }
    /// assert_eq!(map["a"], 11);
    /// assert_eq!(map["b"], 12);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.raw.iter_mut(),
        }
    }

    /// Gets an iterator over the keys in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::new();
    /// map.set("b", 2).set("a", 1);
    ///
    /// let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
    /// assert_eq!(keys, ["b", "a"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut map = ArrayMap::from([(1, String::from("hello"))]);
    /// for value in map.values_mut() {
    ///     value.push('!');
    /// }
    /// assert_eq!(map[1], "hello!");
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Creates a consuming iterator over the keys in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let map = ArrayMap::from([("b", 2), ("a", 1)]);
    /// let keys: Vec<_> = map.into_keys().collect();
    /// assert_eq!(keys, [ArrayKey::from("b"), ArrayKey::from("a")]);
    /// ```
    #[must_use]
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map = ArrayMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<_> = map.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    #[must_use]
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut a = ArrayMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.set(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let mut a = ArrayMap::new();
    /// assert!(a.is_empty());
    /// a.set(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<V: Clone> Clone for ArrayMap<V> {
    fn clone(&self) -> Self {
        ArrayMap {
            raw: self.raw.clone(),
        }
    }
}

impl<V: Hash> Hash for ArrayMap<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<V: PartialEq> PartialEq for ArrayMap<V> {
    /// Order-sensitive equality: two maps are equal when their entry
    /// sequences match pairwise.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<V: Eq> Eq for ArrayMap<V> {}

impl<V: PartialOrd> PartialOrd for ArrayMap<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<V: Ord> Ord for ArrayMap<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<V: fmt::Debug> fmt::Debug for ArrayMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Default for ArrayMap<V> {
    fn default() -> Self {
        ArrayMap::new()
    }
}

impl<K: Into<ArrayKey>, V> FromIterator<(K, V)> for ArrayMap<V> {
    /// Builds a map from keyed pairs. A repeated key keeps its first
    /// position and its last value.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ArrayMap::new();
        map.extend(iter);
        map
    }
}

impl<V> FromIterator<V> for ArrayMap<V> {
    /// Builds a list from plain values, keyed by position. Equivalent to
    /// [`ArrayMap::from_values`].
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        ArrayMap::from_values(iter)
    }
}

impl<K: Into<ArrayKey>, V> Extend<(K, V)> for ArrayMap<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, V> IntoIterator for &'a ArrayMap<V> {
    type Item = (&'a ArrayKey, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ArrayMap<V> {
    type Item = (&'a ArrayKey, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> IterMut<'a, V> {
        self.iter_mut()
    }
}

impl<V> IntoIterator for ArrayMap<V> {
    type Item = (ArrayKey, V);
    type IntoIter = IntoIter<V>;

    /// Gets an owning iterator over the entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::{ArrayKey, ArrayMap};
    ///
    /// let map = ArrayMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((ArrayKey::Int(2), "b")));
    /// assert_eq!(iter.next(), Some((ArrayKey::Int(1), "a")));
    /// ```
    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            inner: self.raw.into_entries().into_iter(),
        }
    }
}

impl<K: Into<ArrayKey>, V> Index<K> for ArrayMap<V> {
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Into<ArrayKey>, V> IndexMut<K> for ArrayMap<V> {
    /// Returns a mutable reference to the value for `key`, so
    /// `map[key] = value` overwrites an existing entry in place.
    ///
    /// Indexing cannot create entries; append with
    /// [`push`](ArrayMap::push) or [`set`](ArrayMap::set).
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index_mut(&mut self, key: K) -> &mut V {
        self.get_mut(key).expect("no entry found for key")
    }
}

impl<K: Into<ArrayKey>, V, const N: usize> From<[(K, V); N]> for ArrayMap<V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a ArrayKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.inner.len()).finish()
    }
}

impl<V> Default for Iter<'_, V> {
    /// Creates an empty `array_map::Iter`.
    ///
    /// ```
    /// # use arraymap::array_map;
    /// let iter: array_map::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: Default::default(),
        }
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a ArrayKey, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IterMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (&*k, v))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IterMut<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for IterMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<V> Default for IterMut<'_, V> {
    /// Creates an empty `array_map::IterMut`.
    ///
    /// ```
    /// # use arraymap::array_map;
    /// let iter: array_map::IterMut<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IterMut {
            inner: Default::default(),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (ArrayKey, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V: fmt::Debug> fmt::Debug for IntoIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoIter<V> {
    /// Creates an empty `array_map::IntoIter`.
    ///
    /// ```
    /// # use arraymap::array_map;
    /// let iter: array_map::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a ArrayKey;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Keys<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

impl<V> fmt::Debug for Keys<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.len()).finish()
    }
}

impl<V> Default for Keys<'_, V> {
    fn default() -> Self {
        Keys {
            inner: Iter::default(),
        }
    }
}

impl<V> Clone for Keys<'_, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.len()).finish()
    }
}

impl<V> Default for Values<'_, V> {
    fn default() -> Self {
        Values {
            inner: Iter::default(),
        }
    }
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValuesMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for ValuesMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<V> Default for ValuesMut<'_, V> {
    fn default() -> Self {
        ValuesMut {
            inner: IterMut::default(),
        }
    }
}

impl<V> Iterator for IntoKeys<V> {
    type Item = ArrayKey;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoKeys<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<V> ExactSizeIterator for IntoKeys<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoKeys<V> {}

impl<V> fmt::Debug for IntoKeys<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoKeys").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoKeys<V> {
    fn default() -> Self {
        IntoKeys {
            inner: IntoIter::default(),
        }
    }
}

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoValues<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<V> ExactSizeIterator for IntoValues<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoValues<V> {}

impl<V: fmt::Debug> fmt::Debug for IntoValues<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoValues").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoValues<V> {
    fn default() -> Self {
        IntoValues {
            inner: IntoIter::default(),
        }
    }
}
