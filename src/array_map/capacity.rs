use super::ArrayMap;
use crate::raw::RawArrayMap;

impl<V> ArrayMap<V> {
    /// Creates an empty map with capacity for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map: ArrayMap<i32> = ArrayMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayMap {
            raw: RawArrayMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating
    /// its entry storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayMap;
    ///
    /// let map: ArrayMap<i32> = ArrayMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
