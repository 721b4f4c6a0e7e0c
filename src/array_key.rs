use core::fmt;

/// A map key: a signed integer or a string.
///
/// [`ArrayMap`](crate::ArrayMap) keys are drawn from this closed sum type
/// rather than a generic parameter, so a single map can hold both key kinds
/// side by side. Comparison is strict: an integer key and the string
/// spelling the same digits are different keys.
///
/// Most call sites never name this type. Everything that takes a key
/// accepts `impl Into<ArrayKey>`, so plain integers and string slices work
/// directly:
///
/// ```
/// use arraymap::{ArrayKey, ArrayMap};
///
/// let mut map = ArrayMap::new();
/// map.set(5, "by int").set("5", "by string");
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(5), Some(&"by int"));
/// assert_eq!(map.get("5"), Some(&"by string"));
/// assert_ne!(ArrayKey::from(5), ArrayKey::from("5"));
/// ```
///
/// The derived ordering places all integer keys before all string keys,
/// integers numerically and strings lexicographically. Iteration order of a
/// map is insertion order, never key order; the `Ord` impl exists so keys
/// themselves can be sorted and collected.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArrayKey {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl ArrayKey {
    /// Returns the integer value if this is an integer key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayKey;
    ///
    /// assert_eq!(ArrayKey::from(7).as_int(), Some(7));
    /// assert_eq!(ArrayKey::from("seven").as_int(), None);
    /// ```
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArrayKey::Int(n) => Some(*n),
            ArrayKey::Str(_) => None,
        }
    }

    /// Returns the string slice if this is a string key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraymap::ArrayKey;
    ///
    /// assert_eq!(ArrayKey::from("seven").as_str(), Some("seven"));
    /// assert_eq!(ArrayKey::from(7).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayKey::Int(_) => None,
            ArrayKey::Str(s) => Some(s),
        }
    }

    /// Returns `true` if this is an integer key.
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, ArrayKey::Int(_))
    }

    /// Returns `true` if this is a string key.
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, ArrayKey::Str(_))
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(n) => write!(f, "{n}"),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty)*) => {$(
        impl From<$t> for ArrayKey {
            fn from(key: $t) -> Self {
                ArrayKey::Int(i64::from(key))
            }
        }
    )*};
}

impl_from_int!(i8 i16 i32 i64 u8 u16 u32);

impl From<&str> for ArrayKey {
    fn from(key: &str) -> Self {
        ArrayKey::Str(key.to_owned())
    }
}

impl From<String> for ArrayKey {
    fn from(key: String) -> Self {
        ArrayKey::Str(key)
    }
}

impl From<&ArrayKey> for ArrayKey {
    fn from(key: &ArrayKey) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_key_identity() {
        assert_ne!(ArrayKey::from(5), ArrayKey::from("5"));
        assert_eq!(ArrayKey::from(5u8), ArrayKey::from(5i64));
        assert_eq!(ArrayKey::from("k"), ArrayKey::from(String::from("k")));
    }

    #[test]
    fn ints_order_before_strings() {
        assert!(ArrayKey::from(i64::MAX) < ArrayKey::from(""));
        assert!(ArrayKey::from(-1) < ArrayKey::from(0));
        assert!(ArrayKey::from("a") < ArrayKey::from("b"));
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(ArrayKey::from(-3).to_string(), "-3");
        assert_eq!(ArrayKey::from("foo").to_string(), "foo");
    }
}
