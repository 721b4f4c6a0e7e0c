//! An insertion-ordered map keyed by integers or strings.
//!
//! This crate provides [`ArrayMap`], a key-value collection that remembers
//! the order entries were added in and accepts both integer and string keys
//! through the closed [`ArrayKey`] sum type. On top of the usual map
//! operations it carries the conveniences a plain map lacks: list-style
//! appends ([`push`](ArrayMap::push)), value search
//! ([`key_of`](ArrayMap::key_of), [`contains_value`](ArrayMap::contains_value)),
//! and collection combinators ([`filter`](ArrayMap::filter),
//! [`map`](ArrayMap::map), [`fold`](ArrayMap::fold),
//! [`sort`](ArrayMap::sort)).
//!
//! # Example
//!
//! ```
//! use arraymap::ArrayMap;
//!
//! let mut scores = ArrayMap::new();
//! scores.set("alice", 100).set("bob", 85).set("carol", 92);
//!
//! // Insertion order is preserved and observable.
//! assert_eq!(scores.first(), Some(&100));
//! assert_eq!(scores.last_key().and_then(|k| k.as_str()), Some("carol"));
//!
//! // Combinators return new, independent maps with keys preserved.
//! let passing = scores.filter(|_, &v| v >= 90);
//! assert_eq!(passing.len(), 2);
//! assert!(passing.contains_key("carol"));
//! assert!(!passing.contains_key("bob"));
//!
//! // Lists (contiguous 0-based integer keys) support appends.
//! let mut picks = ArrayMap::from_values(["red", "green"]);
//! picks.push("blue")?;
//! assert_eq!(picks.get(2), Some(&"blue"));
//! # Ok::<(), arraymap::Error>(())
//! ```
//!
//! # Features
//!
//! - **Insertion order** - iteration, `first`/`last`, and export all follow
//!   the order entries were added; overwriting a value keeps its position
//! - **Array keys** - one map holds integer and string keys side by side,
//!   compared strictly (`5` and `"5"` are different keys)
//! - **List gating** - [`push`](ArrayMap::push) only extends maps whose keys
//!   are exactly `0..n`, so positional and keyed usage cannot be mixed by
//!   accident
//! - **Value-semantics derivation** - `filter`/`map`/`sorted` and friends
//!   copy into fresh maps; the source is never aliased
//!
//! # Implementation
//!
//! Entries live in a `Vec<(ArrayKey, V)>` holding the order, with a
//! `FxHashMap<ArrayKey, usize>` index for O(1) average key lookup. Ordered
//! removal is `Vec::remove` plus an index fix-up, so `remove` is O(n);
//! every operation documents its cost.

#![forbid(unsafe_code)]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod array_key;
mod error;
mod raw;

pub mod array_map;

pub use array_key::ArrayKey;
pub use array_map::ArrayMap;
pub use error::Error;
