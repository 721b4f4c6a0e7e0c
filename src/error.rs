use thiserror::Error;

use crate::array_key::ArrayKey;

/// Errors reported by fallible [`ArrayMap`](crate::ArrayMap) operations.
///
/// Almost every operation on the map is total; the two exceptions are the
/// strict lookup [`try_get`](crate::ArrayMap::try_get) and the list-gated
/// append [`push`](crate::ArrayMap::push).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A strict lookup found no entry for the key.
    #[error("key not found: {0}")]
    KeyNotFound(ArrayKey),

    /// An append was attempted on a map whose keys are not the contiguous
    /// integers `0..n` in order.
    #[error("cannot push onto a keyed map; use `set` to add an entry under an explicit key")]
    NotAList,
}
