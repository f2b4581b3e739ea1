//! One-level value mapping over key-value collections.

use std::hash::Hash;

use indexmap::IndexMap;

/// Build a map with the same keys as `entries` and each value replaced by `f(value, key)`.
///
/// Keys keep the iteration order of `entries`. Nested values are handed to
/// `f` as they are; nothing is recursed into.
///
/// ```
/// use indexmap::IndexMap;
/// use recase_core::map_values;
///
/// let source = IndexMap::from([("a", 1), ("b", 2)]);
/// let doubled = map_values(&source, |v, _| v * 2);
/// assert_eq!(doubled, IndexMap::from([("a", 2), ("b", 4)]));
/// ```
pub fn map_values<'a, K, V, R, F>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    mut f: F,
) -> IndexMap<K, R>
where
    K: Clone + Eq + Hash + 'a,
    V: 'a,
    F: FnMut(&V, &K) -> R,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), f(value, key)))
        .collect()
}

/// Fallible [`map_values`]: stops at the first error and returns it unchanged.
pub fn try_map_values<'a, K, V, R, E, F>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    mut f: F,
) -> Result<IndexMap<K, R>, E>
where
    K: Clone + Eq + Hash + 'a,
    V: 'a,
    F: FnMut(&V, &K) -> Result<R, E>,
{
    entries
        .into_iter()
        .map(|(key, value)| Ok((key.clone(), f(value, key)?)))
        .collect()
}
