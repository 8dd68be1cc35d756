//! Free functions for reading raw nested mappings without building a [`Dict`].
//!
//! Paths here always use `.` as the separator and never promote anything, they read [`RawMap`]s
//! and already promoted dicts alike.
//!
//! [`Dict`]: crate::collections::Dict

use crate::collections::dict::{KeyRef, RawMap, Value};


/// The separator between the segments of a path.
pub const SEPARATOR: char = '.';

/// Returns the value at `key`, or `default` if there isn't one. `key` is not treated as a path.
pub fn get_or<'a>(map: &'a RawMap, key: &str, default: &'a Value) -> &'a Value {
    map.get(&KeyRef::Name(key)).unwrap_or(default)
}

/// Returns a copy of the value at `key`, or the result of calling `default` with the map and the
/// key if there isn't one.
pub fn get_or_else<F>(map: &RawMap, key: &str, default: F) -> Value
where
    F: FnOnce(&RawMap, &str) -> Value,
{
    match map.get(&KeyRef::Name(key)) {
        Some(value) => value.clone(),
        None => default(map, key),
    }
}

/// Resolves `path` through nested mappings, returning the value at its last segment.
///
/// ```
/// # use hope_util::collections::dict::{Key, RawMap, Value};
/// # use hope_util::helpers::chain;
/// let inner: RawMap = [(Key::from("c"), Value::Int(1))].into_iter().collect();
/// let outer: RawMap = [(Key::from("b"), Value::Map(inner))].into_iter().collect();
/// let map: RawMap = [(Key::from("a"), Value::Map(outer))].into_iter().collect();
///
/// assert_eq!(chain(&map, "a.b.c"), Some(&Value::Int(1)));
/// assert_eq!(chain(&map, "a.x.c"), None);
/// ```
pub fn chain<'a>(map: &'a RawMap, path: &str) -> Option<&'a Value> {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, key)) => chain(map, parent)?
            .as_mapping()?
            .get(&KeyRef::Name(key)),
        None => map.get(&KeyRef::Name(path)),
    }
}

/// Resolves `path` like [`chain`], returning `default` if it doesn't resolve.
pub fn chain_or<'a>(map: &'a RawMap, path: &str, default: &'a Value) -> &'a Value {
    chain(map, path).unwrap_or(default)
}

/// Returns true if the parent of `path` resolves to a mapping that contains its last segment,
/// including entries holding [`Value::Null`].
pub fn exists(map: &RawMap, path: &str) -> bool {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, key)) => chain(map, parent)
            .and_then(Value::as_mapping)
            .is_some_and(|parent| parent.contains_key(&KeyRef::Name(key))),
        None => map.contains_key(&KeyRef::Name(path)),
    }
}

/// Returns true if `value` is between `min` and `max`, inclusive on both ends.
pub fn in_range<T: PartialOrd + ?Sized>(value: &T, min: &T, max: &T) -> bool {
    value >= min && value <= max
}
