use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use indexmap::IndexMap;

use super::{
    DictError, IntoKey, Iter, Key, KeyRef, Keys, MissingKey, MissingPath, PathPolicy, RawMap,
    Value, Values,
};
use crate::util::fmt::{DebugRaw, Joined};

/// An insertion-ordered map from [`Key`]s to dynamically typed [`Value`]s, with optional
/// delimited path access into nested data.
///
/// When a delimiter is configured, a name containing it (`"a.b.c"` with `.`) is split on its
/// first occurrence. The head is resolved at this level and the rest is passed down to the child
/// dict stored there. Object keys and names without the delimiter are plain, flat keys.
///
/// # Promotion
/// Nested data is stored as a [`Value::Map`] until it is first read with [`Dict::get`] (or any
/// method built on it). At that point the raw mapping is replaced, in place, with a child Dict
/// using the same delimiter and [`PathPolicy`]. Every later read returns that same child, so
/// writes through it are visible from the parent. Promotion is the only change a read makes and
/// it happens once per entry, which is why reading methods take `&mut self`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Dict.
/// - `d`: The number of segments in a delimited path.
/// - `m`: The number of entries in a raw mapping being promoted.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(d)`* |
/// | `get` | `O(d)`*, `O(d + m)` |
/// | `has` | `O(d)`* |
/// | `remove` | `O(d + n)` |
/// | `all` | `O(n)`** |
///
/// \* Hash lookups are amortised `O(1)`. Promotion moves the raw mapping rather than copying it.
///
/// \** Recursive in the depth of the nested data.
#[derive(Clone, Default)]
pub struct Dict {
    pub(crate) items: RawMap,
    pub(crate) delimiter: Option<String>,
    pub(crate) policy: PathPolicy,
}

impl Dict {
    /// Creates an empty Dict with no delimiter. Every key is flat.
    pub fn new() -> Dict {
        Dict::default()
    }

    /// Creates an empty Dict that treats names containing `delimiter` as paths. An empty
    /// delimiter is treated as no delimiter at all.
    pub fn with_delimiter(delimiter: &str) -> Dict {
        Dict {
            items: IndexMap::new(),
            delimiter: Some(delimiter.to_owned()).filter(|d| !d.is_empty()),
            policy: PathPolicy::default(),
        }
    }

    /// Creates a Dict holding the entries of `map`, in order.
    ///
    /// Entries are stored verbatim: names in `map` aren't split on the delimiter and nested
    /// mappings aren't promoted until they are read.
    pub fn from_map(map: RawMap, delimiter: Option<&str>) -> Dict {
        Dict {
            items: map,
            delimiter: delimiter.filter(|d| !d.is_empty()).map(str::to_owned),
            policy: PathPolicy::default(),
        }
    }

    /// Sets the [`PathPolicy`] for this Dict and every child it promotes or creates afterwards.
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Dict {
        self.policy = policy;
        self
    }

    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    pub const fn path_policy(&self) -> PathPolicy {
        self.policy
    }

    /// Returns the number of entries at this level.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Dict contains no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Associates `value` with `key`, overwriting and keeping the position of any previous value.
    ///
    /// A delimited path is written into the child dict its head resolves to, promoting a raw
    /// mapping if required. If the head doesn't resolve to a dict, the configured [`PathPolicy`]
    /// decides what happens; by default the write is dropped.
    ///
    /// # Errors
    /// - [`InvalidKey`](super::InvalidKey) if `key` is neither a string nor an [`Object`].
    /// - [`MissingPath`] if the path can't be resolved and the policy is [`PathPolicy::Error`].
    ///
    /// [`Object`]: super::Object
    pub fn set<K: IntoKey>(
        &mut self,
        key: K,
        value: impl Into<Value>,
    ) -> Result<&mut Dict, DictError> {
        let key = key.into_key()?;
        self.set_key(key, value.into())?;
        Ok(self)
    }

    /// Calls [`set`](Dict::set) for every pair, in order. Later pairs overwrite earlier ones and
    /// the first error stops the remaining pairs from being written.
    pub fn set_all<K, V, I>(&mut self, pairs: I) -> Result<&mut Dict, DictError>
    where
        K: IntoKey,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(self)
    }

    /// Returns the value at `key`, or None if there isn't one.
    ///
    /// If the value is a raw mapping, it is promoted to a child dict first. Along a delimited
    /// path, every segment but the last has to resolve to a mapping; anything else yields None.
    pub fn get<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Option<&Value> {
        self.get_mut(key).map(|v| &*v)
    }

    /// Returns a mutable reference to the value at `key`, resolved the same way as
    /// [`get`](Dict::get).
    pub fn get_mut<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Option<&mut Value> {
        let key = key.into();

        if let KeyRef::Name(name) = key
            && let Some((head, rest)) = self.split_path(name)
        {
            return match self.get_mut(head)? {
                Value::Dict(child) => child.get_mut(rest),
                _ => None,
            };
        }

        self.promote(key);
        self.items.get_mut(&key)
    }

    /// Returns the value at `key` or `default` if there isn't one.
    pub fn get_or<'a, 'k>(
        &'a mut self,
        key: impl Into<KeyRef<'k>>,
        default: &'a Value,
    ) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Returns a copy of the value at `key`, or the result of calling `default` with this dict and
    /// the key if there isn't one.
    pub fn get_or_else<'k, F>(&mut self, key: impl Into<KeyRef<'k>>, default: F) -> Value
    where
        F: FnOnce(&Dict, KeyRef<'k>) -> Value,
    {
        let key = key.into();
        match self.get(key) {
            Some(value) => value.clone(),
            None => default(&*self, key),
        }
    }

    /// Returns the child dict at `key`, promoting a raw mapping if required.
    pub fn get_dict<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Option<&mut Dict> {
        self.get_mut(key)?.as_dict_mut()
    }

    /// Computes a value from the whole dict instead of reading a single key. `f` is called with
    /// this dict and `default`.
    pub fn compute<D, R, F>(&mut self, default: D, f: F) -> R
    where
        F: FnOnce(&mut Dict, D) -> R,
    {
        f(self, default)
    }

    /// Returns true if [`get`](Dict::get) would return a value for `key`. This has the same side
    /// effects as `get`.
    pub fn has<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> bool {
        self.get(key).is_some()
    }

    /// Returns every entry as a raw mapping, with child dicts flattened back to raw mappings. The
    /// dict itself is left as it is.
    pub fn all(&self) -> RawMap {
        self.items.iter()
            .map(|(k, v)| (k.clone(), v.flatten()))
            .collect()
    }

    /// Alias of [`all`](Dict::all).
    pub fn to_map(&self) -> RawMap {
        self.all()
    }

    /// Sets every entry of `other` on this dict, as if by [`set_all`](Dict::set_all). `other` is
    /// not modified.
    pub fn merge(&mut self, other: &Dict) -> Result<&mut Dict, DictError> {
        self.set_all(other.all())
    }

    /// Merges `other` into this dict, combining instead of overwriting.
    ///
    /// Where both sides hold mappings, they are merged recursively. Where both hold anything
    /// else, the values are collected into a list (extending an existing list). Where only one
    /// side holds a mapping, `other` wins. Keys are taken as they are, without path resolution.
    pub fn merge_recursive(&mut self, other: &Dict) -> &mut Dict {
        merge_maps(&mut self.items, other.all());
        self
    }

    /// Inserts the entries of `other` whose keys aren't present at this level yet. Keys are taken
    /// as they are, without path resolution.
    pub fn fill(&mut self, other: &Dict) -> &mut Dict {
        for (key, value) in other.all() {
            self.items.entry(key).or_insert(value);
        }
        self
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> &mut Dict {
        self.items.clear();
        self
    }

    /// Removes and returns the value at `key`. Delimited paths remove the entry from the child
    /// dict they resolve to. The order of the remaining entries is preserved.
    ///
    /// # Errors
    /// [`MissingKey`] if there is no value at `key`. See [`remove_silent`](Dict::remove_silent)
    /// for a version that doesn't consider this an error.
    pub fn remove<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Result<Value, DictError> {
        let key = key.into();
        self.remove_silent(key)
            .ok_or_else(|| MissingKey { key: key.to_string() }.into())
    }

    /// Removes and returns the value at `key`, or None if there isn't one.
    pub fn remove_silent<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Option<Value> {
        let key = key.into();

        if let KeyRef::Name(name) = key
            && let Some((head, rest)) = self.split_path(name)
        {
            return self.get_dict(head)?.remove_silent(rest);
        }

        self.items.shift_remove(&key)
    }

    /// Returns an iterator over the stored entries, in insertion order. Values are returned as
    /// stored, so unread nested data is still a [`Value::Map`].
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.iter())
    }

    /// Returns the value of the first entry.
    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, v)| v)
    }

    /// Returns the value of the last entry.
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, v)| v)
    }

    /// Returns the key of the first entry equal to `value`.
    pub fn find(&self, value: &Value) -> Option<&Key> {
        self.items.iter()
            .find(|(_, v)| *v == value)
            .map(|(k, _)| k)
    }

    /// Creates a new dict, with the same configuration, from the entries that `predicate`
    /// returns true for.
    pub fn filter<F>(&self, mut predicate: F) -> Dict
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        Dict {
            items: self.items.iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            delimiter: self.delimiter.clone(),
            policy: self.policy,
        }
    }

    /// Reorders the entries by comparing their keys.
    pub fn sort_keys_by<F>(&mut self, mut compare: F) -> &mut Dict
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.items.sort_by(|k1, _, k2, _| compare(k1, k2));
        self
    }

    /// Joins the [`Display`] form of every value with `separator`.
    pub fn concat(&self, separator: &str) -> String {
        Joined { items: self.values(), separator }.to_string()
    }

    /// Folds every entry into an accumulator, in order.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &Value, &Key) -> B,
    {
        self.iter().fold(init, |acc, (k, v)| f(acc, v, k))
    }
}

impl Dict {
    /// Splits `name` on the first occurrence of the delimiter, if there is one.
    pub(crate) fn split_path<'k>(&self, name: &'k str) -> Option<(&'k str, &'k str)> {
        name.split_once(self.delimiter.as_deref()?)
    }

    /// Creates an empty dict sharing this dict's configuration.
    pub(crate) fn child(&self) -> Dict {
        Dict {
            items: IndexMap::new(),
            delimiter: self.delimiter.clone(),
            policy: self.policy,
        }
    }

    /// Replaces a raw mapping stored directly under `key` with a child dict holding its entries.
    pub(crate) fn promote(&mut self, key: KeyRef<'_>) {
        let Some(slot) = self.items.get_mut(&key) else {
            return;
        };

        if let Value::Map(map) = slot {
            let items = mem::take(map);
            tracing::trace!(%key, len = items.len(), "promoting nested mapping to dict");
            *slot = Value::Dict(Dict {
                items,
                delimiter: self.delimiter.clone(),
                policy: self.policy,
            });
        }
    }

    pub(crate) fn set_key(&mut self, key: Key, value: Value) -> Result<(), DictError> {
        if let Key::Name(name) = &key
            && let Some((head, rest)) = self.split_path(name)
        {
            return self.set_path(name, head, rest, value);
        }

        self.items.insert(key, value);
        Ok(())
    }

    fn set_path(
        &mut self,
        path: &str,
        head: &str,
        rest: &str,
        value: Value,
    ) -> Result<(), DictError> {
        let occupied = match self.get_mut(head) {
            Some(Value::Dict(child)) => return child.set_key(rest.into(), value),
            Some(_) => true,
            None => false,
        };

        match self.policy {
            PathPolicy::Create if !occupied => {
                tracing::debug!(path, head, "creating dict for unresolved path");
                let mut child = self.child();
                child.set_key(rest.into(), value)?;
                self.items.insert(head.into(), Value::Dict(child));
                Ok(())
            },
            PathPolicy::Error => Err(MissingPath { path: path.to_owned() }.into()),
            _ => {
                tracing::debug!(path, head, "dropping write to unresolved path");
                Ok(())
            },
        }
    }
}

fn merge_maps(target: &mut RawMap, source: RawMap) {
    for (key, incoming) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, incoming),
            None => {
                target.insert(key, incoming);
            },
        }
    }
}

fn merge_value(existing: &mut Value, incoming: Value) {
    match (&mut *existing, incoming) {
        (Value::Map(map), Value::Map(other)) => merge_maps(map, other),
        (Value::Dict(dict), Value::Map(other)) => merge_maps(&mut dict.items, other),
        (Value::List(items), Value::List(other)) => items.extend(other),
        (Value::List(items), other) if !other.is_mapping() => items.push(other),
        (current, other) if current.is_mapping() || other.is_mapping() => *current = other,
        (current, Value::List(other)) => {
            let mut items = vec![mem::take(current)];
            items.extend(other);
            *current = Value::List(items);
        },
        (current, other) => {
            let old = mem::take(current);
            *current = Value::List(vec![old, other]);
        },
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Debug for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dict")
            .field("items", &DebugEntries(&self.items))
            .field("delimiter", &self.delimiter)
            .field("policy", &self.policy)
            .finish()
    }
}

impl Display for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (DebugRaw(k.to_string()), DebugRaw(v.to_string()))))
            .finish()
    }
}

struct DebugEntries<'a>(&'a RawMap);

impl Debug for DebugEntries<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| (DebugRaw(k.to_string()), v)))
            .finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dict::from_map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(), None)
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
