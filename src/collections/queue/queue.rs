use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use super::{IndexOutOfBounds, Iter, QueueError};

/// A sequence of values addressed by their position, that can be consumed from either end.
///
/// Positions are always dense: removing a value shifts every later value down by one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `get` | `O(1)` |
/// | `pop` / `shift` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `find` | `O(n)` |
///
/// \* Amortised, the backing buffer may have to grow.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    pub(crate) items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            items: VecDeque::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the value at `index`, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns true if there is a value at `index`.
    pub fn exists(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Appends `value` to the back of the Queue.
    pub fn insert(&mut self, value: T) -> &mut Queue<T> {
        self.items.push_back(value);
        self
    }

    /// Removes and returns the value at the back of the Queue.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Removes and returns the value at the front of the Queue.
    pub fn shift(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    /// [`IndexOutOfBounds`] if there is no value at `index`.
    pub fn update(&mut self, index: usize, value: T) -> Result<&mut Queue<T>, QueueError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => *slot = value,
            None => return Err(IndexOutOfBounds { index, len }.into()),
        }
        Ok(self)
    }

    /// Removes and returns the value at `index`, moving every later value down by one.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    /// Returns the index of the first value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|v| v == value)
    }

    /// Retains only the values that `predicate` returns true for, keeping their order.
    pub fn filter<F>(&mut self, predicate: F) -> &mut Queue<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
        self
    }

    /// Returns a copy of every value, front to back.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("items", &self.items)
            .field("len", &self.len())
            .finish()
    }
}
