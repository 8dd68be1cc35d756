use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::{DrainSorted, Each, Order};
use crate::util::fmt::DebugRaw;

/// A priority queue that keeps its values in a list, sorting them only when they are read.
///
/// Values are appended with a priority and the list is sorted by priority (highest first unless
/// configured otherwise with [`Order`]) the next time it is read in order. The sort is cached
/// until the next insertion, so reading repeatedly is cheap. The relative order of values with
/// equal priorities is unspecified.
///
/// Reading with [`extract`](SortedQueue::extract) or [`each`](SortedQueue::each) doesn't remove
/// anything, use [`drain_sorted`](SortedQueue::drain_sorted) for that.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the SortedQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `delete` | `O(n)` |
/// | `sort` | `O(n log n)`, `O(1)` |
/// | `extract` | `O(n log n)`, `O(n)` |
///
/// \* Amortised, the backing list may have to grow.
pub struct SortedQueue<T, P: Ord = i64> {
    pub(crate) records: Vec<Record<T, P>>,
    pub(crate) sorted: bool,
    pub(crate) order: Order,
}

pub(crate) type Record<T, P> = (T, P);

impl<T, P: Ord> SortedQueue<T, P> {
    /// Creates an empty SortedQueue, that puts the highest priority first.
    pub const fn new() -> SortedQueue<T, P> {
        SortedQueue::with_order(Order::Descending)
    }

    /// Creates an empty SortedQueue that sorts in the provided `order`.
    pub const fn with_order(order: Order) -> SortedQueue<T, P> {
        SortedQueue {
            records: Vec::new(),
            sorted: true,
            order,
        }
    }

    pub const fn order(&self) -> Order {
        self.order
    }

    /// Returns the number of values in the SortedQueue.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the SortedQueue contains no values.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the values are currently in priority order. An empty queue is sorted, but
    /// any insertion, even into an empty queue, clears this until the next sort.
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Appends `value` with the provided `priority`.
    pub fn insert(&mut self, value: T, priority: P) -> &mut SortedQueue<T, P> {
        self.records.push((value, priority));
        self.sorted = false;
        self
    }

    /// Removes the first value equal to `value`, returning true if there was one. The other
    /// values keep their relative order, so this doesn't affect whether the queue is sorted.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.records.iter().position(|(v, _)| v == value) {
            Some(index) => {
                self.records.remove(index);
                true
            },
            None => false,
        }
    }

    /// Compares two priorities according to this queue's [`Order`]. With the default order,
    /// `Less` means `one` is higher and comes first.
    pub fn compare(&self, one: &P, two: &P) -> Ordering {
        self.order.compare(one, two)
    }

    /// Sorts the values by priority, if they aren't sorted already.
    pub fn sort(&mut self) -> &mut SortedQueue<T, P> {
        if !self.sorted {
            tracing::trace!(len = self.records.len(), order = ?self.order, "sorting queue");
            let order = self.order;
            self.records.sort_unstable_by(|(_, p1), (_, p2)| order.compare(p1, p2));
            self.sorted = true;
        }
        self
    }

    /// Sorts the queue and returns a copy of its values in priority order. The queue itself is
    /// left intact.
    pub fn extract(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.each().cloned().collect()
    }

    /// Sorts the queue and returns an iterator over its values in priority order.
    pub fn each(&mut self) -> Each<'_, T, P> {
        self.sort();
        Each(self.records.iter())
    }

    /// Sorts the queue and removes every value, returning them in priority order.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        self.sort();
        DrainSorted(self.records.drain(..))
    }

    /// Removes every value. The now empty queue is considered sorted.
    pub fn clear(&mut self) -> &mut SortedQueue<T, P> {
        self.records.clear();
        self.sorted = true;
        self
    }
}

impl<T, P: Ord> Default for SortedQueue<T, P> {
    fn default() -> Self {
        SortedQueue::new()
    }
}

impl<T: Clone, P: Ord + Clone> Clone for SortedQueue<T, P> {
    fn clone(&self) -> Self {
        SortedQueue {
            records: self.records.clone(),
            sorted: self.sorted,
            order: self.order,
        }
    }
}

impl<T, P: Ord> Extend<(T, P)> for SortedQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        let len = self.records.len();
        self.records.extend(iter);
        if self.records.len() != len {
            self.sorted = false;
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for SortedQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = SortedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug, P: Ord + Debug> Debug for SortedQueue<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedQueue")
            .field("records", &DebugRecords(&self.records))
            .field("sorted", &self.sorted)
            .field("order", &self.order)
            .finish()
    }
}

struct DebugRecords<'a, T, P>(&'a [Record<T, P>]);

impl<T: Debug, P: Debug> Debug for DebugRecords<'_, T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(v, p)| DebugRaw(format!("{v:?} @ {p:?}"))))
            .finish()
    }
}
