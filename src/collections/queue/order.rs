use std::cmp::Ordering;

/// The direction a [`SortedQueue`](super::SortedQueue) is sorted in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Highest priority first.
    #[default]
    Descending,
    /// Lowest priority first.
    Ascending,
}

impl Order {
    /// Compares two priorities, returning [`Ordering::Less`] if `one` should come before `two`.
    pub fn compare<P: Ord>(self, one: &P, two: &P) -> Ordering {
        match self {
            Order::Descending => two.cmp(one),
            Order::Ascending => one.cmp(two),
        }
    }
}
