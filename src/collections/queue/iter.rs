use std::collections::vec_deque::{IntoIter as DequeIntoIter, Iter as DequeIter};
use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;
use std::vec::Drain;

use super::{Queue, Record};

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.items.into_iter())
    }
}

pub struct IntoIter<T>(pub(crate) DequeIntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.items.iter())
    }
}

pub struct Iter<'a, T>(pub(crate) DequeIter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A borrowed iterator over the values of a [`SortedQueue`](super::SortedQueue), in priority
/// order. Created by [`SortedQueue::each`](super::SortedQueue::each).
pub struct Each<'a, T, P>(pub(crate) SliceIter<'a, Record<T, P>>);

impl<'a, T, P> Iterator for Each<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, P> ExactSizeIterator for Each<'_, T, P> {}

impl<T, P> FusedIterator for Each<'_, T, P> {}

/// An owned iterator over the values removed from a
/// [`SortedQueue`](super::SortedQueue), in priority order. Values that aren't consumed are still
/// removed when this is dropped.
pub struct DrainSorted<'a, T, P>(pub(crate) Drain<'a, Record<T, P>>);

impl<T, P> Iterator for DrainSorted<'_, T, P> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, P> ExactSizeIterator for DrainSorted<'_, T, P> {}
