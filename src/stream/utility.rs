//! Eager traversals: fold_left, fold_right, reduce, member, index_of, equals,
//! walk, materialize, plus the std `Iterator` bridge
//!
//! Everything in this module consumes elements as it goes. On an infinite
//! stream the folds, `walk` and `equals` only terminate when they can stop
//! early; bound the stream with `take` or `take_while` first.
use std::mem;

use super::core::{force_thunk, Stream, Thunk};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::StreamConfig;

/// Iterator over the elements of a stream.
///
/// A tail is forced only when the element after it is requested, so taking
/// `n` items forces `n - 1` tails.
pub struct Iter<T> {
    state: IterState<T>,
}

enum IterState<T> {
    Start(Stream<T>),
    After(Thunk<T>),
    Done,
}

impl<T> Iter<T> {
    pub(crate) fn new(stream: Stream<T>) -> Self {
        Self {
            state: IterState::Start(stream),
        }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match mem::replace(&mut self.state, IterState::Done) {
            IterState::Start(node) => node,
            IterState::After(thunk) => force_thunk(&thunk),
            IterState::Done => return None,
        };
        match node {
            Stream::Empty => None,
            Stream::Cons(head, thunk) => {
                self.state = IterState::After(thunk);
                Some(head)
            }
        }
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T: Clone> IntoIterator for &Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.clone())
    }
}

/// Extension trait providing eager traversals over a stream
pub trait UtilityStreamExt<T> {
    /// Iterate over the elements
    fn iter(&self) -> Iter<T>;

    /// `f(f(init, s0), s1)...`. Finite streams only.
    fn fold_left<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A;

    /// `f(s0, f(s1, ... f(sn, init)))`. Finite streams only.
    fn fold_right<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(T, A) -> A;

    /// `fold_left` seeded with the first element; `EmptyReduce` on an empty stream
    fn reduce<F>(&self, f: F) -> StreamResult<T>
    where
        F: FnMut(T, T) -> T;

    /// Whether `item` occurs in the stream
    fn member(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Position of the first occurrence of `item`
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Elementwise equality. Never returns for two equal infinite streams.
    fn equals(&self, other: &Stream<T>) -> bool
    where
        T: PartialEq;

    /// Run `action` on every element
    fn walk<F>(&self, action: F)
    where
        F: FnMut(T);

    /// Collect the first `n` elements
    fn materialize(&self, n: usize) -> Vec<T>;

    /// Collect `config.preview_len` elements
    fn materialize_preview(&self, config: &StreamConfig) -> Vec<T>;
}

impl<T: Clone> UtilityStreamExt<T> for Stream<T> {
    fn iter(&self) -> Iter<T> {
        Iter::new(self.clone())
    }

    fn fold_left<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, f)
    }

    // Buffered rather than recursive so long finite streams cannot overflow the stack.
    fn fold_right<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        let items: Vec<T> = self.iter().collect();
        items.into_iter().rev().fold(init, |acc, item| f(item, acc))
    }

    fn reduce<F>(&self, f: F) -> StreamResult<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut items = self.iter();
        let first = items.next().ok_or(StreamError::EmptyReduce)?;
        Ok(items.fold(first, f))
    }

    fn member(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == *item)
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == *item)
    }

    fn equals(&self, other: &Stream<T>) -> bool
    where
        T: PartialEq,
    {
        let (mut left, mut right) = (self.iter(), other.iter());
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => continue,
                _ => return false,
            }
        }
    }

    fn walk<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        let mut visited = 0usize;
        for item in self.iter() {
            action(item);
            visited += 1;
        }
        log::debug!("Walked {} stream elements", visited);
    }

    fn materialize(&self, n: usize) -> Vec<T> {
        let items: Vec<T> = self.iter().take(n).collect();
        log::debug!("Materialized {} of {} requested elements", items.len(), n);
        items
    }

    fn materialize_preview(&self, config: &StreamConfig) -> Vec<T> {
        self.materialize(config.preview_len)
    }
}

impl<T: PartialEq + Clone> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
