//! Lazy stream combinators: map, filter, take, drop, take_while, drop_while,
//! append, prepend, zip, inspect, memoize
//!
//! Every combinator here returns a new stream and leaves its input untouched.
//! Heads are computed when a node is produced; tails are only forced when the
//! caller asks for them.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::core::{force_thunk, Stream};

/// Extension trait providing the lazy stream combinators
pub trait StreamExt<T> {
    /// Apply `f` to every element
    fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static;

    /// Keep only the elements matching `pred`.
    ///
    /// Producing a node searches forward until a match is found. On an infinite
    /// stream with no further match that search never ends.
    fn filter<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static;

    /// The first `n` elements
    fn take(&self, n: usize) -> Stream<T>;

    /// Everything after the first `n` elements
    fn drop(&self, n: usize) -> Stream<T>;

    /// The longest prefix whose elements match `pred`
    fn take_while<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static;

    /// The suffix starting at the first element that does not match `pred`
    fn drop_while<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool;

    /// `self` followed by `other`. `other` is not forced until `self` runs out.
    fn append(&self, other: &Stream<T>) -> Stream<T>;

    /// `item` followed by `self`
    fn prepend(&self, item: T) -> Stream<T>;

    /// Combine elements pairwise with `f`.
    ///
    /// When one side runs out, the rest of the other side is returned as is,
    /// so the result is as long as the longer input.
    fn zip<F>(&self, other: &Stream<T>, f: F) -> Stream<T>
    where
        F: Fn(T, T) -> T + 'static;

    /// Call `f` on each element as its node is produced
    fn inspect<F>(&self, f: F) -> Stream<T>
    where
        F: Fn(&T) + 'static;

    /// Memoizing view of the stream: each tail is forced at most once and the
    /// resulting node is shared by every clone.
    fn memoize(&self) -> Stream<T>;
}

impl<T: Clone + 'static> StreamExt<T> for Stream<T> {
    fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map_with(self, Rc::new(f))
    }

    fn filter<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        filter_with(self, Rc::new(pred))
    }

    fn take(&self, n: usize) -> Stream<T> {
        match self {
            Stream::Cons(head, _) if n == 1 => Stream::single(head.clone()),
            Stream::Cons(head, thunk) if n > 1 => {
                let thunk = Rc::clone(thunk);
                Stream::cons(head.clone(), move || force_thunk(&thunk).take(n - 1))
            }
            _ => Stream::Empty,
        }
    }

    fn drop(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        for _ in 0..n {
            match current.next_node() {
                Some(next) => current = next,
                None => return Stream::Empty,
            }
        }
        current
    }

    fn take_while<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        take_while_with(self, Rc::new(pred))
    }

    fn drop_while<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut current = self.clone();
        loop {
            let next = match &current {
                Stream::Cons(head, thunk) if pred(head) => force_thunk(thunk),
                _ => break,
            };
            current = next;
        }
        current
    }

    fn append(&self, other: &Stream<T>) -> Stream<T> {
        match self {
            Stream::Empty => other.clone(),
            Stream::Cons(head, thunk) => {
                let thunk = Rc::clone(thunk);
                let other = other.clone();
                Stream::cons(head.clone(), move || force_thunk(&thunk).append(&other))
            }
        }
    }

    fn prepend(&self, item: T) -> Stream<T> {
        let rest = self.clone();
        Stream::cons(item, move || rest.clone())
    }

    fn zip<F>(&self, other: &Stream<T>, f: F) -> Stream<T>
    where
        F: Fn(T, T) -> T + 'static,
    {
        zip_with(self, other, Rc::new(f))
    }

    fn inspect<F>(&self, f: F) -> Stream<T>
    where
        F: Fn(&T) + 'static,
    {
        inspect_with(self, Rc::new(f))
    }

    fn memoize(&self) -> Stream<T> {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(head, thunk) => {
                let thunk = Rc::clone(thunk);
                let forced: OnceCell<Stream<T>> = OnceCell::new();
                Stream::cons(head.clone(), move || {
                    forced.get_or_init(|| force_thunk(&thunk).memoize()).clone()
                })
            }
        }
    }
}

fn map_with<T, U>(stream: &Stream<T>, f: Rc<dyn Fn(T) -> U>) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
{
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Cons(head, thunk) => {
            let mapped = f(head.clone());
            let thunk = Rc::clone(thunk);
            Stream::cons(mapped, move || map_with(&force_thunk(&thunk), Rc::clone(&f)))
        }
    }
}

// Iterative so long runs of rejected elements do not grow the call stack.
fn filter_with<T>(stream: &Stream<T>, pred: Rc<dyn Fn(&T) -> bool>) -> Stream<T>
where
    T: Clone + 'static,
{
    let mut current = stream.clone();
    loop {
        match current {
            Stream::Empty => return Stream::Empty,
            Stream::Cons(head, thunk) => {
                if pred(&head) {
                    return Stream::cons(head, move || filter_with(&force_thunk(&thunk), Rc::clone(&pred)));
                }
                current = force_thunk(&thunk);
            }
        }
    }
}

fn take_while_with<T>(stream: &Stream<T>, pred: Rc<dyn Fn(&T) -> bool>) -> Stream<T>
where
    T: Clone + 'static,
{
    match stream {
        Stream::Cons(head, thunk) if pred(head) => {
            let thunk = Rc::clone(thunk);
            Stream::cons(head.clone(), move || take_while_with(&force_thunk(&thunk), Rc::clone(&pred)))
        }
        _ => Stream::Empty,
    }
}

fn zip_with<T>(left: &Stream<T>, right: &Stream<T>, f: Rc<dyn Fn(T, T) -> T>) -> Stream<T>
where
    T: Clone + 'static,
{
    match (left, right) {
        (Stream::Empty, _) => right.clone(),
        (_, Stream::Empty) => left.clone(),
        (Stream::Cons(left_head, left_tail), Stream::Cons(right_head, right_tail)) => {
            let combined = f(left_head.clone(), right_head.clone());
            let (left_tail, right_tail) = (Rc::clone(left_tail), Rc::clone(right_tail));
            Stream::cons(combined, move || {
                zip_with(&force_thunk(&left_tail), &force_thunk(&right_tail), Rc::clone(&f))
            })
        }
    }
}

fn inspect_with<T>(stream: &Stream<T>, f: Rc<dyn Fn(&T)>) -> Stream<T>
where
    T: Clone + 'static,
{
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Cons(head, thunk) => {
            f(head);
            let thunk = Rc::clone(thunk);
            Stream::cons(head.clone(), move || inspect_with(&force_thunk(&thunk), Rc::clone(&f)))
        }
    }
}
