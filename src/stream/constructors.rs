//! Stream constructors: from_items, from_sequence, range, cycle, iterate, repeat,
//! replicate, recur, successors, accumulate, naturals, ones
use std::iter::FromIterator;
use std::rc::Rc;

use super::combinators::StreamExt;
use super::core::Stream;
use super::deferred::fix;
use super::numeric::NumericStreamExt;
use crate::error::{StreamError, StreamResult};

// ================================
// Eager Sources
// ================================

/// Build a finite stream from a list of items, e.g. `stream![10, 20, 30]`.
#[macro_export]
macro_rules! stream {
    () => {
        $crate::Stream::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::stream::from_items(vec![$($item),+])
    };
}

/// Create a finite stream holding `items` in order
pub fn from_items<T>(items: Vec<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    from_shared(Rc::from(items), 0)
}

/// Create a finite stream from any eagerly available ordered collection
pub fn from_sequence<I>(seq: I) -> Stream<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + 'static,
{
    from_items(seq.into_iter().collect())
}

fn from_shared<T>(items: Rc<[T]>, index: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    match items.get(index) {
        None => Stream::Empty,
        Some(head) => {
            let head = head.clone();
            Stream::cons(head, move || from_shared(Rc::clone(&items), index + 1))
        }
    }
}

impl<T: Clone + 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_sequence(iter)
    }
}

// ================================
// Integer Ranges
// ================================

/// Ascending integers from `low`.
///
/// With `high = Some(h)` the stream stops after emitting `h`; `low == h`
/// yields the single element `[low]` and `h < low` yields the empty stream.
/// With `high = None` the stream is unbounded, ending only at `i64::MAX`.
pub fn range(low: i64, high: Option<i64>) -> Stream<i64> {
    match high {
        Some(high) if high < low => Stream::Empty,
        Some(high) if high == low => Stream::single(low),
        _ => Stream::cons(low, move || match low.checked_add(1) {
            Some(next) => range(next, high),
            None => Stream::Empty,
        }),
    }
}

/// Unbounded ascending integers from `low`
pub fn range_from(low: i64) -> Stream<i64> {
    range(low, None)
}

// ================================
// Infinite Generators
// ================================

/// Infinitely repeat a non-empty pattern
pub fn cycle<T>(items: Vec<T>) -> StreamResult<Stream<T>>
where
    T: Clone + 'static,
{
    if items.is_empty() {
        log::warn!("Rejected cycle over an empty pattern");
        return Err(StreamError::EmptyPattern);
    }
    Ok(cycle_from(Rc::from(items), 0))
}

fn cycle_from<T>(pattern: Rc<[T]>, index: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    let head = pattern[index].clone();
    let next = (index + 1) % pattern.len();
    Stream::cons(head, move || cycle_from(Rc::clone(&pattern), next))
}

/// `f(seed), f(f(seed)), ...`; the seed itself is not emitted
pub fn iterate<T, F>(seed: T, f: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    let f: Rc<dyn Fn(T) -> T> = Rc::new(f);
    successors_with(f(seed), f)
}

/// `head, f(head), f(f(head)), ...`; unlike [`iterate`] the seed is emitted first
pub fn successors<T, F>(head: T, f: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    successors_with(head, Rc::new(f))
}

fn successors_with<T>(head: T, f: Rc<dyn Fn(T) -> T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let seed = head.clone();
    Stream::cons(head, move || successors_with(f(seed.clone()), Rc::clone(&f)))
}

/// Infinite constant stream
pub fn repeat<T>(item: T) -> Stream<T>
where
    T: Clone + 'static,
{
    let next = item.clone();
    Stream::cons(item, move || repeat(next.clone()))
}

/// Finite constant stream of length `n`
pub fn replicate<T>(item: T, n: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    repeat(item).take(n)
}

/// Two-seed recurrence: `x0, y0, f(y0, x0), ...` where every new element is
/// `f(previous, one_before_previous)`.
///
/// Each element is computed when the node holding it is produced, never earlier.
pub fn recur<T, F>(x0: T, y0: T, f: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    let f: Rc<dyn Fn(T, T) -> T> = Rc::new(f);
    Stream::cons(x0.clone(), move || {
        let (prev_prev, prev, f) = (x0.clone(), y0.clone(), Rc::clone(&f));
        Stream::cons(y0.clone(), move || recur_step(prev_prev.clone(), prev.clone(), Rc::clone(&f)))
    })
}

fn recur_step<T>(prev_prev: T, prev: T, f: Rc<dyn Fn(T, T) -> T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let next = f(prev.clone(), prev_prev);
    let head = next.clone();
    Stream::cons(head, move || recur_step(prev.clone(), next.clone(), Rc::clone(&f)))
}

/// `head, f(head, operand), f(f(head, operand), operand), ...`
///
/// `accumulate(2, 2, |x, y| x * y)` is the powers of two.
pub fn accumulate<T, F>(head: T, operand: T, f: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    successors(head, move |acc| f(acc, operand.clone()))
}

// ================================
// Self-referential Streams
// ================================

/// `1, 1, 1, ...` defined as the stream whose tail is itself
pub fn ones() -> Stream<i64> {
    fix(|ones| Stream::cons(1, move || ones.force()))
}

/// `1, 2, 3, ...` defined as `1 : (naturals + ones)`
pub fn naturals() -> Stream<i64> {
    fix(|naturals| Stream::cons(1, move || naturals.force().add(&ones())))
}
