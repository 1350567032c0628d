//! Numeric stream operations: add, scale, sum, plus the prime sieve and
//! Fibonacci streams built from them
use std::ops::{Add, Mul};
use std::rc::Rc;

use super::combinators::StreamExt;
use super::constructors::{range_from, recur};
use super::core::{force_thunk, Stream};
use super::utility::UtilityStreamExt;

/// Extension trait for streams of numbers.
///
/// `T::default()` is used as zero, which holds for every primitive numeric type.
pub trait NumericStreamExt<T> {
    /// Elementwise sum; the longer stream's remainder is kept as is
    fn add(&self, other: &Stream<T>) -> Stream<T>;

    /// Multiply every element by `factor`
    fn scale(&self, factor: T) -> Stream<T>;

    /// Sum of all elements. Finite streams only.
    fn sum(&self) -> T;
}

impl<T> NumericStreamExt<T> for Stream<T>
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T> + 'static,
{
    fn add(&self, other: &Stream<T>) -> Stream<T> {
        self.zip(other, |x, y| x + y)
    }

    fn scale(&self, factor: T) -> Stream<T> {
        self.map(move |x| x * factor)
    }

    fn sum(&self) -> T {
        self.fold_left(T::default(), |acc, x| acc + x)
    }
}

/// Sieve of Eratosthenes over `source`: emit the head, then sieve the tail
/// with every multiple of that head removed.
///
/// A zero head removes nothing rather than dividing by zero.
pub fn sieve(source: &Stream<i64>) -> Stream<i64> {
    match source {
        Stream::Empty => Stream::Empty,
        Stream::Cons(prime, thunk) => {
            let prime = *prime;
            let thunk = Rc::clone(thunk);
            Stream::cons(prime, move || {
                sieve(&force_thunk(&thunk).filter(move |n| n.checked_rem(prime) != Some(0)))
            })
        }
    }
}

/// The primes, sieved from `2, 3, 4, ...`
pub fn primes() -> Stream<i64> {
    sieve(&range_from(2))
}

/// `1, 1, 2, 3, 5, 8, ...`
pub fn fibonacci() -> Stream<i64> {
    recur(1, 1, |prev, prev_prev| prev + prev_prev)
}
