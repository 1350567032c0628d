//! Lazy, possibly infinite streams.
//!
//! A [`Stream`] is `Empty` or a head plus a thunk that computes the rest on
//! demand. Finite streams come from eager data, infinite ones from
//! corecursive rules, and the combinator traits transform both without
//! forcing more of a stream than the caller asks for.
//!
//! ```
//! use lazy_stream::{primes, range_from, StreamExt, UtilityStreamExt};
//!
//! let evens = range_from(1).map(|x| x * 2);
//! assert_eq!(evens.materialize(3), vec![2, 4, 6]);
//! assert_eq!(primes().materialize(5), vec![2, 3, 5, 7, 11]);
//! ```

pub mod error;
pub mod stream_configuration;
pub mod stream;

// Re-export the stream API at the crate root
pub use stream::{
    accumulate, cycle, describe, fibonacci, fix, from_items, from_sequence, iterate, naturals,
    ones, primes, range, range_from, recur, repeat, replicate, sieve, successors, Deferred, Iter,
    NumericStreamExt, Stream, StreamExt, Thunk, UtilityStreamExt, END_OF_STREAM, TRUNCATED,
};
pub use error::{StreamError, StreamResult};
pub use stream_configuration::{default_config, StreamConfig};
