//! Lazy streams built from a head and a deferred tail
//!
//! This module provides the [`Stream`] type, the constructors that build finite
//! and infinite streams, and the extension traits carrying the combinators.

pub mod core;
pub mod deferred;
pub mod constructors;
pub mod combinators;
pub mod utility;
pub mod numeric;
pub mod render;

// Re-export core types
pub use self::core::{Stream, Thunk, END_OF_STREAM, TRUNCATED};

// Re-export deferred binding
pub use deferred::{fix, Deferred};

// Re-export constructors
pub use constructors::{
    accumulate, cycle, from_items, from_sequence, iterate, naturals, ones, range, range_from,
    recur, repeat, replicate, successors,
};

// Re-export combinators
pub use combinators::StreamExt;

// Re-export traversals
pub use utility::{Iter, UtilityStreamExt};

// Re-export numeric helpers
pub use numeric::{fibonacci, primes, sieve, NumericStreamExt};

pub use render::describe;
