//! Deferred binding for self-referential streams
//!
//! A stream such as `ones = 1 : ones` refers to itself from inside its own
//! tail thunk. [`Deferred`] is the single-assignment slot that makes this
//! expressible: thunks capture the slot and forcing it reads the stream back.
//!
//! [`fix`] binds the slot to the *definition* rather than to the node it
//! returned, and forcing the slot rebuilds the head from that definition. The
//! definition receives the slot as an argument instead of capturing it, so the
//! slot never owns a thunk that owns the slot. Every node holding the slot,
//! however deep in the stream, keeps the definition alive on its own.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::core::Stream;
use crate::error::{StreamError, StreamResult};

enum Binding<T> {
    Stream(Stream<T>),
    Definition(Rc<dyn Fn(Deferred<T>) -> Stream<T>>),
}

/// Single-assignment handle to a stream that is defined in terms of itself.
pub struct Deferred<T> {
    slot: Rc<OnceCell<Binding<T>>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deferred<T> {
    /// Create an unbound slot
    pub fn new() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    fn set(&self, binding: Binding<T>) -> StreamResult<()> {
        self.slot.set(binding).map_err(|_| {
            log::warn!("Attempted to bind a deferred stream twice");
            StreamError::AlreadyBound
        })
    }
}

impl<T: Clone> Deferred<T> {
    /// Bind the slot to an already built `stream`. A slot can be bound exactly once.
    ///
    /// The slot keeps `stream` alive. A stream whose thunks capture this same
    /// slot would then own itself and never be freed; build those with [`fix`].
    pub fn bind(&self, stream: &Stream<T>) -> StreamResult<()> {
        self.set(Binding::Stream(stream.clone()))
    }

    /// Read back the bound stream.
    pub fn try_force(&self) -> StreamResult<Stream<T>> {
        match self.slot.get() {
            None => Err(StreamError::Unbound),
            Some(Binding::Stream(stream)) => Ok(stream.clone()),
            Some(Binding::Definition(define)) => Ok(define(self.clone())),
        }
    }

    /// Read back the bound stream from inside a tail thunk.
    ///
    /// # Panics
    ///
    /// Panics when the slot is still unbound. Slots handed out by [`fix`] are
    /// bound before any thunk can run, so this only fires for a slot created
    /// with [`Deferred::new`] and forced before [`Deferred::bind`].
    pub fn force(&self) -> Stream<T> {
        match self.try_force() {
            Ok(stream) => stream,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Build a stream that refers to itself.
///
/// `define` receives the slot, captures it in the thunks it builds, and
/// returns the stream. Forcing the slot runs `define` again to rebuild the
/// head, so `define` should only construct nodes and leave the work to thunks.
///
/// ```
/// use lazy_stream::{fix, Stream, StreamExt, UtilityStreamExt};
///
/// let ones = fix(|ones| Stream::cons(1, move || ones.force()));
/// assert_eq!(ones.materialize(3), vec![1, 1, 1]);
///
/// let rest = fix(|me| Stream::cons(1, move || {
///     let me = me.clone();
///     Stream::cons(-1, move || me.force())
/// }))
/// .drop(3);
/// assert_eq!(rest.materialize(3), vec![-1, 1, -1]);
/// ```
pub fn fix<T, F>(define: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(Deferred<T>) -> Stream<T> + 'static,
{
    let define: Rc<dyn Fn(Deferred<T>) -> Stream<T>> = Rc::new(define);
    let slot = Deferred {
        slot: Rc::new(OnceCell::with_value(Binding::Definition(Rc::clone(&define)))),
    };
    define(slot)
}
