//! Core stream type and its primitive accessors
//!
//! A [`Stream`] is either `Empty` or a head value paired with a [`Thunk`] that
//! produces the rest of the stream when invoked. Thunks are never cached:
//! every call to [`Stream::tail`] runs the thunk again and hands back a fresh,
//! independently owned node.

use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::default_config;

/// Deferred computation of a stream's successor node
pub type Thunk<T> = Rc<dyn Fn() -> Stream<T>>;

/// Invoke a tail thunk. Every forcing in the crate goes through here so that
/// `trace_forcing` sees all of them.
pub(crate) fn force_thunk<T>(thunk: &Thunk<T>) -> Stream<T> {
    if log::log_enabled!(log::Level::Trace) && default_config().trace_forcing {
        log::trace!("Forcing stream tail");
    }
    thunk()
}

/// A lazy, possibly infinite sequence.
///
/// Cloning a stream clones its head and shares its thunk, so clones are cheap
/// and describe the same logical sequence.
pub enum Stream<T> {
    Empty,
    Cons(T, Thunk<T>),
}

impl<T> Stream<T> {
    /// The empty stream
    pub fn empty() -> Self {
        Stream::Empty
    }

    /// A node whose tail is computed by `tail` on every access.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: Fn() -> Stream<T> + 'static,
    {
        Stream::Cons(head, Rc::new(tail))
    }

    /// A one-element stream
    pub fn single(head: T) -> Self
    where
        T: 'static,
    {
        Stream::cons(head, Stream::empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Borrow the head without cloning it
    pub fn head_ref(&self) -> Option<&T> {
        match self {
            Stream::Empty => None,
            Stream::Cons(head, _) => Some(head),
        }
    }

    /// Force the tail thunk.
    ///
    /// Each call invokes the thunk again; the result is never cached on this node.
    pub fn tail(&self) -> StreamResult<Stream<T>> {
        match self {
            Stream::Empty => Err(StreamError::EmptyAccess { operation: "tail" }),
            Stream::Cons(_, thunk) => Ok(force_thunk(thunk)),
        }
    }

    /// Successor node, or `None` on an empty stream
    pub(crate) fn next_node(&self) -> Option<Stream<T>> {
        match self {
            Stream::Empty => None,
            Stream::Cons(_, thunk) => Some(force_thunk(thunk)),
        }
    }

    /// Number of elements. Only terminates for finite streams.
    pub fn length(&self) -> usize {
        let mut len = 0;
        let mut next = self.next_node();
        while let Some(node) = next {
            len += 1;
            next = node.next_node();
        }
        log::debug!("Measured stream length {}", len);
        len
    }
}

impl<T: Clone> Stream<T> {
    /// Clone of the first element
    pub fn head(&self) -> StreamResult<T> {
        self.head_ref()
            .cloned()
            .ok_or(StreamError::EmptyAccess { operation: "head" })
    }

    /// Element at `index`, forcing `index` tails from this node
    pub fn at(&self, index: usize) -> StreamResult<T> {
        let mut current = self.clone();
        for step in 0..index {
            current = current
                .next_node()
                .ok_or(StreamError::IndexOutOfRange { index, len: step })?;
        }
        current
            .head()
            .map_err(|_| StreamError::IndexOutOfRange { index, len: index })
    }
}

impl<T: fmt::Display> Stream<T> {
    /// Render the whole stream as `Head: a Next Head: b Next - End of Stream -`.
    ///
    /// Forces every tail, so the stream must be finite. Use
    /// [`Stream::render_bounded`] for streams that might not be.
    pub fn render_debug(&self) -> String {
        self.render_prefix(None)
    }

    /// Shared renderer; ends with `...` instead of the end marker when more than
    /// `limit` elements exist.
    pub(crate) fn render_prefix(&self, limit: Option<usize>) -> String {
        let mut out = String::new();
        let mut rest = match self {
            Stream::Empty => return END_OF_STREAM.to_string(),
            Stream::Cons(_, _) if limit == Some(0) => return TRUNCATED.to_string(),
            Stream::Cons(head, thunk) => {
                out.push_str(&format!("Head: {} Next ", head));
                force_thunk(thunk)
            }
        };
        let mut rendered = 1;
        loop {
            match rest {
                Stream::Empty => break,
                Stream::Cons(head, thunk) => {
                    if limit.is_some_and(|limit| rendered >= limit) {
                        out.push_str(TRUNCATED);
                        return out;
                    }
                    out.push_str(&format!("Head: {} Next ", head));
                    rendered += 1;
                    rest = force_thunk(&thunk);
                }
            }
        }
        out.push_str(END_OF_STREAM);
        out
    }
}

impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_debug())
    }
}

// Never forces the tail, so it is safe on infinite streams.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Empty => f.write_str("Empty"),
            Stream::Cons(head, _) => f.debug_tuple("Cons").field(head).field(&"<thunk>").finish(),
        }
    }
}

impl<T: Clone> Clone for Stream<T> {
    fn clone(&self) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(head, thunk) => Stream::Cons(head.clone(), Rc::clone(thunk)),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::Empty
    }
}

/// Terminator of the debug rendering
pub const END_OF_STREAM: &str = "- End of Stream -";

/// Terminator of a rendering cut short by a limit
pub const TRUNCATED: &str = "...";
