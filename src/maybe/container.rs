//! `Maybe` — a value that may be absent.
//!
//! This is the ergonomic, safe wrapper over the crate-private raw slot. It is
//! intentionally "thin": presence is a single flag check, and value access
//! compiles down to a branch plus a reference into inline storage. No
//! operation allocates.
//!
//! Implementation is split into small submodules (see `ops_*` siblings).

use crate::slot::RawSlot;

use super::error::EmptyValueError;

/// A container holding zero or one value of `T`, stored inline.
///
/// Unlike [`Option`], the empty-access failure mode is a recoverable
/// [`EmptyValueError`] carrying the call site, and the combinator surface
/// (`if_present`/`or_else`/`map`/`apply`/`filter`) branches on presence
/// internally so callers do not have to.
///
/// ```rust
/// use maybe::Maybe;
///
/// let m = Maybe::new(4);
/// assert_eq!(m.map(|v| v.to_string()).value().unwrap(), "4");
/// assert!(Maybe::<i32>::empty().map(|v| v.to_string()).is_empty());
/// ```
pub struct Maybe<T> {
    pub(super) slot: RawSlot<T>,
}

impl<T> Maybe<T> {
    /// Creates an empty container. No `T` is constructed.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            slot: RawSlot::vacant(),
        }
    }

    /// Creates a container holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            slot: RawSlot::filled(value),
        }
    }

    /// Returns `true` if the container holds no value.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.slot.is_occupied()
    }

    /// Returns `true` if the container holds a value.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns a reference to the stored value.
    ///
    /// # Errors
    /// Returns [`EmptyValueError`] capturing the caller's location if the
    /// container is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> Result<&T, EmptyValueError> {
        // Direct match so `#[track_caller]` reports the user's call site,
        // not a closure inside a combinator.
        match self.slot.get() {
            Some(v) => Ok(v),
            None => Err(EmptyValueError::new()),
        }
    }

    /// Returns an exclusive reference to the stored value.
    ///
    /// # Errors
    /// Returns [`EmptyValueError`] capturing the caller's location if the
    /// container is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyValueError> {
        match self.slot.get_mut() {
            Some(v) => Ok(v),
            None => Err(EmptyValueError::new()),
        }
    }

    /// Consumes the container and returns the stored value.
    ///
    /// # Errors
    /// Returns [`EmptyValueError`] capturing the caller's location if the
    /// container is empty.
    #[inline]
    #[track_caller]
    pub fn into_value(mut self) -> Result<T, EmptyValueError> {
        match self.slot.take() {
            Some(v) => Ok(v),
            None => Err(EmptyValueError::new()),
        }
    }

    /// Returns a copy of the stored value, or `default` if empty.
    ///
    /// `default` is evaluated by the caller regardless of presence; see
    /// [`value_or_else`](Self::value_or_else) for a lazy default.
    #[inline]
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.slot.get() {
            Some(v) => v.clone(),
            None => default,
        }
    }

    /// Returns a copy of the stored value, or `f()` if empty.
    ///
    /// `f` is invoked only when the container is empty.
    #[inline]
    pub fn value_or_else<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.slot.get() {
            Some(v) => v.clone(),
            None => f(),
        }
    }

    /// Drops the stored value, if any, leaving the container empty.
    ///
    /// Idempotent: clearing an empty container does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.slot.clear();
    }

    /// Stores `value`, dropping any prior occupant first.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot.fill(value);
    }

    /// Moves the contents out, unconditionally leaving `self` empty.
    ///
    /// This is the in-place form of move assignment: after
    /// `let b = a.take();` the source is observably empty and `b` owns
    /// whatever `a` held.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        match self.slot.take() {
            Some(v) => Maybe::new(v),
            None => Maybe::empty(),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Equivalent to [`Maybe::empty`].
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self.slot.get() {
            Some(v) => Self::new(v.clone()),
            None => Self::empty(),
        }
    }

    /// Copy assignment with the strong guarantee: the source value is cloned
    /// before the destination is disturbed, so a panicking `T::clone` leaves
    /// `self` with its pre-call contents.
    fn clone_from(&mut self, source: &Self) {
        match source.slot.get() {
            Some(v) => self.slot.fill(v.clone()),
            None => self.slot.clear(),
        }
    }
}
