//! Transforming combinators.
//!
//! All of these are total: an empty receiver substitutes a default (vacant
//! result, `U::default()`, or the absent-branch closure) instead of failing.
//! Closures receive a reference to the stored value, never ownership, so the
//! container is already consistent when user code runs and an unwinding
//! closure cannot corrupt it.

use super::container::Maybe;

impl<T> Maybe<T> {
    /// Applies `f` to the stored value and wraps the result.
    ///
    /// Empty in, empty out: `f` is not invoked on an empty container.
    ///
    /// The difference between `map(f)` and [`apply(f)`](Self::apply) is that
    /// `map` wraps the return value of `f` in a new container, while `apply`
    /// returns it unwrapped, substituting `U::default()` when empty.
    #[inline]
    pub fn map<U, F>(&self, f: F) -> Maybe<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self.slot.get() {
            Some(v) => Maybe::new(f(v)),
            None => Maybe::empty(),
        }
    }

    /// Applies `f` to the stored value and returns the result unwrapped,
    /// or `U::default()` if the container is empty.
    #[inline]
    pub fn apply<U, F>(&self, f: F) -> U
    where
        U: Default,
        F: FnOnce(&T) -> U,
    {
        match self.slot.get() {
            Some(v) => f(v),
            None => U::default(),
        }
    }

    /// Applies `f` to the stored value, or calls `g` if the container is
    /// empty. Exactly one of the two runs.
    #[inline]
    pub fn apply_or<U, F, G>(&self, f: F, g: G) -> U
    where
        F: FnOnce(&T) -> U,
        G: FnOnce() -> U,
    {
        match self.slot.get() {
            Some(v) => f(v),
            None => g(),
        }
    }

    /// Keeps the stored value only if `p` accepts it.
    ///
    /// An empty container stays empty and `p` is not invoked. A rejected
    /// value is dropped and a fresh empty container is returned; the result
    /// never aliases shared state.
    #[inline]
    pub fn filter<P>(self, p: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match self.slot.get() {
            Some(v) => p(v),
            None => true,
        };
        if keep {
            self
        } else {
            Maybe::empty()
        }
    }
}
