//! Side-effecting combinators that return the receiver for chaining.

use super::container::Maybe;

impl<T> Maybe<T> {
    /// Invokes `f` with the stored value if one is present; no-op otherwise.
    ///
    /// Returns the receiver unchanged so calls can be chained:
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// Maybe::new(3)
    ///     .if_present(|v| println!("got {v}"))
    ///     .or_else(|| println!("nothing"));
    /// ```
    ///
    /// Chained `if_present(f).or_else(g)` runs exactly one of `f`/`g` per
    /// call, matching presence at call time.
    #[inline]
    pub fn if_present<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(v) = self.slot.get() {
            f(v);
        }
        self
    }

    /// Invokes `f` if the container is empty; no-op otherwise.
    ///
    /// Returns the receiver unchanged for chaining.
    #[inline]
    pub fn or_else<F>(&self, f: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            f();
        }
        self
    }
}
