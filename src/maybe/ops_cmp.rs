//! Comparison, hashing, and formatting.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::container::Maybe;

impl<T, U> PartialEq<Maybe<U>> for Maybe<T>
where
    T: PartialEq<U>,
{
    /// Two empties are equal; an empty and a present container are unequal
    /// in both directions; two present containers compare their values.
    fn eq(&self, other: &Maybe<U>) -> bool {
        match (self.slot.get(), other.slot.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Presence discriminant first, then the value.
        match self.slot.get() {
            Some(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(v) => f.debug_tuple("Maybe").field(v).finish(),
            None => f.write_str("Maybe::empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Renders the stored value when present and nothing when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(v) => v.fmt(f),
            None => Ok(()),
        }
    }
}
