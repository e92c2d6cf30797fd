//! Payload conversion and `Option` interop.

use super::container::Maybe;

impl<T> Maybe<T> {
    /// Converts the payload type, consuming the container.
    ///
    /// A present value is converted via `Into`; an empty container yields an
    /// empty `Maybe<U>`.
    #[inline]
    pub fn convert<U>(mut self) -> Maybe<U>
    where
        T: Into<U>,
    {
        match self.slot.take() {
            Some(v) => Maybe::new(v.into()),
            None => Maybe::empty(),
        }
    }

    /// Cross-type copy assignment: replaces the contents of `self` with a
    /// converted copy of `other`'s value, or clears `self` if `other` is
    /// empty.
    ///
    /// The copy is converted before `self` is disturbed, so a panicking
    /// `U::clone` leaves `self` with its pre-call contents.
    #[inline]
    pub fn assign_from<U>(&mut self, other: &Maybe<U>)
    where
        U: Clone + Into<T>,
    {
        match other.slot.get() {
            Some(v) => self.slot.fill(v.clone().into()),
            None => self.slot.clear(),
        }
    }

    /// Builds a container from a standard `Option`.
    ///
    /// An inherent function rather than a `From` impl: `Maybe::from(opt)`
    /// would resolve against the generic `From<T>` impl and wrap the
    /// `Option` itself.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::empty(),
        }
    }

    /// Views the contents as a standard `Option` of references.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Consumes the container, yielding a standard `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T> From<T> for Maybe<T> {
    /// Equivalent to [`Maybe::new`].
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
