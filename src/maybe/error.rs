//! The one error kind intrinsic to this crate.

use core::fmt;
use core::panic::Location;

/// The error returned when a value accessor is invoked on an empty
/// [`Maybe`](super::Maybe).
///
/// Carries the call site of the failed access, captured via
/// `#[track_caller]`, so diagnostics can name the offending line without a
/// backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValueError {
    location: &'static Location<'static>,
}

impl EmptyValueError {
    /// Captures the caller's location as the origin of the failed access.
    ///
    /// `Default` is deliberately not implemented: construction is only
    /// meaningful at a concrete call site.
    #[allow(clippy::new_without_default)]
    #[track_caller]
    pub fn new() -> Self {
        let location = Location::caller();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "maybe", %location, "value access on empty container");
        Self { location }
    }

    /// The call site of the accessor that failed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for EmptyValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value access on empty container at {}", self.location)
    }
}

impl std::error::Error for EmptyValueError {}
