//! # `maybe` - Value-Semantic Optional Container
//!
//! A container holding zero or one value of a statically-known payload type,
//! with manual storage control, a recoverable empty-access error, and a
//! combinator surface that branches on presence internally.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code in public APIs**: the value lives in inline
//!   `MaybeUninit` storage behind a presence flag; every `unsafe` operation
//!   on that storage is concentrated in the crate-private raw layer and
//!   keyed off the flag.
//! - **Exact drop accounting**: each stored value is dropped exactly once,
//!   on clear, overwrite, move-out, or container drop, whichever comes
//!   first.
//! - **Unwind consistency**: caller-supplied closures receive references,
//!   never ownership, and run only after the container is in a consistent
//!   state; a panicking closure propagates without corrupting storage.
//!
//! ### Value Semantics
//! - No heap allocation, no pointers, no interior mutability, no internal
//!   synchronization. Concurrent access to one instance is governed by the
//!   ordinary `Send`/`Sync` auto traits, exactly like any plain value.
//! - Moving out of a container (via [`Maybe::take`]) unconditionally leaves
//!   the source empty; it is never left holding a dangling payload.
//!
//! ## Architecture
//!
//! Stratified design: a minimal raw slot (`MaybeUninit<T>` plus an
//! `occupied` flag, all `unsafe` audited in one file) underneath the safe
//! [`Maybe`] API, whose implementation is split into small per-concern
//! submodules.
//!
//! ## Example
//!
//! ```rust
//! use maybe::Maybe;
//!
//! let present = Maybe::new(6);
//! let empty: Maybe<i32> = Maybe::empty();
//!
//! assert_eq!(present.value_or(10), 6);
//! assert_eq!(empty.value_or(10), 10);
//!
//! // Combinators spare the caller explicit presence branching.
//! assert_eq!(present.map(|v| v.to_string()).value().unwrap(), "6");
//! assert!(empty.map(|v| v.to_string()).is_empty());
//!
//! // Exactly one branch runs.
//! present
//!     .if_present(|v| assert_eq!(*v, 6))
//!     .or_else(|| unreachable!());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod maybe;

mod slot;

pub use crate::maybe::{EmptyValueError, Maybe};

// Compile-time assertions for the inline-storage layout claims.
const _: () = {
    use core::mem;

    // Storage is the payload plus one flag, padded to the payload's
    // alignment; never a heap indirection.
    assert!(mem::align_of::<Maybe<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Maybe<u64>>() == 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<Maybe<u8>>() == 2);

    // A zero-sized payload costs only the flag.
    assert!(mem::size_of::<Maybe<()>>() == 1);

    // The error type stays pointer-sized: a static location reference.
    assert!(mem::size_of::<EmptyValueError>() == mem::size_of::<usize>());
};
