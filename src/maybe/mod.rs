//! `Maybe` — the safe optional-value container (stratified implementation).
//!
//! Public surface is re-exported from `container`, but the implementation is
//! split across small submodules to keep files short and responsibilities
//! clear:
//! - `container` — construction, presence, value access, mutation.
//! - `ops_chain` — side-effecting combinators that return the receiver.
//! - `ops_functional` — transforming combinators (`map`, `apply`, `filter`).
//! - `ops_convert` — payload conversion and `Option` interop.
//! - `ops_cmp` — comparison, hashing, formatting.
//! - `error` — the one intrinsic error kind.

pub mod container;
pub mod error;

mod ops_chain;
mod ops_cmp;
mod ops_convert;
mod ops_functional;

#[cfg(feature = "serde")]
mod serde_support;

pub use container::Maybe;
pub use error::EmptyValueError;
