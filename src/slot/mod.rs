//! Raw storage layer (stratified implementation).
//!
//! The module tree is intentionally stratified:
//! - `slot::*` is the minimal unsafe building block: a single inline slot
//!   that may or may not hold an initialized value.
//! - `maybe::*` is the safe, value-semantic API layered on top.
//!
//! Every `unsafe` block in the crate lives in this module, so the
//! initialization invariant has a single place to be audited.

mod raw_slot;

pub(crate) use raw_slot::RawSlot;
