//! `RawSlot` — inline storage for zero or one `T`.
//!
//! The slot stores its value as a `MaybeUninit<T>` next to an `occupied`
//! discriminant. All reads (`assume_init_ref`), moves (`ptr::read`), writes
//! (`MaybeUninit::write`), and drops (`drop_in_place`) are concentrated in
//! this file and keyed off the discriminant.
//!
//! ## Core invariant
//! `occupied` is `true` exactly when the storage holds a fully-initialized
//! `T`. Every method re-establishes this before returning, including on the
//! overwrite and move-out paths, so an unwinding payload constructor can
//! never leave the flag claiming a value that is not there.

use core::mem::MaybeUninit;
use core::ptr;

/// Inline storage sized and aligned for a single `T`, plus a presence flag.
///
/// This is a crate-private building block: it has no opinion about copy,
/// comparison, or combinators. Those belong to the safe layer.
pub(crate) struct RawSlot<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> RawSlot<T> {
    /// Creates a vacant slot. No `T` is touched.
    #[inline]
    pub(crate) const fn vacant() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates a slot holding `value`.
    #[inline]
    pub(crate) const fn filled(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            occupied: true,
        }
    }

    /// Returns `true` if the slot holds a value.
    #[inline(always)]
    pub(crate) const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Returns a shared reference to the stored value, if any.
    #[inline(always)]
    pub(crate) fn get(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: `occupied` is true, so the storage is initialized.
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the stored value, if any.
    #[inline(always)]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: `occupied` is true; `&mut self` makes the reference exclusive.
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Stores `value`, dropping any prior occupant first.
    ///
    /// The flag is raised only after the new value is in place.
    #[inline]
    pub(crate) fn fill(&mut self, value: T) {
        self.clear();
        self.value.write(value);
        self.occupied = true;
    }

    /// Moves the stored value out, leaving the slot vacant.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        if self.occupied {
            self.occupied = false;
            // SAFETY: the slot was occupied and the flag is already lowered,
            // so this is the only read of this value.
            Some(unsafe { ptr::read(self.value.as_ptr()) })
        } else {
            None
        }
    }

    /// Drops the stored value, if any, and marks the slot vacant.
    ///
    /// Idempotent: clearing a vacant slot does nothing.
    #[inline]
    pub(crate) fn clear(&mut self) {
        if self.occupied {
            self.occupied = false;
            // SAFETY: the slot was occupied; lowering the flag first means
            // this value is dropped exactly once even if `T::drop` unwinds.
            unsafe { ptr::drop_in_place(self.value.as_mut_ptr()) };
        }
    }
}

impl<T> Drop for RawSlot<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountsDrops(Rc<Cell<u32>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_vacant_slot() {
        let mut slot: RawSlot<i32> = RawSlot::vacant();
        assert!(!slot.is_occupied());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.get_mut(), None);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_filled_slot() {
        let mut slot = RawSlot::filled(42);
        assert!(slot.is_occupied());
        assert_eq!(slot.get(), Some(&42));

        *slot.get_mut().unwrap() = 7;
        assert_eq!(slot.get(), Some(&7));
    }

    #[test]
    fn test_fill_overwrites_and_drops_prior() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = RawSlot::filled(CountsDrops(Rc::clone(&drops)));

        slot.fill(CountsDrops(Rc::clone(&drops)));
        assert_eq!(drops.get(), 1);
        assert!(slot.is_occupied());

        drop(slot);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_take_transfers_without_dropping() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = RawSlot::filled(CountsDrops(Rc::clone(&drops)));

        let value = slot.take();
        assert!(!slot.is_occupied());
        assert_eq!(drops.get(), 0);

        drop(value);
        assert_eq!(drops.get(), 1);

        drop(slot);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = RawSlot::filled(CountsDrops(Rc::clone(&drops)));

        slot.clear();
        assert_eq!(drops.get(), 1);
        assert!(!slot.is_occupied());

        slot.clear();
        assert_eq!(drops.get(), 1);
    }
}
