//! Construction, destruction and exchange of slot contents.
//!
//! Every transition between [`Slot::Vacant`] and [`Slot::Occupied`] in this crate
//! goes through one of these functions, so the discriminant can be audited in a
//! single place.
//!
//! ## Caller contract
//! - `construct*` require a vacant slot; writing over a live value would drop it
//!   behind the container's back.
//! - `destroy` requires an occupied slot.
//!
//! Both are checked with `debug_assert!`; release builds trust the caller.

use super::Slot;
use crate::trace::trace_lifecycle;

/// Builds `value` into a vacant slot and returns a reference to it.
#[inline]
pub fn construct<T>(slot: &mut Slot<T>, value: T) -> &mut T {
    debug_assert!(slot.is_vacant(), "construct into an occupied slot");
    trace_lifecycle!("construct", T);
    *slot = Slot::Occupied(value);
    occupied_mut(slot)
}

/// Builds the result of `make` into a vacant slot.
///
/// The slot stays vacant until `make` returns, so a panicking constructor
/// leaves it vacant.
#[inline]
pub fn construct_with<T, F>(slot: &mut Slot<T>, make: F) -> &mut T
where
    F: FnOnce() -> T,
{
    debug_assert!(slot.is_vacant(), "construct into an occupied slot");
    trace_lifecycle!("construct_with", T);
    *slot = Slot::Occupied(make());
    occupied_mut(slot)
}

/// Fallible [`construct_with`].
///
/// # Errors
/// Returns the error produced by `make` unchanged; the slot stays vacant.
#[inline]
pub fn try_construct_with<T, E, F>(slot: &mut Slot<T>, make: F) -> Result<&mut T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    debug_assert!(slot.is_vacant(), "construct into an occupied slot");
    trace_lifecycle!("try_construct_with", T);
    let value = make()?;
    *slot = Slot::Occupied(value);
    Ok(occupied_mut(slot))
}

/// Drops the held value and marks the slot vacant.
#[inline]
pub fn destroy<T>(slot: &mut Slot<T>) {
    debug_assert!(slot.is_occupied(), "destroy of a vacant slot");
    trace_lifecycle!("destroy", T);
    // The tag flips before the old value is dropped, so a panicking `Drop`
    // still leaves the slot vacant.
    drop(core::mem::replace(slot, Slot::Vacant));
}

/// Destroys the held value if there is one. Returns whether anything was dropped.
#[inline]
pub fn destroy_if_occupied<T>(slot: &mut Slot<T>) -> bool {
    if slot.is_occupied() {
        destroy(slot);
        true
    } else {
        false
    }
}

/// Moves the held value out, leaving the slot vacant.
#[inline]
pub fn take<T>(slot: &mut Slot<T>) -> Option<T> {
    match core::mem::replace(slot, Slot::Vacant) {
        Slot::Occupied(value) => {
            trace_lifecycle!("take", T);
            Some(value)
        }
        Slot::Vacant => None,
    }
}

/// Exchanges the contents of two slots whose states may differ.
///
/// | `a` | `b` | effect |
/// |---|---|---|
/// | occupied | occupied | values swapped in place |
/// | occupied | vacant | `a`'s value moves to `b`, `a` becomes vacant |
/// | vacant | occupied | `b`'s value moves to `a`, `b` becomes vacant |
/// | vacant | vacant | nothing |
///
/// No value is constructed, so the exchange cannot fail.
pub fn swap<T>(a: &mut Slot<T>, b: &mut Slot<T>) {
    match (a.is_occupied(), b.is_occupied()) {
        (true, true) => {
            trace_lifecycle!("swap_values", T);
            // SAFETY: both slots were just checked to be occupied.
            unsafe { core::mem::swap(a.get_unchecked_mut(), b.get_unchecked_mut()) }
        }
        (true, false) => {
            trace_lifecycle!("swap_move_a_to_b", T);
            if let Some(value) = take(a) {
                construct(b, value);
            }
        }
        (false, true) => {
            trace_lifecycle!("swap_move_b_to_a", T);
            if let Some(value) = take(b) {
                construct(a, value);
            }
        }
        (false, false) => {}
    }
}

#[inline(always)]
fn occupied_mut<T>(slot: &mut Slot<T>) -> &mut T {
    // SAFETY: every caller stores `Slot::Occupied` immediately before this call.
    unsafe { slot.get_unchecked_mut() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_construct_then_destroy_drops_once() {
        let drops = Cell::new(0);
        let mut slot = Slot::vacant();
        construct(&mut slot, DropCounter(&drops));
        assert!(slot.is_occupied());
        destroy(&mut slot);
        assert!(slot.is_vacant());
        assert_eq!(drops.get(), 1);
        assert!(!destroy_if_occupied(&mut slot));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_try_construct_error_leaves_vacant() {
        let mut slot: Slot<u32> = Slot::vacant();
        let err = try_construct_with(&mut slot, || "nope".parse::<u32>()).unwrap_err();
        assert_eq!(err, "nope".parse::<u32>().unwrap_err());
        assert!(slot.is_vacant());

        let value = try_construct_with(&mut slot, || "12".parse::<u32>()).unwrap();
        assert_eq!(*value, 12);
    }

    #[test]
    fn test_swap_four_cases() {
        let mut a = Slot::occupied(1);
        let mut b = Slot::occupied(2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (Slot::Occupied(2), Slot::Occupied(1)));

        let mut a = Slot::occupied(1);
        let mut b = Slot::vacant();
        swap(&mut a, &mut b);
        assert_eq!((a, b), (Slot::Vacant, Slot::Occupied(1)));

        let mut a = Slot::vacant();
        let mut b = Slot::occupied(3);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (Slot::Occupied(3), Slot::Vacant));

        let mut a: Slot<i32> = Slot::vacant();
        let mut b = Slot::vacant();
        swap(&mut a, &mut b);
        assert_eq!((a, b), (Slot::Vacant, Slot::Vacant));
    }

    #[test]
    fn test_swap_moves_without_dropping() {
        let drops = Cell::new(0);
        let mut a = Slot::occupied(DropCounter(&drops));
        let mut b = Slot::vacant();
        swap(&mut a, &mut b);
        swap(&mut a, &mut b);
        assert_eq!(drops.get(), 0);
        assert!(a.is_occupied() && b.is_vacant());
        drop(a);
        assert_eq!(drops.get(), 1);
    }
}
