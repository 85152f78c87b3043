//! Inline storage for at most one value.
//!
//! The module tree is stratified the same way as the container built on it:
//! - [`Slot`] is the storage cell: one tagged variant whose tag *is* the discriminant.
//! - [`lifecycle`] holds the only code that moves a slot between its two states.
//! - [`strategy`] selects how a slot's contents are duplicated (general vs. trivial).
//!
//! ## Core invariant
//! A live, well-formed `T` exists in a slot if and only if it is [`Slot::Occupied`].
//! A [`Slot::Vacant`] slot carries no bytes that may be read, written or dropped as a `T`.

pub mod lifecycle;
pub mod strategy;

/// Storage cell for zero or one `T`.
///
/// Storage is inline and sized by the compiler for the larger of the two cases,
/// so no alignment arithmetic or placement construction is needed. Dropping an
/// occupied slot drops its value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Slot<T> {
    /// No value is held.
    Vacant,
    /// A live value is held.
    Occupied(T),
}

impl<T> Slot<T> {
    /// Creates a vacant slot.
    #[inline(always)]
    pub const fn vacant() -> Self {
        Slot::Vacant
    }

    /// Creates a slot holding `value`.
    #[inline(always)]
    pub const fn occupied(value: T) -> Self {
        Slot::Occupied(value)
    }

    /// Returns `true` if the slot holds a value.
    #[inline(always)]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Returns `true` if the slot holds nothing.
    #[inline(always)]
    pub const fn is_vacant(&self) -> bool {
        !self.is_occupied()
    }

    /// Borrows the held value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    /// Mutably borrows the held value, if any.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    /// Borrows the held value without checking the discriminant.
    ///
    /// # Safety
    /// The slot must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_occupied(), "unchecked access to a vacant slot");
        match self {
            Slot::Occupied(value) => value,
            // SAFETY: caller asserts the slot is occupied.
            Slot::Vacant => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Mutably borrows the held value without checking the discriminant.
    ///
    /// # Safety
    /// The slot must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_occupied(), "unchecked access to a vacant slot");
        match self {
            Slot::Occupied(value) => value,
            // SAFETY: caller asserts the slot is occupied.
            Slot::Vacant => unsafe { core::hint::unreachable_unchecked() },
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Vacant
    }
}
