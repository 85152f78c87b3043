//! `Optional<T>` - a container holding exactly one `T` or nothing.
//!
//! The container owns one [`Slot`] and drives every state change through
//! [`lifecycle`], so the "holding" discriminant never disagrees with the
//! storage contents.
//!
//! ## States
//!
//! | Operation | Result |
//! |---|---|
//! | [`Optional::new`], [`Optional::from(EMPTY)`](crate::EMPTY) | Empty |
//! | [`Optional::some`], [`Optional::in_place`] | Holding |
//! | [`emplace`](Optional::emplace) | Holding (previous value dropped first) |
//! | [`reset`](Optional::reset), [`assign_empty`](Optional::assign_empty) | Empty |
//! | [`take`](Optional::take) | Empty; the value moves into the returned container |
//!
//! Copy and move assignment live in `assign`; comparison and formatting in `cmp`.
//!
//! ## Access
//!
//! - [`value`](Optional::value) is the checked path and returns
//!   [`AccessError::Empty`] instead of failing.
//! - [`get_unchecked`](Optional::get_unchecked) is the zero-overhead path;
//!   calling it on an empty container is undefined behavior.
//! - `*opt` goes through `Deref`, which panics on an empty container.
//! - [`value_or`](Optional::value_or) never fails.

mod assign;
mod cmp;
#[cfg(feature = "serde")]
mod serde_impl;

use core::ops::{Deref, DerefMut};

use crate::marker::{Empty, InPlace};
use crate::slot::{lifecycle, Slot};
use crate::AccessError;

/// A single-slot optional value container.
///
/// # Examples
///
/// ```
/// use solo::{Optional, EMPTY};
///
/// let mut opt: Optional<i32> = Optional::from(EMPTY);
/// assert_eq!(opt.value_or(5), 5);
///
/// opt.emplace(42);
/// assert!(opt.has_value());
/// assert_eq!(*opt, 42);
///
/// let moved = opt.take();
/// assert_eq!(moved.value(), Ok(&42));
/// assert!(!opt.has_value());
/// ```
#[repr(transparent)]
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// Creates an empty container.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { slot: Slot::vacant() }
    }

    /// Creates a container holding `value`.
    #[inline(always)]
    pub const fn some(value: T) -> Self {
        Self { slot: Slot::occupied(value) }
    }

    /// Creates a container whose value is built by `make` directly in its storage.
    ///
    /// ```
    /// use solo::{Optional, IN_PLACE};
    ///
    /// let opt = Optional::in_place(IN_PLACE, || vec![0u8; 3]);
    /// assert_eq!(opt.value().map(Vec::len), Ok(3));
    /// ```
    #[inline]
    pub fn in_place<F>(_marker: InPlace, make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut out = Self::new();
        lifecycle::construct_with(&mut out.slot, make);
        out
    }

    /// Returns `true` if the container holds a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns `true` if the container holds nothing.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.slot.is_vacant()
    }

    /// Drops the held value, if any, then stores `value`.
    ///
    /// Returns a reference to the newly held value.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        lifecycle::destroy_if_occupied(&mut self.slot);
        lifecycle::construct(&mut self.slot, value)
    }

    /// Drops the held value, if any, then stores the result of `make`.
    ///
    /// The old value is gone before `make` runs; if `make` panics the
    /// container is left empty.
    #[inline]
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        lifecycle::destroy_if_occupied(&mut self.slot);
        lifecycle::construct_with(&mut self.slot, make)
    }

    /// Fallible [`emplace_with`](Self::emplace_with).
    ///
    /// # Errors
    /// Returns the error from `make` unchanged. The previous value has already
    /// been dropped, so the container is empty afterwards.
    pub fn try_emplace_with<E, F>(&mut self, make: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        lifecycle::destroy_if_occupied(&mut self.slot);
        lifecycle::try_construct_with(&mut self.slot, make)
    }

    /// Drops the held value, if any. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        lifecycle::destroy_if_occupied(&mut self.slot);
    }

    /// Moves the value out into a new container, leaving `self` empty.
    #[inline]
    #[must_use = "the taken value is dropped if unused; call `reset` to discard it"]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        lifecycle::swap(&mut out.slot, &mut self.slot);
        out
    }

    /// Stores `value` and returns the previous contents.
    #[inline]
    #[must_use = "the previous value is dropped if unused; call `emplace` to discard it"]
    pub fn replace(&mut self, value: T) -> Self {
        let mut out = Self::some(value);
        lifecycle::swap(&mut out.slot, &mut self.slot);
        out
    }

    /// Exchanges contents with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        lifecycle::swap(&mut self.slot, &mut other.slot);
    }

    /// Borrows the held value.
    ///
    /// # Errors
    /// [`AccessError::Empty`] if the container holds nothing.
    #[inline]
    pub fn value(&self) -> Result<&T, AccessError> {
        self.slot.as_ref().ok_or(AccessError::Empty)
    }

    /// Mutably borrows the held value.
    ///
    /// # Errors
    /// [`AccessError::Empty`] if the container holds nothing.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, AccessError> {
        self.slot.as_mut().ok_or(AccessError::Empty)
    }

    /// Consumes the container and returns its value.
    ///
    /// # Errors
    /// [`AccessError::Empty`] if the container holds nothing.
    #[inline]
    pub fn into_value(mut self) -> Result<T, AccessError> {
        lifecycle::take(&mut self.slot).ok_or(AccessError::Empty)
    }

    /// Borrows the held value without checking.
    ///
    /// # Safety
    /// The container must hold a value.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { self.slot.get_unchecked() }
    }

    /// Mutably borrows the held value without checking.
    ///
    /// # Safety
    /// The container must hold a value.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.slot.get_unchecked_mut() }
    }

    /// Returns a copy of the held value, or `fallback` converted to `T`.
    #[inline]
    pub fn value_or<U>(&self, fallback: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match self.slot.as_ref() {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Consumes the container, returning its value or `fallback` converted to `T`.
    #[inline]
    pub fn into_value_or<U>(mut self, fallback: U) -> T
    where
        U: Into<T>,
    {
        lifecycle::take(&mut self.slot).unwrap_or_else(|| fallback.into())
    }

    /// Returns a copy of the held value, or the result of `fallback`.
    #[inline]
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.slot.as_ref().map_or_else(fallback, T::clone)
    }

    /// Returns a copy of the held value, or `T::default()`.
    #[inline]
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.value_or_else(T::default)
    }

    /// Views the contents as an `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Views the contents as an `Option<&mut T>`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Transforms the held value, preserving emptiness.
    #[inline]
    pub fn map<U, F>(mut self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match lifecycle::take(&mut self.slot) {
            Some(value) => Optional::some(f(value)),
            None => Optional::new(),
        }
    }

    /// Borrows the underlying storage cell.
    #[inline(always)]
    pub const fn slot(&self) -> &Slot<T> {
        &self.slot
    }
}

impl<T> Default for Optional<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Empty> for Optional<T> {
    #[inline(always)]
    fn from(_: Empty) -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(mut optional: Optional<T>) -> Self {
        lifecycle::take(&mut optional.slot)
    }
}

impl<T> From<&Optional<T>> for bool {
    #[inline(always)]
    fn from(optional: &Optional<T>) -> Self {
        optional.has_value()
    }
}

/// Because the container derefs to `T`, method calls need the element type to
/// be known: `let c: Optional<i32> = Optional::new();` rather than
/// `let c = Optional::new();` followed by `c.emplace(42)`.
impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    /// If the container is empty.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.slot.as_ref() {
            Some(value) => value,
            None => empty_access(),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    /// # Panics
    /// If the container is empty.
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.slot.as_mut() {
            Some(value) => value,
            None => empty_access(),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_access() -> ! {
    panic!("{}", AccessError::Empty)
}
