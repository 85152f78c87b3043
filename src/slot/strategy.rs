//! Duplication strategies: how one slot's contents are copied into another.
//!
//! - [`General`] works for any `T: Clone`. Assignment builds a temporary copy
//!   first and then swaps it in (copy-and-swap), so a panicking `clone`
//!   leaves the destination untouched.
//! - [`Trivial`] is the fast path for `T: Copy`. A `Copy` type has no drop glue
//!   and its copy is a plain byte copy, so the whole slot is copied at once with
//!   no construct/destroy sequence.
//!
//! Both strategies are observably identical for types that satisfy both bounds.

use super::{lifecycle, Slot};
use crate::trace::trace_lifecycle;

/// A compile-time choice of how to duplicate a slot holding `T`.
pub trait Duplicate<T> {
    /// Returns an independent copy of `src`.
    fn duplicate(src: &Slot<T>) -> Slot<T>;

    /// Makes `dst` mirror `src`, disposing of `dst`'s previous value.
    fn assign(dst: &mut Slot<T>, src: &Slot<T>);
}

/// Element-wise duplication through `Clone`.
#[derive(Debug, Clone, Copy, Default)]
pub struct General;

/// Byte-copy duplication for `Copy` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trivial;

impl<T: Clone> Duplicate<T> for General {
    #[inline]
    fn duplicate(src: &Slot<T>) -> Slot<T> {
        let mut out = Slot::vacant();
        if let Some(value) = src.as_ref() {
            lifecycle::construct_with(&mut out, || value.clone());
        }
        out
    }

    fn assign(dst: &mut Slot<T>, src: &Slot<T>) {
        let mut temp = Self::duplicate(src);
        lifecycle::swap(dst, &mut temp);
        // `temp` now holds dst's old value and is dropped here.
    }
}

impl<T: Copy> Duplicate<T> for Trivial {
    #[inline(always)]
    fn duplicate(src: &Slot<T>) -> Slot<T> {
        trace_lifecycle!("trivial_copy", T);
        *src
    }

    #[inline(always)]
    fn assign(dst: &mut Slot<T>, src: &Slot<T>) {
        trace_lifecycle!("trivial_assign", T);
        *dst = *src;
    }
}
