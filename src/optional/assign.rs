//! Copy and move semantics for `Optional<T>`.
//!
//! Copy assignment is copy-and-swap: the new contents are fully built in a
//! temporary before `self` is touched, so a panicking `clone` (or an `Err` from
//! [`Optional::try_assign_with`]) leaves both operands as they were.
//! Move assignment is a plain [`lifecycle::swap`].

use super::Optional;
use crate::marker::Empty;
use crate::slot::lifecycle;
use crate::slot::strategy::{Duplicate, General};

#[allow(clippy::expl_impl_clone_on_copy)]
impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        self.duplicate::<General>()
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.assign_from::<General>(source);
    }
}

// `Copy` types take the trivial path automatically: the whole container is
// duplicated by a byte copy.
impl<T: Copy> Copy for Optional<T> {}

impl<T> Optional<T> {
    /// Returns an independent copy of `self` using strategy `S`.
    ///
    /// ```
    /// use solo::Optional;
    /// use solo::slot::strategy::{General, Trivial};
    ///
    /// let opt = Optional::some(3u32);
    /// assert_eq!(opt.duplicate::<General>(), opt.duplicate::<Trivial>());
    /// ```
    #[inline]
    #[must_use]
    pub fn duplicate<S: Duplicate<T>>(&self) -> Self {
        Self { slot: S::duplicate(&self.slot) }
    }

    /// Copy-assigns from `source` using strategy `S`.
    ///
    /// Afterwards `self` mirrors `source`; `self`'s previous value, if any,
    /// has been dropped exactly once.
    #[inline]
    pub fn assign_from<S: Duplicate<T>>(&mut self, source: &Self) {
        S::assign(&mut self.slot, &source.slot);
    }

    /// Replaces the contents with the result of `make`, only if it succeeds.
    ///
    /// Unlike [`try_emplace_with`](Self::try_emplace_with), the current value
    /// survives a failed construction.
    ///
    /// # Errors
    /// Returns the error from `make` unchanged; `self` is not modified.
    pub fn try_assign_with<E, F>(&mut self, make: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut temp = Self::new();
        lifecycle::try_construct_with(&mut temp.slot, make)?;
        lifecycle::swap(&mut self.slot, &mut temp.slot);
        drop(temp);
        // SAFETY: `temp` was occupied and its value was just swapped into `self`.
        Ok(unsafe { self.slot.get_unchecked_mut() })
    }

    /// Move-assigns from `source` by exchanging contents.
    ///
    /// `self` ends up with `source`'s prior contents and `source` with
    /// `self`'s; the caller usually drops or resets `source` next.
    #[inline]
    pub fn move_assign(&mut self, source: &mut Self) {
        lifecycle::swap(&mut self.slot, &mut source.slot);
    }

    /// Clears the container. Equivalent to [`reset`](Self::reset).
    #[inline]
    pub fn assign_empty(&mut self, _marker: Empty) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use crate::slot::strategy::Trivial;
    use crate::{Optional, EMPTY};

    #[test]
    fn test_clone_is_independent() {
        let a = Optional::some(String::from("hi"));
        let mut b = a.clone();
        assert_eq!(a, b);
        b.value_mut().unwrap().push('!');
        assert_eq!(a.value().map(String::as_str), Ok("hi"));
        assert_eq!(b.value().map(String::as_str), Ok("hi!"));
    }

    #[test]
    fn test_clone_from_all_state_pairs() {
        let states = [Optional::new(), Optional::some(vec![1]), Optional::some(vec![2, 3])];
        for dst in &states {
            for src in &states {
                let mut target = dst.clone();
                target.clone_from(src);
                assert_eq!(&target, src);
            }
        }
    }

    #[test]
    fn test_move_assign_exchanges() {
        let mut a = Optional::some(1);
        let mut b = Optional::some(2);
        a.move_assign(&mut b);
        assert_eq!((a.value(), b.value()), (Ok(&2), Ok(&1)));

        let mut empty: Optional<i32> = Optional::new();
        empty.move_assign(&mut a);
        assert_eq!(empty.value(), Ok(&2));
        assert!(a.is_empty());
    }

    #[test]
    fn test_try_assign_keeps_value_on_error() {
        let mut opt = Optional::some(10);
        assert_eq!(opt.try_assign_with(|| Err::<i32, _>("bad")), Err("bad"));
        assert_eq!(opt.value(), Ok(&10));
        assert_eq!(opt.try_assign_with(|| Ok::<_, ()>(11)).copied(), Ok(11));
        assert_eq!(opt.value(), Ok(&11));
    }

    #[test]
    fn test_assign_empty_marker() {
        let mut opt = Optional::some(1);
        opt.assign_empty(EMPTY);
        assert!(opt.is_empty());
    }

    #[test]
    fn test_copy_types_copy_implicitly() {
        let a = Optional::some((1u8, 2.5f64));
        let b = a;
        let mut c: Optional<(u8, f64)> = Optional::new();
        c.assign_from::<Trivial>(&a);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
