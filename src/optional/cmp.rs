//! Equality, hashing and formatting.
//!
//! Two containers are equal when both are empty, or both hold values that
//! compare equal. An empty container never equals a holding one.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::Optional;
use crate::marker::Empty;

impl<T: PartialEq> PartialEq for Optional<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T> PartialEq<Empty> for Optional<T> {
    #[inline(always)]
    fn eq(&self, _: &Empty) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Optional<T>> for Empty {
    #[inline(always)]
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_empty()
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Optional, EMPTY};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_cases() {
        assert_eq!(Optional::some(1), Optional::some(1));
        assert_ne!(Optional::some(1), Optional::some(2));
        assert_eq!(Optional::<i32>::new(), Optional::new());
        assert_ne!(Optional::some(1), Optional::new());
        assert_ne!(Optional::new(), Optional::some(1));
    }

    #[test]
    fn test_equality_with_empty_marker() {
        let empty: Optional<u8> = Optional::new();
        assert!(empty == EMPTY);
        assert!(EMPTY == empty);
        assert!(Optional::some(0u8) != EMPTY);
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(hash_of(&Optional::some(5)), hash_of(&Optional::some(5)));
        assert_eq!(hash_of(&Optional::<i32>::new()), hash_of(&Optional::<i32>::new()));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Optional::some(3)), "Optional(3)");
        assert_eq!(format!("{:?}", Optional::<i32>::new()), "Optional(<empty>)");
    }
}
