//! # `solo` - Single-Slot Optional Container
//!
//! An owning container that holds exactly one value or nothing, with the value's
//! construction and destruction driven explicitly and value semantics (copy,
//! move, assignment, comparison) that follow the held type.
//!
//! ## Architecture
//!
//! The crate is stratified, leaves first:
//!
//! 1. **Storage cell** ([`Slot<T>`](slot::Slot)):
//!    - Inline storage for one `T` plus the "holding" discriminant
//!    - A native tagged variant, so size, alignment and teardown are the compiler's job
//!
//! 2. **Lifecycle operations** ([`slot::lifecycle`]):
//!    - Construct-in-place (by value, by closure, fallibly)
//!    - Destroy-in-place
//!    - Four-case swap between slots that may each be empty or holding
//!
//! 3. **Duplication strategies** ([`slot::strategy`]):
//!    - [`General`](slot::strategy::General): `Clone`-driven copy-and-swap
//!    - [`Trivial`](slot::strategy::Trivial): byte copy for `Copy` types
//!
//! 4. **Container** ([`Optional<T>`]):
//!    - Constructors, `emplace`, `reset`, copy/move assignment
//!    - Checked ([`Optional::value`]), unchecked ([`Optional::get_unchecked`])
//!      and total ([`Optional::value_or`]) access
//!
//! ## Error policy
//!
//! - Checked access on an empty container returns [`AccessError::Empty`].
//! - Unchecked access on an empty container is undefined behavior; `*opt`
//!   (via `Deref`) panics instead.
//! - Failures of the held type's own construction propagate unchanged, and copy
//!   assignment leaves both operands untouched when they happen.
//!
//! ## Cargo features
//!
//! - `serde` (default): `Serialize`/`Deserialize` with the `Option<T>` data model.
//! - `tracing`: `TRACE`-level events for every lifecycle operation.
//!
//! ## Example
//!
//! ```rust
//! use solo::{Optional, EMPTY};
//!
//! let a = Optional::some(String::from("hi"));
//! let b = a.clone();
//! assert_eq!(a, b);
//!
//! let mut c = a;
//! c.assign_empty(EMPTY);
//! assert!(c == EMPTY);
//! assert_eq!(c.value_or("fallback"), "fallback");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod marker;
mod optional;
pub mod slot;
mod trace;

pub use error::AccessError;
pub use marker::{Empty, InPlace, EMPTY, IN_PLACE};
pub use optional::Optional;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;
    use core::num::NonZeroU32;

    // Markers are ZSTs.
    assert!(mem::size_of::<Empty>() == 0);
    assert!(mem::size_of::<InPlace>() == 0);

    // The container is a transparent wrapper around its slot.
    assert!(mem::size_of::<Optional<u64>>() == mem::size_of::<slot::Slot<u64>>());
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<slot::Slot<u64>>());

    // No overhead over the language's own optional for representative types.
    assert!(mem::size_of::<Optional<i32>>() == mem::size_of::<Option<i32>>());
    assert!(mem::size_of::<Optional<(i32, f64)>>() == mem::size_of::<Option<(i32, f64)>>());
    assert!(mem::size_of::<Optional<String>>() == mem::size_of::<Option<String>>());

    // Niche-carrying types need no separate discriminant.
    assert!(mem::size_of::<Optional<NonZeroU32>>() == mem::size_of::<NonZeroU32>());
    assert!(mem::size_of::<Optional<Box<u8>>>() == mem::size_of::<usize>());
};
