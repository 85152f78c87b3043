//! Lifecycle event logging.
//!
//! Events are emitted through `tracing` at `TRACE` level when the `tracing`
//! feature is enabled, and compile to nothing otherwise.

/// Emits a lifecycle event for an operation on a slot of type `$ty`.
macro_rules! trace_lifecycle {
    ($op:literal, $ty:ty) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(op = $op, ty = core::any::type_name::<$ty>(), "slot lifecycle");
        }
    }};
}

pub(crate) use trace_lifecycle;
