//! Zero-sized marker values used to select constructors.

/// Denotes "no value".
///
/// Builds an empty container (`Optional::from(EMPTY)`), clears one
/// (`assign_empty(EMPTY)`), and compares equal to any empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Empty;

/// The [`Empty`] marker value.
pub const EMPTY: Empty = Empty;

/// Selects the constructor that builds the value directly inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InPlace;

/// The [`InPlace`] marker value.
pub const IN_PLACE: InPlace = InPlace;
