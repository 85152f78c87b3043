/// Error returned by checked access to an [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessError {
    /// The container held no value.
    Empty,
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::Empty => f.write_str("bad optional access: the container is empty"),
        }
    }
}

impl std::error::Error for AccessError {}
