use super::Error;

/// Error when a sub-statement requests more parameter mappings than remain
/// unconsumed in the parent's list.
///
/// This indicates a splitting/allocation mismatch (for example, a `?` inside
/// a string literal that was miscounted as a placeholder). It is a
/// configuration error, never retried.
#[derive(Debug)]
pub(super) struct AllocationError {
    pub(super) requested: usize,
    pub(super) remaining: usize,
}

impl std::error::Error for AllocationError {}

impl core::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "parameter allocation failed: requested {} mappings but only {} remain",
            self.requested, self.remaining
        )
    }
}

impl Error {
    /// Creates a parameter allocation error.
    pub fn allocation(requested: usize, remaining: usize) -> Error {
        Error::from(super::ErrorKind::Allocation(AllocationError {
            requested,
            remaining,
        }))
    }

    /// Returns `true` if this error is a parameter allocation error.
    pub fn is_allocation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Allocation(_))
    }
}
