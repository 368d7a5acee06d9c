use super::Error;

/// A batch execution aborted after some rows already succeeded.
///
/// Raised by [`StatementHandle::execute_batch`] implementations so the batch
/// executor can recover the per-row update counts that committed before the
/// failure.
///
/// [`StatementHandle::execute_batch`]: crate::driver::StatementHandle::execute_batch
#[derive(Debug)]
pub(super) struct BatchUpdateError {
    pub(super) update_counts: Vec<i64>,
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for BatchUpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for BatchUpdateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "batch aborted after {} rows: {}",
            self.update_counts.len(),
            self.inner
        )
    }
}

impl Error {
    /// Creates a batch update error from the counts that succeeded and the
    /// underlying engine error.
    pub fn batch_update(
        update_counts: Vec<i64>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::BatchUpdate(BatchUpdateError {
            update_counts,
            inner: Box::new(err),
        }))
    }

    /// Returns the per-row update counts that succeeded before a batch
    /// aborted, if this error is a batch update error.
    pub fn batch_update_counts(&self) -> Option<&[i64]> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::BatchUpdate(err) => Some(&err.update_counts[..]),
            _ => None,
        })
    }
}
