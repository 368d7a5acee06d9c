use super::Error;
use crate::driver::BatchResult;

/// A flush stopped part-way through its accumulated batches.
///
/// Carries every batch that completed before the failure, plus the failing
/// slot's partial result with the update counts that succeeded before the
/// underlying engine reported the error. The caller uses this to decide how
/// much committed work must be rolled back.
#[derive(Debug)]
pub struct BatchFailure {
    completed: Vec<BatchResult>,
    partial: BatchResult,
}

impl BatchFailure {
    /// Batches that executed to completion before the failing slot.
    pub fn completed(&self) -> &[BatchResult] {
        &self.completed
    }

    /// The failing slot's result, as far as it got.
    pub fn partial(&self) -> &BatchResult {
        &self.partial
    }
}

impl std::error::Error for BatchFailure {}

impl core::fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "statement `{}` (batch query `{}`) failed; prior {} batches completed successfully, but will be rolled back",
            self.partial.statement(),
            self.partial.sql(),
            self.completed.len(),
        )
    }
}

impl Error {
    /// Creates a batch partial-failure error.
    pub fn batch_failure(completed: Vec<BatchResult>, partial: BatchResult) -> Error {
        Error::from(super::ErrorKind::BatchFailure(BatchFailure {
            completed,
            partial,
        }))
    }

    /// Returns the partial-failure details if this error is one.
    ///
    /// Searches the cause chain so callers can inspect a failure that was
    /// wrapped with extra context.
    pub fn as_batch_failure(&self) -> Option<&BatchFailure> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::BatchFailure(failure) => Some(failure),
            _ => None,
        })
    }

    /// Returns `true` if this error is a batch partial failure.
    pub fn is_batch_failure(&self) -> bool {
        self.as_batch_failure().is_some()
    }
}
