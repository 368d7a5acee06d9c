use super::BatchResult;
use crate::{
    stmt::{Statement, Value},
    Result,
};

use std::fmt::Debug;

/// The single-statement execution primitive the dispatcher drives.
///
/// Implemented by direct and batched backends; batched implementations return
/// [`DEFERRED_ROW_COUNT`] from `update` and deliver real counts from `flush`.
///
/// One executor instance owns one batch window; callers serialize all calls
/// on it (typically one unit of work per executor).
///
/// [`DEFERRED_ROW_COUNT`]: super::DEFERRED_ROW_COUNT
pub trait Executor: Debug {
    /// Executes or enqueues one update, returning its row count or the
    /// deferred sentinel.
    ///
    /// Direct backends propagate generated keys into `params` before
    /// returning; batched backends snapshot `params` and deliver keys through
    /// the flush results instead.
    fn update(&mut self, stmt: &Statement, params: &mut Value) -> Result<i64>;

    /// Finalizes accumulated work.
    ///
    /// With `is_rollback` set, pending work is discarded and the result is
    /// empty. Either way the executor returns to its empty state.
    fn flush(&mut self, is_rollback: bool) -> Result<Vec<BatchResult>>;

    /// Tears the executor down, discarding pending work and releasing every
    /// held resource.
    fn close(&mut self) -> Result<()>;
}
