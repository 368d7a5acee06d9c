mod batch_result;
pub use batch_result::BatchResult;

mod executor;
pub use executor::Executor;

mod key_generator;
pub use key_generator::{BatchKeyGenerator, KeyGenerator, RowKeyGenerator};

use crate::{
    stmt::{BoundStatement, Value},
    Result,
};

use std::fmt::Debug;

/// Sentinel update count meaning "deferred; the real count is known only
/// after flush". Distinct from any real row count.
pub const DEFERRED_ROW_COUNT: i64 = i64::MIN + 1002;

/// Factory for prepared-statement handles.
///
/// Failures to prepare are surfaced as resource errors.
pub trait Connection: Debug {
    fn prepare(&mut self, sql: &str) -> Result<Box<dyn StatementHandle>>;
}

/// A live prepared-statement resource.
///
/// Owned exclusively by one executor slot for the slot's lifetime; ownership
/// transfers to the reuse pool or to `close`, never to a second slot.
pub trait StatementHandle: Debug {
    /// Binds one row of parameters onto the handle.
    fn bind(&mut self, stmt: &BoundStatement, params: &Value) -> Result<()>;

    /// Adds the currently bound row to the handle's batch.
    fn add_batch(&mut self) -> Result<()>;

    /// Executes the currently bound row directly, returning the row count.
    fn execute(&mut self) -> Result<i64>;

    /// Executes the accumulated batch, returning per-row update counts.
    ///
    /// When the engine aborts mid-batch after some rows succeeded, the
    /// implementation must report it via [`Error::batch_update`] so the
    /// caller can recover the counts that committed.
    ///
    /// [`Error::batch_update`]: crate::Error::batch_update
    fn execute_batch(&mut self) -> Result<Vec<i64>>;

    /// Keys generated by the engine for the most recent execution, in row
    /// order.
    fn generated_keys(&mut self) -> Result<Vec<Value>> {
        Ok(Vec::new())
    }

    /// Releases the underlying resource.
    fn close(self: Box<Self>) -> Result<()>;
}
