use sqlsplit_core::{
    driver::{
        BatchResult, Connection, Executor, KeyGenerator, StatementHandle, DEFERRED_ROW_COUNT,
    },
    stmt::{Statement, StatementId, Value},
    Error, Result,
};

use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// Batch-scoped execution backend pooling prepared-statement handles by
/// statement text and identity.
///
/// Logical updates for the same key accumulate into one slot and execute as a
/// single batch at flush. With `retain_execute_order`, re-enqueuing a key
/// after another key has been touched first flushes the accumulated batches
/// through the stale slot, so interleaved statements never reorder their
/// effects. With `reuse_between_flushes`, handles survive a successful flush
/// in a pool and are recovered on the same key in a later batch window.
///
/// One executor owns one batch window; callers serialize all access.
#[derive(Debug)]
pub struct ReusingBatchExecutor {
    connection: Box<dyn Connection>,
    retain_execute_order: bool,
    reuse_between_flushes: bool,
    active: IndexMap<StatementKey, Slot>,
    reuse_pool: HashMap<StatementKey, Slot>,
    last_key: Option<StatementKey>,
    results: Vec<BatchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StatementKey {
    sql: String,
    statement: StatementId,
}

#[derive(Debug)]
struct Slot {
    handle: Box<dyn StatementHandle>,
    parameter_objects: Vec<Value>,
    key_gen: KeyGenerator,
}

impl ReusingBatchExecutor {
    pub fn new(connection: Box<dyn Connection>) -> Self {
        ReusingBatchExecutor {
            connection,
            retain_execute_order: false,
            reuse_between_flushes: false,
            active: IndexMap::new(),
            reuse_pool: HashMap::new(),
            last_key: None,
            results: Vec::new(),
        }
    }

    /// Guarantees relative execution order across different statement texts.
    pub fn retain_execute_order(mut self, retain: bool) -> Self {
        self.retain_execute_order = retain;
        self
    }

    /// Keeps handles alive across flushes for reuse on the same key.
    pub fn reuse_between_flushes(mut self, reuse: bool) -> Self {
        self.reuse_between_flushes = reuse;
        self
    }

    /// Executes accumulated batches in insertion order.
    ///
    /// Stops after `stop_after`'s slot when given; with `displace`, executed
    /// slots leave the active window (to the reuse pool when enabled, closed
    /// otherwise). Completed results accumulate until flush returns them.
    fn execute_through(
        &mut self,
        stop_after: Option<&StatementKey>,
        displace: bool,
    ) -> Result<()> {
        let keys: Vec<StatementKey> = self.active.keys().cloned().collect();

        for key in keys {
            let outcome = {
                let slot = self.active.get_mut(&key).expect("active slot for key");
                let mut result = BatchResult::new(key.statement.clone(), key.sql.clone());

                match slot.handle.execute_batch() {
                    Ok(counts) => {
                        result.set_update_counts(counts);
                        slot.key_gen.process(
                            &key.statement,
                            slot.handle.as_mut(),
                            &mut slot.parameter_objects,
                        )?;
                        result.set_parameter_objects(slot.parameter_objects.clone());
                        Ok(result)
                    }
                    Err(err) => {
                        // Recover however far the engine got before aborting
                        let partial = err
                            .batch_update_counts()
                            .map(<[i64]>::to_vec)
                            .unwrap_or_default();
                        result.set_update_counts(partial);
                        result.set_parameter_objects(slot.parameter_objects.clone());
                        Err((err, result))
                    }
                }
            };

            match outcome {
                Ok(result) => self.results.push(result),
                Err((cause, partial)) => {
                    let completed = std::mem::take(&mut self.results);
                    return Err(cause.context(Error::batch_failure(completed, partial)));
                }
            }

            if displace {
                if let Some((displaced_key, mut slot)) = self.active.shift_remove_entry(&key) {
                    if self.reuse_between_flushes {
                        slot.parameter_objects.clear();
                        self.reuse_pool.insert(displaced_key, slot);
                    } else {
                        close_quietly(slot.handle);
                    }
                }
            }

            if stop_after == Some(&key) {
                break;
            }
        }

        Ok(())
    }
}

impl Executor for ReusingBatchExecutor {
    fn update(&mut self, stmt: &Statement, params: &mut Value) -> Result<i64> {
        let bound = stmt.bound();
        let key = StatementKey {
            sql: bound.sql().to_string(),
            statement: stmt.id().clone(),
        };

        if self.retain_execute_order
            && self.active.contains_key(&key)
            && self.last_key.as_ref() != Some(&key)
        {
            debug!(
                statement = %key.statement,
                "out-of-order reuse; executing accumulated batches"
            );
            self.execute_through(Some(&key), true)?;
        }

        if !self.active.contains_key(&key) {
            let slot = match self.reuse_pool.remove(&key) {
                Some(slot) => {
                    debug!(statement = %key.statement, "reusing pooled statement handle");
                    slot
                }
                None => {
                    debug!(statement = %key.statement, sql = bound.sql(), "preparing statement");
                    let handle = self.connection.prepare(bound.sql())?;
                    Slot {
                        handle,
                        parameter_objects: Vec::new(),
                        key_gen: stmt.key_generator().clone(),
                    }
                }
            };
            self.active.insert(key.clone(), slot);
        }

        let slot = self.active.get_mut(&key).expect("slot inserted for key");
        slot.handle.bind(&bound, params)?;
        slot.handle.add_batch()?;
        slot.parameter_objects.push(params.clone());
        self.last_key = Some(key);

        Ok(DEFERRED_ROW_COUNT)
    }

    fn flush(&mut self, is_rollback: bool) -> Result<Vec<BatchResult>> {
        let outcome = if is_rollback {
            Ok(Vec::new())
        } else {
            self.execute_through(None, false)
                .map(|()| std::mem::take(&mut self.results))
        };

        // Cleanup always runs: handles survive into the pool only after a
        // successful flush; failing or rollback flushes close them, since a
        // rolled-back handle may still carry un-executed batched rows.
        let pool_handles = outcome.is_ok() && !is_rollback && self.reuse_between_flushes;
        for (key, mut slot) in std::mem::take(&mut self.active) {
            if pool_handles {
                slot.parameter_objects.clear();
                self.reuse_pool.insert(key, slot);
            } else {
                close_quietly(slot.handle);
            }
        }
        if !self.reuse_between_flushes {
            for (_, slot) in self.reuse_pool.drain() {
                close_quietly(slot.handle);
            }
        }
        self.last_key = None;
        self.results.clear();

        if let Ok(results) = &outcome {
            debug!(batches = results.len(), "flushed batch window");
        }
        outcome
    }

    fn close(&mut self) -> Result<()> {
        let result = self.flush(true).map(|_| ());
        for (_, slot) in self.reuse_pool.drain() {
            close_quietly(slot.handle);
        }
        result
    }
}

fn close_quietly(handle: Box<dyn StatementHandle>) {
    if let Err(err) = handle.close() {
        debug!(?err, "swallowing error from statement handle close");
    }
}
