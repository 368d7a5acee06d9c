use crate::{ParameterAllocator, PlaceholderScan, Splitter, StatementArena};

use sqlsplit_core::{
    driver::Executor,
    stmt::{Statement, Value},
    Result,
};

use tracing::debug;

/// Splits one logical update into its sub-statements and drives the injected
/// executor once per part.
#[derive(Debug)]
pub struct SplitDispatcher {
    splitter: Splitter,
    skip_empty_statements: bool,
    placeholder_scan: PlaceholderScan,
    arena: StatementArena,
}

impl SplitDispatcher {
    pub fn new(splitter: Splitter) -> Self {
        SplitDispatcher {
            splitter,
            skip_empty_statements: true,
            placeholder_scan: PlaceholderScan::default(),
            arena: StatementArena::new(),
        }
    }

    /// Whether empty split segments are skipped rather than executed.
    /// Defaults to `true`.
    pub fn skip_empty_statements(mut self, skip: bool) -> Self {
        self.skip_empty_statements = skip;
        self
    }

    pub fn placeholder_scan(mut self, scan: PlaceholderScan) -> Self {
        self.placeholder_scan = scan;
        self
    }

    /// Executes every sub-statement of `stmt` through `executor`, in split
    /// order.
    ///
    /// Returns the aggregated row count: non-negative sub-results add up
    /// until the first negative (deferred) sub-result, which becomes the
    /// final result regardless of later sub-results. The first sub-statement
    /// failure aborts the remaining parts.
    pub fn execute(
        &mut self,
        stmt: &Statement,
        params: &mut Value,
        executor: &mut dyn Executor,
    ) -> Result<i64> {
        let parent_bound = stmt.bound();
        let parts = self.splitter.split(parent_bound.sql());
        debug!(statement = %stmt.id(), parts = parts.len(), "split update");

        let mut allocator =
            ParameterAllocator::new(parent_bound.parameter_mappings().to_vec());
        let mut rc: i64 = 0;

        for part in parts {
            if self.skip_empty_statements && part.is_empty() {
                continue;
            }

            let placeholders = self.placeholder_scan.count(&part);
            let mappings = allocator.take(placeholders)?;

            let sub = self.arena.get_or_create(stmt);
            sub.switch_params(part, mappings, &parent_bound);

            let sub_rc = executor.update(sub, params)?;
            if rc >= 0 {
                rc = if sub_rc < 0 { sub_rc } else { rc + sub_rc };
            }
        }

        Ok(rc)
    }
}

impl Default for SplitDispatcher {
    fn default() -> Self {
        SplitDispatcher::new(Splitter::default())
    }
}
