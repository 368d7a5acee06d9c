use crate::executor::{ReusingBatchExecutor, SimpleExecutor};

use sqlsplit_core::driver::{Connection, Executor};

/// Selects and tunes the execution backend.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Accumulate updates into pooled prepared statements instead of
    /// executing each one directly.
    pub reuse_prepared_statements: bool,

    /// Preserve relative execution order when different statement texts
    /// interleave within one batch window.
    pub retain_execute_order: bool,

    /// Keep prepared-statement handles alive across flushes for reuse on the
    /// same key.
    pub reuse_between_flushes: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            reuse_prepared_statements: true,
            retain_execute_order: false,
            reuse_between_flushes: false,
        }
    }
}

/// Builds the execution backend the configuration selects.
pub fn new_executor(connection: Box<dyn Connection>, config: &BatchConfig) -> Box<dyn Executor> {
    if config.reuse_prepared_statements {
        Box::new(
            ReusingBatchExecutor::new(connection)
                .retain_execute_order(config.retain_execute_order)
                .reuse_between_flushes(config.reuse_between_flushes),
        )
    } else {
        Box::new(SimpleExecutor::new(connection))
    }
}
