use super::StatementHandle;
use crate::{
    stmt::{StatementId, Value},
    Result,
};

use std::{fmt::Debug, sync::Arc};

/// Generated-key propagation strategy attached to a parent statement.
///
/// Bulk strategies run once per slot after its batch executes; per-row
/// strategies run once per accumulated parameter object.
#[derive(Clone, Default)]
pub enum KeyGenerator {
    #[default]
    None,
    Batch(Arc<dyn BatchKeyGenerator>),
    Row(Arc<dyn RowKeyGenerator>),
}

pub trait BatchKeyGenerator: Debug {
    fn process_batch(
        &self,
        statement: &StatementId,
        handle: &mut dyn StatementHandle,
        parameters: &mut [Value],
    ) -> Result<()>;
}

pub trait RowKeyGenerator: Debug {
    fn process_row(
        &self,
        statement: &StatementId,
        handle: &mut dyn StatementHandle,
        parameter: &mut Value,
    ) -> Result<()>;
}

impl KeyGenerator {
    pub fn batch(strategy: impl BatchKeyGenerator + 'static) -> Self {
        KeyGenerator::Batch(Arc::new(strategy))
    }

    pub fn row(strategy: impl RowKeyGenerator + 'static) -> Self {
        KeyGenerator::Row(Arc::new(strategy))
    }

    /// Runs the strategy over every parameter object a slot accumulated.
    pub fn process(
        &self,
        statement: &StatementId,
        handle: &mut dyn StatementHandle,
        parameters: &mut [Value],
    ) -> Result<()> {
        match self {
            KeyGenerator::None => Ok(()),
            KeyGenerator::Batch(strategy) => strategy.process_batch(statement, handle, parameters),
            KeyGenerator::Row(strategy) => {
                for parameter in parameters {
                    strategy.process_row(statement, handle, parameter)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for KeyGenerator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyGenerator::None => f.write_str("None"),
            KeyGenerator::Batch(strategy) => f.debug_tuple("Batch").field(strategy).finish(),
            KeyGenerator::Row(strategy) => f.debug_tuple("Row").field(strategy).finish(),
        }
    }
}
