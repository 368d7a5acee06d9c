use sqlsplit_core::stmt::{Statement, StatementId};

use std::collections::HashMap;

/// Memoized sub-statement descriptors, one per parent statement identity.
///
/// Repeated logical invocations of the same parent statement reuse its
/// descriptor: command metadata is copied once at creation and only the
/// switching source is overwritten per invocation. Descriptors are mutated
/// only between executions; one dispatcher instance is single-threaded.
#[derive(Debug, Default)]
pub struct StatementArena {
    descriptors: HashMap<StatementId, Statement>,
}

impl StatementArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for the parent, building it on first use.
    pub fn get_or_create(&mut self, parent: &Statement) -> &mut Statement {
        self.descriptors
            .entry(parent.id().clone())
            .or_insert_with(|| parent.new_sub_statement())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
