use crate::stmt::{StatementId, Value};

/// The outcome of one batch slot's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    statement: StatementId,
    sql: String,
    parameter_objects: Vec<Value>,
    update_counts: Vec<i64>,
}

impl BatchResult {
    pub fn new(statement: StatementId, sql: impl Into<String>) -> Self {
        BatchResult {
            statement,
            sql: sql.into(),
            parameter_objects: Vec::new(),
            update_counts: Vec::new(),
        }
    }

    pub fn statement(&self) -> &StatementId {
        &self.statement
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The parameter objects accumulated for this slot, one per batched row.
    pub fn parameter_objects(&self) -> &[Value] {
        &self.parameter_objects
    }

    /// Per-row update counts. On a partial failure, exactly the rows that
    /// succeeded before the batch aborted.
    pub fn update_counts(&self) -> &[i64] {
        &self.update_counts
    }

    pub fn set_parameter_objects(&mut self, parameter_objects: Vec<Value>) {
        self.parameter_objects = parameter_objects;
    }

    pub fn set_update_counts(&mut self, update_counts: Vec<i64>) {
        self.update_counts = update_counts;
    }
}
