use super::{BoundStatement, CommandType, SqlSource, StatementId, SwitchingSource};
use crate::driver::KeyGenerator;

use std::time::Duration;

/// A configured update statement: identity, command metadata, and the source
/// of its SQL text and parameter mappings.
#[derive(Debug, Clone)]
pub struct Statement {
    id: StatementId,
    command: CommandType,
    source: SqlSource,
    key_gen: KeyGenerator,
    timeout: Option<Duration>,
}

impl Statement {
    pub fn new(id: impl Into<StatementId>, source: impl Into<SqlSource>) -> Self {
        Statement {
            id: id.into(),
            command: CommandType::default(),
            source: source.into(),
            key_gen: KeyGenerator::None,
            timeout: None,
        }
    }

    pub fn command(mut self, command: CommandType) -> Self {
        self.command = command;
        self
    }

    pub fn key_gen(mut self, key_gen: KeyGenerator) -> Self {
        self.key_gen = key_gen;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn id(&self) -> &StatementId {
        &self.id
    }

    pub fn command_type(&self) -> CommandType {
        self.command
    }

    pub fn key_generator(&self) -> &KeyGenerator {
        &self.key_gen
    }

    pub fn timeout_hint(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolves the statement's current text and bindings.
    pub fn bound(&self) -> BoundStatement {
        self.source.bound()
    }

    /// Builds a reusable sub-statement descriptor for this statement.
    ///
    /// Command metadata is copied once, here; the switching source is
    /// overwritten per invocation afterwards.
    pub fn new_sub_statement(&self) -> Statement {
        Statement {
            id: self.id.clone(),
            command: self.command,
            source: SqlSource::Switching(SwitchingSource::default()),
            key_gen: self.key_gen.clone(),
            timeout: self.timeout,
        }
    }

    /// Overwrites a sub-statement descriptor's source for the next execution.
    ///
    /// Only meaningful on descriptors built by [`new_sub_statement`]; any
    /// in-flight use of the descriptor must complete first.
    ///
    /// [`new_sub_statement`]: Statement::new_sub_statement
    pub fn switch_params(
        &mut self,
        sql: impl Into<String>,
        parameter_mappings: Vec<super::ParameterMapping>,
        parent: &BoundStatement,
    ) {
        match &mut self.source {
            SqlSource::Switching(source) => source.switch(sql, parameter_mappings, parent),
            SqlSource::Static(_) => {
                let mut source = SwitchingSource::default();
                source.switch(sql, parameter_mappings, parent);
                self.source = SqlSource::Switching(source);
            }
        }
    }
}
