#![allow(dead_code)]

use sqlsplit_core::{
    driver::{BatchResult, Connection, Executor, StatementHandle},
    stmt::{BoundStatement, Statement, Value},
    Error, Result,
};

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

/// Records every driver interaction so tests can assert on call order.
#[derive(Debug, Default)]
pub struct Journal {
    pub events: Vec<String>,
    pub prepares: usize,
}

#[derive(Debug, Default, Clone)]
pub struct MockConnection {
    journal: Rc<RefCell<Journal>>,
    // sql -> row index at which execute_batch aborts
    fail_batch_at: Rc<RefCell<HashMap<String, usize>>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.journal.borrow().events.clone()
    }

    pub fn prepares(&self) -> usize {
        self.journal.borrow().prepares
    }

    /// Makes batches for `sql` abort once `row` rows have succeeded.
    pub fn fail_batch_at(&self, sql: &str, row: usize) {
        self.fail_batch_at
            .borrow_mut()
            .insert(sql.to_string(), row);
    }

    fn record(&self, event: String) {
        self.journal.borrow_mut().events.push(event);
    }
}

impl Connection for MockConnection {
    fn prepare(&mut self, sql: &str) -> Result<Box<dyn StatementHandle>> {
        self.record(format!("prepare:{sql}"));
        self.journal.borrow_mut().prepares += 1;
        Ok(Box::new(MockHandle {
            sql: sql.to_string(),
            journal: self.journal.clone(),
            pending: 0,
            fail_at: self.fail_batch_at.borrow().get(sql).copied(),
        }))
    }
}

#[derive(Debug)]
pub struct MockHandle {
    sql: String,
    journal: Rc<RefCell<Journal>>,
    pending: usize,
    fail_at: Option<usize>,
}

impl MockHandle {
    fn record(&self, event: String) {
        self.journal.borrow_mut().events.push(event);
    }
}

impl StatementHandle for MockHandle {
    fn bind(&mut self, _stmt: &BoundStatement, _params: &Value) -> Result<()> {
        Ok(())
    }

    fn add_batch(&mut self) -> Result<()> {
        self.pending += 1;
        Ok(())
    }

    fn execute(&mut self) -> Result<i64> {
        self.record(format!("execute:{}", self.sql));
        Ok(1)
    }

    fn execute_batch(&mut self) -> Result<Vec<i64>> {
        let rows = self.pending;
        self.pending = 0;

        if let Some(at) = self.fail_at {
            if at < rows {
                self.record(format!("execute_batch_failed:{}", self.sql));
                return Err(Error::batch_update(
                    vec![1; at],
                    std::io::Error::new(std::io::ErrorKind::Other, "mock batch abort"),
                ));
            }
        }

        self.record(format!("execute_batch:{}:{rows}", self.sql));
        Ok(vec![1; rows])
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.record(format!("close:{}", self.sql));
        Ok(())
    }
}

/// Executor stand-in for dispatcher tests: records what it was asked to run
/// and returns scripted results.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<RecordedCall>,
    pub results: VecDeque<i64>,
    pub fail_on_call: Option<usize>,
}

#[derive(Debug)]
pub struct RecordedCall {
    pub sql: String,
    pub properties: Vec<String>,
    pub additional: Vec<String>,
}

impl RecordingExecutor {
    pub fn returning(results: impl IntoIterator<Item = i64>) -> Self {
        RecordingExecutor {
            results: results.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Executor for RecordingExecutor {
    fn update(&mut self, stmt: &Statement, _params: &mut Value) -> Result<i64> {
        if self.fail_on_call == Some(self.calls.len()) {
            return Err(sqlsplit_core::err!("scripted executor failure"));
        }

        let bound = stmt.bound();
        self.calls.push(RecordedCall {
            sql: bound.sql().to_string(),
            properties: bound
                .parameter_mappings()
                .iter()
                .map(|mapping| mapping.property().to_string())
                .collect(),
            additional: bound
                .parameter_mappings()
                .iter()
                .filter(|mapping| bound.has_additional_parameter(mapping.property()))
                .map(|mapping| mapping.property().to_string())
                .collect(),
        });
        Ok(self.results.pop_front().unwrap_or(1))
    }

    fn flush(&mut self, _is_rollback: bool) -> Result<Vec<BatchResult>> {
        Ok(Vec::new())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
