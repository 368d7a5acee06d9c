mod keys;
pub use keys::GeneratedKeys;

mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use sqlsplit_core::{
    driver::StatementHandle,
    stmt::{BoundStatement, Value as CoreValue},
    Error, Result,
};
use tracing::debug;

use std::{cell::RefCell, mem, path::Path, rc::Rc};

/// A SQLite connection.
///
/// Cloning yields a second reference to the same underlying connection, which
/// is how prepared-statement handles keep it alive.
#[derive(Debug, Clone)]
pub struct Connection {
    connection: Rc<RefCell<RusqliteConnection>>,
}

impl Connection {
    pub fn in_memory() -> Self {
        let connection = RusqliteConnection::open_in_memory().unwrap();

        Self {
            connection: Rc::new(RefCell::new(connection)),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::resource)?;
        Ok(Self {
            connection: Rc::new(RefCell::new(connection)),
        })
    }

    /// Executes a statement without parameters, returning the row count.
    ///
    /// Intended for schema setup and other one-off statements that bypass the
    /// executor machinery.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        let connection = self.connection.borrow();
        connection.execute(sql, []).map_err(Error::driver)
    }

    /// Runs a query without parameters and returns every row as core values.
    pub fn query(&self, sql: &str) -> Result<Vec<Vec<CoreValue>>> {
        let connection = self.connection.borrow();
        let mut stmt = connection.prepare(sql).map_err(Error::resource)?;
        let width = stmt.column_count();

        let mut rows = stmt.query([]).map_err(Error::driver)?;
        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);
                    for index in 0..width {
                        let value = row.get(index).map_err(Error::driver)?;
                        items.push(Value::from_sql(value));
                    }
                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver(err)),
            }
        }

        Ok(ret)
    }
}

impl sqlsplit_core::driver::Connection for Connection {
    fn prepare(&mut self, sql: &str) -> Result<Box<dyn StatementHandle>> {
        // Validate eagerly and warm the statement cache; the handle re-borrows
        // the cached statement at execution time.
        {
            let connection = self.connection.borrow();
            connection.prepare_cached(sql).map_err(Error::resource)?;
        }
        debug!(sql, "prepared statement");

        Ok(Box::new(Handle {
            connection: self.connection.clone(),
            sql: sql.to_string(),
            current: Vec::new(),
            pending: Vec::new(),
            generated: Vec::new(),
        }))
    }
}

/// A prepared-statement handle over the connection's statement cache.
///
/// Bound rows are buffered here; the cached statement is borrowed only for
/// the duration of an execution.
#[derive(Debug)]
struct Handle {
    connection: Rc<RefCell<RusqliteConnection>>,
    sql: String,
    current: Vec<Value>,
    pending: Vec<Vec<Value>>,
    generated: Vec<CoreValue>,
}

impl StatementHandle for Handle {
    fn bind(&mut self, stmt: &BoundStatement, params: &CoreValue) -> Result<()> {
        self.current = stmt
            .parameter_mappings()
            .iter()
            .map(|mapping| Value::from(stmt.parameter_value(mapping, params)))
            .collect();
        Ok(())
    }

    fn add_batch(&mut self) -> Result<()> {
        self.pending.push(mem::take(&mut self.current));
        Ok(())
    }

    fn execute(&mut self) -> Result<i64> {
        let row = mem::take(&mut self.current);

        let (count, key) = {
            let connection = self.connection.borrow();
            let mut stmt = connection.prepare_cached(&self.sql).map_err(Error::resource)?;
            let count = stmt
                .execute(rusqlite::params_from_iter(row.iter()))
                .map_err(Error::driver)?;
            (count as i64, connection.last_insert_rowid())
        };

        self.generated = vec![CoreValue::I64(key)];
        Ok(count)
    }

    fn execute_batch(&mut self) -> Result<Vec<i64>> {
        let rows = mem::take(&mut self.pending);
        let mut counts = Vec::with_capacity(rows.len());
        let mut keys = Vec::with_capacity(rows.len());

        let failure = {
            let connection = self.connection.borrow();
            let mut stmt = connection.prepare_cached(&self.sql).map_err(Error::resource)?;

            let mut failure = None;
            for row in &rows {
                match stmt.execute(rusqlite::params_from_iter(row.iter())) {
                    Ok(count) => {
                        counts.push(count as i64);
                        keys.push(CoreValue::I64(connection.last_insert_rowid()));
                    }
                    Err(err) => {
                        failure = Some(err);
                        break;
                    }
                }
            }
            failure
        };

        self.generated = keys;
        match failure {
            Some(err) => Err(Error::batch_update(counts, err)),
            None => Ok(counts),
        }
    }

    fn generated_keys(&mut self) -> Result<Vec<CoreValue>> {
        Ok(self.generated.clone())
    }

    fn close(self: Box<Self>) -> Result<()> {
        // Statements live in the connection's cache; dropping the handle
        // releases its buffers.
        Ok(())
    }
}
