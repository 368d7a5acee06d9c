use sqlsplit_core::{
    driver::{BatchResult, Connection, Executor},
    stmt::{Statement, Value},
    Result,
};

use tracing::debug;

/// Direct execution backend: one prepare/bind/execute/close cycle per
/// sub-statement, returning the real row count immediately.
#[derive(Debug)]
pub struct SimpleExecutor {
    connection: Box<dyn Connection>,
}

impl SimpleExecutor {
    pub fn new(connection: Box<dyn Connection>) -> Self {
        SimpleExecutor { connection }
    }
}

impl Executor for SimpleExecutor {
    fn update(&mut self, stmt: &Statement, params: &mut Value) -> Result<i64> {
        let bound = stmt.bound();
        debug!(statement = %stmt.id(), sql = bound.sql(), "execute update");

        let mut handle = self.connection.prepare(bound.sql())?;
        let result: Result<i64> = (|| {
            handle.bind(&bound, params)?;
            let count = handle.execute()?;

            stmt.key_generator()
                .process(stmt.id(), handle.as_mut(), std::slice::from_mut(params))?;
            Ok(count)
        })();
        // The handle is closed whether or not execution succeeded
        let closed = handle.close();
        let count = result?;
        closed?;
        Ok(count)
    }

    fn flush(&mut self, _is_rollback: bool) -> Result<Vec<BatchResult>> {
        Ok(Vec::new())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
