mod support;

use support::MockConnection;

use sqlsplit::{ReusingBatchExecutor, SimpleExecutor};
use sqlsplit_core::{
    driver::{Executor, KeyGenerator, RowKeyGenerator, StatementHandle},
    stmt::{StaticSource, Statement, StatementId, Value, ValueRecord},
    Result,
};

use pretty_assertions::assert_eq;

/// Marks each processed parameter record so tests can see which rows the
/// strategy visited.
#[derive(Debug)]
struct StampRow;

impl RowKeyGenerator for StampRow {
    fn process_row(
        &self,
        _statement: &StatementId,
        _handle: &mut dyn StatementHandle,
        parameter: &mut Value,
    ) -> Result<()> {
        if let Some(record) = parameter.as_record_mut() {
            record.insert("stamped", true);
        }
        Ok(())
    }
}

fn statement(sql: &str) -> Statement {
    Statement::new("a", StaticSource::new(sql, vec![])).key_gen(KeyGenerator::row(StampRow))
}

fn record(name: &str) -> Value {
    Value::from(ValueRecord::from_iter([("name", name)]))
}

#[test]
fn row_strategy_visits_every_accumulated_row_at_flush() {
    let connection = MockConnection::new();
    let mut executor = ReusingBatchExecutor::new(Box::new(connection));

    let stmt = statement("insert into a values(?)");
    executor.update(&stmt, &mut record("x")).unwrap();
    executor.update(&stmt, &mut record("y")).unwrap();

    let results = executor.flush(false).unwrap();

    assert_eq!(results.len(), 1);
    for parameter in results[0].parameter_objects() {
        assert_eq!(parameter.field("stamped"), Some(&Value::Bool(true)));
    }
}

#[test]
fn row_strategy_mutates_the_caller_params_on_direct_execution() {
    let connection = MockConnection::new();
    let mut executor = SimpleExecutor::new(Box::new(connection));

    let stmt = statement("insert into a values(?)");
    let mut params = record("x");
    executor.update(&stmt, &mut params).unwrap();

    assert_eq!(params.field("stamped"), Some(&Value::Bool(true)));
}
