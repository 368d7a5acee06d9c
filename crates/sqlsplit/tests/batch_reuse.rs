mod support;

use support::MockConnection;

use sqlsplit::ReusingBatchExecutor;
use sqlsplit_core::{
    driver::Executor,
    stmt::{StaticSource, Statement, Value},
};

use pretty_assertions::assert_eq;

fn statement(id: &str, sql: &str) -> Statement {
    Statement::new(id, StaticSource::new(sql, vec![]))
}

#[test]
fn handle_survives_flush_when_reuse_is_enabled() {
    let connection = MockConnection::new();
    let mut executor =
        ReusingBatchExecutor::new(Box::new(connection.clone())).reuse_between_flushes(true);

    let stmt = statement("a", "insert into a values(1)");

    // Window 1
    executor.update(&stmt, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    // Window 2 recovers the pooled handle; no second prepare
    executor.update(&stmt, &mut Value::Null).unwrap();
    let results = executor.flush(false).unwrap();

    assert_eq!(connection.prepares(), 1);
    assert_eq!(results[0].update_counts(), &[1]);
    // The pooled slot's parameter list was cleared between windows
    assert_eq!(results[0].parameter_objects(), &[Value::Null]);
}

#[test]
fn handle_is_prepared_again_when_reuse_is_disabled() {
    let connection = MockConnection::new();
    let mut executor = ReusingBatchExecutor::new(Box::new(connection.clone()));

    let stmt = statement("a", "insert into a values(1)");

    executor.update(&stmt, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    executor.update(&stmt, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    assert_eq!(connection.prepares(), 2);
}

#[test]
fn pool_is_keyed_by_statement_text_and_identity() {
    let connection = MockConnection::new();
    let mut executor =
        ReusingBatchExecutor::new(Box::new(connection.clone())).reuse_between_flushes(true);

    let a = statement("a", "insert into a values(1)");
    // Same text, different statement identity: distinct key, distinct handle
    let other = statement("other", "insert into a values(1)");

    executor.update(&a, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    executor.update(&other, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    assert_eq!(connection.prepares(), 2);
}

#[test]
fn close_releases_pooled_handles() {
    let connection = MockConnection::new();
    let mut executor =
        ReusingBatchExecutor::new(Box::new(connection.clone())).reuse_between_flushes(true);

    let stmt = statement("a", "insert into a values(1)");
    executor.update(&stmt, &mut Value::Null).unwrap();
    executor.flush(false).unwrap();

    // The handle is pooled, not closed, until the executor itself closes
    assert!(!connection
        .events()
        .contains(&"close:insert into a values(1)".to_string()));

    executor.close().unwrap();

    assert!(connection
        .events()
        .contains(&"close:insert into a values(1)".to_string()));
}

#[test]
fn rollback_flush_never_pools_handles() {
    let connection = MockConnection::new();
    let mut executor =
        ReusingBatchExecutor::new(Box::new(connection.clone())).reuse_between_flushes(true);

    let stmt = statement("a", "insert into a values(1)");
    executor.update(&stmt, &mut Value::Null).unwrap();
    executor.flush(true).unwrap();

    // The rolled-back handle was closed; the next window prepares again
    executor.update(&stmt, &mut Value::Null).unwrap();
    assert_eq!(connection.prepares(), 2);
}
