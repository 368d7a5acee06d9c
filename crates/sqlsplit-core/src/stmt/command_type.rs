/// The kind of SQL command a statement issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandType {
    Insert,
    #[default]
    Update,
    Delete,
    Ddl,
}
