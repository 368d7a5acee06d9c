use std::sync::Arc;

/// Identity of a configured statement.
///
/// Cheap to clone; used in batch slot keys and error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatementId(Arc<str>);

impl StatementId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        StatementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatementId {
    fn from(id: &str) -> Self {
        StatementId::new(id)
    }
}

impl core::fmt::Display for StatementId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
