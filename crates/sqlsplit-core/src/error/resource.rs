use super::Error;

/// Failure to acquire or release a prepared-statement handle.
#[derive(Debug)]
pub(super) struct ResourceError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "statement resource error: {}", self.inner)
    }
}

impl Error {
    /// Creates an error from a failure to acquire or release a statement
    /// handle.
    pub fn resource(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Resource(ResourceError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a statement resource error.
    pub fn is_resource(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Resource(_))
    }
}
