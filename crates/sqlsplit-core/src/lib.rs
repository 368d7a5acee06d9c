pub mod driver;
pub use driver::{Connection, Executor, StatementHandle};

mod error;
pub use error::{BatchFailure, Error};

pub mod stmt;

/// A Result type alias that uses sqlsplit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
