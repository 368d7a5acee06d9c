mod alloc;
pub use alloc::ParameterAllocator;

mod arena;
pub use arena::StatementArena;

mod config;
pub use config::{new_executor, BatchConfig};

mod dispatch;
pub use dispatch::SplitDispatcher;

pub mod executor;
pub use executor::{ReusingBatchExecutor, SimpleExecutor};

mod scan;
pub use scan::PlaceholderScan;

mod split;
pub use split::Splitter;

pub use sqlsplit_core::{driver, stmt, BatchFailure, Error, Result};
