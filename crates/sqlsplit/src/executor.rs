mod batch;
pub use batch::ReusingBatchExecutor;

mod simple;
pub use simple::SimpleExecutor;
