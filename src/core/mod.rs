pub mod error;
pub mod id;

// 错误和结果类型
pub use error::{ErrorCode, GraphError, GraphResult};

// 标识符
pub use id::{EdgeId, NodeId};
