//! 图引擎错误处理
//!
//! ## 错误分类
//!
//! - `NotFound`：操作引用了不在图中的节点或边
//! - `InvalidArgument`：参数不合法，例如边的端点不属于当前图
//! - `AlgorithmInvariant`：算法内部一致性被破坏，说明存在缺陷，不应重试
//!
//! 结构性错误（`NotFound`、`InvalidArgument`）发生时图保持调用前的状态。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 图引擎统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("未找到: {0}")]
    NotFound(String),

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("算法不变量被破坏: {0}")]
    AlgorithmInvariant(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 对外错误码
///
/// 编号沿用 XXYY 格式：03=验证，05=资源，09=系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// 无效输入
    InvalidInput = 302,
    /// 资源未找到
    ResourceNotFound = 500,
    /// 内部错误
    InternalError = 900,
}

impl GraphError {
    pub fn not_found(what: impl Into<String>) -> Self {
        GraphError::NotFound(what.into())
    }

    pub fn invalid_argument(what: impl Into<String>) -> Self {
        GraphError::InvalidArgument(what.into())
    }

    pub fn invariant(what: impl Into<String>) -> Self {
        GraphError::AlgorithmInvariant(what.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GraphError::NotFound(_) => ErrorCode::ResourceNotFound,
            GraphError::InvalidArgument(_) => ErrorCode::InvalidInput,
            GraphError::AlgorithmInvariant(_) => ErrorCode::InternalError,
        }
    }

    /// 内部一致性错误表示实现缺陷，调用方不应把它当作可恢复错误处理
    pub fn is_fatal(&self) -> bool {
        matches!(self, GraphError::AlgorithmInvariant(_))
    }
}
