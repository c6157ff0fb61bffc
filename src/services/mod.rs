//! 服务层模块
//!
//! 包含运行在图存储之上的算法

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;
