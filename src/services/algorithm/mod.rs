//! 算法模块
//!
//! 包含图遍历与最短路径算法实现

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod visitor;

// 重新导出常用算法结构体
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, QueueOrder, ShortestDistances, UNREACHABLE};
pub use visitor::{VisitRecorder, Visitor};
