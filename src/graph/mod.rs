//! 图结构模块
//!
//! 包含图存储、节点/边元素、带坐标的节点数据以及示例图

pub mod element;
pub mod placed;
pub mod sample;
pub mod store;

pub use element::{Edge, Node};
pub use placed::{NodeColor, PlacedData};
pub use sample::{find_label, sample_graph, SampleGraph};
pub use store::{DuplicateEdgePolicy, Graph};
