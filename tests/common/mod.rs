//! 集成测试共享工具模块
//!
//! 提供测试图的构建函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

use placegraph::core::NodeId;
use placegraph::graph::{Graph, PlacedData};

pub type PlacedGraph = Graph<PlacedData<char>, u32>;

/// 带坐标的测试图构建器
///
/// 节点按字母标签添加，边数据自动编号
pub struct PlacedGraphBuilder {
    graph: PlacedGraph,
    next_edge: u32,
}

impl PlacedGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            next_edge: 1,
        }
    }

    pub fn node(mut self, label: char, x: i32, y: i32) -> Self {
        self.graph.add_node(PlacedData::new(label, x, y));
        self
    }

    pub fn edge(mut self, tail: char, head: char) -> Self {
        let tail = id_of(&self.graph, tail);
        let head = id_of(&self.graph, head);
        self.graph
            .add_edge(self.next_edge, tail, head)
            .expect("测试边的端点应该存在");
        self.next_edge += 1;
        self
    }

    pub fn build(self) -> PlacedGraph {
        self.graph
    }
}

/// 按标签查找节点 id，找不到时 panic
pub fn id_of(graph: &PlacedGraph, label: char) -> NodeId {
    graph
        .iter_nodes()
        .find(|node| *node.data().data() == label)
        .map(|node| node.id())
        .unwrap_or_else(|| panic!("测试图中没有标签为 {} 的节点", label))
}

/// 把节点 id 序列转换为标签序列
pub fn labels_of(graph: &PlacedGraph, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| {
            graph
                .node_data(*id)
                .map(|data| *data.data())
                .unwrap_or('?')
        })
        .collect()
}
