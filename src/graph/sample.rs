//! 示例图
//!
//! 七个带坐标的节点、八条有向边，命令行工具和测试共用。

use crate::core::{GraphResult, NodeId};
use crate::graph::placed::PlacedData;
use crate::graph::store::{DuplicateEdgePolicy, Graph};

/// 示例图的节点类型
pub type SampleGraph = Graph<PlacedData<i32>, i32>;

const NODES: [(i32, i32, i32); 7] = [
    (1, 50, 50),
    (2, 150, 50),
    (3, 150, 150),
    (4, 50, 150),
    (5, 250, 50),
    (6, 250, 100),
    (7, 250, 150),
];

/// (边数据, tail 节点数据, head 节点数据)
const EDGES: [(i32, i32, i32); 8] = [
    (1, 1, 2),
    (2, 1, 3),
    (3, 2, 4),
    (4, 2, 5),
    (5, 3, 6),
    (6, 3, 7),
    (7, 3, 1),
    (8, 2, 6),
];

/// 构建示例图
pub fn sample_graph(policy: DuplicateEdgePolicy) -> GraphResult<SampleGraph> {
    let mut graph = Graph::with_duplicate_policy(policy);
    let ids: Vec<_> = NODES
        .iter()
        .map(|&(label, x, y)| graph.add_node(PlacedData::new(label, x, y)))
        .collect();

    for &(data, tail, head) in &EDGES {
        // 节点标签从 1 开始连续编号
        let tail = ids[(tail - 1) as usize];
        let head = ids[(head - 1) as usize];
        graph.add_edge(data, tail, head)?;
    }

    log::debug!(
        "示例图构建完成: {} 个节点, {} 条边",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

/// 按内层标签查找节点
pub fn find_label(graph: &SampleGraph, label: i32) -> Option<NodeId> {
    graph
        .iter_nodes()
        .find(|node| *node.data().data() == label)
        .map(|node| node.id())
}
