//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use placegraph::core::{GraphError, NodeId};
use placegraph::graph::Graph;

/// 断言结果失败且为 NotFound
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, GraphError>) {
    let err = result.expect_err("操作应该失败");
    assert!(
        matches!(err, GraphError::NotFound(_)),
        "期望 NotFound, 实际是 {:?}",
        err
    );
}

/// 断言结果失败且为 InvalidArgument
pub fn assert_invalid_argument<T: std::fmt::Debug>(result: Result<T, GraphError>) {
    let err = result.expect_err("操作应该失败");
    assert!(
        matches!(err, GraphError::InvalidArgument(_)),
        "期望 InvalidArgument, 实际是 {:?}",
        err
    );
}

/// 断言没有任何边引用指定节点
pub fn assert_no_edge_touches<N, E>(graph: &Graph<N, E>, node: NodeId) {
    for id in graph.edges() {
        let edge = graph.edge(id).expect("快照中的边应该存在");
        assert_ne!(edge.tail(), node, "边 {} 的起点仍是已删除节点", id);
        assert_ne!(edge.head(), node, "边 {} 的终点仍是已删除节点", id);
    }
}

/// 断言序列中没有重复元素
pub fn assert_unique(ids: &[NodeId]) {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        assert!(seen.insert(*id), "节点 {} 被访问了多次", id);
    }
}
