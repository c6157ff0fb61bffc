//! 遍历访问者
//!
//! BFS/DFS 在三个时机回调访问者：节点前序、节点后序（仅 DFS）、经过一条边。
//! 任一回调返回 `true` 时遍历立即结束，遍历函数返回 `Ok(true)`。

use crate::core::{EdgeId, NodeId};
use crate::graph::{Edge, Node};

/// 遍历访问者trait
///
/// 默认实现全部返回 `false`，只需覆盖关心的回调。
pub trait Visitor<N, E> {
    /// 节点首次被访问时调用
    fn pre_visit(&mut self, _node: &Node<N>) -> bool {
        false
    }

    /// 节点的所有出边处理完毕后调用，仅深度优先遍历使用
    fn post_visit(&mut self, _node: &Node<N>) -> bool {
        false
    }

    /// 经过一条出边时调用
    fn on_edge(&mut self, _edge: &Edge<E>) -> bool {
        false
    }
}

/// 记录访问顺序的访问者
///
/// 可选地在前序访问到目标节点时停止遍历。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRecorder {
    pre_order: Vec<NodeId>,
    post_order: Vec<NodeId>,
    edges: Vec<EdgeId>,
    stop_at: Option<NodeId>,
}

impl VisitRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopping_at(target: NodeId) -> Self {
        Self {
            stop_at: Some(target),
            ..Self::default()
        }
    }

    pub fn pre_order(&self) -> &[NodeId] {
        &self.pre_order
    }

    pub fn post_order(&self) -> &[NodeId] {
        &self.post_order
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn into_pre_order(self) -> Vec<NodeId> {
        self.pre_order
    }
}

impl<N, E> Visitor<N, E> for VisitRecorder {
    fn pre_visit(&mut self, node: &Node<N>) -> bool {
        self.pre_order.push(node.id());
        self.stop_at == Some(node.id())
    }

    fn post_visit(&mut self, node: &Node<N>) -> bool {
        self.post_order.push(node.id());
        false
    }

    fn on_edge(&mut self, edge: &Edge<E>) -> bool {
        self.edges.push(edge.id());
        false
    }
}
