//! BFS算法模块
//!
//! 基于 FIFO 队列的广度优先遍历。出边按插入顺序处理，
//! 边的终点无论是否已访问都会入队，出队时再过滤已访问节点。

use std::collections::{HashSet, VecDeque};

use crate::core::{GraphError, GraphResult, NodeId};
use crate::graph::Graph;
use crate::services::algorithm::visitor::{VisitRecorder, Visitor};

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从 `start` 开始广度优先遍历
    ///
    /// 返回 `Ok(true)` 表示某个回调要求提前结束。起点不在图中时返回
    /// `NotFound`，此时不会调用任何回调。不调用 `post_visit`。
    pub fn traverse<N, E, V>(graph: &Graph<N, E>, start: NodeId, visitor: &mut V) -> GraphResult<bool>
    where
        V: Visitor<N, E> + ?Sized,
    {
        if !graph.contains_node(start) {
            return Err(GraphError::not_found(format!("起始节点 {} 不在当前图中", start)));
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }

            let node = graph
                .node(current)
                .ok_or_else(|| GraphError::invariant(format!("队列中的节点 {} 已不存在", current)))?;
            if visitor.pre_visit(node) {
                log::debug!("BFS 在节点 {} 前序回调处提前结束", current);
                return Ok(true);
            }

            for edge_id in node.outgoing_edges() {
                let edge = graph
                    .edge(*edge_id)
                    .ok_or_else(|| GraphError::invariant(format!("关联表中的边 {} 已不存在", edge_id)))?;
                if visitor.on_edge(edge) {
                    log::debug!("BFS 在边 {} 处提前结束", edge_id);
                    return Ok(true);
                }
                queue.push_back(edge.head());
            }
        }

        log::debug!("BFS 从 {} 出发访问了 {} 个节点", start, visited.len());
        Ok(false)
    }

    /// 按广度优先顺序返回从起点可达的所有节点
    pub fn reachable<N, E>(graph: &Graph<N, E>, start: NodeId) -> GraphResult<Vec<NodeId>> {
        let mut recorder = VisitRecorder::new();
        Self::traverse(graph, start, &mut recorder)?;
        Ok(recorder.into_pre_order())
    }
}

impl<N, E> Graph<N, E> {
    /// 广度优先遍历，见 [`Bfs::traverse`]
    pub fn breadth_first_traversal<V>(&self, start: NodeId, visitor: &mut V) -> GraphResult<bool>
    where
        V: Visitor<N, E> + ?Sized,
    {
        Bfs::traverse(self, start, visitor)
    }
}
