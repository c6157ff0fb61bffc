//! DFS算法模块
//!
//! 深度优先遍历，同时提供前序和后序回调。用显式栈代替递归，长链不会耗尽调用栈。

use std::collections::HashSet;

use crate::core::{GraphError, GraphResult, NodeId};
use crate::graph::Graph;
use crate::services::algorithm::visitor::{VisitRecorder, Visitor};

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从 `start` 开始深度优先遍历
    ///
    /// 每个未访问节点依次经历：标记、`pre_visit`、逐条出边 `on_edge` 并进入终点、
    /// `post_visit`。任一回调返回 `true` 时整个遍历结束并返回 `Ok(true)`。
    pub fn traverse<N, E, V>(graph: &Graph<N, E>, start: NodeId, visitor: &mut V) -> GraphResult<bool>
    where
        V: Visitor<N, E> + ?Sized,
    {
        if !graph.contains_node(start) {
            return Err(GraphError::not_found(format!("起始节点 {} 不在当前图中", start)));
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        // 栈帧: (节点, 下一条待处理出边的下标)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        if Self::enter(graph, start, visitor, &mut visited, &mut stack)? {
            return Ok(true);
        }

        while let Some(frame) = stack.last_mut() {
            let (current, next_edge) = *frame;
            let node = graph
                .node(current)
                .ok_or_else(|| GraphError::invariant(format!("遍历到的节点 {} 已不存在", current)))?;

            match node.outgoing_edges().get(next_edge) {
                Some(edge_id) => {
                    frame.1 += 1;
                    let edge = graph
                        .edge(*edge_id)
                        .ok_or_else(|| GraphError::invariant(format!("关联表中的边 {} 已不存在", edge_id)))?;
                    if visitor.on_edge(edge) {
                        return Ok(true);
                    }
                    if Self::enter(graph, edge.head(), visitor, &mut visited, &mut stack)? {
                        return Ok(true);
                    }
                }
                None => {
                    stack.pop();
                    if visitor.post_visit(node) {
                        return Ok(true);
                    }
                }
            }
        }

        log::debug!("DFS 从 {} 出发访问了 {} 个节点", start, visited.len());
        Ok(false)
    }

    /// 首次到达节点：标记并前序回调，然后压入栈帧
    fn enter<N, E, V>(
        graph: &Graph<N, E>,
        id: NodeId,
        visitor: &mut V,
        visited: &mut HashSet<NodeId>,
        stack: &mut Vec<(NodeId, usize)>,
    ) -> GraphResult<bool>
    where
        V: Visitor<N, E> + ?Sized,
    {
        if !visited.insert(id) {
            return Ok(false);
        }

        let node = graph
            .node(id)
            .ok_or_else(|| GraphError::invariant(format!("遍历到的节点 {} 已不存在", id)))?;
        if visitor.pre_visit(node) {
            return Ok(true);
        }
        stack.push((id, 0));
        Ok(false)
    }

    /// 按深度优先前序返回从起点可达的所有节点
    pub fn reachable<N, E>(graph: &Graph<N, E>, start: NodeId) -> GraphResult<Vec<NodeId>> {
        let mut recorder = VisitRecorder::new();
        Self::traverse(graph, start, &mut recorder)?;
        Ok(recorder.into_pre_order())
    }

    /// 检查从 `start` 能否到达 `target`
    pub fn has_path<N, E>(graph: &Graph<N, E>, start: NodeId, target: NodeId) -> GraphResult<bool> {
        let mut recorder = VisitRecorder::stopping_at(target);
        Self::traverse(graph, start, &mut recorder)
    }
}

impl<N, E> Graph<N, E> {
    /// 深度优先遍历，见 [`Dfs::traverse`]
    pub fn depth_first_traversal<V>(&self, start: NodeId, visitor: &mut V) -> GraphResult<bool>
    where
        V: Visitor<N, E> + ?Sized,
    {
        Dfs::traverse(self, start, visitor)
    }
}
