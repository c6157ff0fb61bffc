//! 图存储
//!
//! `Graph<N, E>` 持有全部节点和边，并为每个节点维护出边/入边关联表。
//! 关联表随加边、删边增量更新，因此查询某节点的出边是 O(度数) 而不是 O(E)。
//!
//! 节点与边按 id 升序迭代，id 单调分配，所以迭代顺序即插入顺序。

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::id::IdGenerator;
use crate::core::{EdgeId, GraphError, GraphResult, NodeId};
use crate::graph::element::{Edge, Node};

/// 重复边（相同 tail/head）的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgePolicy {
    /// 保留已有的边，返回其 id
    #[default]
    KeepFirst,
    /// 拒绝并返回 `InvalidArgument`
    Reject,
}

/// 有向图
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: BTreeMap<NodeId, Node<N>>,
    edges: BTreeMap<EdgeId, Edge<E>>,
    node_ids: IdGenerator,
    edge_ids: IdGenerator,
    duplicate_policy: DuplicateEdgePolicy,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self::with_duplicate_policy(DuplicateEdgePolicy::default())
    }

    pub fn with_duplicate_policy(duplicate_policy: DuplicateEdgePolicy) -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            node_ids: IdGenerator::default(),
            edge_ids: IdGenerator::default(),
            duplicate_policy,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicateEdgePolicy {
        self.duplicate_policy
    }

    /// 添加节点，总是成功
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.node_ids.next_id());
        self.nodes.insert(id, Node::new(id, data));
        log::debug!("添加节点 {}", id);
        id
    }

    /// 添加一条 tail → head 的有向边
    ///
    /// 两个端点都必须属于当前图，否则返回 `InvalidArgument` 且图不变。
    /// 已存在相同 (tail, head) 的边时按 `DuplicateEdgePolicy` 处理。
    pub fn add_edge(&mut self, data: E, tail: NodeId, head: NodeId) -> GraphResult<EdgeId> {
        if !self.nodes.contains_key(&tail) {
            return Err(GraphError::invalid_argument(format!(
                "边的起点 {} 不属于当前图",
                tail
            )));
        }
        if !self.nodes.contains_key(&head) {
            return Err(GraphError::invalid_argument(format!(
                "边的终点 {} 不属于当前图",
                head
            )));
        }

        if let Some(existing) = self.find_edge(tail, head) {
            return match self.duplicate_policy {
                DuplicateEdgePolicy::KeepFirst => {
                    log::debug!("重复边 {} -> {}，保留已有的边 {}", tail, head, existing);
                    Ok(existing)
                }
                DuplicateEdgePolicy::Reject => {
                    log::warn!("拒绝重复边 {} -> {}", tail, head);
                    Err(GraphError::invalid_argument(format!(
                        "边 {} -> {} 已存在: {}",
                        tail, head, existing
                    )))
                }
            };
        }

        let id = EdgeId::new(self.edge_ids.next_id());
        self.edges.insert(id, Edge::new(id, data, tail, head));
        if let Some(node) = self.nodes.get_mut(&tail) {
            node.outgoing.push(id);
        }
        if let Some(node) = self.nodes.get_mut(&head) {
            node.incoming.push(id);
        }
        log::debug!("添加边 {}: {} -> {}", id, tail, head);
        Ok(id)
    }

    /// 删除节点以及所有以它为端点的边，返回节点数据
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<N> {
        let node = self
            .nodes
            .remove(&id)
            .ok_or_else(|| GraphError::not_found(format!("节点 {} 不在当前图中", id)))?;

        let incident: BTreeSet<EdgeId> = node
            .outgoing
            .iter()
            .chain(node.incoming.iter())
            .copied()
            .collect();
        for edge_id in &incident {
            if let Some(edge) = self.edges.remove(edge_id) {
                self.detach(&edge);
            }
        }

        log::debug!("删除节点 {} 及 {} 条关联边", id, incident.len());
        Ok(node.into_data())
    }

    /// 按 id 删除边，返回边数据
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<E> {
        let edge = self
            .edges
            .remove(&id)
            .ok_or_else(|| GraphError::not_found(format!("边 {} 不在当前图中", id)))?;
        self.detach(&edge);
        log::debug!("删除边 {}: {} -> {}", id, edge.tail(), edge.head());
        Ok(edge.into_data())
    }

    /// 按端点删除边
    pub fn remove_edge_between(&mut self, tail: NodeId, head: NodeId) -> GraphResult<E> {
        let id = self
            .find_edge(tail, head)
            .ok_or_else(|| GraphError::not_found(format!("边 {} -> {} 不在当前图中", tail, head)))?;
        self.remove_edge(id)
    }

    fn detach(&mut self, edge: &Edge<E>) {
        if let Some(tail) = self.nodes.get_mut(&edge.tail()) {
            tail.outgoing.retain(|e| *e != edge.id());
        }
        if let Some(head) = self.nodes.get_mut(&edge.head()) {
            head.incoming.retain(|e| *e != edge.id());
        }
    }

    /// 节点 id 的快照，修改返回值不会影响图
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// 边 id 的快照
    pub fn edges(&self) -> BTreeSet<EdgeId> {
        self.edges.keys().copied().collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(&id)
    }

    pub fn node_data(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id).map(Node::data)
    }

    /// 节点数据的可变引用，供展示层移动或着色节点
    pub fn node_data_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(&id).map(Node::data_mut)
    }

    pub fn edge_data(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(&id).map(Edge::data)
    }

    pub fn edge_data_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(&id).map(Edge::data_mut)
    }

    /// 按 id 顺序迭代节点
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.values()
    }

    /// 按 id 顺序迭代边
    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edges.values()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn outgoing_edges(&self, id: NodeId) -> GraphResult<&[EdgeId]> {
        self.nodes
            .get(&id)
            .map(Node::outgoing_edges)
            .ok_or_else(|| GraphError::not_found(format!("节点 {} 不在当前图中", id)))
    }

    pub fn incoming_edges(&self, id: NodeId) -> GraphResult<&[EdgeId]> {
        self.nodes
            .get(&id)
            .map(Node::incoming_edges)
            .ok_or_else(|| GraphError::not_found(format!("节点 {} 不在当前图中", id)))
    }

    /// 查找 tail → head 的边
    pub fn find_edge(&self, tail: NodeId, head: NodeId) -> Option<EdgeId> {
        let node = self.nodes.get(&tail)?;
        node.outgoing
            .iter()
            .copied()
            .find(|id| self.edges.get(id).is_some_and(|e| e.connects(tail, head)))
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 图中不属于 `group` 的所有节点
    pub fn other_nodes(&self, group: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
        self.nodes
            .keys()
            .filter(|id| !group.contains(id))
            .copied()
            .collect()
    }

    /// 给定边集合的所有端点
    pub fn endpoints(&self, edges: &BTreeSet<EdgeId>) -> GraphResult<BTreeSet<NodeId>> {
        let mut endpoints = BTreeSet::new();
        for id in edges {
            let edge = self
                .edges
                .get(id)
                .ok_or_else(|| GraphError::not_found(format!("边 {} 不在当前图中", id)))?;
            endpoints.insert(edge.tail());
            endpoints.insert(edge.head());
        }
        Ok(endpoints)
    }

    /// 结构一致性检查
    ///
    /// 每条边的两个端点都必须存在，且关联表与边集合完全一致。
    pub fn validate(&self) -> bool {
        for edge in self.edges.values() {
            let tail_ok = self
                .nodes
                .get(&edge.tail())
                .is_some_and(|n| n.outgoing.contains(&edge.id()));
            let head_ok = self
                .nodes
                .get(&edge.head())
                .is_some_and(|n| n.incoming.contains(&edge.id()));
            if !tail_ok || !head_ok {
                log::warn!("边 {} 的端点不一致", edge.id());
                return false;
            }
        }

        for node in self.nodes.values() {
            let outgoing_ok = node
                .outgoing
                .iter()
                .all(|id| self.edges.get(id).is_some_and(|e| e.tail() == node.id()));
            let incoming_ok = node
                .incoming
                .iter()
                .all(|id| self.edges.get(id).is_some_and(|e| e.head() == node.id()));
            if !outgoing_ok || !incoming_ok {
                log::warn!("节点 {} 的关联表不一致", node.id());
                return false;
            }
        }

        let listed: usize = self.nodes.values().map(Node::out_degree).sum();
        listed == self.edges.len()
    }
}

impl<N: PartialEq, E> Graph<N, E> {
    /// 按内容查找节点，返回 id 最小的匹配节点
    pub fn find_node(&self, data: &N) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|node| node.data() == data)
            .map(Node::id)
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph")?;
        for node in self.nodes.values() {
            write!(f, "\n  Node: {}", node.data())?;
            for edge_id in &node.outgoing {
                if let Some(edge) = self.edges.get(edge_id) {
                    if let Some(head) = self.nodes.get(&edge.head()) {
                        write!(f, "\n    To: {}, {}", head.data(), edge.data())?;
                    }
                }
            }
        }
        Ok(())
    }
}
