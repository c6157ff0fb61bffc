//! Dijkstra算法模块
//!
//! 在带坐标的图上计算单源最短距离。边权由两端点坐标的欧氏距离四舍五入得到，
//! 在每次运行开始时一次性计算并缓存；运行期间图以不可变借用持有，坐标不会变化。
//!
//! 参与计算的节点范围是所有至少作为一条边端点的节点，再加上起点本身。
//! 孤立节点不会出现在结果中。

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DijkstraConfig;
use crate::core::{GraphError, GraphResult, NodeId};
use crate::graph::{Graph, PlacedData};

/// 不可达节点的距离
pub const UNREACHABLE: u64 = u64::MAX;

/// 优先队列的排序依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueOrder {
    /// 按实时的暂定距离排序（标准 Dijkstra）
    #[default]
    Tentative,
    /// 按初始化时计算的静态优先级排序：每个节点取某条入边的权重，起点为 0。
    /// 仅用于与旧工具的输出保持一致，结果不保证最短。
    StaticWeight,
}

impl fmt::Display for QueueOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueOrder::Tentative => write!(f, "tentative"),
            QueueOrder::StaticWeight => write!(f, "static_weight"),
        }
    }
}

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    key: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆，键相同时 id 小的先出队
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestDistances {
    source: NodeId,
    distances: BTreeMap<NodeId, u64>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestDistances {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// 到 `node` 的最短距离；节点不在计算范围内或不可达时返回 `None`
    pub fn distance_to(&self, node: NodeId) -> Option<u64> {
        self.raw_distance(node).filter(|d| *d != UNREACHABLE)
    }

    /// 原始距离，不可达节点为 [`UNREACHABLE`]
    pub fn raw_distance(&self, node: NodeId) -> Option<u64> {
        self.distances.get(&node).copied()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance_to(node).is_some()
    }

    /// 按节点 id 顺序迭代 (节点, 原始距离)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.distances.iter().map(|(node, distance)| (*node, *distance))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// 重建从起点到 `target` 的路径
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// 生成文本报告，每个节点一行：`To node <X>, distance is: <d>`
    pub fn format_report<T: fmt::Display, E>(&self, graph: &Graph<PlacedData<T>, E>) -> String {
        let mut output = String::new();
        for (node, distance) in self.iter() {
            let label = graph
                .node_data(node)
                .map(ToString::to_string)
                .unwrap_or_else(|| node.to_string());
            let distance = if distance == UNREACHABLE {
                "infinity".to_string()
            } else {
                distance.to_string()
            };
            output.push_str(&format!("To node {}, distance is: {}\n", label, distance));
        }
        output
    }
}

/// Dijkstra算法结构体
///
/// 保存一次运行的中间状态。每次 [`Dijkstra::execute`] 开始时都会先清空，
/// 因此同一个实例可以在同一张图上重复运行。
#[derive(Debug, Default)]
pub struct Dijkstra {
    queue_order: QueueOrder,
    scope: BTreeSet<NodeId>,
    weights: HashMap<(NodeId, NodeId), u64>,
    static_priority: HashMap<NodeId, u64>,
    tentative: BTreeMap<NodeId, u64>,
    predecessors: HashMap<NodeId, NodeId>,
    visited: HashSet<NodeId>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_queue_order(queue_order: QueueOrder) -> Self {
        Self {
            queue_order,
            ..Self::default()
        }
    }

    pub fn from_config(config: &DijkstraConfig) -> Self {
        Self::with_queue_order(config.queue_order)
    }

    pub fn queue_order(&self) -> QueueOrder {
        self.queue_order
    }

    /// 清空上一次运行留下的状态
    pub fn reset(&mut self) {
        self.scope.clear();
        self.weights.clear();
        self.static_priority.clear();
        self.tentative.clear();
        self.predecessors.clear();
        self.visited.clear();
    }

    /// 计算从 `source` 出发的最短距离
    pub fn execute<T, E>(
        &mut self,
        graph: &Graph<PlacedData<T>, E>,
        source: NodeId,
    ) -> GraphResult<ShortestDistances> {
        if !graph.contains_node(source) {
            return Err(GraphError::not_found(format!("起点 {} 不在当前图中", source)));
        }

        self.reset();
        self.initialize(graph, source)?;

        let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
        queue.push(QueueEntry { node: source, key: 0 });

        while let Some(QueueEntry { node, .. }) = queue.pop() {
            if !self.visited.insert(node) {
                continue;
            }

            let current = self.tentative_of(node);
            for edge_id in graph.outgoing_edges(node)? {
                let edge = graph
                    .edge(*edge_id)
                    .ok_or_else(|| GraphError::invariant(format!("关联表中的边 {} 已不存在", edge_id)))?;
                let neighbor = edge.head();
                if self.visited.contains(&neighbor) || !self.scope.contains(&neighbor) {
                    continue;
                }

                let weight = self.edge_weight(node, neighbor)?;
                let candidate = current.checked_add(weight).ok_or_else(|| {
                    GraphError::invariant(format!("到 {} 的路径长度溢出", neighbor))
                })?;
                if candidate < self.tentative_of(neighbor) {
                    log::trace!("松弛 {} -> {}: {}", node, neighbor, candidate);
                    self.tentative.insert(neighbor, candidate);
                    self.predecessors.insert(neighbor, node);
                    queue.push(QueueEntry {
                        node: neighbor,
                        key: self.priority(neighbor, candidate),
                    });
                }
            }
        }

        log::info!(
            "Dijkstra 完成: 起点 {}, 范围 {} 个节点, 到达 {} 个 (队列排序: {})",
            source,
            self.scope.len(),
            self.visited.len(),
            self.queue_order
        );

        Ok(ShortestDistances {
            source,
            distances: self.tentative.clone(),
            predecessors: self.predecessors.clone(),
        })
    }

    /// 初始化阶段缓存的边权
    ///
    /// 没有 tail → head 的边时返回 `AlgorithmInvariant`：松弛只沿已有出边进行，
    /// 查不到权重说明缓存与图结构不一致。
    pub fn edge_weight(&self, tail: NodeId, head: NodeId) -> GraphResult<u64> {
        self.weights.get(&(tail, head)).copied().ok_or_else(|| {
            GraphError::invariant(format!("缺少边 {} -> {} 的权重", tail, head))
        })
    }

    fn initialize<T, E>(&mut self, graph: &Graph<PlacedData<T>, E>, source: NodeId) -> GraphResult<()> {
        for edge in graph.iter_edges() {
            let tail = graph
                .node_data(edge.tail())
                .ok_or_else(|| GraphError::invariant(format!("边 {} 的起点不存在", edge.id())))?;
            let head = graph
                .node_data(edge.head())
                .ok_or_else(|| GraphError::invariant(format!("边 {} 的终点不存在", edge.id())))?;

            let weight = tail.distance_to(head);
            self.scope.insert(edge.tail());
            self.scope.insert(edge.head());
            self.weights.insert((edge.tail(), edge.head()), weight);
            self.static_priority.insert(edge.head(), weight);
        }
        self.scope.insert(source);

        for node in &self.scope {
            self.tentative.insert(*node, UNREACHABLE);
        }
        self.tentative.insert(source, 0);
        self.static_priority.insert(source, 0);

        log::debug!(
            "Dijkstra 初始化: {} 个节点, {} 条边权",
            self.scope.len(),
            self.weights.len()
        );
        Ok(())
    }

    fn tentative_of(&self, node: NodeId) -> u64 {
        self.tentative.get(&node).copied().unwrap_or(UNREACHABLE)
    }

    fn priority(&self, node: NodeId, tentative: u64) -> u64 {
        match self.queue_order {
            QueueOrder::Tentative => tentative,
            QueueOrder::StaticWeight => self
                .static_priority
                .get(&node)
                .copied()
                .unwrap_or(UNREACHABLE),
        }
    }

    /// 一次性计算最短距离
    pub fn shortest_distances<T, E>(
        graph: &Graph<PlacedData<T>, E>,
        source: NodeId,
    ) -> GraphResult<ShortestDistances> {
        Self::new().execute(graph, source)
    }

    /// 查找从起点到目标节点的最短路径，不可达时返回 `None`
    pub fn shortest_path<T, E>(
        graph: &Graph<PlacedData<T>, E>,
        source: NodeId,
        target: NodeId,
    ) -> GraphResult<Option<(Vec<NodeId>, u64)>> {
        if !graph.contains_node(target) {
            return Err(GraphError::not_found(format!("目标节点 {} 不在当前图中", target)));
        }
        let distances = Self::shortest_distances(graph, source)?;
        Ok(distances
            .path_to(target)
            .zip(distances.distance_to(target)))
    }
}
