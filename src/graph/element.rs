//! 图元素：节点与边
//!
//! 节点和边都由所属的 `Graph` 持有，外部通过 `NodeId` / `EdgeId` 引用。

use crate::core::{EdgeId, NodeId};

/// Represents a node in the graph together with its incidence lists
#[derive(Debug, Clone)]
pub struct Node<N> {
    id: NodeId,
    data: N,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, data: N) -> Self {
        Self {
            id,
            data,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &N {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut N {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> N {
        self.data
    }

    /// Outgoing edges in insertion order
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Incoming edges in insertion order
    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

/// Represents a directed edge from `tail` to `head`
///
/// Two edges are duplicates when they share the same (tail, head) pair; the
/// payload takes no part in that comparison.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    id: EdgeId,
    data: E,
    tail: NodeId,
    head: NodeId,
}

impl<E> Edge<E> {
    pub(crate) fn new(id: EdgeId, data: E, tail: NodeId, head: NodeId) -> Self {
        Self {
            id,
            data,
            tail,
            head,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> E {
        self.data
    }

    /// The "from" node
    pub fn tail(&self) -> NodeId {
        self.tail
    }

    /// The "to" node
    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn connects(&self, tail: NodeId, head: NodeId) -> bool {
        self.tail == tail && self.head == head
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}
