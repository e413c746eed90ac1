use crate::vertex::VertexId;

/// A route through a graph, along with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    pub(crate) nodes: Vec<VertexId>,
    pub(crate) weight: f64,
}

impl GraphPath {
    /// Number of edges along the path
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> &[VertexId] {
        &self.nodes
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn origin(&self) -> VertexId {
        self.nodes[0]
    }

    pub fn destination(&self) -> VertexId {
        self.nodes[self.nodes.len() - 1]
    }
}
