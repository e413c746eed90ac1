//! Vertices and the handles used to refer to them.

use std::fmt;

use indexmap::IndexMap;

/// Opaque handle to a vertex registered in a [crate::WeightedGraph].
///
/// Handles are handed out by the graph when a vertex is added and are
/// never reused, so a handle to a removed vertex stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node carrying some data and the weights of
/// the edges to each of its neighbors.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    data: V,
    adjacent: IndexMap<VertexId, f64>,
}

impl<V> Vertex<V> {
    /// Create a detached vertex with no edges.
    pub fn new(data: V) -> Self {
        Self {
            data,
            adjacent: IndexMap::new(),
        }
    }

    // Graph symmetry is maintained by the caller.
    pub(crate) fn add_adjacent_vertex(&mut self, other: VertexId, weight: f64) {
        self.adjacent.insert(other, weight);
    }

    pub(crate) fn remove_adjacent_vertex(&mut self, other: VertexId) -> Option<f64> {
        self.adjacent.shift_remove(&other)
    }

    pub(crate) fn clear_adjacent_vertices(&mut self) {
        self.adjacent.clear();
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub fn into_data(self) -> V {
        self.data
    }

    /// Adjacent vertices and edge weights, in the order
    /// the edges were first added.
    pub fn adjacent_vertices(&self) -> &IndexMap<VertexId, f64> {
        &self.adjacent
    }

    pub fn weight_to(&self, other: VertexId) -> Option<f64> {
        self.adjacent.get(&other).copied()
    }

    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains_key(&other)
    }

    /// Number of edges touching this vertex.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
