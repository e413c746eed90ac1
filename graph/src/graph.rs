//! Weighted, undirected graph storage.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::algorithm::bfs::BreadthFirstIter;
use crate::algorithm::dijkstra::{self, Distances};
use crate::errors::{GraphError, Result};
use crate::path::GraphPath;
use crate::vertex::{Vertex, VertexId};

/// An undirected graph with `f64` edge weights.
///
/// The graph owns every vertex, and hands out [VertexId] handles to
/// refer to them. Edge weights live on the vertices themselves, and
/// are always stored on both endpoints.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: IndexMap<VertexId, Vertex<V>>,
    next_id: usize,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        WeightedGraph {
            vertices: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<V> WeightedGraph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WeightedGraph {
            vertices: IndexMap::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Register a vertex with the graph.
    ///
    /// Any edges already recorded on the vertex are dropped, since they
    /// can't refer to vertices in this graph.
    pub fn add_vertex(&mut self, mut vertex: Vertex<V>) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;

        vertex.clear_adjacent_vertices();
        self.vertices.insert(id, vertex);
        debug!("Added vertex {}", id);
        id
    }

    /// Build a vertex from some data and register it.
    pub fn insert(&mut self, data: V) -> VertexId {
        self.add_vertex(Vertex::new(data))
    }

    /// Remove a vertex and every edge which touches it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<V>> {
        let mut vertex = self
            .vertices
            .shift_remove(&id)
            .ok_or(GraphError::InvalidVertex(id))?;

        for neighbor in vertex.adjacent_vertices().keys() {
            if let Some(n) = self.vertices.get_mut(neighbor) {
                n.remove_adjacent_vertex(id);
            }
        }
        vertex.clear_adjacent_vertices();

        debug!("Removed vertex {}", id);
        Ok(vertex)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub(crate) fn validate(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(id))
        }
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<V>> {
        self.vertices.get(&id).ok_or(GraphError::InvalidVertex(id))
    }

    pub fn data(&self, id: VertexId) -> Result<&V> {
        self.vertex(id).map(|v| v.data())
    }

    pub fn data_mut(&mut self, id: VertexId) -> Result<&mut V> {
        self.vertices
            .get_mut(&id)
            .map(|v| v.data_mut())
            .ok_or(GraphError::InvalidVertex(id))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges, counting a self-loop once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate through vertices in the order they were added.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<V>)> {
        self.vertices.iter().map(|(id, v)| (*id, v))
    }

    /// Iterate through each undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, f64)> + '_ {
        self.vertices.iter().flat_map(|(id, v)| {
            v.adjacent_vertices()
                .iter()
                .filter(move |(n, _)| *id <= **n)
                .map(move |(n, w)| (*id, *n, *w))
        })
    }

    /// Connect two vertices with an edge, replacing the weight
    /// of any existing edge between them.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;

        if let Some(v) = self.vertices.get_mut(&a) {
            v.add_adjacent_vertex(b, weight);
        }
        if let Some(v) = self.vertices.get_mut(&b) {
            v.add_adjacent_vertex(a, weight);
        }
        debug!("Added edge {} - {} ({})", a, b, weight);
        Ok(())
    }

    /// Disconnect two vertices, returning the weight of the removed edge.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<Option<f64>> {
        self.validate(a)?;
        self.validate(b)?;

        let weight = self
            .vertices
            .get_mut(&a)
            .and_then(|v| v.remove_adjacent_vertex(b));
        if let Some(v) = self.vertices.get_mut(&b) {
            v.remove_adjacent_vertex(a);
        }
        debug!("Removed edge {} - {}", a, b);
        Ok(weight)
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> Result<bool> {
        self.validate(b)?;
        Ok(self.vertex(a)?.is_adjacent(b))
    }

    /// Weight of the edge between two vertices, if they are connected.
    pub fn weight(&self, a: VertexId, b: VertexId) -> Result<Option<f64>> {
        self.validate(b)?;
        Ok(self.vertex(a)?.weight_to(b))
    }

    /// Vertices adjacent to this one, in the order their edges were added.
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.vertex(id)?.adjacent_vertices().keys().copied().collect())
    }

    /// Breadth-first traversal starting at a vertex.
    pub fn bfs(&self, start: VertexId) -> Result<BreadthFirstIter<'_, V>> {
        BreadthFirstIter::new(self, start)
    }

    /// Distances from a vertex to every other vertex,
    /// using Dijkstra's algorithm.
    pub fn dijkstra(&self, start: VertexId) -> Result<Distances> {
        dijkstra::run(self, start)
    }

    /// Find the shortest path between two vertices.
    ///
    /// Returns `None` when the destination is unreachable.
    pub fn shortest_path(
        &self,
        origin: VertexId,
        destination: VertexId,
    ) -> Result<Option<GraphPath>> {
        self.validate(destination)?;
        let distances = self.dijkstra(origin)?;
        Ok(distances.path_to(destination).map(|nodes| GraphPath {
            weight: distances.get(destination).unwrap_or(f64::INFINITY),
            nodes,
        }))
    }
}

impl<V> fmt::Display for WeightedGraph<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, vertex) in self.vertices() {
            write!(f, "Vertex {} is connected to:", vertex.data())?;
            for neighbor in vertex.adjacent_vertices().keys() {
                if let Some(n) = self.vertices.get(neighbor) {
                    write!(f, " {}", n.data())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
