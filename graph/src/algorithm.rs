//! Searches over a [WeightedGraph].

use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::vertex::VertexId;

pub(crate) mod bfs;
pub(crate) mod dijkstra;

/// A search which can be started from any vertex in a graph.
pub trait Search {
    type Output;

    /// Run the search to completion from the given start vertex.
    fn search(&self, start: VertexId) -> Result<Self::Output>;
}

/// Breadth-first search, producing vertices in the order they were visited.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirst<'g, V> {
    graph: &'g WeightedGraph<V>,
}

impl<'g, V> BreadthFirst<'g, V> {
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        Self { graph }
    }
}

impl<'g, V> Search for BreadthFirst<'g, V> {
    type Output = Vec<VertexId>;

    fn search(&self, start: VertexId) -> Result<Self::Output> {
        Ok(self.graph.bfs(start)?.map(|(id, _)| id).collect())
    }
}

/// Dijkstra's algorithm, producing the distance to each vertex.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g, V> {
    graph: &'g WeightedGraph<V>,
}

impl<'g, V> Dijkstra<'g, V> {
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        Self { graph }
    }
}

impl<'g, V> Search for Dijkstra<'g, V> {
    type Output = dijkstra::Distances;

    fn search(&self, start: VertexId) -> Result<Self::Output> {
        dijkstra::run(self.graph, start)
    }
}
