use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::vertex::VertexId;

/// Lazy breadth-first traversal of a graph.
///
/// Each vertex reachable from the start is produced exactly once,
/// along with its data. Neighbors are queued in the order their
/// edges were added.
#[derive(Debug)]
pub struct BreadthFirstIter<'g, V> {
    graph: &'g WeightedGraph<V>,
    queue: VecDeque<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g, V> BreadthFirstIter<'g, V> {
    pub(crate) fn new(graph: &'g WeightedGraph<V>, start: VertexId) -> Result<Self> {
        graph.validate(start)?;

        let mut visited = HashSet::with_capacity(graph.vertex_count());
        visited.insert(start);
        let mut queue = VecDeque::new();
        queue.push_back(start);

        Ok(Self {
            graph,
            queue,
            visited,
        })
    }
}

impl<'g, V> Iterator for BreadthFirstIter<'g, V> {
    type Item = (VertexId, &'g V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let vertex = self.graph.vertex(id).ok()?;

        for neighbor in vertex.adjacent_vertices().keys() {
            if self.visited.insert(*neighbor) {
                self.queue.push_back(*neighbor);
            }
        }
        trace!("Visited {} (Q{})", id, self.queue.len());

        Some((id, vertex.data()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn visits_in_insertion_order() {
        let mut g = WeightedGraph::new();
        let a = g.insert("A");
        let b = g.insert("B");
        let c = g.insert("C");
        let d = g.insert("D");
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(a, c, 1.0).unwrap();
        g.add_edge(b, d, 1.0).unwrap();

        let order: Vec<&str> = g.bfs(a).unwrap().map(|(_, name)| *name).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);

        let order: Vec<VertexId> = g.bfs(d).unwrap().map(|(id, _)| id).collect();
        assert_eq!(order, vec![d, b, a, c]);
    }

    #[test]
    fn visits_each_reachable_vertex_once() {
        let mut g = WeightedGraph::new();
        let ids: Vec<VertexId> = (0..6).map(|i| g.insert(i)).collect();

        // A cycle 0-1-2-3-0 with a chord, and a separate pair 4-5
        g.add_edge(ids[0], ids[1], 1.0).unwrap();
        g.add_edge(ids[1], ids[2], 1.0).unwrap();
        g.add_edge(ids[2], ids[3], 1.0).unwrap();
        g.add_edge(ids[3], ids[0], 1.0).unwrap();
        g.add_edge(ids[0], ids[2], 1.0).unwrap();
        g.add_edge(ids[4], ids[5], 1.0).unwrap();

        let mut seen: Vec<i32> = g.bfs(ids[2]).unwrap().map(|(_, n)| *n).collect();
        assert_eq!(seen[0], 2);
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3]);

        let seen: Vec<i32> = g.bfs(ids[5]).unwrap().map(|(_, n)| *n).collect();
        assert_eq!(seen, vec![5, 4]);
    }

    #[test]
    fn skips_removed_edges() {
        let mut g = WeightedGraph::new();
        let a = g.insert('A');
        let b = g.insert('B');
        let c = g.insert('C');
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.remove_edge(a, b).unwrap();

        assert_eq!(g.bfs(a).unwrap().count(), 1);
    }

    #[test]
    fn restarts_fresh() {
        let mut g = WeightedGraph::new();
        let a = g.insert('A');
        let b = g.insert('B');
        g.add_edge(a, b, 1.0).unwrap();

        let first: Vec<_> = g.bfs(a).unwrap().collect();
        let second: Vec<_> = g.bfs(a).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
