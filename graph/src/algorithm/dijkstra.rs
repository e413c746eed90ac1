//! Dijkstra's Algorithm

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, HashMap};

use indexmap::IndexMap;
use log::{debug, trace};

use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::vertex::VertexId;

/// Wrapper for queued vertices which sorts appropriately
/// for Dijkstra's Algorithm (shortest distance first).
#[derive(Debug, Clone, Copy)]
struct DijkstraElement {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for DijkstraElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraElement {}

impl Ord for DijkstraElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .reverse()
    }
}

impl PartialOrd for DijkstraElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest distances from a single origin to every vertex in a graph.
///
/// Unreachable vertices have a distance of infinity.
#[derive(Debug, Clone)]
pub struct Distances {
    origin: VertexId,
    distances: IndexMap<VertexId, f64>,
    previous: HashMap<VertexId, VertexId>,
}

impl Distances {
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// Distance to a vertex, or `None` if it wasn't in the graph.
    pub fn get(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get(vertex).map(f64::is_finite).unwrap_or(false)
    }

    /// Iterate through all distances, in the order vertices were added to the graph.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances.iter().map(|(v, d)| (*v, *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The vertex before this one on a shortest path from the origin.
    pub fn previous(&self, vertex: VertexId) -> Option<VertexId> {
        self.previous.get(&vertex).copied()
    }

    /// Vertices along a shortest path from the origin to the target, inclusive.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.origin {
            current = self.previous(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

pub(crate) fn run<V>(graph: &WeightedGraph<V>, start: VertexId) -> Result<Distances> {
    graph.validate(start)?;

    let mut distances: IndexMap<VertexId, f64> = graph
        .vertices()
        .map(|(id, _)| (id, f64::INFINITY))
        .collect();
    distances.insert(start, 0.0);

    let mut previous = HashMap::new();
    let mut queue = BinaryHeap::new();
    queue.push(DijkstraElement {
        distance: 0.0,
        vertex: start,
    });

    let mut n = 0;
    while let Some(DijkstraElement { distance, vertex }) = queue.pop() {
        n += 1;

        // A shorter route to this vertex was found after this entry was queued.
        if distance > distances[&vertex] {
            continue;
        }
        trace!("Settled {} at {} (Q{})", vertex, distance, queue.len());

        for (neighbor, weight) in graph.vertex(vertex)?.adjacent_vertices() {
            let candidate = distance + weight;
            if candidate < distances[neighbor] {
                distances.insert(*neighbor, candidate);
                previous.insert(*neighbor, vertex);
                queue.push(DijkstraElement {
                    distance: candidate,
                    vertex: *neighbor,
                });
            }
        }
    }
    debug!("Dijkstra from {} popped {} entries", start, n);

    Ok(Distances {
        origin: start,
        distances,
        previous,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chain() {
        let mut g = WeightedGraph::new();
        let a = g.insert("A");
        let b = g.insert("B");
        let c = g.insert("C");
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 2.0).unwrap();

        let d = g.dijkstra(a).unwrap();
        assert_eq!(d.get(a), Some(0.0));
        assert_eq!(d.get(b), Some(1.0));
        assert_eq!(d.get(c), Some(3.0));
    }

    #[test]
    fn prefers_shorter_indirect_path() {
        let mut g = WeightedGraph::new();
        let a = g.insert("A");
        let b = g.insert("B");
        let c = g.insert("C");
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(a, c, 4.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();

        let d = g.dijkstra(a).unwrap();
        assert_eq!(
            d.iter().collect::<Vec<_>>(),
            vec![(a, 0.0), (b, 1.0), (c, 2.0)]
        );
        assert_eq!(d.previous(c), Some(b));
        assert_eq!(d.path_to(c), Some(vec![a, b, c]));
    }

    #[test]
    fn equal_weights_count_hops() {
        let mut g = WeightedGraph::new();
        let ids: Vec<VertexId> = (0..7).map(|i| g.insert(i)).collect();
        let w = 2.5;

        // 0-1-2-3-4 with shortcut 0-3, and 5-6 off on their own
        for pair in ids[..5].windows(2) {
            g.add_edge(pair[0], pair[1], w).unwrap();
        }
        g.add_edge(ids[0], ids[3], w).unwrap();
        g.add_edge(ids[5], ids[6], w).unwrap();

        let d = g.dijkstra(ids[0]).unwrap();
        let hops = [0.0, 1.0, 2.0, 1.0, 2.0];
        for (id, h) in ids.iter().zip(hops.iter()) {
            assert_eq!(d.get(*id), Some(w * h));
        }
        assert_eq!(d.get(ids[5]), Some(f64::INFINITY));
        assert!(!d.is_reachable(ids[6]));
        assert_eq!(d.path_to(ids[6]), None);
    }

    #[test]
    fn isolated_start() {
        let mut g = WeightedGraph::new();
        let a = g.insert(());
        let b = g.insert(());

        let d = g.dijkstra(a).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.origin(), a);
        assert_eq!(d.get(a), Some(0.0));
        assert_eq!(d.get(b), Some(f64::INFINITY));
        assert_eq!(d.path_to(a), Some(vec![a]));
    }

    #[test]
    fn tolerates_stale_queue_entries() {
        // B is first queued via the heavy edge, then improved through C.
        let mut g = WeightedGraph::new();
        let a = g.insert('A');
        let b = g.insert('B');
        let c = g.insert('C');
        let d = g.insert('D');
        g.add_edge(a, b, 10.0).unwrap();
        g.add_edge(a, c, 1.0).unwrap();
        g.add_edge(c, b, 1.0).unwrap();
        g.add_edge(b, d, 1.0).unwrap();

        let dist = g.dijkstra(a).unwrap();
        assert_eq!(dist.get(b), Some(2.0));
        assert_eq!(dist.get(d), Some(3.0));
        assert_eq!(dist.path_to(d), Some(vec![a, c, b, d]));
    }

    #[test]
    fn uses_current_weights() {
        let mut g = WeightedGraph::new();
        let a = g.insert('A');
        let b = g.insert('B');
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(a, b, 6.0).unwrap();
        assert_eq!(g.dijkstra(b).unwrap().get(a), Some(6.0));

        g.remove_edge(a, b).unwrap();
        assert_eq!(g.dijkstra(b).unwrap().get(a), Some(f64::INFINITY));
    }

    #[test]
    fn shortest_path() {
        let mut g = WeightedGraph::new();
        let a = g.insert('A');
        let b = g.insert('B');
        let c = g.insert('C');
        let e = g.insert('E');
        g.add_edge(a, b, 1.5).unwrap();
        g.add_edge(b, c, 1.5).unwrap();
        g.add_edge(a, c, 5.0).unwrap();

        let path = g.shortest_path(a, c).unwrap().unwrap();
        assert_eq!(path.nodes(), &[a, b, c]);
        assert_eq!(path.weight(), 3.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.origin(), a);
        assert_eq!(path.destination(), c);

        assert!(g.shortest_path(a, e).unwrap().is_none());
    }
}
