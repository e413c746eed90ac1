//! Weighted, undirected graphs with breadth-first search
//! and Dijkstra's shortest path algorithm.
//!
//! Vertices are owned by a [WeightedGraph] and referred to by
//! [VertexId] handles, so two vertices with the same data are
//! still distinct nodes.
//!
//! ```
//! use graph::WeightedGraph;
//!
//! let mut g = WeightedGraph::new();
//! let a = g.insert("A");
//! let b = g.insert("B");
//! let c = g.insert("C");
//! g.add_edge(a, b, 1.0)?;
//! g.add_edge(b, c, 2.0)?;
//!
//! assert_eq!(g.dijkstra(a)?.get(c), Some(3.0));
//! # Ok::<(), graph::GraphError>(())
//! ```

pub mod algorithm;
mod errors;
mod graph;
mod path;
mod vertex;

pub use crate::graph::WeightedGraph;
pub use algorithm::bfs::BreadthFirstIter;
pub use algorithm::dijkstra::Distances;
pub use algorithm::{BreadthFirst, Dijkstra, Search};
pub use errors::GraphError;
pub use errors::Result as GraphResult;
pub use path::GraphPath;
pub use vertex::{Vertex, VertexId};
