//! An undirected, weighted graph keyed by vertex name, with the classic
//! traversal, shortest-path, spanning-tree and biconnectivity algorithms.
//!
//! ```
//! use namegraph::NamedGraph;
//!
//! let mut graph = NamedGraph::new();
//! graph.add_edge("A", "B", 4);
//! graph.add_edge("B", "C", 1);
//! let a = graph.vertex_id("A").unwrap();
//! let c = graph.vertex_id("C").unwrap();
//! assert_eq!(graph.dijkstra(a).unwrap().get(c), Some(5));
//! assert_eq!(graph.biconnectivity().articulation_points().len(), 1);
//! ```

pub mod adjacency_matrix;
pub mod biconnected;
#[cfg(feature = "pathfinding")]
pub mod connectivity;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod search;
pub mod shortest_path;
pub mod spanning_tree;
pub mod tracing_support;
pub mod vertex_id;

#[cfg(test)]
mod test_support;

pub use adjacency_matrix::AdjacencyMatrix;
pub use biconnected::Biconnectivity;
pub use error::{GraphError, Result};
pub use graph::{DEFAULT_WEIGHT, NamedGraph, Neighbor, Weight};
pub use shortest_path::Distances;
pub use spanning_tree::{SpanningTree, TreeEdge};
pub use vertex_id::VertexId;
