pub use crate::adjacency_matrix::AdjacencyMatrix;
pub use crate::biconnected::{Biconnectivity, TraversedEdge};
pub use crate::error::GraphError;
pub use crate::graph::{DEFAULT_WEIGHT, NamedGraph, Neighbor, Weight};
pub use crate::search::{Bfs, Dfs};
pub use crate::shortest_path::Distances;
pub use crate::spanning_tree::{SpanningTree, TreeEdge};
pub use crate::vertex_id::VertexId;
