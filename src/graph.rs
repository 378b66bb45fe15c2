use crate::{
    VertexId,
    error::{GraphError, Result},
    registry::VertexRegistry,
    tracing_support::trace,
};

/// Edge weight.  Weights are unsigned, so the non-negativity that Dijkstra
/// and Prim rely on holds by construction.
pub type Weight = u64;

/// Weight used by [`NamedGraph::add_unit_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;

/// One entry of a vertex's adjacency list: the other end of an incident edge
/// and that edge's weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// An undirected, weighted multigraph whose vertices are identified by name.
///
/// Vertices are registered implicitly by [`add_edge`](Self::add_edge) (or
/// explicitly by [`add_vertex`](Self::add_vertex)) and receive dense
/// [`VertexId`]s in order of first appearance.  Every call to `add_edge`
/// appends one entry to the adjacency list of each endpoint, so parallel edges
/// and self-loops are kept as-is.  There is no way to remove an edge or a
/// vertex.
///
/// Analysis methods (`bfs`, `dijkstra`, `prim`, `biconnectivity`, ...) take
/// `&self` and return owned results.
#[derive(Clone, Debug, Default)]
pub struct NamedGraph {
    registry: VertexRegistry,
    adjacency: Vec<Vec<Neighbor>>,
    num_edges: usize,
}

impl NamedGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // Construction

    /// Registers a vertex without adding any edge, returning its id.  If the
    /// name is already known its existing id is returned.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let (id, added) = self.registry.intern(name);
        if added {
            trace!(name, id = id.index(), "registered vertex");
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Adds an undirected edge between two named vertices, registering either
    /// name if it is unseen (`u` before `v`).  Never fails; repeated calls
    /// with the same pair produce parallel edges.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) {
        let a = self.add_vertex(u);
        let b = self.add_vertex(v);
        trace!(u, v, weight, "adding edge");
        self.adjacency[a.index()].push(Neighbor { vertex: b, weight });
        self.adjacency[b.index()].push(Neighbor { vertex: a, weight });
        self.num_edges += 1;
    }

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, u: &str, v: &str) {
        self.add_edge(u, v, DEFAULT_WEIGHT);
    }

    // Vertices

    /// Gets the number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Gets all vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// Looks up a vertex by name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.registry.id_of(name)
    }

    /// Looks up the name of a vertex.
    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.registry.name_of(id)
    }

    /// Gets all vertex names in id order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.registry.names()
    }

    /// Returns an error unless `id` names a vertex of this graph.
    pub fn check_vertex(&self, id: VertexId) -> Result<()> {
        if id.index() < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: id,
                vertex_count: self.vertex_count(),
            })
        }
    }

    // Edges

    /// Gets the number of `add_edge` calls made so far.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Gets the adjacency list of a vertex in insertion order.
    pub fn neighbors(&self, id: VertexId) -> Result<&[Neighbor]> {
        self.check_vertex(id)?;
        Ok(self.adjacent(id))
    }

    /// Gets the number of adjacency entries of a vertex.  A self-loop counts
    /// twice.
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        self.neighbors(id).map(<[Neighbor]>::len)
    }

    /// Iterates over every edge once, as `(u, v, weight)` with `u <= v`, in
    /// ascending order of `u`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            let u = VertexId::new(u);
            let mut self_loop_halves = 0usize;
            list.iter().filter_map(move |n| {
                if n.vertex > u {
                    Some((u, n.vertex, n.weight))
                } else if n.vertex == u {
                    // A self-loop appears twice in its own list.
                    self_loop_halves += 1;
                    (self_loop_halves % 2 == 1).then_some((u, u, n.weight))
                } else {
                    None
                }
            })
        })
    }

    /// Unchecked adjacency access for the algorithm modules, which validate
    /// their entry vertex up front and only follow ids read from the store.
    pub(crate) fn adjacent(&self, id: VertexId) -> &[Neighbor] {
        &self.adjacency[id.index()]
    }
}

impl<S: AsRef<str>> Extend<(S, S, Weight)> for NamedGraph {
    fn extend<I: IntoIterator<Item = (S, S, Weight)>>(&mut self, iter: I) {
        for (u, v, weight) in iter {
            self.add_edge(u.as_ref(), v.as_ref(), weight);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, S, Weight)> for NamedGraph {
    fn from_iter<I: IntoIterator<Item = (S, S, Weight)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &NamedGraph, names: &[&str]) -> Vec<VertexId> {
        names.iter().map(|n| graph.vertex_id(n).unwrap()).collect()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = NamedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_add_edge_registers_in_order() {
        let mut graph = NamedGraph::new();
        graph.add_edge("B", "A", 3);
        graph.add_unit_edge("A", "C");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(ids(&graph, &["B", "A", "C"]), graph.vertex_ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_add_edge_updates_both_endpoints() {
        let mut graph = NamedGraph::new();
        graph.add_edge("A", "B", 5);
        let (a, b) = (graph.vertex_id("A").unwrap(), graph.vertex_id("B").unwrap());
        assert_eq!(
            graph.neighbors(a).unwrap(),
            &[Neighbor { vertex: b, weight: 5 }]
        );
        assert_eq!(
            graph.neighbors(b).unwrap(),
            &[Neighbor { vertex: a, weight: 5 }]
        );
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = NamedGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "A", 2);
        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        assert_eq!(graph.degree(a).unwrap(), 2);
        assert_eq!(graph.degree(b).unwrap(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(a, b, 1), (a, b, 2)]
        );
    }

    #[test]
    fn test_self_loop_counts_twice_in_degree_once_in_edges() {
        let mut graph = NamedGraph::new();
        graph.add_edge("A", "A", 4);
        let a = graph.vertex_id("A").unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.degree(a).unwrap(), 2);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(a, a, 4)]);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = NamedGraph::new();
        let a = graph.add_vertex("A");
        assert_eq!(graph.add_vertex("A"), a);
        graph.add_unit_edge("B", "A");
        assert_eq!(graph.vertex_id("A"), Some(a));
        assert_eq!(graph.vertex_id("B"), Some(VertexId::new(1)));
        assert_eq!(graph.degree(a).unwrap(), 1);
    }

    #[test]
    fn test_lookup_failures() {
        let mut graph = NamedGraph::new();
        graph.add_unit_edge("A", "B");
        assert_eq!(graph.vertex_id("Z"), None);
        assert_eq!(graph.name_of(VertexId::new(2)), None);
        assert_eq!(
            graph.neighbors(VertexId::new(2)),
            Err(GraphError::VertexOutOfRange {
                vertex: VertexId::new(2),
                vertex_count: 2,
            })
        );
    }

    #[test]
    fn test_from_iterator() {
        let graph: NamedGraph = [("A", "B", 2), ("B", "C", 3)].into_iter().collect();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}
