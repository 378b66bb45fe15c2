use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    NamedGraph, VertexId,
    error::Result,
    graph::Weight,
    tracing_support::{debug, info_span},
};

/// Single-source shortest-path distances, one entry per vertex.
///
/// Unreachable vertices have no distance (`None`), which is the explicit
/// "unreachable" sentinel of this API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distances {
    source: VertexId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl Distances {
    /// The vertex the distances are measured from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source to `vertex`, or `None` if `vertex` is
    /// unreachable or not part of the graph.
    pub fn get(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some()
    }

    /// All distances, indexed by vertex id.
    pub fn as_slice(&self) -> &[Option<Weight>] {
        &self.distances
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, Option<Weight>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &d)| (VertexId::new(i), d))
    }

    /// Number of vertices reached from the source, including the source.
    pub fn reached_count(&self) -> usize {
        self.distances.iter().flatten().count()
    }

    /// The vertex preceding `vertex` on the shortest path found to it.  `None`
    /// for the source and for unreachable vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Reconstructs the shortest path from the source to `target`, inclusive
    /// of both ends.  Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.get(target)?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

impl NamedGraph {
    /// Computes shortest-path distances from `source` with Dijkstra's
    /// algorithm.
    ///
    /// The frontier is a binary heap with lazy deletion: improved distances
    /// are pushed again and outdated entries are discarded when popped.  A
    /// sum that would overflow [`Weight`] is never treated as an improvement.
    pub fn dijkstra(&self, source: VertexId) -> Result<Distances> {
        let _span = info_span!("dijkstra", source = source.index()).entered();
        self.check_vertex(source)?;

        let n = self.vertex_count();
        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        let mut frontier = BinaryHeap::new();

        distances[source.index()] = Some(0);
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((dist_u, u))) = frontier.pop() {
            if distances[u.index()].is_some_and(|best| dist_u > best) {
                continue;
            }
            for neighbor in self.adjacent(u) {
                let v = neighbor.vertex;
                let Some(candidate) = dist_u.checked_add(neighbor.weight) else {
                    continue;
                };
                if distances[v.index()].is_none_or(|best| candidate < best) {
                    distances[v.index()] = Some(candidate);
                    predecessors[v.index()] = Some(u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        let result = Distances {
            source,
            distances,
            predecessors,
        };
        debug!(reached = result.reached_count(), "dijkstra finished");
        Ok(result)
    }
}
