use std::collections::HashSet;

use crate::{
    NamedGraph, VertexId,
    tracing_support::{debug, info_span},
};

impl NamedGraph {
    /// Partitions the vertices into connected components.
    pub fn connected_components(&self) -> Vec<HashSet<VertexId>> {
        self.connected_components_without(&[])
    }

    /// Partitions the vertices into connected components of the subgraph
    /// obtained by deleting `excluded` and every edge incident to them.
    /// Excluded vertices appear in no component.
    pub fn connected_components_without(&self, excluded: &[VertexId]) -> Vec<HashSet<VertexId>> {
        let _span = info_span!("connected_components", excluded = excluded.len()).entered();
        let excluded: HashSet<VertexId> = excluded.iter().copied().collect();
        let starts: Vec<VertexId> = self
            .vertex_ids()
            .filter(|v| !excluded.contains(v))
            .collect();
        let components = pathfinding::prelude::connected_components(&starts, |&v| {
            self.adjacent(v)
                .iter()
                .map(|n| n.vertex)
                .filter(|n| !excluded.contains(n))
                .collect::<Vec<_>>()
        });
        debug!(components = components.len(), "connected components found");
        components
    }
}
