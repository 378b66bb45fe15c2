//! Random graph generation and brute-force oracles for the property tests.

use quickcheck::{Arbitrary, Gen};

use crate::{NamedGraph, VertexId, graph::Weight};

#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: NamedGraph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12 + 1; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 24;
        let num_extra_parallel_edges = usize::arbitrary(g) % 3;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = NamedGraph::new();
        let names: Vec<String> = (0..num_vertices).map(|i| format!("v{i}")).collect();
        // Register a few vertices up front so some stay isolated.
        for name in names.iter().filter(|_| bool::arbitrary(g) && bool::arbitrary(g)) {
            graph.add_vertex(name);
        }

        let weight = |g: &mut Gen| Weight::from(u8::arbitrary(g) % 20);
        for i in 0..num_edges {
            let source = &names[usize::arbitrary(g) % names.len()];
            let target = &names[usize::arbitrary(g) % names.len()];
            graph.add_edge(source, target, weight(g));
            if i < num_extra_parallel_edges {
                graph.add_edge(target, source, weight(g));
            }
            if i < num_extra_self_loops {
                graph.add_edge(source, source, weight(g));
            }
        }
        if graph.is_empty() {
            graph.add_vertex(&names[0]);
        }

        ArbGraph { graph }
    }
}

/// Picks a vertex of a non-empty graph from an arbitrary index.
pub fn pick_vertex(graph: &NamedGraph, seed: usize) -> VertexId {
    VertexId::new(seed % graph.vertex_count())
}

/// Shortest distances by repeated relaxation, optionally counting hops
/// instead of weights.
pub fn bellman_ford(graph: &NamedGraph, source: VertexId, hops: bool) -> Vec<Option<Weight>> {
    let mut distances: Vec<Option<Weight>> = vec![None; graph.vertex_count()];
    distances[source.index()] = Some(0);
    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for (u, v, weight) in graph.edges() {
            let weight = if hops { 1 } else { weight };
            for (from, to) in [(u, v), (v, u)] {
                if let Some(d) = distances[from.index()] {
                    let candidate: Weight = d + weight;
                    if distances[to.index()].is_none_or(|best| candidate < best) {
                        distances[to.index()] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    distances
}

/// Minimal union-find used to count components and detect cycles.
pub struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Returns false if `a` and `b` were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Number of connected components after deleting `removed` (if any).
pub fn component_count_without(graph: &NamedGraph, removed: Option<VertexId>) -> usize {
    let mut sets = DisjointSets::new(graph.vertex_count());
    let mut count = graph.vertex_count() - usize::from(removed.is_some());
    for (u, v, _) in graph.edges() {
        if Some(u) == removed || Some(v) == removed {
            continue;
        }
        if sets.union(u.index(), v.index()) {
            count -= 1;
        }
    }
    count
}

/// Vertices whose removal increases the number of connected components.
pub fn brute_force_articulation_points(graph: &NamedGraph) -> Vec<VertexId> {
    let baseline = component_count_without(graph, None);
    graph
        .vertex_ids()
        .filter(|&v| component_count_without(graph, Some(v)) > baseline)
        .collect()
}

/// Minimum total weight of a spanning tree of the component containing
/// `root`, by enumerating edge subsets.  Returns `None` when the component has
/// too many edges to enumerate.
pub fn brute_force_mst_weight(graph: &NamedGraph, root: VertexId) -> Option<Weight> {
    const MAX_EDGES: usize = 14;

    let reachable = bellman_ford(graph, root, true);
    let component: Vec<_> = graph
        .vertex_ids()
        .filter(|v| reachable[v.index()].is_some())
        .collect();
    let edges: Vec<_> = graph
        .edges()
        .filter(|&(u, v, _)| u != v && reachable[u.index()].is_some())
        .collect();
    if edges.len() > MAX_EDGES {
        return None;
    }
    let needed = component.len() - 1;
    let mut best: Option<Weight> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut sets = DisjointSets::new(graph.vertex_count());
        let mut total: Weight = 0;
        let mut acyclic = true;
        for (i, &(u, v, weight)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= sets.union(u.index(), v.index());
                total += weight;
            }
        }
        // n - 1 acyclic edges inside the component always span it.
        if acyclic && best.is_none_or(|b| total < b) {
            best = Some(total);
        }
    }
    best
}
