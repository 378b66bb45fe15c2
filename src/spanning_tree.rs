use std::{cmp::Reverse, collections::BinaryHeap};

use bitvec::vec::BitVec;

use crate::{
    NamedGraph, VertexId,
    error::{GraphError, Result},
    graph::Weight,
    tracing_support::{debug, info_span},
};

/// An edge of a spanning tree, oriented away from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeEdge {
    pub parent: VertexId,
    pub child: VertexId,
    pub weight: Weight,
}

/// A minimum spanning tree of the component containing its root.
///
/// Edges are ordered by ascending child id.  Vertices outside the root's
/// component do not appear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    root: VertexId,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// The tree edges as `(parent, child)` pairs.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().map(|e| (e.parent, e.child))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the tree's edge weights, saturating at [`Weight::MAX`].
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .fold(0, |total: Weight, e| total.saturating_add(e.weight))
    }
}

impl NamedGraph {
    /// Computes a minimum spanning tree of the component containing `root`
    /// with Prim's algorithm.
    ///
    /// The frontier discipline matches [`dijkstra`](Self::dijkstra), keyed by
    /// the weight of the cheapest edge into the tree instead of by path length.
    pub fn prim(&self, root: VertexId) -> Result<SpanningTree> {
        let _span = info_span!("prim", root = root.index()).entered();
        self.check_vertex(root)?;

        let n = self.vertex_count();
        let mut in_tree: BitVec = BitVec::repeat(false, n);
        let mut low_cost: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<(VertexId, Weight)>> = vec![None; n];
        let mut frontier = BinaryHeap::new();

        low_cost[root.index()] = Some(0);
        frontier.push(Reverse((0, root)));

        while let Some(Reverse((_, u))) = frontier.pop() {
            if in_tree[u.index()] {
                continue;
            }
            in_tree.set(u.index(), true);
            for neighbor in self.adjacent(u) {
                let v = neighbor.vertex;
                if in_tree[v.index()] {
                    continue;
                }
                if low_cost[v.index()].is_none_or(|best| neighbor.weight < best) {
                    low_cost[v.index()] = Some(neighbor.weight);
                    parent[v.index()] = Some((u, neighbor.weight));
                    frontier.push(Reverse((neighbor.weight, v)));
                }
            }
        }

        let edges = parent
            .into_iter()
            .enumerate()
            .filter_map(|(child, link)| {
                link.map(|(parent, weight)| TreeEdge {
                    parent,
                    child: VertexId::new(child),
                    weight,
                })
            })
            .collect();
        let tree = SpanningTree { root, edges };
        debug!(
            edges = tree.len(),
            total_weight = tree.total_weight(),
            "prim finished"
        );
        Ok(tree)
    }

    /// Runs [`prim`](Self::prim) from vertex 0.  Fails on an empty graph.
    pub fn prim_default(&self) -> Result<SpanningTree> {
        let root = VertexId::new(0);
        if self.is_empty() {
            return Err(GraphError::VertexOutOfRange {
                vertex: root,
                vertex_count: 0,
            });
        }
        self.prim(root)
    }
}
