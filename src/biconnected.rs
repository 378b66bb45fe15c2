//! Biconnected components and articulation points.
//!
//! - Articulation point: a vertex whose removal disconnects its component.
//! - Biconnected component: a maximal set of edges in which any two edges lie
//!   on a common simple cycle.
//! - Bridge: an edge that forms a biconnected component by itself.
//!
//! Components are found with Tarjan's algorithm, driven by an explicit frame
//! stack rather than recursion so that long paths cannot overflow the call
//! stack.

use std::collections::BTreeSet;

use crate::{
    NamedGraph, VertexId,
    error::Result,
    tracing_support::{debug, info_span},
};

/// An edge as traversed by the depth-first search: `(from, to)`.
pub type TraversedEdge = (VertexId, VertexId);

/// Result of biconnectivity analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Biconnectivity {
    articulation_points: BTreeSet<VertexId>,
    components: Vec<Vec<TraversedEdge>>,
}

impl Biconnectivity {
    /// Articulation points (cut vertices) in ascending id order.
    pub fn articulation_points(&self) -> &BTreeSet<VertexId> {
        &self.articulation_points
    }

    pub fn is_articulation_point(&self, vertex: VertexId) -> bool {
        self.articulation_points.contains(&vertex)
    }

    /// Biconnected components in the order they were closed off.  Each
    /// component lists its edges in the orientation the search traversed
    /// them; together the components partition every edge of the graph except
    /// self-loops.
    pub fn components(&self) -> &[Vec<TraversedEdge>] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Edges whose removal disconnects their component.
    pub fn bridges(&self) -> impl Iterator<Item = TraversedEdge> + '_ {
        self.components.iter().filter_map(|component| match component.as_slice() {
            [edge] => Some(*edge),
            _ => None,
        })
    }

    /// True when the graph has no articulation point and at most one
    /// component.
    pub fn is_biconnected(&self) -> bool {
        self.articulation_points.is_empty() && self.components.len() <= 1
    }
}

/// One vertex on the explicit DFS stack.
struct Frame {
    vertex: VertexId,
    parent: Option<VertexId>,
    dfn: usize,
    /// Position of the next adjacency entry to examine.
    next: usize,
    children: usize,
    /// Whether the tree edge back to `parent` has already been skipped.
    /// Further entries for the parent are parallel edges and count as back
    /// edges.
    parent_skipped: bool,
    is_cut: bool,
}

impl Frame {
    fn new(vertex: VertexId, parent: Option<VertexId>, dfn: usize) -> Self {
        Self {
            vertex,
            parent,
            dfn,
            next: 0,
            children: 0,
            parent_skipped: false,
            is_cut: false,
        }
    }
}

struct TarjanState {
    next_dfn: usize,
    dfn: Vec<Option<usize>>,
    low: Vec<usize>,
    edge_stack: Vec<TraversedEdge>,
    frames: Vec<Frame>,
    result: Biconnectivity,
}

impl TarjanState {
    fn new(vertex_count: usize) -> Self {
        Self {
            next_dfn: 0,
            dfn: vec![None; vertex_count],
            low: vec![0; vertex_count],
            edge_stack: Vec::new(),
            frames: Vec::new(),
            result: Biconnectivity::default(),
        }
    }

    fn discover(&mut self, vertex: VertexId, parent: Option<VertexId>) {
        let dfn = self.next_dfn;
        self.next_dfn += 1;
        self.dfn[vertex.index()] = Some(dfn);
        self.low[vertex.index()] = dfn;
        self.frames.push(Frame::new(vertex, parent, dfn));
    }

    /// Runs one depth-first tree rooted at `root`.
    fn visit_tree(&mut self, graph: &NamedGraph, root: VertexId) {
        self.discover(root, None);
        while let Some(frame) = self.frames.last_mut() {
            let u = frame.vertex;
            let adjacent = graph.adjacent(u);
            if let Some(neighbor) = adjacent.get(frame.next) {
                frame.next += 1;
                let v = neighbor.vertex;
                if Some(v) == frame.parent && !frame.parent_skipped {
                    frame.parent_skipped = true;
                    continue;
                }
                match self.dfn[v.index()] {
                    None => {
                        frame.children += 1;
                        self.edge_stack.push((u, v));
                        self.discover(v, Some(u));
                    }
                    Some(dfn_v) if dfn_v < frame.dfn => {
                        self.edge_stack.push((u, v));
                        self.low[u.index()] = self.low[u.index()].min(dfn_v);
                    }
                    Some(_) => {}
                }
            } else {
                self.finish_top();
            }
        }
    }

    /// Pops the finished frame on top of the stack and propagates its
    /// low-link into its parent.
    fn finish_top(&mut self) {
        let Some(finished) = self.frames.pop() else {
            return;
        };
        let u = finished.vertex;
        if finished.is_cut {
            self.result.articulation_points.insert(u);
        }
        let Some(parent) = self.frames.last_mut() else {
            return;
        };
        let p = parent.vertex;
        let low_u = self.low[u.index()];
        self.low[p.index()] = self.low[p.index()].min(low_u);

        let closes_component = low_u >= parent.dfn;
        let is_root = parent.parent.is_none();
        if (is_root && parent.children > 1) || (!is_root && closes_component) {
            parent.is_cut = true;
        }
        if closes_component {
            let mut component = Vec::new();
            while let Some(edge) = self.edge_stack.pop() {
                component.push(edge);
                if edge == (p, u) {
                    break;
                }
            }
            self.result.components.push(component);
        }
    }
}

impl NamedGraph {
    /// Finds articulation points and biconnected components, starting a
    /// depth-first tree at every unvisited vertex in id order.
    ///
    /// Time complexity: O(V + E)
    pub fn biconnectivity(&self) -> Biconnectivity {
        let _span = info_span!("biconnectivity").entered();
        self.run_tarjan(self.vertex_ids())
    }

    /// Like [`biconnectivity`](Self::biconnectivity), but the first
    /// depth-first tree is rooted at `start`.  The articulation points do not
    /// depend on the choice of `start`; the order of the components and the
    /// orientation of their edges may.
    pub fn biconnectivity_from(&self, start: VertexId) -> Result<Biconnectivity> {
        let _span = info_span!("biconnectivity", start = start.index()).entered();
        self.check_vertex(start)?;
        Ok(self.run_tarjan(std::iter::once(start).chain(self.vertex_ids())))
    }

    fn run_tarjan(&self, roots: impl Iterator<Item = VertexId>) -> Biconnectivity {
        let mut state = TarjanState::new(self.vertex_count());
        for root in roots {
            if state.dfn[root.index()].is_none() {
                state.visit_tree(self, root);
            }
        }
        debug_assert!(state.edge_stack.is_empty());
        let result = state.result;
        debug!(
            articulation_points = result.articulation_points.len(),
            components = result.components.len(),
            "biconnectivity finished"
        );
        result
    }
}
