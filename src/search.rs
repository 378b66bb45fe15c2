use std::collections::VecDeque;

use bitvec::vec::BitVec;

use crate::{
    NamedGraph, VertexId,
    error::Result,
    tracing_support::{debug, info_span},
};

/// Breadth-first traversal from a single source.
///
/// Vertices are marked visited when they are enqueued, and neighbors are
/// enqueued in adjacency-list order, so the output is in non-decreasing hop
/// distance from the source.
pub struct Bfs<'g> {
    graph: &'g NamedGraph,
    visited: BitVec,
    queue: VecDeque<VertexId>,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g NamedGraph, source: VertexId) -> Result<Self> {
        graph.check_vertex(source)?;
        let mut visited = BitVec::repeat(false, graph.vertex_count());
        visited.set(source.index(), true);
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([source]),
        })
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for neighbor in self.graph.adjacent(u) {
            let v = neighbor.vertex;
            if !self.visited[v.index()] {
                self.visited.set(v.index(), true);
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Depth-first traversal from a single source, using an explicit stack.
///
/// Neighbors are pushed in reverse adjacency-list order so that the
/// first-inserted neighbor is popped first.  A vertex is marked visited when
/// it is pushed, which means a vertex already sitting on the stack is not
/// pushed again from a deeper vertex.
pub struct Dfs<'g> {
    graph: &'g NamedGraph,
    visited: BitVec,
    stack: Vec<VertexId>,
}

impl<'g> Dfs<'g> {
    pub fn new(graph: &'g NamedGraph, source: VertexId) -> Result<Self> {
        graph.check_vertex(source)?;
        let mut visited = BitVec::repeat(false, graph.vertex_count());
        visited.set(source.index(), true);
        Ok(Self {
            graph,
            visited,
            stack: vec![source],
        })
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        for neighbor in self.graph.adjacent(u).iter().rev() {
            let v = neighbor.vertex;
            if !self.visited[v.index()] {
                self.visited.set(v.index(), true);
                self.stack.push(v);
            }
        }
        Some(u)
    }
}

impl NamedGraph {
    /// Lazily performs a breadth-first search from `source`.
    pub fn bfs_iter(&self, source: VertexId) -> Result<Bfs<'_>> {
        Bfs::new(self, source)
    }

    /// Lazily performs a depth-first search from `source`.
    pub fn dfs_iter(&self, source: VertexId) -> Result<Dfs<'_>> {
        Dfs::new(self, source)
    }

    /// Returns the vertices reachable from `source` in breadth-first order.
    /// Vertices in other components are omitted.
    pub fn bfs(&self, source: VertexId) -> Result<Vec<VertexId>> {
        let _span = info_span!("bfs", source = source.index()).entered();
        let order: Vec<_> = self.bfs_iter(source)?.collect();
        debug!(visited = order.len(), "bfs finished");
        Ok(order)
    }

    /// Returns the vertices reachable from `source` in depth-first order.
    /// Vertices in other components are omitted.
    pub fn dfs(&self, source: VertexId) -> Result<Vec<VertexId>> {
        let _span = info_span!("dfs", source = source.index()).entered();
        let order: Vec<_> = self.dfs_iter(source)?.collect();
        debug!(visited = order.len(), "dfs finished");
        Ok(order)
    }
}
