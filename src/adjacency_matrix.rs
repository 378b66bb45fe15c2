//! Dense adjacency-matrix view of a [`NamedGraph`], used for diagnostics.

use std::fmt;

use crate::{NamedGraph, VertexId, graph::Weight};

/// Column width used by the [`Display`](fmt::Display) rendering.
const CELL_WIDTH: usize = 3;

/// An `n × n` matrix of edge weights materialized from a graph's adjacency
/// lists.
///
/// Cell `[i][j]` holds the weight of the *last inserted* edge between `i` and
/// `j`, or 0 if there is none.  Parallel edges therefore collapse to a single
/// cell here even though the graph keeps all of them; an edge of weight 0 is
/// indistinguishable from a missing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    names: Vec<String>,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Gets the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Gets the weight at `[row][col]`, or `None` if either index is out of
    /// range.
    pub fn get(&self, row: VertexId, col: VertexId) -> Option<Weight> {
        let n = self.size();
        (row.index() < n && col.index() < n).then(|| self.cells[row.index() * n + col.index()])
    }

    /// Gets one row of the matrix.
    pub fn row(&self, row: VertexId) -> Option<&[Weight]> {
        let n = self.size();
        (row.index() < n).then(|| &self.cells[row.index() * n..(row.index() + 1) * n])
    }

    /// Iterates over the rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        // `max(1)` keeps `chunks` happy for the empty matrix.
        self.cells.chunks(self.size().max(1))
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$} ", "", width = CELL_WIDTH)?;
        for name in &self.names {
            write!(f, "{name:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;
        for (name, row) in self.names.iter().zip(self.rows()) {
            write!(f, "{name:>CELL_WIDTH$} ")?;
            for weight in row {
                write!(f, "{weight:>CELL_WIDTH$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl NamedGraph {
    /// Materializes the adjacency matrix of this graph.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.vertex_count();
        let mut cells = vec![0; n * n];
        for u in self.vertex_ids() {
            for neighbor in self.adjacent(u) {
                cells[u.index() * n + neighbor.vertex.index()] = neighbor.weight;
            }
        }
        AdjacencyMatrix {
            names: self.names().map(str::to_owned).collect(),
            cells,
        }
    }
}
