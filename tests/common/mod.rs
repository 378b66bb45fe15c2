#![allow(dead_code)]

use namegraph::{NamedGraph, VertexId};

/// Weighted graph over vertices A–H.  Vertices are registered up front so
/// that `A` is vertex 0, `B` is vertex 1 and so on.
pub fn weighted_graph() -> NamedGraph {
    let mut graph = NamedGraph::new();
    for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        graph.add_vertex(name);
    }
    graph.extend([
        ("A", "B", 4),
        ("A", "D", 6),
        ("A", "G", 7),
        ("B", "C", 12),
        ("C", "D", 9),
        ("C", "E", 1),
        ("C", "F", 2),
        ("C", "H", 10),
        ("D", "E", 13),
        ("D", "G", 2),
        ("E", "F", 5),
        ("E", "G", 11),
        ("E", "H", 8),
        ("F", "H", 3),
        ("G", "H", 14),
    ]);
    graph
}

/// Unweighted graph over vertices A–L with cut vertices C, F and K.
pub fn unweighted_graph() -> NamedGraph {
    let mut graph = NamedGraph::new();
    for (u, v) in [
        ("A", "B"),
        ("A", "E"),
        ("B", "F"),
        ("C", "D"),
        ("C", "F"),
        ("C", "H"),
        ("D", "H"),
        ("E", "F"),
        ("E", "I"),
        ("F", "G"),
        ("F", "I"),
        ("F", "J"),
        ("F", "K"),
        ("G", "K"),
        ("J", "K"),
        ("K", "L"),
    ] {
        graph.add_unit_edge(u, v);
    }
    graph
}

pub fn vid(graph: &NamedGraph, name: &str) -> VertexId {
    graph
        .vertex_id(name)
        .unwrap_or_else(|| panic!("no vertex named {name}"))
}

pub fn names(graph: &NamedGraph, vertices: impl IntoIterator<Item = VertexId>) -> Vec<String> {
    vertices
        .into_iter()
        .map(|v| graph.name_of(v).unwrap().to_owned())
        .collect()
}

/// Renders an edge as `"X-Y"` with the endpoint names in sorted order.
pub fn edge_name(graph: &NamedGraph, (u, v): (VertexId, VertexId)) -> String {
    let (a, b) = (graph.name_of(u).unwrap(), graph.name_of(v).unwrap());
    if a <= b {
        format!("{a}-{b}")
    } else {
        format!("{b}-{a}")
    }
}
