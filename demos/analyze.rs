//! Builds the two sample graphs and prints every analysis over them.
//!
//! Usage:
//!   cargo run --example analyze
//!   cargo run --example analyze -- --source C --root E -vv
//!   cargo run --example analyze -- --graph unweighted

#[cfg(feature = "tracing")]
mod inner {
    use std::process;

    use clap::{Parser, ValueEnum};
    use namegraph::prelude::*;
    use tracing::Level;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum Which {
        Weighted,
        Unweighted,
        Both,
    }

    /// Run traversals, shortest paths, spanning tree and biconnectivity
    /// analysis over the built-in sample graphs.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Which sample graph to analyze
        #[arg(long, value_enum, default_value_t = Which::Both)]
        graph: Which,

        /// Source vertex for BFS, DFS and Dijkstra on the weighted graph
        #[arg(long, default_value = "A")]
        source: String,

        /// Root vertex for Prim on the weighted graph
        #[arg(long, default_value = "A")]
        root: String,

        /// Increase log verbosity (-v for debug, -vv for trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    pub fn run() {
        let args = Args::parse();
        let level = match args.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();

        if matches!(args.graph, Which::Weighted | Which::Both) {
            let graph = weighted_graph();
            let source = lookup_or_exit(&graph, &args.source);
            let root = lookup_or_exit(&graph, &args.root);
            report_weighted(&graph, source, root).unwrap_or_else(|err| exit_with(err));
        }
        if matches!(args.graph, Which::Unweighted | Which::Both) {
            report_unweighted(&unweighted_graph()).unwrap_or_else(|err| exit_with(err));
        }
    }

    fn weighted_graph() -> NamedGraph {
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

    fn unweighted_graph() -> NamedGraph {
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

    fn lookup_or_exit(graph: &NamedGraph, name: &str) -> VertexId {
        match graph.vertex_id(name) {
            Some(id) => id,
            None => {
                eprintln!("No vertex named '{name}'");
                process::exit(1);
            }
        }
    }

    fn exit_with(err: GraphError) -> ! {
        eprintln!("Analysis failed: {err}");
        process::exit(1);
    }

    fn name(graph: &NamedGraph, id: VertexId) -> &str {
        graph.name_of(id).unwrap_or("?")
    }

    fn join_names(graph: &NamedGraph, ids: &[VertexId]) -> String {
        ids.iter()
            .map(|&id| name(graph, id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn report_weighted(
        graph: &NamedGraph,
        source: VertexId,
        root: VertexId,
    ) -> Result<(), GraphError> {
        println!("---- Adjacency matrix ----");
        print!("{}", graph.adjacency_matrix());

        println!("\n---- BFS from {} ----", name(graph, source));
        println!("{}", join_names(graph, &graph.bfs(source)?));
        println!("---- DFS from {} ----", name(graph, source));
        println!("{}", join_names(graph, &graph.dfs(source)?));

        println!("\n---- Dijkstra distances from {} ----", name(graph, source));
        let distances = graph.dijkstra(source)?;
        for (id, distance) in distances.iter() {
            match distance {
                Some(d) => println!("to {} = {d}", name(graph, id)),
                None => println!("to {} = INF", name(graph, id)),
            }
        }

        println!("---- Prim MST from {} ----", name(graph, root));
        let tree = graph.prim(root)?;
        for edge in tree.edges() {
            println!(
                "{}-{} ({})",
                name(graph, edge.parent),
                name(graph, edge.child),
                edge.weight
            );
        }
        println!("total weight = {}", tree.total_weight());
        Ok(())
    }

    fn report_unweighted(graph: &NamedGraph) -> Result<(), GraphError> {
        let result = graph.biconnectivity();
        println!("\n---- Articulation points ----");
        let cut: Vec<_> = result.articulation_points().iter().copied().collect();
        println!("{}", join_names(graph, &cut));

        println!("---- Biconnected components (edges) ----");
        for (i, component) in result.components().iter().enumerate() {
            let edges: Vec<_> = component
                .iter()
                .map(|&(u, v)| format!("({},{})", name(graph, u), name(graph, v)))
                .collect();
            println!("BCC{}: {}", i + 1, edges.join(" "));
        }

        println!("\n---- Consistency across start vertices ----");
        let mut consistent = true;
        for start in graph.vertex_ids() {
            let other = graph.biconnectivity_from(start)?;
            consistent &= other.articulation_points() == result.articulation_points();
        }
        println!(
            "Same articulation points from every start: {}",
            if consistent { "yes" } else { "no" }
        );
        Ok(())
    }
}

#[cfg(feature = "tracing")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "tracing"))]
fn main() {
    eprintln!("This example requires the `tracing` feature.");
}
