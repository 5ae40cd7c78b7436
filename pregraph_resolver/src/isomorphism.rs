use petgraph::algo::is_isomorphic_matching;
use petgraph::graph::UnGraph;

use crate::pregraph::{Connection, Pregraph};

pub trait IsomorphismOracle {
    /// True when some vertex bijection maps edges, loops and semi-edges of
    /// `a` onto those of `b` with multiplicities preserved.
    fn is_isomorphic(&self, a: &Pregraph, b: &Pregraph) -> bool;
}

/// VF2 matching on weighted simple graphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactIsomorphism;

impl IsomorphismOracle for ExactIsomorphism {
    fn is_isomorphic(&self, a: &Pregraph, b: &Pregraph) -> bool {
        if a.connections().len() != b.connections().len() {
            return false;
        }
        let a = weighted_graph(a);
        let b = weighted_graph(b);
        is_isomorphic_matching(&a, &b, |x, y| x == y, |x, y| x == y)
    }
}

/// What a vertex carries besides its proper edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Decoration {
    loops: usize,
    semi_edges: usize,
}

/// Collapses repeated edges into one edge weighted by multiplicity and moves
/// loops and semi-edges onto the node weights.
fn weighted_graph(pregraph: &Pregraph) -> UnGraph<Decoration, usize> {
    let pregraph = pregraph.relabel();
    let n = pregraph.order();
    let mut graph = UnGraph::with_capacity(n, pregraph.connections().len());
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(Decoration::default())).collect();
    for connection in pregraph.connections() {
        match *connection {
            Connection::Pair(u, v) if u == v => graph[nodes[u]].loops += 1,
            Connection::Pair(u, v) => match graph.find_edge(nodes[u], nodes[v]) {
                Some(edge) => graph[edge] += 1,
                None => {
                    graph.add_edge(nodes[u], nodes[v], 1);
                }
            },
            Connection::Single(u) => graph[nodes[u]].semi_edges += 1,
        }
    }
    graph
}
