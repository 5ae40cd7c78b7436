#![allow(dead_code)]

use pregraph_resolver::{Connection, Pregraph, SimpleGraph};
use rand::rngs::StdRng;
use rand::Rng;

/// Pairs first, then semi-edges, in the given order.
pub fn pregraph(pairs: &[(usize, usize)], semi_edges: &[usize]) -> Pregraph {
    let connections = pairs
        .iter()
        .map(|&(u, v)| Connection::Pair(u, v))
        .chain(semi_edges.iter().map(|&u| Connection::Single(u)))
        .collect();
    Pregraph::new(connections)
}

/// A path 0-1-2 with loops at the ends and a semi-edge in the middle.
pub fn path_with_semi_edge() -> Pregraph {
    pregraph(&[(0, 1), (1, 2), (0, 0), (2, 2)], &[1])
}

/// Two pendant pairs hanging off an edge, every leaf closed by a loop.
pub fn double_fork() -> Pregraph {
    pregraph(
        &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (2, 2), (3, 3), (4, 4), (5, 5)],
        &[],
    )
}

/// Two triangles with a doubled edge each, joined through vertex 3.
pub fn doubled_triangles() -> Pregraph {
    pregraph(
        &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 2), (3, 4), (3, 5), (4, 5), (4, 5)],
        &[],
    )
}

pub fn simple_cubic(edges: &[(usize, usize)]) -> Pregraph {
    pregraph(edges, &[])
}

pub fn k4() -> Pregraph {
    simple_cubic(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
}

pub fn k33() -> Pregraph {
    let edges: Vec<_> = (0..3).flat_map(|i| (3..6).map(move |j| (i, j))).collect();
    simple_cubic(&edges)
}

pub fn prism() -> Pregraph {
    simple_cubic(&[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (0, 3), (1, 4), (2, 5)])
}

/// The only cover of the claw `CF`.
pub fn claw_cover() -> Pregraph {
    pregraph(&[(0, 0), (0, 3), (1, 1), (1, 3), (2, 2), (2, 3)], &[])
}

/// Random graph on `n` vertices with maximum degree 3, possibly disconnected.
pub fn random_subcubic_graph(rng: &mut StdRng, n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::new(n);
    if n < 2 {
        return graph;
    }
    for _ in 0..rng.gen_range(0..=2 * n) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && graph.degree(u) < 3 && graph.degree(v) < 3 {
            graph.add_edge(u, v).unwrap();
        }
    }
    graph
}
