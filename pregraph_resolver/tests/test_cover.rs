mod common;

use pregraph_resolver::cover::{cover, doubling_candidates, is_matching};
use pregraph_resolver::{
    generate_pregraphs, generate_pregraphs_with, Corpus, ExactIsomorphism, IsomorphismOracle,
    Pregraph, ResolverError, SimpleGraph,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

struct EverythingIsomorphic;

impl IsomorphismOracle for EverythingIsomorphic {
    fn is_isomorphic(&self, _: &Pregraph, _: &Pregraph) -> bool {
        true
    }
}

fn covers_of(encoding: &str) -> Vec<Pregraph> {
    let graph = SimpleGraph::from_graph6(encoding).unwrap();
    generate_pregraphs(&graph).unwrap()
}

#[test]
fn test_cover_counts_for_four_orbits() {
    let expected = [("CF", 1), ("CU", 4), ("CV", 2), ("C]", 3), ("C^", 1), ("C~", 1)];
    for (encoding, count) in expected {
        assert_eq!(covers_of(encoding).len(), count, "graph {encoding}");
    }
}

#[test]
fn test_cover_counts_for_five_orbits() {
    let expected = [
        ("DCw", 2),
        ("DEw", 2),
        ("DEk", 1),
        ("DFw", 1),
        ("DQo", 5),
        ("DQw", 4),
        ("DUW", 3),
        ("DUw", 2),
        ("DTw", 1),
        ("D]w", 1),
    ];
    for (encoding, count) in expected {
        assert_eq!(covers_of(encoding).len(), count, "graph {encoding}");
    }
}

#[test]
fn test_claw_has_a_single_cover() {
    let covers = covers_of("CF");
    assert_eq!(covers, vec![common::claw_cover()]);
    assert_eq!(
        covers[0].to_string(),
        "[(0, 0), (0, 3), (1, 1), (1, 3), (2, 2), (2, 3)]"
    );
}

#[test]
fn test_path_covers() {
    let path = SimpleGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    assert_eq!(doubling_candidates(&path), vec![(0, 1), (1, 2)]);

    let covers = generate_pregraphs(&path).unwrap();
    // Doubling either edge gives the same pregraph up to isomorphism.
    assert_eq!(covers.len(), 2);
    assert_eq!(covers[0].to_string(), "[(0, 0), (0, 1), (1, 2), (2, 2), (1,)]");
    assert_eq!(covers[1].to_string(), "[(0, 1), (0, 1), (1, 2), (2, 2), (0,)]");
}

#[test]
fn test_every_cover_is_cubic_over_its_graph() {
    let corpus = Corpus::builtin();
    for orbits in corpus.orbit_counts() {
        for encoding in corpus.graphs(orbits).unwrap() {
            let graph = SimpleGraph::from_graph6(encoding).unwrap();
            for pregraph in generate_pregraphs(&graph).unwrap() {
                assert!(pregraph.is_cubic(), "{pregraph} is not cubic");
                assert_eq!(pregraph.underlying_graph().unwrap(), graph, "{pregraph}");
                assert!(pregraph.repeated_edge_count() <= doubling_candidates(&graph).len());
            }
        }
    }
}

#[test]
fn test_covers_are_pairwise_non_isomorphic() {
    for encoding in ["CU", "DQo", "DQw"] {
        let covers = covers_of(encoding);
        for (i, a) in covers.iter().enumerate() {
            for b in &covers[i + 1..] {
                assert!(!ExactIsomorphism.is_isomorphic(a, b), "{a} ~ {b}");
            }
        }
    }
}

#[test]
fn test_oracle_controls_deduplication() {
    let graph = SimpleGraph::from_graph6("DQo").unwrap();
    let covers = generate_pregraphs_with(&graph, &EverythingIsomorphic).unwrap();
    assert_eq!(covers.len(), 1);
}

#[test]
fn test_relabeled_graph_has_equivalent_covers() {
    let mut rng = StdRng::seed_from_u64(7);
    for encoding in ["CU", "C]", "DQo", "DQw", "DUW"] {
        let graph = SimpleGraph::from_graph6(encoding).unwrap();
        let original = generate_pregraphs(&graph).unwrap();

        for _ in 0..5 {
            let mut permutation: Vec<usize> = (0..graph.num_nodes()).collect();
            permutation.shuffle(&mut rng);
            let edges: Vec<_> = graph
                .edges()
                .into_iter()
                .map(|(u, v)| (permutation[u], permutation[v]))
                .collect();
            let shuffled = SimpleGraph::from_edges(graph.num_nodes(), &edges).unwrap();
            let covers = generate_pregraphs(&shuffled).unwrap();

            assert_eq!(covers.len(), original.len(), "graph {encoding}");
            for pregraph in &covers {
                assert!(
                    original.iter().any(|p| ExactIsomorphism.is_isomorphic(p, pregraph)),
                    "{pregraph} has no counterpart over {encoding}"
                );
            }
        }
    }
}

#[test]
fn test_matching_check() {
    assert!(is_matching(&[]));
    assert!(is_matching(&[(0, 1), (2, 3)]));
    assert!(!is_matching(&[(0, 1), (1, 2)]));
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let star = SimpleGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    assert!(matches!(
        generate_pregraphs(&star),
        Err(ResolverError::DegreeTooLarge { vertex: 0, degree: 4 })
    ));

    let path = SimpleGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    assert!(matches!(
        cover(&path, &[(0, 2)]),
        Err(ResolverError::NotAnEdge { u: 0, v: 2 })
    ));
}

#[test]
fn test_isolated_vertex_gets_loop_and_semi_edge() {
    let single = SimpleGraph::new(1);
    let covers = generate_pregraphs(&single).unwrap();
    assert_eq!(covers.len(), 1);
    assert_eq!(covers[0].to_string(), "[(0, 0), (0,)]");
    assert!(covers[0].is_cubic());
}

#[test]
fn test_random_subcubic_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..150 {
        let n = rng.gen_range(1..=8);
        let graph = common::random_subcubic_graph(&mut rng, n);
        let covers = generate_pregraphs(&graph).unwrap();
        assert!(!covers.is_empty(), "{graph:?}");

        for (i, pregraph) in covers.iter().enumerate() {
            assert!(pregraph.is_cubic(), "{pregraph} over {graph:?}");
            assert_eq!(pregraph.underlying_graph().unwrap(), graph, "{pregraph}");
            for other in &covers[i + 1..] {
                assert!(!ExactIsomorphism.is_isomorphic(pregraph, other), "{pregraph} ~ {other}");
            }
        }
    }
}
