mod common;

use nalgebra::DMatrix;
use pregraph_resolver::{
    adjacency_matrix, enumerate_sign_variants, flippable_positions, generate_pregraphs, Corpus,
    ResolverError, SignVariants, SimpleGraph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_loops_and_semi_edges_on_the_diagonal() {
    let m = adjacency_matrix(&common::path_with_semi_edge());
    let expected = DMatrix::from_row_slice(3, 3, &[2, 1, 0, 1, 1, 1, 0, 1, 2]);
    assert_eq!(m, expected);
}

#[test]
fn test_repeated_edges_accumulate() {
    let theta = common::simple_cubic(&[(0, 1), (0, 1), (0, 1)]);
    let m = adjacency_matrix(&theta);
    assert_eq!(m, DMatrix::from_row_slice(2, 2, &[0, 3, 3, 0]));
    assert!(flippable_positions(&m).is_empty());
    assert_eq!(enumerate_sign_variants(&m).unwrap(), vec![m]);
}

#[test]
fn test_cover_matrices_are_symmetric_with_row_sum_three() {
    let corpus = Corpus::builtin();
    for orbits in corpus.orbit_counts() {
        for encoding in corpus.graphs(orbits).unwrap() {
            let graph = SimpleGraph::from_graph6(encoding).unwrap();
            for pregraph in generate_pregraphs(&graph).unwrap() {
                let m = adjacency_matrix(&pregraph.relabel());
                assert_eq!(m, m.transpose(), "{pregraph}");
                for row in m.row_iter() {
                    assert_eq!(row.iter().sum::<i64>(), 3, "{pregraph}");
                }
            }
        }
    }
}

#[test]
fn test_first_nonzero_of_each_row_is_fixed() {
    let m = adjacency_matrix(&common::path_with_semi_edge());
    assert_eq!(flippable_positions(&m), vec![(0, 1), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_variants_follow_bitmask_order() {
    let base = adjacency_matrix(&common::path_with_semi_edge());
    let variants = SignVariants::new(&base).unwrap();
    assert_eq!(variants.len(), 16);

    let variants: Vec<_> = variants.collect();
    assert_eq!(variants[0], base);

    // Bit 0 flips (0, 1) only; the mirrored entry keeps its sign.
    assert_eq!(variants[1][(0, 1)], -1);
    assert_eq!(variants[1][(1, 0)], 1);

    // Bits 0, 1 and 3.
    let expected = DMatrix::from_row_slice(3, 3, &[2, -1, 0, 1, -1, 1, 0, 1, -2]);
    assert_eq!(variants[0b1011], expected);

    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(a.iter().zip(base.iter()).all(|(x, y)| x.abs() == y.abs()));
    }
}

#[test]
fn test_variant_counts() {
    for (pregraph, count) in [
        (common::claw_cover().relabel(), 32),
        (common::k4(), 256),
        (common::double_fork(), 256),
        (common::doubled_triangles(), 256),
    ] {
        let base = adjacency_matrix(&pregraph);
        assert_eq!(SignVariants::new(&base).unwrap().len(), count, "{pregraph}");
    }
}

#[test]
fn test_too_many_positions_are_refused() {
    let dense = DMatrix::from_element(9, 9, 1i64);
    assert_eq!(flippable_positions(&dense).len(), 72);
    assert!(matches!(
        SignVariants::new(&dense),
        Err(ResolverError::EnumerationLimit { count: 72, .. })
    ));
}

#[test]
fn test_random_cover_matrices() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let n = rng.gen_range(1..=8);
        let graph = common::random_subcubic_graph(&mut rng, n);
        for pregraph in generate_pregraphs(&graph).unwrap() {
            let m = adjacency_matrix(&pregraph.relabel());
            assert_eq!(m, m.transpose(), "{pregraph}");
            for row in m.row_iter() {
                assert_eq!(row.iter().sum::<i64>(), 3, "{pregraph}");
            }

            let k = flippable_positions(&m).len();
            if k > 10 {
                continue;
            }
            let variants = enumerate_sign_variants(&m).unwrap();
            assert_eq!(variants.len(), 1 << k);
            for variant in &variants {
                assert!(variant.iter().zip(m.iter()).all(|(x, y)| x.abs() == *y));
            }
        }
    }
}
