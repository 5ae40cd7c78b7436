use tracing::{debug, trace};

use crate::error::{ResolverError, Result};
use crate::graph::SimpleGraph;
use crate::isomorphism::{ExactIsomorphism, IsomorphismOracle};
use crate::pregraph::{Connection, Pregraph, CUBIC_DEGREE};
use crate::subsets::{select, subset_masks};

/// Edges that may be doubled: both endpoints below degree 3 in `g`.
pub fn doubling_candidates(g: &SimpleGraph) -> Vec<(usize, usize)> {
    g.edges()
        .into_iter()
        .filter(|&(u, v)| g.degree(u) < CUBIC_DEGREE && g.degree(v) < CUBIC_DEGREE)
        .collect()
}

/// True when no vertex is shared by two of `edges`.
pub fn is_matching(edges: &[(usize, usize)]) -> bool {
    let mut touched = Vec::with_capacity(edges.len() * 2);
    for &(u, v) in edges {
        for vertex in [u, v] {
            if touched.contains(&vertex) {
                return false;
            }
            touched.push(vertex);
        }
    }
    true
}

/// Builds the pregraph that doubles `doubled` and patches residual degrees.
///
/// Proper edges and loops come first, sorted, then semi-edges by vertex.
/// An isolated vertex receives a loop and a semi-edge.
pub fn cover(g: &SimpleGraph, doubled: &[(usize, usize)]) -> Result<Pregraph> {
    let mut degrees: Vec<usize> = (0..g.num_nodes()).map(|u| g.degree(u)).collect();
    let mut pairs: Vec<(usize, usize)> = g.edges();
    for &(u, v) in doubled {
        if !g.has_edge(u, v) {
            return Err(ResolverError::NotAnEdge { u, v });
        }
        pairs.push((u.min(v), u.max(v)));
        degrees[u] += 1;
        degrees[v] += 1;
    }

    let mut semi_edges = Vec::new();
    for (u, &degree) in degrees.iter().enumerate() {
        match degree {
            0 => {
                pairs.push((u, u));
                semi_edges.push(u);
            }
            1 => pairs.push((u, u)),
            2 => semi_edges.push(u),
            3 => {}
            _ => return Err(ResolverError::DegreeTooLarge { vertex: u, degree }),
        }
    }

    pairs.sort_unstable();
    let connections = pairs
        .into_iter()
        .map(|(u, v)| Connection::Pair(u, v))
        .chain(semi_edges.into_iter().map(Connection::Single))
        .collect();
    Ok(Pregraph::new(connections))
}

/// All pairwise non-isomorphic cubic pregraphs whose underlying graph is `g`.
pub fn generate_pregraphs(g: &SimpleGraph) -> Result<Vec<Pregraph>> {
    generate_pregraphs_with(g, &ExactIsomorphism)
}

/// As [`generate_pregraphs`], deduplicating with the given oracle.
pub fn generate_pregraphs_with<O>(g: &SimpleGraph, oracle: &O) -> Result<Vec<Pregraph>>
where
    O: IsomorphismOracle + ?Sized,
{
    if let Some(vertex) = (0..g.num_nodes()).find(|&u| g.degree(u) > CUBIC_DEGREE) {
        return Err(ResolverError::DegreeTooLarge {
            vertex,
            degree: g.degree(vertex),
        });
    }

    let candidates = doubling_candidates(g);
    let mut accepted: Vec<Pregraph> = Vec::new();
    for mask in subset_masks(candidates.len(), "doubling candidates")? {
        let doubled = select(&candidates, mask);
        // Two doubled edges at one vertex would push it to degree 4.
        if !is_matching(&doubled) {
            continue;
        }
        let pregraph = cover(g, &doubled)?;
        debug_assert!(pregraph.is_cubic());
        if accepted.iter().any(|seen| oracle.is_isomorphic(seen, &pregraph)) {
            trace!(%pregraph, "isomorphic to an earlier cover");
            continue;
        }
        accepted.push(pregraph);
    }

    debug!(
        order = g.num_nodes(),
        candidates = candidates.len(),
        pregraphs = accepted.len(),
        "generated covers"
    );
    Ok(accepted)
}
