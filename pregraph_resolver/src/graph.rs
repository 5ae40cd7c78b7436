use crate::error::{ResolverError, Result};

/// Optional header some tools put in front of graph6 files.
const GRAPH6_HEADER: &str = ">>graph6<<";

/// A small undirected simple graph, the underlying graph of a pregraph.
///
/// Neighbour lists are kept sorted, so two graphs with the same edge set
/// compare equal regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleGraph {
    num_nodes: usize,
    adjacency: Vec<Vec<usize>>,
}

impl SimpleGraph {
    pub fn new(num_nodes: usize) -> Self {
        SimpleGraph {
            num_nodes,
            adjacency: vec![vec![]; num_nodes],
        }
    }

    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = SimpleGraph::new(num_nodes);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Decodes a graph6 string (orders up to 258047).
    pub fn from_graph6(encoding: &str) -> Result<Self> {
        let trimmed = encoding.trim();
        let body = trimmed.strip_prefix(GRAPH6_HEADER).unwrap_or(trimmed);
        let bytes = body.as_bytes();
        let invalid = |reason: String| ResolverError::Graph6 {
            encoding: encoding.to_string(),
            reason,
        };

        if let Some(pos) = bytes.iter().position(|b| !(63..=126).contains(b)) {
            return Err(invalid(format!("byte {pos} is outside the graph6 range")));
        }

        let (order, data) = match bytes {
            [] => return Err(invalid("empty string".to_string())),
            [126, 126, ..] => {
                return Err(invalid("orders above 258047 are not supported".to_string()))
            }
            [126, rest @ ..] => {
                if rest.len() < 3 {
                    return Err(invalid("truncated order field".to_string()));
                }
                let order = rest[..3]
                    .iter()
                    .fold(0usize, |acc, &b| (acc << 6) | usize::from(b - 63));
                (order, &rest[3..])
            }
            [first, rest @ ..] => (usize::from(*first - 63), rest),
        };

        let bit_count = order * order.saturating_sub(1) / 2;
        let byte_count = bit_count.div_ceil(6);
        if data.len() != byte_count {
            return Err(invalid(format!(
                "expected {byte_count} data bytes for order {order}, found {}",
                data.len()
            )));
        }

        // Upper triangle, column by column: (0,1), (0,2), (1,2), (0,3), ...
        let mut graph = SimpleGraph::new(order);
        let mut k = 0;
        for j in 1..order {
            for i in 0..j {
                let chunk = data[k / 6] - 63;
                if (chunk >> (5 - k % 6)) & 1 == 1 {
                    graph.add_edge(i, j)?;
                }
                k += 1;
            }
        }
        Ok(graph)
    }

    /// Adds the edge `u-v`; an existing edge is left alone.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.num_nodes {
                return Err(ResolverError::VertexOutOfRange {
                    vertex,
                    order: self.num_nodes,
                });
            }
        }
        if u == v {
            return Err(ResolverError::SelfLoop(u));
        }
        if let Err(pos) = self.adjacency[u].binary_search(&v) {
            self.adjacency[u].insert(pos, v);
            if let Err(pos) = self.adjacency[v].binary_search(&u) {
                self.adjacency[v].insert(pos, u);
            }
        }
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.num_nodes && self.adjacency[u].binary_search(&v).is_ok()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Edges as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}
